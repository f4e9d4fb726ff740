//! Command handlers bridging parsed arguments to tutor operations.
//!
//! Each handler converts CLI arguments into core parameters, invokes the
//! tutor, and renders the result as markdown through the terminal renderer.

use anyhow::{Context, Result};
use tutor_core::{
    display::OperationStatus,
    params::{DetectWeakSkills, Id},
    ExplanationMode, IncorrectAnswer, SolverState, StepSession, Tutor,
};

use crate::{
    args::{
        AssignmentCommands, ConfigCommands, LectureCommands, QuestionCommands, SolveCommands,
        StudyCommands, SubjectCommands,
    },
    renderer::TerminalRenderer,
};

const MODE_PREFERENCE_KEY: &str = "default_mode";

pub struct Cli {
    tutor: Tutor,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tutor: Tutor, renderer: TerminalRenderer) -> Self {
        Self { tutor, renderer }
    }

    pub async fn handle_assignment_command(&self, command: AssignmentCommands) -> Result<()> {
        match command {
            AssignmentCommands::Create(args) => {
                let params = args.into_params()?;
                let assignment = self.tutor.create_assignment(&params).await?;
                self.renderer.render(&format!(
                    "Created assignment with ID: {}\n\n{assignment}",
                    assignment.id
                ))
            }
            AssignmentCommands::List(args) => {
                let params = (&args).into();
                let summaries = self.tutor.list_assignments(&params).await?;
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&summaries.0)?);
                    Ok(())
                } else {
                    let title = if args.all {
                        "# All Assignments"
                    } else {
                        "# Pending Assignments"
                    };
                    self.renderer.render(&format!("{title}\n\n{summaries}"))
                }
            }
            AssignmentCommands::Show(args) => {
                match self.tutor.get_assignment(&Id { id: args.id }).await? {
                    Some(assignment) if args.json => {
                        println!("{}", serde_json::to_string_pretty(&assignment)?);
                        Ok(())
                    }
                    Some(assignment) => self.renderer.render(&assignment.to_string()),
                    None => self.renderer.render(&format!(
                        "{}",
                        OperationStatus::failure(format!("Assignment {} not found", args.id))
                    )),
                }
            }
            AssignmentCommands::Complete(args) => {
                self.tutor.complete_assignment(&args.into()).await?;
                self.renderer.render(&format!(
                    "{}",
                    OperationStatus::success("Assignment marked as completed".to_string())
                ))
            }
            AssignmentCommands::Reopen(args) => {
                self.tutor.reopen_assignment(&args.into()).await?;
                self.renderer.render(&format!(
                    "{}",
                    OperationStatus::success("Assignment reopened".to_string())
                ))
            }
            AssignmentCommands::Delete(args) => {
                if !args.confirm {
                    return self.renderer.render(&format!(
                        "{}",
                        OperationStatus::failure(
                            "Deletion requires --confirm; this permanently removes the \
                             assignment and all its questions and steps"
                                .to_string()
                        )
                    ));
                }
                self.tutor.delete_assignment(&Id { id: args.id }).await?;
                self.renderer.render(&format!(
                    "{}",
                    OperationStatus::success(format!("Deleted assignment {}", args.id))
                ))
            }
        }
    }

    pub async fn handle_question_command(&self, command: QuestionCommands) -> Result<()> {
        match command {
            QuestionCommands::Add(args) => {
                let question = self.tutor.add_question(&args.into()).await?;
                self.renderer.render(&format!(
                    "Added question with ID: {}\n\n{question}",
                    question.id
                ))
            }
            QuestionCommands::Extract(args) => {
                let questions = self.tutor.extract_questions(&args.into()).await?;
                if questions.is_empty() {
                    return self.renderer.render(&format!(
                        "{}",
                        OperationStatus::failure(
                            "No questions could be extracted from the image".to_string()
                        )
                    ));
                }
                let mut output = format!("Extracted {} question(s)\n\n", questions.len());
                for question in &questions {
                    output.push_str(&question.to_string());
                }
                self.renderer.render(&output)
            }
            QuestionCommands::Show(args) => {
                match self.tutor.get_question(&args.into()).await? {
                    Some(question) => self.renderer.render(&question.to_string()),
                    None => self.renderer.render(&format!(
                        "{}",
                        OperationStatus::failure("Question not found".to_string())
                    )),
                }
            }
            QuestionCommands::Complete(args) => {
                self.tutor.complete_question(&args.into()).await?;
                self.renderer.render(&format!(
                    "{}",
                    OperationStatus::success("Question marked as completed".to_string())
                ))
            }
        }
    }

    pub async fn handle_solve_command(&self, command: SolveCommands) -> Result<()> {
        match command {
            SolveCommands::Next(args) => {
                let default_mode = self.default_mode().await?;
                let params = args.into_params(default_mode);
                let step = self.tutor.generate_next_step(&params).await?;
                self.renderer.render(&format!(
                    "{step}\nConfirm with: tutor solve confirm {} {}",
                    step.question_id, step.step_number
                ))
            }
            SolveCommands::Confirm(args) => {
                let step = self
                    .tutor
                    .confirm_step(args.question_id, args.step_number)
                    .await?;

                let steps = self.tutor.get_steps(args.question_id).await?;
                let footer = match StepSession::state(&steps.0) {
                    SolverState::ReadyForNext { confirmed } => format!(
                        "All {confirmed} step(s) confirmed. Generate the next with: \
                         tutor solve next {}",
                        args.question_id
                    ),
                    SolverState::AwaitingConfirmation { step_number } => {
                        format!("Step {step_number} is still awaiting confirmation.")
                    }
                    SolverState::NotStarted => String::new(),
                };
                self.renderer
                    .render(&format!("Confirmed step {}.\n\n{footer}\n", step.step_number))
            }
            SolveCommands::Steps(args) => {
                let steps = self.tutor.get_steps(args.id).await?;
                self.renderer
                    .render(&format!("# Solution Steps\n\n{steps}"))
            }
        }
    }

    pub async fn handle_subject_command(&self, command: SubjectCommands) -> Result<()> {
        match command {
            SubjectCommands::Create(args) => {
                let subject = self.tutor.create_subject(&args.into()).await?;
                self.renderer
                    .render(&format!("Created subject with ID: {}\n\n{subject}", subject.id))
            }
            SubjectCommands::List => {
                let subjects = self.tutor.list_subjects().await?;
                self.renderer.render(&format!("# Subjects\n\n{subjects}"))
            }
            SubjectCommands::Delete(args) => {
                self.tutor.delete_subject(&args.into()).await?;
                self.renderer.render(&format!(
                    "{}",
                    OperationStatus::success("Deleted subject".to_string())
                ))
            }
            SubjectCommands::AddTopic(args) => {
                let topic = self.tutor.create_topic(&args.into()).await?;
                self.renderer.render(&format!(
                    "{}",
                    OperationStatus::success(format!(
                        "Added topic \"{}\" with ID: {}",
                        topic.name, topic.id
                    ))
                ))
            }
            SubjectCommands::Topics(args) => {
                let topics = self.tutor.list_topics(&args.into()).await?;
                if topics.is_empty() {
                    return self.renderer.render("No topics found.\n");
                }
                let mut output = String::from("# Topics\n\n");
                for topic in &topics {
                    output.push_str(&format!("- {} (ID: {})\n", topic.name, topic.id));
                }
                self.renderer.render(&output)
            }
            SubjectCommands::DeleteTopic(args) => {
                self.tutor.delete_topic(&args.into()).await?;
                self.renderer.render(&format!(
                    "{}",
                    OperationStatus::success("Deleted topic".to_string())
                ))
            }
        }
    }

    pub async fn handle_lecture_command(&self, command: LectureCommands) -> Result<()> {
        match command {
            LectureCommands::Log(args) => {
                let params = args.into_params()?;
                let lecture = self.tutor.log_lecture(&params).await?;
                self.renderer
                    .render(&format!("Logged lecture with ID: {}\n\n{lecture}", lecture.id))
            }
            LectureCommands::List(args) => {
                let lectures = self.tutor.list_lectures(args.subject).await?;
                self.renderer.render(&format!("# Lectures\n\n{lectures}"))
            }
        }
    }

    pub async fn handle_study_command(&self, command: StudyCommands) -> Result<()> {
        match command {
            StudyCommands::Notes(args) => {
                let params = args.into_params()?;
                let notes = self.tutor.generate_study_notes(&params).await?;
                self.renderer.render(&notes)
            }
            StudyCommands::Questions(args) => {
                let params = args.into();
                let questions = self.tutor.generate_practice_questions(&params).await?;
                if questions.is_empty() {
                    return self.renderer.render(&format!(
                        "{}",
                        OperationStatus::failure(
                            "The model returned no usable questions".to_string()
                        )
                    ));
                }
                let mut output = String::from("# Practice Questions\n\n");
                for (i, question) in questions.iter().enumerate() {
                    output.push_str(&format!("{}. {question}\n", i + 1));
                }
                self.renderer.render(&output)
            }
            StudyCommands::Flashcards(args) => {
                let params = args.into_params()?;
                let cards = self.tutor.generate_flashcards(&params).await?;
                if cards.is_empty() {
                    return self.renderer.render(&format!(
                        "{}",
                        OperationStatus::failure(
                            "The model returned no usable flashcards".to_string()
                        )
                    ));
                }
                let mut output = String::from("# Flashcards\n\n");
                for card in &cards {
                    output.push_str(&card.to_string());
                }
                self.renderer.render(&output)
            }
            StudyCommands::WeakSkills(args) => {
                let raw = std::fs::read_to_string(&args.answers).with_context(|| {
                    format!("Failed to read answers file {}", args.answers.display())
                })?;
                let incorrect_answers: Vec<IncorrectAnswer> =
                    serde_json::from_str(&raw).context("Invalid answers file")?;

                let skills = self
                    .tutor
                    .detect_weak_skills(&DetectWeakSkills {
                        topic: args.topic,
                        incorrect_answers,
                    })
                    .await?;

                let mut output = String::from("# Weak Skills\n\n");
                for skill in &skills {
                    output.push_str(&format!("- {skill}\n"));
                }
                self.renderer.render(&output)
            }
        }
    }

    pub async fn handle_config_command(&self, command: ConfigCommands) -> Result<()> {
        match command {
            ConfigCommands::Get { key } => match self.tutor.get_preference(&key).await? {
                Some(value) => self.renderer.render(&format!("{key} = {value}\n")),
                None => self.renderer.render(&format!("{key} is not set\n")),
            },
            ConfigCommands::Set { key, value } => {
                if key == MODE_PREFERENCE_KEY {
                    value
                        .parse::<ExplanationMode>()
                        .map_err(|e| anyhow::anyhow!(e))?;
                }
                self.tutor.set_preference(&key, &value).await?;
                self.renderer.render(&format!(
                    "{}",
                    OperationStatus::success(format!("Set {key} = {value}"))
                ))
            }
            ConfigCommands::Unset { key } => {
                self.tutor.unset_preference(&key).await?;
                self.renderer.render(&format!(
                    "{}",
                    OperationStatus::success(format!("Unset {key}"))
                ))
            }
        }
    }

    /// Resolves the default explanation mode from preferences.
    async fn default_mode(&self) -> Result<ExplanationMode> {
        Ok(self
            .tutor
            .get_preference(MODE_PREFERENCE_KEY)
            .await?
            .and_then(|value| value.parse().ok())
            .unwrap_or_default())
    }
}
