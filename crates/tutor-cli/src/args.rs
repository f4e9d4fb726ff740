//! Command-line interface definitions using clap.
//!
//! CLI argument structures carry the clap derives and convert into the core
//! parameter types via `From`, keeping framework concerns out of the domain
//! layer:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::{civil::Date, tz::TimeZone, Timestamp};
use tutor_core::{
    params::{
        AddQuestion, CreateAssignment, CreateSubject, CreateTopic, ExtractQuestions, GenerateStep,
        Id, ListAssignments, LogLecture, MakeFlashcards, PracticeQuestions, StudyNotes,
    },
    Difficulty, ExplanationMode, Priority,
};

/// Main command-line interface for the Tutor study management tool
///
/// Tutor organizes study work into subjects, assignments and questions, and
/// assists solving with AI-generated step-by-step explanations. Study aids
/// (notes, practice questions, flashcards) are generated per topic.
#[derive(Parser)]
#[command(version, about, name = "tutor")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tutor/tutor.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Tutor CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage assignments
    #[command(alias = "a")]
    Assignment {
        #[command(subcommand)]
        command: AssignmentCommands,
    },
    /// Manage questions within assignments
    #[command(alias = "q")]
    Question {
        #[command(subcommand)]
        command: QuestionCommands,
    },
    /// Work through a question step by step
    #[command(alias = "s")]
    Solve {
        #[command(subcommand)]
        command: SolveCommands,
    },
    /// Manage subjects and their topics
    Subject {
        #[command(subcommand)]
        command: SubjectCommands,
    },
    /// Log and review lectures
    Lecture {
        #[command(subcommand)]
        command: LectureCommands,
    },
    /// Generate AI study aids
    Study {
        #[command(subcommand)]
        command: StudyCommands,
    },
    /// Manage preferences
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Parses a due date given either as a full RFC 3339 timestamp or as a plain
/// date, which is taken to mean end of that day (UTC).
pub fn parse_due_date(value: &str) -> anyhow::Result<Timestamp> {
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    let date: Date = value
        .parse()
        .with_context(|| format!("Invalid date or timestamp: {value}"))?;
    let zoned = date
        .at(23, 59, 59, 0)
        .to_zoned(TimeZone::UTC)
        .with_context(|| format!("Invalid date: {value}"))?;
    Ok(zoned.timestamp())
}

/// Command-line representation of assignment priorities
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

/// Command-line representation of explanation modes
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Socratic questioning, no direct answers
    Guided,
    /// Explanations with comprehension checks
    Balanced,
    /// Full step-by-step exposition
    Direct,
}

impl From<ModeArg> for ExplanationMode {
    fn from(val: ModeArg) -> Self {
        match val {
            ModeArg::Guided => ExplanationMode::Guided,
            ModeArg::Balanced => ExplanationMode::Balanced,
            ModeArg::Direct => ExplanationMode::Direct,
        }
    }
}

/// Command-line representation of practice question difficulty
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(val: DifficultyArg) -> Self {
        match val {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

// ============================================================================
// Assignment commands
// ============================================================================

/// Create a new assignment
#[derive(ClapArgs)]
pub struct CreateAssignmentArgs {
    /// Title of the assignment
    pub title: String,
    /// Due date (YYYY-MM-DD, taken as end of day) or RFC 3339 timestamp
    #[arg(short = 'u', long)]
    pub due: String,
    /// ID of the subject this assignment belongs to
    #[arg(short, long)]
    pub subject: Option<u64>,
    /// Priority of the assignment
    #[arg(short, long, value_enum, default_value = "medium")]
    pub priority: PriorityArg,
}

impl CreateAssignmentArgs {
    pub fn into_params(self) -> anyhow::Result<CreateAssignment> {
        Ok(CreateAssignment {
            title: self.title,
            subject_id: self.subject,
            due_at: parse_due_date(&self.due)?,
            priority: self.priority.into(),
        })
    }
}

/// List assignments
#[derive(ClapArgs)]
pub struct ListAssignmentsArgs {
    /// Include completed assignments
    #[arg(long)]
    pub all: bool,
    /// Only assignments for this subject
    #[arg(short, long)]
    pub subject: Option<u64>,
    /// Only assignments with this priority
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
    /// Output as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<&ListAssignmentsArgs> for ListAssignments {
    fn from(val: &ListAssignmentsArgs) -> Self {
        ListAssignments {
            all: val.all,
            subject_id: val.subject,
            priority: val.priority.map(Into::into),
        }
    }
}

/// Operate on an assignment by ID
#[derive(ClapArgs)]
pub struct AssignmentIdArgs {
    /// Unique identifier of the assignment
    pub id: u64,
}

impl From<AssignmentIdArgs> for Id {
    fn from(val: AssignmentIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Show details of an assignment
#[derive(ClapArgs)]
pub struct ShowAssignmentArgs {
    /// Unique identifier of the assignment
    pub id: u64,
    /// Output as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Delete an assignment permanently
#[derive(ClapArgs)]
pub struct DeleteAssignmentArgs {
    /// Unique identifier of the assignment to permanently delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum AssignmentCommands {
    /// Create a new assignment
    #[command(alias = "c")]
    Create(CreateAssignmentArgs),
    /// List assignments
    #[command(aliases = ["l", "ls"])]
    List(ListAssignmentsArgs),
    /// Show details of an assignment
    #[command(alias = "s")]
    Show(ShowAssignmentArgs),
    /// Mark an assignment as completed
    #[command(alias = "done")]
    Complete(AssignmentIdArgs),
    /// Reopen a completed assignment
    Reopen(AssignmentIdArgs),
    /// Delete an assignment permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteAssignmentArgs),
}

// ============================================================================
// Question commands
// ============================================================================

/// Add a question to an assignment
#[derive(ClapArgs)]
pub struct AddQuestionArgs {
    /// Unique identifier of the assignment to add the question to
    pub assignment_id: u64,
    /// Text of the question
    pub content: String,
    /// Reference to a source image
    #[arg(long)]
    pub image: Option<String>,
}

impl From<AddQuestionArgs> for AddQuestion {
    fn from(val: AddQuestionArgs) -> Self {
        AddQuestion {
            assignment_id: val.assignment_id,
            content: val.content,
            image_ref: val.image,
        }
    }
}

/// Extract questions from a photographed worksheet
#[derive(ClapArgs)]
pub struct ExtractQuestionsArgs {
    /// Unique identifier of the assignment to append the questions to
    pub assignment_id: u64,
    /// Path to the image file
    pub image: String,
}

impl From<ExtractQuestionsArgs> for ExtractQuestions {
    fn from(val: ExtractQuestionsArgs) -> Self {
        ExtractQuestions {
            assignment_id: val.assignment_id,
            image_path: val.image,
        }
    }
}

/// Operate on a question by ID
#[derive(ClapArgs)]
pub struct QuestionIdArgs {
    /// Unique identifier of the question
    pub id: u64,
}

impl From<QuestionIdArgs> for Id {
    fn from(val: QuestionIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum QuestionCommands {
    /// Add a question to an assignment
    #[command(alias = "a")]
    Add(AddQuestionArgs),
    /// Extract questions from an image into an assignment
    #[command(alias = "x")]
    Extract(ExtractQuestionsArgs),
    /// Show a question with its solution steps
    #[command(alias = "s")]
    Show(QuestionIdArgs),
    /// Mark a question as completed
    #[command(alias = "done")]
    Complete(QuestionIdArgs),
}

// ============================================================================
// Solve commands
// ============================================================================

/// Generate the next solution step for a question
#[derive(ClapArgs)]
pub struct NextStepArgs {
    /// Unique identifier of the question to solve
    pub question_id: u64,
    /// Explanation mode; falls back to the configured default, then balanced
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

impl NextStepArgs {
    pub fn into_params(self, default_mode: ExplanationMode) -> GenerateStep {
        GenerateStep {
            question_id: self.question_id,
            mode: self.mode.map(Into::into).unwrap_or(default_mode),
        }
    }
}

/// Confirm a solution step as understood
#[derive(ClapArgs)]
pub struct ConfirmStepArgs {
    /// Unique identifier of the question
    pub question_id: u64,
    /// Number of the step to confirm
    pub step_number: u32,
}

#[derive(Subcommand)]
pub enum SolveCommands {
    /// Generate the next solution step
    #[command(alias = "n")]
    Next(NextStepArgs),
    /// Confirm a step as understood
    #[command(alias = "c")]
    Confirm(ConfirmStepArgs),
    /// Show the steps generated so far
    Steps(QuestionIdArgs),
}

// ============================================================================
// Subject commands
// ============================================================================

/// Create a new subject
#[derive(ClapArgs)]
pub struct CreateSubjectArgs {
    /// Name of the subject
    pub name: String,
    /// Short icon shown next to the name
    #[arg(long)]
    pub icon: Option<String>,
}

impl From<CreateSubjectArgs> for CreateSubject {
    fn from(val: CreateSubjectArgs) -> Self {
        CreateSubject {
            name: val.name,
            icon: val.icon,
        }
    }
}

/// Operate on a subject by ID
#[derive(ClapArgs)]
pub struct SubjectIdArgs {
    /// Unique identifier of the subject
    pub id: u64,
}

impl From<SubjectIdArgs> for Id {
    fn from(val: SubjectIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Add a topic to a subject
#[derive(ClapArgs)]
pub struct AddTopicArgs {
    /// Unique identifier of the parent subject
    pub subject_id: u64,
    /// Name of the topic
    pub name: String,
}

impl From<AddTopicArgs> for CreateTopic {
    fn from(val: AddTopicArgs) -> Self {
        CreateTopic {
            subject_id: val.subject_id,
            name: val.name,
        }
    }
}

#[derive(Subcommand)]
pub enum SubjectCommands {
    /// Create a new subject
    #[command(alias = "c")]
    Create(CreateSubjectArgs),
    /// List all subjects
    #[command(aliases = ["l", "ls"])]
    List,
    /// Delete a subject and its topics
    #[command(aliases = ["d", "rm"])]
    Delete(SubjectIdArgs),
    /// Add a topic to a subject
    AddTopic(AddTopicArgs),
    /// List the topics of a subject
    Topics(SubjectIdArgs),
    /// Delete a topic
    DeleteTopic(SubjectIdArgs),
}

// ============================================================================
// Lecture commands
// ============================================================================

/// Log a lecture
#[derive(ClapArgs)]
pub struct LogLectureArgs {
    /// Title of the lecture
    pub title: String,
    /// When the lecture was held (date or RFC 3339 timestamp); defaults to now
    #[arg(long)]
    pub held: Option<String>,
    /// ID of the subject the lecture belongs to
    #[arg(short, long)]
    pub subject: Option<u64>,
    /// Free-form notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl LogLectureArgs {
    pub fn into_params(self) -> anyhow::Result<LogLecture> {
        let held_at = match self.held {
            Some(value) => parse_due_date(&value)?,
            None => Timestamp::now(),
        };
        Ok(LogLecture {
            title: self.title,
            subject_id: self.subject,
            held_at,
            notes: self.notes,
        })
    }
}

/// List logged lectures
#[derive(ClapArgs)]
pub struct ListLecturesArgs {
    /// Only lectures for this subject
    #[arg(short, long)]
    pub subject: Option<u64>,
}

#[derive(Subcommand)]
pub enum LectureCommands {
    /// Log a lecture
    Log(LogLectureArgs),
    /// List logged lectures, newest first
    #[command(aliases = ["l", "ls"])]
    List(ListLecturesArgs),
}

// ============================================================================
// Study commands
// ============================================================================

/// Generate study notes for a topic
#[derive(ClapArgs)]
pub struct NotesArgs {
    /// Topic to generate notes for
    pub topic: String,
    /// Path to a file with source material to base the notes on
    #[arg(short, long)]
    pub material: Option<PathBuf>,
}

impl NotesArgs {
    pub fn into_params(self) -> anyhow::Result<StudyNotes> {
        let material = self
            .material
            .map(|path| {
                std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read material file {}", path.display()))
            })
            .transpose()?;
        Ok(StudyNotes {
            topic: self.topic,
            material,
        })
    }
}

/// Generate practice questions for a topic
#[derive(ClapArgs)]
pub struct PracticeArgs {
    /// Topic to generate questions for
    pub topic: String,
    /// Difficulty of the questions
    #[arg(short, long, value_enum, default_value = "medium")]
    pub difficulty: DifficultyArg,
    /// Number of questions to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: u32,
    /// Weak areas to focus on - comma-separated list
    #[arg(short, long, value_delimiter = ',')]
    pub weak_skills: Vec<String>,
}

impl From<PracticeArgs> for PracticeQuestions {
    fn from(val: PracticeArgs) -> Self {
        PracticeQuestions {
            topic: val.topic,
            difficulty: val.difficulty.into(),
            count: val.count,
            weak_skills: val.weak_skills,
        }
    }
}

/// Generate flashcards for a topic
#[derive(ClapArgs)]
pub struct FlashcardsArgs {
    /// Topic to generate flashcards for
    pub topic: String,
    /// Path to a file with source material
    #[arg(short, long)]
    pub material: Option<PathBuf>,
    /// Number of flashcards to generate
    #[arg(short, long, default_value_t = 10)]
    pub count: u32,
}

impl FlashcardsArgs {
    pub fn into_params(self) -> anyhow::Result<MakeFlashcards> {
        let material = self
            .material
            .map(|path| {
                std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read material file {}", path.display()))
            })
            .transpose()?;
        Ok(MakeFlashcards {
            topic: self.topic,
            material,
            count: self.count,
        })
    }
}

/// Detect weak skills from incorrect test answers
#[derive(ClapArgs)]
pub struct WeakSkillsArgs {
    /// Topic the test covered
    pub topic: String,
    /// Path to a JSON file with the incorrect answers:
    /// [{"question": ..., "user_answer": ..., "correct_answer": ...}]
    #[arg(short, long)]
    pub answers: PathBuf,
}

#[derive(Subcommand)]
pub enum StudyCommands {
    /// Generate study notes for a topic
    #[command(alias = "n")]
    Notes(NotesArgs),
    /// Generate practice questions for a topic
    #[command(alias = "q")]
    Questions(PracticeArgs),
    /// Generate flashcards for a topic
    #[command(alias = "f")]
    Flashcards(FlashcardsArgs),
    /// Detect weak skills from incorrect test answers
    #[command(alias = "w")]
    WeakSkills(WeakSkillsArgs),
}

// ============================================================================
// Config commands
// ============================================================================

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show a preference value
    Get {
        /// Preference key (e.g. "default_mode")
        key: String,
    },
    /// Set a preference value
    Set {
        /// Preference key (e.g. "default_mode")
        key: String,
        /// Value to store
        value: String,
    },
    /// Remove a preference
    Unset {
        /// Preference key
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_date_accepts_plain_dates() {
        let ts = parse_due_date("2026-09-01").expect("Should parse");
        assert_eq!(ts.to_string(), "2026-09-01T23:59:59Z");
    }

    #[test]
    fn due_date_accepts_timestamps() {
        let ts = parse_due_date("2026-09-01T08:30:00Z").expect("Should parse");
        assert_eq!(ts.to_string(), "2026-09-01T08:30:00Z");
    }

    #[test]
    fn due_date_rejects_garbage() {
        assert!(parse_due_date("next tuesday").is_err());
    }
}
