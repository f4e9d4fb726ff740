//! Prompt construction for the AI-backed operations.
//!
//! Each builder returns the full prompt string sent to the model. Keeping
//! them here, as plain functions over plain inputs, makes the exact text
//! sent to the model testable without a network.

use std::fmt::Write;

use crate::models::{Difficulty, ExplanationMode, IncorrectAnswer};

/// Builds the prompt for generating the next solution step.
///
/// With no previous steps the model is asked for the first step only;
/// otherwise the confirmed steps are replayed and the model is asked for
/// the single next step.
pub fn next_step(question: &str, mode: ExplanationMode, previous_steps: &[String]) -> String {
    let mut prompt = format!("{}\n\nQuestion: {question}\n\n", mode.system_instruction());

    if previous_steps.is_empty() {
        prompt.push_str(
            "Provide the FIRST step only to solve this problem. Do not solve the entire problem.",
        );
    } else {
        let _ = write!(
            prompt,
            "Previous steps completed:\n{}\n\n",
            previous_steps.join("\n")
        );
        prompt.push_str("Provide the NEXT single step only. Explain it clearly but concisely.");
    }

    prompt
}

/// Builds the prompt for extracting questions from a photographed worksheet.
pub fn extract_questions() -> String {
    "Extract all questions from this image. For each question:\n\
     1. Number the questions\n\
     2. Include all parts (a, b, c, etc.)\n\
     3. Preserve mathematical notation\n\
     4. Include any context or given information\n\
     \n\
     Format each question clearly and return as a numbered list."
        .to_string()
}

/// Builds the prompt for generating study notes on a topic.
pub fn study_notes(topic: &str, material: Option<&str>) -> String {
    let mut prompt = format!("Create comprehensive study notes for the topic: \"{topic}\"\n\n");

    if let Some(material) = material {
        let _ = write!(prompt, "Based on the following material:\n{material}\n\n");
    }

    prompt.push_str(
        "Include:\n\
         1. Key Concepts (clearly defined)\n\
         2. Important Examples (with explanations)\n\
         3. Common Mistakes (and how to avoid them)\n\
         4. Study Tips (how to master this topic)\n\
         \n\
         Format the notes in a clear, organized manner with markdown.",
    );

    prompt
}

/// Builds the prompt for generating practice questions.
pub fn practice_questions(
    topic: &str,
    difficulty: Difficulty,
    count: u32,
    weak_skills: &[String],
) -> String {
    let mut prompt = format!(
        "Generate {count} {} practice question(s) for the topic: \"{topic}\"\n\n",
        difficulty.as_str()
    );

    if !weak_skills.is_empty() {
        let _ = write!(
            prompt,
            "Focus on these weak areas: {}\n\n",
            weak_skills.join(", ")
        );
    }

    prompt.push_str(
        "Requirements:\n\
         - Each question should test understanding, not just memorization\n\
         - Include variety in question types\n\
         - Make questions challenging but fair\n\
         - Number each question\n\
         \n\
         Provide only the questions, no solutions.",
    );

    prompt
}

/// Builds the prompt for generating flashcards.
pub fn flashcards(topic: &str, material: Option<&str>, count: u32) -> String {
    let mut prompt = format!("Create {count} flashcards for the topic: \"{topic}\"\n\n");

    if let Some(material) = material {
        let _ = write!(prompt, "Based on this material:\n{material}\n\n");
    }

    prompt.push_str(
        "Format each flashcard as:\n\
         FRONT: [question or concept]\n\
         BACK: [answer or explanation]\n\
         \n\
         Make them concise but comprehensive. Focus on key concepts, definitions, and important relationships.",
    );

    prompt
}

/// Builds the prompt for detecting weak skills from incorrect test answers.
pub fn weak_skills(topic: &str, incorrect_answers: &[IncorrectAnswer]) -> String {
    let answers = incorrect_answers
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                "{}. Question: {}\n   User Answer: {}\n   Correct Answer: {}",
                i + 1,
                item.question,
                item.user_answer,
                item.correct_answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Analyze these incorrect answers from a test on \"{topic}\" and identify specific weak skills or concepts:\n\
         \n\
         {answers}\n\
         \n\
         Identify 3-5 specific skills or concepts the student needs to work on. Be specific and actionable.\n\
         List only the skill names, one per line."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_prompt_asks_for_first_step_only() {
        let prompt = next_step("Solve x^2 = 4", ExplanationMode::Balanced, &[]);
        assert!(prompt.contains("Question: Solve x^2 = 4"));
        assert!(prompt.contains("Provide the FIRST step only"));
        assert!(!prompt.contains("Previous steps completed"));
    }

    #[test]
    fn next_step_prompt_replays_previous_steps() {
        let previous = vec!["Take the square root of both sides.".to_string()];
        let prompt = next_step("Solve x^2 = 4", ExplanationMode::Guided, &previous);
        assert!(prompt.contains("Previous steps completed:"));
        assert!(prompt.contains("Take the square root of both sides."));
        assert!(prompt.contains("Provide the NEXT single step only"));
    }

    #[test]
    fn practice_questions_prompt_includes_weak_areas_when_present() {
        let skills = vec!["factoring".to_string(), "sign errors".to_string()];
        let prompt = practice_questions("Quadratics", Difficulty::Hard, 3, &skills);
        assert!(prompt.contains("Generate 3 hard practice question(s)"));
        assert!(prompt.contains("Focus on these weak areas: factoring, sign errors"));

        let without = practice_questions("Quadratics", Difficulty::Easy, 1, &[]);
        assert!(!without.contains("weak areas"));
    }

    #[test]
    fn weak_skills_prompt_numbers_each_answer() {
        let answers = vec![
            IncorrectAnswer {
                question: "2 + 2?".to_string(),
                user_answer: "5".to_string(),
                correct_answer: "4".to_string(),
            },
            IncorrectAnswer {
                question: "3 * 3?".to_string(),
                user_answer: "6".to_string(),
                correct_answer: "9".to_string(),
            },
        ];
        let prompt = weak_skills("Arithmetic", &answers);
        assert!(prompt.contains("1. Question: 2 + 2?"));
        assert!(prompt.contains("2. Question: 3 * 3?"));
        assert!(prompt.contains("one per line"));
    }
}
