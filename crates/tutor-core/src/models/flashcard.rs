//! Study-aid value types: flashcards, difficulties, and test answers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A front/back flashcard pair parsed from generated text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flashcard {
    /// Question or concept shown first
    pub front: String,

    /// Answer or explanation on the reverse
    pub back: String,
}

/// Difficulty level for practice question generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

impl Difficulty {
    /// Lowercase name as used in prompts and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// One incorrect test answer, input to weak-skill detection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncorrectAnswer {
    /// The question that was answered incorrectly
    pub question: String,

    /// What the learner answered
    pub user_answer: String,

    /// The expected answer
    pub correct_answer: String,
}
