//! Explanation modes controlling the AI tutoring style.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fixed set of AI tutoring styles.
///
/// Each mode maps to a fixed system instruction used verbatim as the prompt
/// prefix for every generation call made in that mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationMode {
    /// Socratic tutoring that withholds direct answers
    Guided,

    /// Step-by-step explanations with periodic comprehension checks
    #[default]
    Balanced,

    /// Full step-by-step exposition
    Direct,
}

impl FromStr for ExplanationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guided" => Ok(ExplanationMode::Guided),
            "balanced" => Ok(ExplanationMode::Balanced),
            "direct" => Ok(ExplanationMode::Direct),
            _ => Err(format!("Invalid explanation mode: {s}")),
        }
    }
}

impl ExplanationMode {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplanationMode::Guided => "guided",
            ExplanationMode::Balanced => "balanced",
            ExplanationMode::Direct => "direct",
        }
    }

    /// System instruction prefixed verbatim to every prompt in this mode.
    pub fn system_instruction(&self) -> &'static str {
        match self {
            ExplanationMode::Guided => {
                "You are a Socratic tutor. Your goal is to help students learn by asking \
                 questions and guiding them to discover answers themselves. Never give direct \
                 answers. Instead:\n\
                 - Ask probing questions\n\
                 - Guide students through reasoning\n\
                 - Help them identify their misconceptions\n\
                 - Encourage critical thinking\n\
                 - Provide hints when they're stuck, but never full solutions\n\
                 - Be patient and supportive"
            }
            ExplanationMode::Balanced => {
                "You are a helpful study assistant. Your goal is to help students understand \
                 concepts while providing clear explanations. You should:\n\
                 - Explain concepts step-by-step\n\
                 - Provide examples when helpful\n\
                 - Ask occasional questions to check understanding\n\
                 - Point out common mistakes\n\
                 - Give hints before full solutions\n\
                 - Balance guidance with direct help"
            }
            ExplanationMode::Direct => {
                "You are a clear and direct tutor. Your goal is to help students understand \
                 through detailed step-by-step explanations. You should:\n\
                 - Provide complete step-by-step solutions\n\
                 - Explain each step clearly\n\
                 - Show all work and reasoning\n\
                 - Highlight important concepts\n\
                 - Point out common mistakes\n\
                 - Be thorough and precise"
            }
        }
    }
}
