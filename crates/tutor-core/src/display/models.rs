//! Display implementations for domain models.
//!
//! Separated from the model definitions so the models stay presentation
//! free. All implementations produce markdown.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Assignment, AssignmentSummary, Flashcard, Lecture, Priority, Question, SolutionStep, Subject,
};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Priority {
    /// Status icon paired with the priority name.
    pub fn with_icon(&self) -> String {
        let icon = match self {
            Priority::Low => "▽",
            Priority::Medium => "◇",
            Priority::High => "▲",
        };
        format!("{icon} {}", self.as_str())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Priority: {}", self.priority.with_icon())?;
        writeln!(f, "- Due: {}", LocalDateTime(&self.due_at))?;
        if self.completed {
            writeln!(f, "- Completed: yes")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.questions.is_empty() {
            writeln!(f, "\n## Questions")?;
            writeln!(f)?;
            for question in &self.questions {
                write!(f, "{question}")?;
            }
        } else {
            writeln!(f, "\nNo questions in this assignment.")?;
        }

        Ok(())
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.completed { "✓" } else { "○" };
        writeln!(
            f,
            "### {}. {} ({marker})",
            self.position + 1,
            self.content
        )?;
        writeln!(f)?;

        if let Some(image_ref) = &self.image_ref {
            writeln!(f, "- Source image: {image_ref}")?;
            writeln!(f)?;
        }

        if !self.steps.is_empty() {
            for step in &self.steps {
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for SolutionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.confirmed { "✓" } else { "…" };
        writeln!(f, "#### Step {} ({marker} {})", self.step_number, self.mode.as_str())?;
        writeln!(f)?;
        writeln!(f, "{}", self.explanation)?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for AssignmentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_questions > 0 {
            format!(" ({}/{})", self.completed_questions, self.total_questions)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Priority**: {}", self.priority.with_icon())?;
        writeln!(f, "- **Due**: {}", LocalDateTime(&self.due_at))?;
        if self.completed {
            writeln!(f, "- **Completed**: yes")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.icon {
            Some(icon) => writeln!(f, "- {icon} {} (ID: {})", self.name, self.id),
            None => writeln!(f, "- {} (ID: {})", self.name, self.id),
        }
    }
}

impl fmt::Display for Lecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Held**: {}", LocalDateTime(&self.held_at))?;
        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for Flashcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Front**: {}", self.front)?;
        writeln!(f, "  **Back**: {}", self.back)?;
        Ok(())
    }
}
