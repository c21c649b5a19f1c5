//! Task model definition and related functionality.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Length of generated task identifiers.
const TASK_ID_LEN: usize = 9;

/// An academic task in the backlog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Short random identifier
    pub id: String,

    /// What has to be done
    pub title: String,

    /// Course or subject the task belongs to
    pub subject: String,

    /// Due date, if the task has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Date>,

    /// Perceived difficulty
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Whether the task is an exam
    #[serde(default)]
    pub is_exam: bool,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Task {
    /// Generates a short, collision-resistant task identifier.
    pub fn generate_id() -> String {
        let mut id = uuid::Uuid::new_v4().simple().to_string();
        id.truncate(TASK_ID_LEN);
        id
    }
}

/// Task difficulty as entered by the student.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
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
