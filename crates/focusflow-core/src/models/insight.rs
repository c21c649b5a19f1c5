//! Coaching payloads: performance analysis and streak celebrations.

use serde::{Deserialize, Serialize};

/// Summary of recent study performance sent to the analysis service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceData {
    pub completed_tasks: Vec<String>,
    pub missed_tasks: Vec<String>,
    /// Average study time in hours per day
    pub avg_study_time: f64,
    pub most_skipped_subject: String,
}

impl Default for PerformanceData {
    /// The fixed weekly summary used for analysis requests.
    fn default() -> Self {
        Self {
            completed_tasks: vec![
                "Math HW".to_string(),
                "Reading".to_string(),
                "Vocab".to_string(),
            ],
            missed_tasks: vec!["Physics Lab".to_string(), "Bio Quiz".to_string()],
            avg_study_time: 2.8,
            most_skipped_subject: "Physics".to_string(),
        }
    }
}

/// Coaching feedback produced by the analysis service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub procrastination_patterns: Vec<String>,
    pub weak_time_slots: Vec<String>,
    pub suggested_improvements: Vec<String>,
    pub behavioral_advice: String,
    pub schedule_adjustments: String,
}

/// Encouragement payload shown when a plan is fully completed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreakCelebration {
    pub encouragement: String,
    pub productivity_tip: String,
    pub tomorrow_challenge: String,
}

impl StreakCelebration {
    /// Celebration used when the service cannot provide one.
    pub fn fallback() -> Self {
        Self {
            encouragement: "Amazing work! You're unstoppable.".to_string(),
            productivity_tip:
                "Try the 5-minute rule: start for just 5 minutes to beat procrastination."
                    .to_string(),
            tomorrow_challenge: "Complete your hardest task first thing tomorrow morning!"
                .to_string(),
        }
    }
}
