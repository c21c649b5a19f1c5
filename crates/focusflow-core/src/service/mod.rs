//! Plan generation service boundary.
//!
//! All scheduling, prioritization and coaching text comes from an external
//! generative-AI service. The [`PlanService`] trait is the seam the
//! controller depends on; [`GeminiClient`] is the production implementation
//! and tests substitute their own.
//!
//! Implementations report failures as [`ServiceError`], distinguishing a
//! service that could not be reached from one that answered with something
//! unusable. The controller collapses both into a single failure per
//! request kind.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    AnalysisResult, PerformanceData, PlanContext, ProductivityPlan, StreakCelebration,
};

pub mod gemini;
pub mod prompts;

pub use gemini::{GeminiClient, GeminiClientBuilder};

/// Failure of a single request to the AI service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Transport error, timeout or non-success HTTP status
    #[error("service unavailable: {reason}")]
    Unavailable { reason: String },
    /// Empty reply, unparsable JSON or a reply that breaks the contract
    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },
}

impl ServiceError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::malformed(e.to_string())
        } else {
            Self::unavailable(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        Self::malformed(e.to_string())
    }
}

/// Requests the application makes of the AI service.
///
/// Object-safe so the controller can hold an `Arc<dyn PlanService>`.
#[async_trait]
pub trait PlanService: Send + Sync {
    /// Builds a multi-day plan for the given backlog and settings.
    async fn generate_plan(&self, context: &PlanContext) -> Result<ProductivityPlan, ServiceError>;

    /// Produces coaching feedback for a performance summary.
    async fn analyze_performance(
        &self,
        data: &PerformanceData,
    ) -> Result<AnalysisResult, ServiceError>;

    /// Produces a short action-oriented reminder for one task.
    ///
    /// An empty string means the service had nothing to say.
    async fn quick_reminder(
        &self,
        subject: &str,
        deadline: &str,
        task_title: &str,
    ) -> Result<String, ServiceError>;

    /// Produces a celebration for reaching the given streak.
    async fn streak_celebration(&self, streak: u64) -> Result<StreakCelebration, ServiceError>;
}
