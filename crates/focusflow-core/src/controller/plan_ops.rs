//! Plan generation, micro-task toggling and completion for the Controller.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::task::JoinHandle;

use super::{Completion, Controller, PlanOutcome, ToggleOutcome};
use crate::{
    error::{FocusError, Result},
    models::{PlanContext, ProductivityPlan, StreakCelebration},
    service::ServiceError,
    tracker::{PlanEvent, PlanTracker},
};

impl Controller {
    /// Requests a new plan for the current backlog and makes it active.
    ///
    /// # Errors
    ///
    /// - `FocusError::EmptyBacklog` without calling the service when there
    ///   are no tasks
    /// - `FocusError::PlanGenerationFailed` when the service fails or the
    ///   reply is malformed; the previous plan stays active
    pub async fn request_plan(&self) -> Result<PlanOutcome> {
        let context = self.plan_context().await?;
        let response = self.service.generate_plan(&context).await;
        self.accept_plan(response, context.days_to_plan).await
    }

    /// Starts a plan request in the background.
    ///
    /// Only a weak reference is held while the service call is in flight.
    /// If the controller is dropped before the reply arrives, the reply is
    /// discarded and the task yields `None`.
    pub fn spawn_plan_request(self: &Arc<Self>) -> JoinHandle<Option<Result<PlanOutcome>>> {
        let controller = Arc::downgrade(self);
        let service = Arc::clone(&self.service);

        tokio::spawn(async move {
            let context = match controller.upgrade()?.plan_context().await {
                Ok(context) => context,
                Err(e) => return Some(Err(e)),
            };

            let response = service.generate_plan(&context).await;

            let Some(controller) = controller.upgrade() else {
                debug!("Discarding plan response; controller no longer exists");
                return None;
            };
            Some(controller.accept_plan(response, context.days_to_plan).await)
        })
    }

    /// Snapshot of the active plan.
    pub async fn active_plan(&self) -> Option<PlanTracker> {
        self.session.lock().await.plan.clone()
    }

    /// Toggles a micro-task of the active plan.
    ///
    /// Without an active plan, or for an unknown micro-task, this is a
    /// no-op. When the toggle completes the plan, the completed snapshot and
    /// the streak increment are saved together and a celebration is fetched
    /// before returning. If that save fails, neither the session nor the
    /// store changes.
    pub async fn toggle_micro_task(&self, micro_task_id: &str) -> Result<ToggleOutcome> {
        let (tracker, checked, streak) = {
            let mut session = self.session.lock().await;
            let Some(current) = session.plan.as_ref() else {
                debug!("Ignoring toggle of {micro_task_id}; no active plan");
                return Ok(ToggleOutcome::default());
            };

            if current.is_checked(micro_task_id).is_none() {
                debug!("Ignoring toggle of unknown micro-task {micro_task_id}");
                return Ok(ToggleOutcome {
                    tracker: Some(current.clone()),
                    ..Default::default()
                });
            }

            let mut updated = current.clone();
            let event = updated.toggle(micro_task_id);
            let streak = self.persist_plan(&updated, event).await?;
            session.plan = Some(updated.clone());

            let checked = updated.is_checked(micro_task_id);
            (updated, checked, streak)
        };

        let completion = match streak {
            Some(streak) => Some(self.celebrate(streak).await),
            None => None,
        };

        Ok(ToggleOutcome {
            tracker: Some(tracker),
            checked,
            completion,
        })
    }

    /// Records a completed plan: adds one to the persisted streak, then
    /// fetches a celebration.
    ///
    /// The increment is durable before the celebration is requested and is
    /// never rolled back. If the celebration request fails the fallback
    /// celebration is returned and the gap is logged.
    pub async fn complete_plan(&self) -> Result<Completion> {
        let streak = self.store.increment_streak().await?;
        info!("Plan completed; streak is now {streak}");
        Ok(self.celebrate(streak).await)
    }

    /// Fetches a celebration for `streak`, falling back when the service
    /// fails.
    async fn celebrate(&self, streak: u64) -> Completion {
        let (celebration, fallback_used) = match self.service.streak_celebration(streak).await {
            Ok(celebration) => (celebration, false),
            Err(e) => {
                warn!(
                    "Celebration request failed ({e}); streak {streak} is recorded without one"
                );
                (StreakCelebration::fallback(), true)
            }
        };

        Completion {
            streak,
            celebration,
            fallback_used,
        }
    }

    /// Writes `tracker` as the active plan. A completion event is saved
    /// together with the streak increment, and the new streak is returned.
    async fn persist_plan(
        &self,
        tracker: &PlanTracker,
        event: Option<PlanEvent>,
    ) -> Result<Option<u64>> {
        match event {
            Some(PlanEvent::Completed) => {
                let streak = self.store.save_completed_plan(tracker.clone()).await?;
                info!("Plan completed; streak is now {streak}");
                Ok(Some(streak))
            }
            None => {
                self.store.save_active_plan(tracker.clone()).await?;
                Ok(None)
            }
        }
    }

    /// Captures the request context, rejecting an empty backlog.
    async fn plan_context(&self) -> Result<PlanContext> {
        let session = self.session.lock().await;
        if session.backlog.is_empty() {
            return Err(FocusError::EmptyBacklog);
        }
        Ok(PlanContext::new(session.backlog.clone(), session.settings))
    }

    /// Validates a service reply and installs it as the active plan.
    async fn accept_plan(
        &self,
        response: std::result::Result<ProductivityPlan, ServiceError>,
        days_to_plan: u32,
    ) -> Result<PlanOutcome> {
        let mut tracker = response
            .and_then(|plan| validate_plan(plan, days_to_plan))
            .map_err(|source| {
                warn!("Plan generation failed: {source}");
                FocusError::PlanGenerationFailed { source }
            })?;

        let event = tracker.evaluate();
        let streak = {
            let mut session = self.session.lock().await;
            let streak = self.persist_plan(&tracker, event).await?;
            session.plan = Some(tracker.clone());
            streak
        };
        info!(
            "Installed plan with {} day(s) and {} micro-task(s)",
            tracker.plan().multi_day_plan.len(),
            tracker.total()
        );

        let completion = match streak {
            Some(streak) => Some(self.celebrate(streak).await),
            None => None,
        };

        Ok(PlanOutcome {
            tracker,
            completion,
        })
    }
}

/// Rejects plans that break the generation contract.
pub(super) fn validate_plan(
    plan: ProductivityPlan,
    days_to_plan: u32,
) -> std::result::Result<PlanTracker, ServiceError> {
    if plan.multi_day_plan.len() != days_to_plan as usize {
        return Err(ServiceError::malformed(format!(
            "expected {days_to_plan} day(s), got {}",
            plan.multi_day_plan.len()
        )));
    }
    PlanTracker::new(plan)
}
