#![allow(dead_code)]

use std::{
    collections::VecDeque,
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use focusflow_core::{
    AnalysisResult, Controller, ControllerBuilder, DayPlan, MicroTask, PerformanceData,
    PlanContext, PlanService, PriorityItem, ProductivityPlan, ServiceError, SlotKind,
    StreakCelebration, TimeSlot,
};
use tempfile::TempDir;

type Scripted<T> = VecDeque<(Duration, Result<T, ServiceError>)>;

/// Plan service double that replays queued responses.
///
/// An empty queue answers with `ServiceError::Unavailable`.
#[derive(Default)]
pub struct ScriptedService {
    plans: Mutex<Scripted<ProductivityPlan>>,
    analyses: Mutex<Scripted<AnalysisResult>>,
    reminders: Mutex<Scripted<String>>,
    celebrations: Mutex<Scripted<StreakCelebration>>,

    pub plan_calls: AtomicUsize,
    pub celebration_calls: AtomicUsize,
    pub contexts: Mutex<Vec<PlanContext>>,
    pub reminder_args: Mutex<Vec<(String, String, String)>>,
    pub celebrated_streaks: Mutex<Vec<u64>>,
}

impl ScriptedService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_plan(&self, plan: ProductivityPlan) {
        self.push_plan_after(Duration::ZERO, plan);
    }

    pub fn push_plan_after(&self, delay: Duration, plan: ProductivityPlan) {
        self.plans.lock().unwrap().push_back((delay, Ok(plan)));
    }

    pub fn push_plan_error(&self, error: ServiceError) {
        self.plans
            .lock()
            .unwrap()
            .push_back((Duration::ZERO, Err(error)));
    }

    pub fn push_analysis(&self, analysis: AnalysisResult) {
        self.analyses
            .lock()
            .unwrap()
            .push_back((Duration::ZERO, Ok(analysis)));
    }

    pub fn push_reminder(&self, text: &str) {
        self.reminders
            .lock()
            .unwrap()
            .push_back((Duration::ZERO, Ok(text.to_string())));
    }

    pub fn push_celebration(&self, celebration: StreakCelebration) {
        self.celebrations
            .lock()
            .unwrap()
            .push_back((Duration::ZERO, Ok(celebration)));
    }

    pub fn plan_calls(&self) -> usize {
        self.plan_calls.load(Ordering::SeqCst)
    }

    pub fn celebration_calls(&self) -> usize {
        self.celebration_calls.load(Ordering::SeqCst)
    }

    async fn replay<T>(queue: &Mutex<Scripted<T>>) -> Result<T, ServiceError> {
        let next = queue.lock().unwrap().pop_front();
        match next {
            Some((delay, response)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                response
            }
            None => Err(ServiceError::unavailable("nothing scripted")),
        }
    }
}

#[async_trait]
impl PlanService for ScriptedService {
    async fn generate_plan(&self, context: &PlanContext) -> Result<ProductivityPlan, ServiceError> {
        self.plan_calls.fetch_add(1, Ordering::SeqCst);
        self.contexts.lock().unwrap().push(context.clone());
        Self::replay(&self.plans).await
    }

    async fn analyze_performance(
        &self,
        _data: &PerformanceData,
    ) -> Result<AnalysisResult, ServiceError> {
        Self::replay(&self.analyses).await
    }

    async fn quick_reminder(
        &self,
        subject: &str,
        deadline: &str,
        task_title: &str,
    ) -> Result<String, ServiceError> {
        self.reminder_args.lock().unwrap().push((
            subject.to_string(),
            deadline.to_string(),
            task_title.to_string(),
        ));
        Self::replay(&self.reminders).await
    }

    async fn streak_celebration(&self, streak: u64) -> Result<StreakCelebration, ServiceError> {
        self.celebration_calls.fetch_add(1, Ordering::SeqCst);
        self.celebrated_streaks.lock().unwrap().push(streak);
        Self::replay(&self.celebrations).await
    }
}

/// Helper function to build a controller on an existing database path
pub async fn build_controller(db_path: &Path, service: Arc<ScriptedService>) -> Controller {
    ControllerBuilder::new()
        .with_database_path(Some(db_path))
        .with_service(service)
        .build()
        .await
        .expect("Failed to create controller")
}

/// Helper function to create a test controller in a fresh directory
pub async fn create_test_controller(service: Arc<ScriptedService>) -> (TempDir, Controller) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let controller = build_controller(&temp_dir.path().join("test.db"), service).await;
    (temp_dir, controller)
}

/// A plan with `days` single-slot days and one unchecked micro-task per ID.
pub fn plan(days: usize, micro_task_ids: &[&str]) -> ProductivityPlan {
    ProductivityPlan {
        priority_order: vec![PriorityItem {
            id: "t1".to_string(),
            title: "Lab".to_string(),
            reason: "Exam is closest".to_string(),
        }],
        multi_day_plan: (1..=days)
            .map(|day| DayPlan {
                day_label: format!("Day {day}"),
                slots: vec![TimeSlot {
                    time: "09:00".to_string(),
                    activity: "Deep work".to_string(),
                    duration_minutes: 50.0,
                    kind: SlotKind::Work,
                }],
            })
            .collect(),
        micro_tasks: micro_task_ids
            .iter()
            .map(|id| MicroTask {
                id: id.to_string(),
                title: format!("Finish {id}"),
                duration: "15 min".to_string(),
                checked: false,
            })
            .collect(),
        motivation_tip: "One step at a time.".to_string(),
    }
}

pub fn celebration(streak: u64) -> StreakCelebration {
    StreakCelebration {
        encouragement: format!("{streak} plans in a row!"),
        productivity_tip: "Batch similar tasks.".to_string(),
        tomorrow_challenge: "Start before 9am.".to_string(),
    }
}

pub fn analysis(advice: &str) -> AnalysisResult {
    AnalysisResult {
        procrastination_patterns: vec!["Delays lab work".to_string()],
        weak_time_slots: vec!["After 9pm".to_string()],
        suggested_improvements: vec!["Start labs on Monday".to_string()],
        behavioral_advice: advice.to_string(),
        schedule_adjustments: "Move physics to mornings".to_string(),
    }
}
