//! Sample board for first-run onboarding.

use super::{
    Board, DONE_STATUS, IN_PROGRESS_STATUS, PersistedTaskData, StatusKey, TODO_STATUS, Task,
    TaskId, TaskPriority,
};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;

/// Title of the seeded demo board.
pub const DEMO_BOARD_TITLE: &str = "Demo Project Board";

struct DemoTask {
    title: &'static str,
    description: &'static str,
    priority: TaskPriority,
    status: &'static str,
    due_in_days: Option<i64>,
}

const DEMO_TASKS: [DemoTask; 8] = [
    DemoTask {
        title: "Setup Development Environment",
        description: "Install Node.js, VS Code, and configure development tools for the project.",
        priority: TaskPriority::High,
        status: TODO_STATUS,
        due_in_days: Some(3),
    },
    DemoTask {
        title: "Research UI/UX Best Practices",
        description: "Study modern design patterns and user experience principles for web applications.",
        priority: TaskPriority::Medium,
        status: TODO_STATUS,
        due_in_days: None,
    },
    DemoTask {
        title: "Plan Database Schema",
        description: "Design the database structure and relationships for the application.",
        priority: TaskPriority::High,
        status: TODO_STATUS,
        due_in_days: Some(5),
    },
    DemoTask {
        title: "Implement User Authentication",
        description: "Create login/register functionality with JWT tokens and secure password handling.",
        priority: TaskPriority::Urgent,
        status: IN_PROGRESS_STATUS,
        due_in_days: Some(2),
    },
    DemoTask {
        title: "Design Landing Page",
        description: "Create an attractive and responsive landing page with call-to-action buttons.",
        priority: TaskPriority::Medium,
        status: IN_PROGRESS_STATUS,
        due_in_days: None,
    },
    DemoTask {
        title: "Project Kickoff Meeting",
        description: "Initial team meeting to discuss project requirements, timeline, and deliverables.",
        priority: TaskPriority::High,
        status: DONE_STATUS,
        due_in_days: Some(-7),
    },
    DemoTask {
        title: "Choose Technology Stack",
        description: "Evaluate and select the best technologies for frontend, backend, and database.",
        priority: TaskPriority::Medium,
        status: DONE_STATUS,
        due_in_days: Some(-5),
    },
    DemoTask {
        title: "Setup Version Control",
        description: "Initialize Git repository and setup branching strategy for the team.",
        priority: TaskPriority::Low,
        status: DONE_STATUS,
        due_in_days: Some(-3),
    },
];

/// Builds the demo board: the default columns holding eight sample tasks.
///
/// Tasks are back-dated one day apart so the oldest was created eight days
/// before `clock.utc()`. Each was last edited a few hours after creation.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use taskboard::board::domain::demo_board;
///
/// let board = demo_board(&DefaultClock);
/// assert_eq!(board.title(), "Demo Project Board");
/// assert_eq!(board.tasks().len(), 8);
/// ```
#[must_use]
pub fn demo_board(clock: &impl Clock) -> Board {
    let now = clock.utc();
    let tasks = DEMO_TASKS
        .iter()
        .zip((1..=8_i64).rev())
        .zip(1..)
        .map(|((sample, age_days), edit_hours)| seed_task(sample, now, age_days, edit_hours))
        .collect();
    Board::titled(DEMO_BOARD_TITLE, clock).with_tasks(tasks)
}

fn seed_task(sample: &DemoTask, now: DateTime<Utc>, age_days: i64, edit_hours: i64) -> Task {
    let created_at = shifted(now, TimeDelta::try_days(-age_days));
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: sample.title.to_owned(),
        description: Some(sample.description.to_owned()),
        priority: sample.priority,
        status: StatusKey::new(sample.status),
        created_at,
        updated_at: shifted(created_at, TimeDelta::try_hours(edit_hours)),
        due_date: sample
            .due_in_days
            .map(|days| shifted(now, TimeDelta::try_days(days))),
    })
}

fn shifted(base: DateTime<Utc>, offset: Option<TimeDelta>) -> DateTime<Utc> {
    offset
        .and_then(|delta| base.checked_add_signed(delta))
        .unwrap_or(base)
}
