//! Task registry tests: queries, due dates, statistics, and input checks.

use super::FixedClock;
use crate::board::domain::{
    ColumnDraft, StatusKey, Task, TaskDraft, TaskInputError, TaskPriority, default_columns,
};
use crate::board::registry::{columns, tasks};
use chrono::{DateTime, TimeDelta, Utc};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock::at(2025, 3, 10, 9)
}

fn task(title: &str, priority: TaskPriority, status: &str, clock: &FixedClock) -> Task {
    Task::new(
        TaskDraft::new(title)
            .with_priority(priority)
            .with_status(status),
        clock,
    )
}

fn due_task(status: &str, due: DateTime<Utc>, clock: &FixedClock) -> Task {
    Task::new(
        TaskDraft::new("Due task")
            .with_status(status)
            .with_due_date(due),
        clock,
    )
}

fn titles<'a>(list: &[&'a Task]) -> Vec<&'a str> {
    list.iter().map(|task| task.title()).collect()
}

fn completion() -> tasks::CompletionStatuses {
    tasks::CompletionStatuses::from_columns(&default_columns())
}

#[rstest]
fn by_status_and_priority_filters(clock: FixedClock) {
    let list = vec![
        task("a", TaskPriority::High, "todo", &clock),
        task("b", TaskPriority::Low, "done", &clock),
        task("c", TaskPriority::High, "done", &clock),
    ];

    assert_eq!(titles(&tasks::by_status(&list, &StatusKey::new("done"))), ["b", "c"]);
    assert_eq!(
        titles(&tasks::filter_by_priority(&list, TaskPriority::High)),
        ["a", "c"]
    );
    assert!(tasks::by_status(&list, &StatusKey::new("review")).is_empty());
}

#[rstest]
fn sort_by_priority_is_stable(clock: FixedClock) {
    let list = vec![
        task("low", TaskPriority::Low, "todo", &clock),
        task("high-1", TaskPriority::High, "todo", &clock),
        task("urgent", TaskPriority::Urgent, "todo", &clock),
        task("high-2", TaskPriority::High, "todo", &clock),
        task("medium", TaskPriority::Medium, "todo", &clock),
    ];

    let sorted = tasks::sort_by_priority(&list);

    assert_eq!(titles(&sorted), ["urgent", "high-1", "high-2", "medium", "low"]);
    assert_eq!(list.first().map(Task::title), Some("low"), "input untouched");
}

#[rstest]
fn search_is_case_insensitive_over_title_and_description(clock: FixedClock) {
    let list = vec![
        Task::new(TaskDraft::new("Fix LOGIN bug"), &clock),
        Task::new(
            TaskDraft::new("Refactor").with_description("Clean up the login flow"),
            &clock,
        ),
        Task::new(TaskDraft::new("Write docs"), &clock),
    ];

    assert_eq!(
        titles(&tasks::search(&list, "Login")),
        ["Fix LOGIN bug", "Refactor"]
    );
    assert!(tasks::search(&list, "deploy").is_empty());
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_search_returns_everything(#[case] query: &str, clock: FixedClock) {
    let list = vec![
        Task::new(TaskDraft::new("one"), &clock),
        Task::new(TaskDraft::new("two"), &clock),
    ];
    assert_eq!(tasks::search(&list, query).len(), list.len());
}

#[rstest]
#[case("in-progress", -1, true)]
#[case("done", -1, false)]
#[case("todo", 1, false)]
fn overdue_ignores_completed_tasks(
    #[case] status: &str,
    #[case] offset_days: i64,
    #[case] expected: bool,
    clock: FixedClock,
) {
    let subject = due_task(status, clock.0 + TimeDelta::days(offset_days), &clock);
    assert_eq!(tasks::is_overdue(&subject, clock.0, &completion()), expected);
}

#[rstest]
fn tasks_without_due_dates_are_never_overdue(clock: FixedClock) {
    let subject = Task::new(TaskDraft::new("Someday"), &clock);
    assert!(!tasks::is_overdue(&subject, clock.0, &completion()));
}

#[rstest]
fn due_soon_covers_the_next_days_only(clock: FixedClock) {
    let now = clock.0;
    let list = vec![
        due_task("todo", now + TimeDelta::hours(12), &clock),
        due_task("todo", now + TimeDelta::days(3), &clock),
        due_task("todo", now + TimeDelta::days(4), &clock),
        due_task("todo", now - TimeDelta::hours(1), &clock),
        due_task("done", now + TimeDelta::days(1), &clock),
    ];

    let soon = tasks::due_soon(&list, now, tasks::DUE_SOON_DAYS, &completion());

    assert_eq!(soon.len(), 2);
}

#[rstest]
fn custom_terminal_columns_count_as_completed(clock: FixedClock) {
    let mut layout = default_columns();
    let shipped = columns::create(&ColumnDraft::new("Shipped").terminal(), &layout, &clock)
        .expect("valid column");
    layout.push(shipped);
    let statuses = tasks::CompletionStatuses::from_columns(&layout);

    let subject = due_task("shipped", clock.0 - TimeDelta::days(2), &clock);

    assert!(statuses.contains(&StatusKey::new("shipped")));
    assert!(!tasks::is_overdue(&subject, clock.0, &statuses));
}

#[rstest]
fn statistics_summarise_the_board(clock: FixedClock) {
    let now = clock.0;
    let list = vec![
        task("a", TaskPriority::Urgent, "todo", &clock),
        task("b", TaskPriority::High, "in-progress", &clock),
        task("c", TaskPriority::High, "done", &clock),
        due_task("in-progress", now - TimeDelta::days(1), &clock),
        due_task("todo", now + TimeDelta::days(1), &clock),
        task("d", TaskPriority::Low, "done", &clock),
    ];

    let stats = tasks::statistics(&list, &default_columns(), now);

    assert_eq!(stats.total, 6);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.overdue, 1);
    assert_eq!(stats.due_soon, 1);
    assert_eq!(stats.completion_rate, 33);
    assert_eq!(stats.by_priority.urgent, 1);
    assert_eq!(stats.by_priority.high, 2);
    assert_eq!(stats.by_priority.medium, 2);
    assert_eq!(stats.by_priority.low, 1);
    let counts: Vec<(&str, usize)> = stats
        .by_status
        .iter()
        .map(|entry| (entry.status.as_str(), entry.count))
        .collect();
    assert_eq!(counts, [("todo", 2), ("in-progress", 2), ("done", 2)]);
}

#[rstest]
#[case(0, 0, 0)]
#[case(1, 3, 33)]
#[case(2, 3, 67)]
#[case(1, 2, 50)]
#[case(1, 8, 13)]
fn completion_rate_rounds_half_up(
    #[case] completed: usize,
    #[case] total: usize,
    #[case] expected: usize,
    clock: FixedClock,
) {
    let list: Vec<Task> = (0..total)
        .map(|index| {
            let status = if index < completed { "done" } else { "todo" };
            task("t", TaskPriority::Medium, status, &clock)
        })
        .collect();

    let stats = tasks::statistics(&list, &default_columns(), clock.0);

    assert_eq!(stats.completion_rate, expected);
}

#[rstest]
fn statistics_serialise_with_camel_case_keys(clock: FixedClock) {
    let stats = tasks::statistics(&[], &default_columns(), clock.0);
    let encoded = serde_json::to_value(&stats).expect("statistics encode");

    assert!(encoded.get("completionRate").is_some());
    assert!(encoded.get("byPriority").is_some());
    assert!(encoded.get("dueSoon").is_some());
}

#[rstest]
#[case("Write docs", None, &[])]
#[case("  ", None, &[TaskInputError::TitleRequired])]
#[case("ab", None, &[TaskInputError::TitleTooShort])]
#[case("abc", Some("short"), &[])]
fn validate_input_checks_title_length(
    #[case] title: &str,
    #[case] description: Option<&str>,
    #[case] expected: &[TaskInputError],
) {
    assert_eq!(tasks::validate_input(title, description), expected);
}

#[rstest]
fn validate_input_checks_upper_bounds() {
    let long_title = "x".repeat(101);
    let long_description = "y".repeat(501);
    let max_description = "y".repeat(500);

    assert_eq!(
        tasks::validate_input(&long_title, Some(&long_description)),
        vec![TaskInputError::TitleTooLong, TaskInputError::DescriptionTooLong]
    );
    assert!(tasks::validate_input("Ship", Some(&max_description)).is_empty());
}
