//! Integration tests for store operations driven through the public API.

use super::helpers::{add_all, config, store, titles};
use rstest::rstest;
use tasklist::task::{
    domain::{TaskCounts, TaskListSnapshot},
    services::{TaskListAction, TaskListStore},
    view::{TaskListView, ViewConfig},
};

#[rstest]
fn deleting_middle_task_keeps_neighbours_in_order(
    mut store: TaskListStore,
) -> Result<(), eyre::Report> {
    let ids = add_all(&mut store, &["A", "B", "C"])?;
    let middle = *ids.get(1).ok_or_else(|| eyre::eyre!("missing id for B"))?;

    store.delete_task(middle);

    eyre::ensure!(titles(&store) == ["A", "C"], "unexpected order");
    Ok(())
}

#[rstest]
fn view_tracks_each_user_action(
    mut store: TaskListStore,
    config: ViewConfig,
) -> Result<(), eyre::Report> {
    let ids = add_all(&mut store, &["Buy milk", "Post letter"])?;
    let first = *ids.first().ok_or_else(|| eyre::eyre!("missing id"))?;

    store.toggle_task(first);
    let view = TaskListView::from_snapshot(&store.snapshot(), &config);
    assert_eq!(view.counter_label, "1 / 2 completed");
    assert_eq!(
        view.clear_completed_label.as_deref(),
        Some("Clear 1 Completed Task")
    );

    store.clear_completed();
    let view = TaskListView::from_snapshot(&store.snapshot(), &config);
    assert_eq!(view.counter_label, "0 / 1 completed");
    assert_eq!(view.clear_completed_label, None);
    assert_eq!(view.rows.len(), 1);
    Ok(())
}

#[rstest]
fn independent_stores_do_not_interfere(mut store: TaskListStore) -> Result<(), eyre::Report> {
    let mut other = TaskListStore::new();
    add_all(&mut store, &["mine"])?;

    assert_eq!(other.derived_counts(), TaskCounts::default());
    add_all(&mut other, &["theirs"])?;
    assert_eq!(titles(&store), ["mine"]);
    assert_eq!(titles(&other), ["theirs"]);
    Ok(())
}

#[rstest]
fn snapshot_survives_a_json_round_trip(mut store: TaskListStore) -> Result<(), eyre::Report> {
    add_all(&mut store, &["Buy milk"])?;
    store.dispatch(TaskListAction::SetPendingInput("draft".to_owned()));

    let snapshot = store.snapshot();
    let json = serde_json::to_string(&snapshot)?;
    let restored: TaskListSnapshot = serde_json::from_str(&json)?;

    assert_eq!(restored, snapshot);
    Ok(())
}
