//! Integration tests for a presenter rendering on its own thread.

use std::sync::mpsc;

use rstest::rstest;
use tasklist::task::{
    adapters::SharedTaskList,
    domain::{TaskCounts, TaskListSnapshot},
    services::TaskListAction,
    view::{TaskListView, ViewConfig},
};

#[rstest]
fn presenter_renders_every_dispatched_state() -> Result<(), eyre::Report> {
    let shared = SharedTaskList::new();
    let (tx, rx) = mpsc::channel::<TaskListSnapshot>();

    let renderer = std::thread::spawn(move || {
        let config = ViewConfig::default();
        rx.iter()
            .map(|snapshot| TaskListView::from_snapshot(&snapshot, &config).counter_label)
            .collect::<Vec<_>>()
    });

    shared.dispatch(TaskListAction::SetPendingInput("Buy milk".to_owned()));
    let added = shared.dispatch(TaskListAction::AddTask);
    let id = added
        .tasks
        .first()
        .map(|task| task.id())
        .ok_or_else(|| eyre::eyre!("task was not added"))?;
    tx.send(added)?;
    tx.send(shared.dispatch(TaskListAction::ToggleTask(id)))?;
    tx.send(shared.dispatch(TaskListAction::ClearCompleted))?;
    drop(tx);

    let labels = renderer
        .join()
        .map_err(|_| eyre::eyre!("renderer thread panicked"))?;
    assert_eq!(
        labels,
        vec!["0 / 1 completed", "1 / 1 completed", "0 / 0 completed"]
    );
    Ok(())
}

#[rstest]
fn reader_handle_sees_writer_updates() {
    let writer = SharedTaskList::new();
    let reader = writer.clone();

    std::thread::scope(|scope| {
        scope.spawn(|| {
            writer.dispatch(TaskListAction::SetPendingInput("A".to_owned()));
            writer.dispatch(TaskListAction::AddTask);
        });
    });

    assert_eq!(
        reader.derived_counts(),
        TaskCounts {
            completed: 0,
            total: 1
        }
    );
}
