//! Given steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::given;

#[given("an empty task list")]
fn empty_task_list(world: &TaskListWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.store.tasks().is_empty(),
        "expected a fresh store for the scenario"
    );
    Ok(())
}

#[given(r#"a task "{title}" has been added"#)]
fn task_has_been_added(world: &mut TaskListWorld, title: String) -> Result<(), eyre::Report> {
    world.store.set_pending_input(title.as_str());
    world
        .store
        .add_task()
        .ok_or_else(|| eyre::eyre!("adding task {title:?} was ignored"))?;
    Ok(())
}
