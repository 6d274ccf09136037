//! Then steps for kanban board BDD scenarios.

use super::world::{BoardWorld, column, titles};
use eyre::eyre;
use obrafy::error::ErrorKind;
use rstest_bdd_macros::then;

fn listed_titles(world: &BoardWorld, column_name: &str) -> eyre::Result<Vec<String>> {
    let board = world.project()?.state().board();
    board
        .column(column(column_name)?)
        .task_ids()
        .iter()
        .map(|id| {
            board
                .task(*id)
                .map(|task| task.title().to_owned())
                .ok_or_else(|| eyre!("column lists unknown task {id}"))
        })
        .collect()
}

#[then(r#"column "{column_name}" lists "{list}""#)]
fn column_lists(world: &BoardWorld, column_name: String, list: String) -> Result<(), eyre::Report> {
    let actual = listed_titles(world, &column_name)?;
    let expected = titles(&list);
    if actual != expected {
        return Err(eyre!("expected {column_name} to list {expected:?}, found {actual:?}"));
    }
    world
        .project()?
        .state()
        .board()
        .verify()
        .map_err(|err| eyre!("board invariant broken: {err}"))
}

#[then(r#"column "{column_name}" is empty"#)]
fn column_is_empty(world: &BoardWorld, column_name: String) -> Result<(), eyre::Report> {
    let actual = listed_titles(world, &column_name)?;
    if !actual.is_empty() {
        return Err(eyre!("expected {column_name} to be empty, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"task "{title}" is recorded in "{column_name}""#)]
fn task_is_recorded_in(world: &BoardWorld, title: String, column_name: String) -> Result<(), eyre::Report> {
    let expected = column(&column_name)?;
    let task_id = world.task_id(&title)?;
    let recorded = world
        .project()?
        .state()
        .board()
        .task(task_id)
        .map(obrafy::kanban::domain::Task::column)
        .ok_or_else(|| eyre!("task {title:?} missing from board"))?;
    if recorded != expected {
        return Err(eyre!("expected {title:?} in {expected}, recorded in {recorded}"));
    }
    Ok(())
}

#[then("the command is rejected as invalid input")]
fn command_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre!("expected the command to fail"))?;
    if err.kind() != ErrorKind::InvalidInput {
        return Err(eyre!("expected invalid input, got {err:?}"));
    }
    Ok(())
}

#[then("no drag is in progress")]
fn no_drag(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.project()?.state().drag().is_dragging() {
        return Err(eyre!("drag session is still active"));
    }
    Ok(())
}
