//! When steps for kanban board BDD scenarios.

use super::world::{BoardWorld, column};
use eyre::{WrapErr, eyre};
use obrafy::kanban::{domain::MoveRequest, services::TaskDetailsRequest};
use rstest_bdd_macros::when;

#[when(r#"I add a task "{title}" assigned to "{assignee}" due "{due_date}""#)]
fn add_task(
    world: &mut BoardWorld,
    title: String,
    assignee: String,
    due_date: String,
) -> Result<(), eyre::Report> {
    let result = world
        .project_mut()?
        .add_task(TaskDetailsRequest::new(title.clone(), assignee, due_date));
    match result {
        Ok(task) => {
            world.task_ids.insert(title, task.id());
            world.last_error = None;
        }
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when(r#"I move "{title}" from "{source}" index {source_index:usize} to "{dest}" index {dest_index:usize}"#)]
fn move_task(
    world: &mut BoardWorld,
    title: String,
    source: String,
    source_index: usize,
    dest: String,
    dest_index: usize,
) -> Result<(), eyre::Report> {
    let request = MoveRequest::new(
        world.task_id(&title)?,
        column(&source)?,
        column(&dest)?,
        source_index,
        dest_index,
    );
    world
        .project_mut()?
        .move_task(request)
        .wrap_err_with(|| format!("move task {title:?}"))?;
    Ok(())
}

#[when(r#"I delete "{title}""#)]
fn delete_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    world
        .project_mut()?
        .delete_task(task_id)
        .wrap_err_with(|| format!("delete task {title:?}"))?;
    Ok(())
}

#[when(r#"I start dragging the task at "{column_name}" index {index:usize}"#)]
fn start_drag(world: &mut BoardWorld, column_name: String, index: usize) -> Result<(), eyre::Report> {
    let source = column(&column_name)?;
    if !world.project_mut()?.grab_task(source, index) {
        return Err(eyre!("no task at {source} index {index}"));
    }
    Ok(())
}

#[when(r#"I drop it on "{column_name}" index {index:usize}"#)]
fn drop_task(world: &mut BoardWorld, column_name: String, index: usize) -> Result<(), eyre::Report> {
    let dest = column(&column_name)?;
    let project = world.project_mut()?;
    project.hover_column(dest);
    project
        .drop_task(dest, index)
        .wrap_err("drop dragged task")?
        .ok_or_else(|| eyre!("drop happened without an active drag"))?;
    Ok(())
}

#[when("I cancel the drag")]
fn cancel_drag(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.project_mut()?.cancel_drag();
    Ok(())
}
