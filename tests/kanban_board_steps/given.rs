//! Given steps for kanban board BDD scenarios.

use super::world::{BoardWorld, column, new_project, titles};
use eyre::WrapErr;
use obrafy::kanban::{domain::{ColumnId, MoveRequest}, services::TaskDetailsRequest};
use rstest_bdd_macros::given;

#[given("an empty project board")]
fn empty_project_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.project = Some(new_project()?);
    world.task_ids.clear();
    world.last_error = None;
    Ok(())
}

#[given(r#"the board has tasks "{list}" in "{column_name}""#)]
fn board_has_tasks(
    world: &mut BoardWorld,
    list: String,
    column_name: String,
) -> Result<(), eyre::Report> {
    let target = column(&column_name)?;
    for title in titles(&list) {
        let project = world.project_mut()?;
        let task = project
            .add_task(TaskDetailsRequest::new(title.clone(), "2", "2024-06-01"))
            .wrap_err_with(|| format!("seed task {title:?}"))?;
        if target != ColumnId::Todo {
            let source_index = project
                .state()
                .board()
                .column(ColumnId::Todo)
                .len()
                .saturating_sub(1);
            project
                .move_task(MoveRequest::new(
                    task.id(),
                    ColumnId::Todo,
                    target,
                    source_index,
                    usize::MAX,
                ))
                .wrap_err_with(|| format!("move seeded task {title:?} to {target}"))?;
        }
        world.task_ids.insert(title, task.id());
    }
    Ok(())
}
