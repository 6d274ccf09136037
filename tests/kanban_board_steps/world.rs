//! Shared world state for kanban board BDD scenarios.

use std::{collections::HashMap, sync::Arc};

use eyre::eyre;
use mockable::DefaultClock;
use obrafy::{
    config::DashboardConfig,
    kanban::domain::{ColumnId, TaskId},
    project::{Project, ProjectError},
    team::adapters::memory::InMemoryTeamDirectory,
};
use rstest::fixture;

/// Project type used by the BDD world.
pub type TestProject = Project<InMemoryTeamDirectory, DefaultClock>;

/// Scenario world for kanban behaviour tests.
#[derive(Default)]
pub struct BoardWorld {
    pub project: Option<TestProject>,
    pub task_ids: HashMap<String, TaskId>,
    pub last_error: Option<ProjectError>,
}

impl BoardWorld {
    /// Returns the project created by the background step.
    pub fn project(&self) -> eyre::Result<&TestProject> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre!("project board has not been created"))
    }

    /// Returns the project created by the background step, mutably.
    pub fn project_mut(&mut self) -> eyre::Result<&mut TestProject> {
        self.project
            .as_mut()
            .ok_or_else(|| eyre!("project board has not been created"))
    }

    /// Looks up a task created by an earlier step.
    pub fn task_id(&self, title: &str) -> eyre::Result<TaskId> {
        self.task_ids
            .get(title)
            .copied()
            .ok_or_else(|| eyre!("no task titled {title:?} in scenario world"))
    }
}

/// Builds a project with the default crew.
pub fn new_project() -> eyre::Result<TestProject> {
    let directory = InMemoryTeamDirectory::with_default_crew()?;
    Ok(Project::new(
        Arc::new(directory),
        Arc::new(DefaultClock),
        DashboardConfig::default(),
    )?)
}

/// Parses a column name used in a feature file.
pub fn column(name: &str) -> eyre::Result<ColumnId> {
    ColumnId::try_from(name).map_err(|err| eyre!("invalid column in scenario: {err}"))
}

/// Splits a comma-separated title list.
pub fn titles(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
