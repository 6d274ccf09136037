//! Phase coverage and progress derivation.

use crate::floor_plan::domain::{Coords, FloorPlan, PointStatus, PointType};
use crate::timeline::{PhaseStatus, ProjectPhase, StatusCounts, phase_progress};
use eyre::{ensure, eyre};
use rstest::rstest;

fn plan_with(points: &[(PointType, PointStatus)]) -> eyre::Result<FloorPlan> {
    let mut plan = FloorPlan::new();
    for (point_type, status) in points {
        let id = plan.add_point(*point_type, Coords::new(10.0, 10.0)).id();
        plan.set_status(id, *status)?;
    }
    Ok(plan)
}

#[rstest]
fn default_phases_cover_expected_types() {
    let phases = ProjectPhase::defaults();

    assert_eq!(phases.len(), 5);
    let coverage: Vec<bool> = phases.iter().map(|phase| phase.covers(PointType::Rack)).collect();
    assert_eq!(coverage, vec![false, true, false, false, true]);
}

#[rstest]
fn empty_phase_is_pending_at_zero_percent() {
    let progress = ProjectPhase::new("Racks", vec![PointType::Rack]).progress(&[]);

    assert_eq!(progress.total, 0);
    assert_eq!(progress.status, PhaseStatus::Pending);
    assert_eq!(progress.percent_complete.to_bits(), 0.0_f64.to_bits());
}

#[rstest]
fn phase_counts_only_relevant_points() -> eyre::Result<()> {
    let plan = plan_with(&[
        (PointType::Cctv, PointStatus::Completed),
        (PointType::Cctv360, PointStatus::Pending),
        (PointType::Network, PointStatus::Completed),
    ])?;
    let phase = ProjectPhase::new("Cameras", vec![PointType::Cctv, PointType::Cctv360]);

    let progress = phase.progress(plan.points());

    ensure!(progress.total == 2);
    ensure!(progress.counts.completed == 1);
    ensure!(progress.counts.pending == 1);
    ensure!(progress.status == PhaseStatus::InProgress);
    ensure!((49.0..51.0).contains(&progress.percent_complete));
    Ok(())
}

#[rstest]
#[case(&[PointStatus::Completed, PointStatus::Completed], PhaseStatus::Completed)]
#[case(&[PointStatus::Completed, PointStatus::Alert], PhaseStatus::InProgress)]
#[case(&[PointStatus::InProgress, PointStatus::Pending], PhaseStatus::InProgress)]
#[case(&[PointStatus::Alert, PointStatus::Pending], PhaseStatus::Pending)]
fn phase_status_follows_point_statuses(
    #[case] statuses: &[PointStatus],
    #[case] expected: PhaseStatus,
) -> eyre::Result<()> {
    let points: Vec<(PointType, PointStatus)> = statuses
        .iter()
        .map(|status| (PointType::Network, *status))
        .collect();
    let plan = plan_with(&points)?;

    let progress = ProjectPhase::new("All", Vec::new()).progress(plan.points());

    ensure!(progress.status == expected);
    Ok(())
}

#[rstest]
fn final_phase_covers_every_point() -> eyre::Result<()> {
    let plan = plan_with(&[
        (PointType::Rack, PointStatus::Completed),
        (PointType::Phone, PointStatus::Completed),
    ])?;

    let progress = phase_progress(&ProjectPhase::defaults(), plan.points());
    let last = progress.last().ok_or_else(|| eyre!("five phases"))?;

    ensure!(last.total == 2);
    ensure!(last.status == PhaseStatus::Completed);
    ensure!((99.0..=100.0).contains(&last.percent_complete));
    Ok(())
}

#[rstest]
fn tally_counts_each_status() -> eyre::Result<()> {
    let plan = plan_with(&[
        (PointType::Network, PointStatus::Pending),
        (PointType::Network, PointStatus::Alert),
        (PointType::Network, PointStatus::Alert),
        (PointType::Network, PointStatus::InProgress),
    ])?;

    let counts = StatusCounts::tally(plan.points());

    ensure!(
        counts
            == StatusCounts {
                pending: 1,
                in_progress: 1,
                completed: 0,
                alert: 2,
            }
    );
    ensure!(counts.total() == 4);
    Ok(())
}
