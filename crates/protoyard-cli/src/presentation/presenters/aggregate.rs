use crate::args::hints::cmd;
use crate::presentation::view_models::{
    AcceptedProjectViewModel, AggregateViewModel, ChangeBatchViewModel, CommandResultViewModel,
    Guidance, RejectedProjectViewModel, StatusBadge,
};
use protoyard_catalog::AggregateReport;
use protoyard_types::format_timestamp;
use std::collections::BTreeSet;
use std::path::PathBuf;

pub fn present_aggregate(
    report: AggregateReport,
    projects_root: PathBuf,
    root_created: bool,
    directories_found: usize,
) -> CommandResultViewModel<AggregateViewModel> {
    let accepted: Vec<AcceptedProjectViewModel> = report
        .accepted
        .iter()
        .map(|record| AcceptedProjectViewModel {
            id: record.metadata.id.clone(),
            title: record.metadata.title.clone(),
            last_updated: format_timestamp(&record.last_updated),
        })
        .collect();

    let rejected: Vec<RejectedProjectViewModel> = report
        .rejected
        .iter()
        .map(|r| RejectedProjectViewModel {
            dir_name: r.dir_name.clone(),
            errors: r.reason.messages(),
        })
        .collect();

    let accepted_count = accepted.len();
    let rejected_count = rejected.len();

    let content = AggregateViewModel {
        projects_root,
        output: report.output,
        root_created,
        directories_found,
        accepted,
        rejected,
    };

    let badge = if rejected_count > 0 {
        StatusBadge::warning(format!(
            "Aggregated {} project(s); {} skipped with errors",
            accepted_count, rejected_count
        ))
    } else {
        StatusBadge::success(format!("Aggregated {} project(s)", accepted_count))
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);

    if accepted_count == 0 && rejected_count == 0 {
        result = result.with_suggestion(
            Guidance::new("Create your first project").with_command(cmd::PROJECT_NEW),
        );
    }
    if rejected_count > 0 {
        result = result.with_suggestion(Guidance::new(
            "Fix metadata.json in the skipped projects and aggregate again",
        ));
    }

    result
}

pub fn present_change_batch(changed: BTreeSet<String>) -> CommandResultViewModel<ChangeBatchViewModel> {
    CommandResultViewModel::new(ChangeBatchViewModel {
        changed: changed.into_iter().collect(),
    })
}
