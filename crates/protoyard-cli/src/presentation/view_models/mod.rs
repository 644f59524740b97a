pub mod aggregate;
pub mod common;
pub mod project;
pub mod result;
pub mod system;

pub use aggregate::{
    AcceptedProjectViewModel, AggregateViewModel, ChangeBatchViewModel, RejectedProjectViewModel,
};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use project::{
    ContentViewModel, ProjectCreatedViewModel, ProjectDetailViewModel, ProjectEntryViewModel,
    ProjectIdsViewModel, ProjectListViewModel,
};
pub use result::CommandResultViewModel;
pub use system::{GuidanceViewModel, ServeViewModel};

use std::fmt;

/// Bridge from a view model to the text view that lays it out.
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
