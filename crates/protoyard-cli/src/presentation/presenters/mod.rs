pub mod aggregate;
pub mod project;
pub mod system;

pub use aggregate::{present_aggregate, present_change_batch};
pub use project::{
    present_project_created, present_project_detail, present_project_ids, present_project_list,
};
pub use system::{present_guidance, present_serve};
