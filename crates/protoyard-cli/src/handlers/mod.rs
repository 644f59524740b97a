pub mod aggregate;
pub mod guidance;
pub mod project_ids;
pub mod project_list;
pub mod project_new;
pub mod project_show;
pub mod serve;
