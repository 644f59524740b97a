pub mod aggregate;
pub mod project;
pub mod system;
