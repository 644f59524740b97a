pub mod config;
pub mod error;
pub mod path;

pub use config::{Config, ServerConfig};
pub use error::{Error, Result};
pub use path::{
    CONFIG_FILE, INDEX_FILE, METADATA_FILE, PAGE_FILE, README_FILE, discover_project_dirs,
    expand_tilde, is_hidden_name, is_safe_project_id, resolve_workspace_root,
};
