use crate::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Per-project authored metadata.
pub const METADATA_FILE: &str = "metadata.json";

/// Aggregated index, written into the projects root. Its leading dot keeps
/// it out of project discovery.
pub const INDEX_FILE: &str = ".projects-metadata.json";

/// Optional renderable content of a project.
pub const PAGE_FILE: &str = "page.html";

pub const README_FILE: &str = "README.md";

/// Optional workspace configuration, looked up in the workspace root.
pub const CONFIG_FILE: &str = "protoyard.toml";

/// Resolve the workspace root based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PROTOYARD_ROOT environment variable (with tilde expansion)
/// 3. Current working directory
pub fn resolve_workspace_root(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("PROTOYARD_ROOT")
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    std::env::current_dir().map_err(|err| {
        Error::Config(format!(
            "Could not determine workspace root: current directory unavailable ({})",
            err
        ))
    })
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Names starting with `.` are reserved: dotfiles and the index itself.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// True when `id` is a single, non-hidden path component.
pub fn is_safe_project_id(id: &str) -> bool {
    !id.is_empty() && !is_hidden_name(id) && !id.contains(['/', '\\']) && id != ".."
}

/// Immediate, non-hidden subdirectories of `projects_root`, sorted by name.
///
/// Symlinks are not followed and never count as projects. Entries whose
/// names are not valid UTF-8 are skipped since they cannot be addressed as
/// project ids. Only a failure to read the root itself is an error; an
/// entry that cannot be inspected is skipped with a warning.
pub fn discover_project_dirs(projects_root: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(projects_root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() > 0 => {
                tracing::warn!(error = %err, "skipping unreadable projects root entry");
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if is_hidden_name(name) {
            continue;
        }

        dirs.push((name.to_string(), entry.into_path()));
    }

    Ok(dirs)
}
