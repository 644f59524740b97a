use crate::Result;
use notify::{Event, PollWatcher, RecursiveMode, Watcher};
use protoyard_core::is_hidden_name;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError, channel};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(500);
const QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Watches the projects root and reports which projects changed.
///
/// Changes under hidden entries (the aggregated index, its temp files,
/// dotfiles) are ignored so that writing the index does not retrigger
/// aggregation.
pub struct ProjectsWatcher {
    _watcher: PollWatcher,
    rx: Receiver<Event>,
    projects_root: PathBuf,
}

impl ProjectsWatcher {
    pub fn new(projects_root: &Path) -> Result<Self> {
        let (tx, rx) = channel();
        let config = notify::Config::default().with_poll_interval(POLL_INTERVAL);

        let mut watcher = PollWatcher::new(
            move |res: notify::Result<Event>| {
                if let Ok(event) = res {
                    let _ = tx.send(event);
                }
            },
            config,
        )?;
        watcher.watch(projects_root, RecursiveMode::Recursive)?;

        Ok(Self {
            _watcher: watcher,
            rx,
            projects_root: projects_root.to_path_buf(),
        })
    }

    /// Block until at least one project changes, then wait for the burst to
    /// settle. Returns the changed project names, or `None` once the watcher
    /// has shut down.
    pub fn next_change(&self) -> Option<BTreeSet<String>> {
        let mut changed = BTreeSet::new();

        while changed.is_empty() {
            let event = self.rx.recv().ok()?;
            self.collect(&event, &mut changed);
        }

        loop {
            match self.rx.recv_timeout(QUIET_PERIOD) {
                Ok(event) => self.collect(&event, &mut changed),
                Err(RecvTimeoutError::Timeout) => return Some(changed),
                Err(RecvTimeoutError::Disconnected) => return Some(changed),
            }
        }
    }

    fn collect(&self, event: &Event, changed: &mut BTreeSet<String>) {
        for path in &event.paths {
            if let Some(name) = project_of(&self.projects_root, path) {
                changed.insert(name);
            }
        }
    }
}

/// Project directory name that `path` lives under, if it is a visible one.
fn project_of(projects_root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(projects_root).ok()?;
    let first = match relative.components().next()? {
        Component::Normal(name) => name.to_str()?,
        _ => return None,
    };

    if is_hidden_name(first) {
        None
    } else {
        Some(first.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_writes_are_ignored() {
        let root = Path::new("/yard/projects");
        assert_eq!(
            project_of(root, Path::new("/yard/projects/.projects-metadata.json")),
            None
        );
        assert_eq!(project_of(root, Path::new("/yard/projects/.tmpA1b2C3")), None);
    }

    #[test]
    fn test_nested_changes_map_to_their_project() {
        let root = Path::new("/yard/projects");
        assert_eq!(
            project_of(root, Path::new("/yard/projects/alpha/metadata.json")),
            Some("alpha".to_string())
        );
        assert_eq!(
            project_of(root, Path::new("/yard/projects/beta/components/nav.html")),
            Some("beta".to_string())
        );
        assert_eq!(project_of(root, Path::new("/elsewhere/alpha")), None);
        assert_eq!(project_of(root, root), None);
    }
}
