use crate::resolver::ResolvedProject;
use protoyard_core::PAGE_FILE;
use std::io::ErrorKind;
use std::path::PathBuf;

/// A loaded content module, ready to be mounted into a project page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderable {
    pub source: PathBuf,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLookup {
    Found(Renderable),
    NotFound,
    LoadFailed(String),
}

/// Capability lookup: "is there a renderable unit for this project?"
pub trait ContentSource: Send + Sync {
    fn lookup(&self, project: &ResolvedProject) -> ContentLookup;
}

/// Loads `page.html` from the project directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsContentSource;

impl ContentSource for FsContentSource {
    fn lookup(&self, project: &ResolvedProject) -> ContentLookup {
        let source = project.dir.join(PAGE_FILE);

        let bytes = match std::fs::read(&source) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return ContentLookup::NotFound,
            Err(err) => return ContentLookup::LoadFailed(err.to_string()),
        };

        match String::from_utf8(bytes) {
            Ok(html) => ContentLookup::Found(Renderable { source, html }),
            Err(err) => ContentLookup::LoadFailed(format!("{} is not valid UTF-8: {}", PAGE_FILE, err)),
        }
    }
}
