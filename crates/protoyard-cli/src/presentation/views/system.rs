use std::fmt;

use crate::args::hints::cmd;
use crate::presentation::view_models::{GuidanceViewModel, ServeViewModel};

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for GuidanceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "protoyard - prototype project catalog\n")?;
        writeln!(f, "Projects root: {}", self.data.projects_root.display())?;

        if !self.data.projects_root_exists {
            writeln!(f, "\nGet started:")?;
            writeln!(f, "  {}", cmd::PROJECT_NEW)?;
        } else if !self.data.index_exists {
            writeln!(f, "\nNo index yet. Build it with:")?;
            writeln!(f, "  {}", cmd::AGGREGATE)?;
        } else {
            writeln!(f, "Indexed projects: {}", self.data.indexed_projects)?;
            writeln!(f, "\nQuick commands:")?;
            writeln!(f, "  {:<34} # List indexed projects", cmd::PROJECT_LIST)?;
            writeln!(f, "  {:<34} # Rebuild the index on change", cmd::AGGREGATE_WATCH)?;
            writeln!(f, "  {:<34} # Browse the gallery", cmd::SERVE)?;
        }

        writeln!(f, "\nFor more commands:")?;
        writeln!(f, "  protoyard --help")
    }
}

pub struct ServeView<'a> {
    data: &'a ServeViewModel,
}

impl<'a> ServeView<'a> {
    pub fn new(data: &'a ServeViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ServeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Projects root: {}", self.data.projects_root.display())?;
        writeln!(f, "Press Ctrl-C to stop")
    }
}
