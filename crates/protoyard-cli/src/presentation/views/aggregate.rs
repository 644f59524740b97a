use std::fmt;

use crate::presentation::view_models::{AggregateViewModel, ChangeBatchViewModel};

pub struct AggregateView<'a> {
    data: &'a AggregateViewModel,
}

impl<'a> AggregateView<'a> {
    pub fn new(data: &'a AggregateViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for AggregateView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.root_created {
            writeln!(f, "Created {}", self.data.projects_root.display())?;
        }
        writeln!(
            f,
            "Found {} project director{}",
            self.data.directories_found,
            if self.data.directories_found == 1 { "y" } else { "ies" }
        )?;

        for project in &self.data.accepted {
            writeln!(f, "  ✓ {:<24} {}", project.id, project.last_updated)?;
        }

        for project in &self.data.rejected {
            writeln!(f, "  ✗ {}", project.dir_name)?;
            for error in &project.errors {
                writeln!(f, "      - {}", error)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Index: {}", self.data.output.display())
    }
}

pub struct ChangeBatchView<'a> {
    data: &'a ChangeBatchViewModel,
}

impl<'a> ChangeBatchView<'a> {
    pub fn new(data: &'a ChangeBatchViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ChangeBatchView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Changed: {}", self.data.changed.join(", "))
    }
}
