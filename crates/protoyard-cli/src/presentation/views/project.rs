use std::fmt;

use crate::presentation::view_models::{
    ContentViewModel, ProjectCreatedViewModel, ProjectDetailViewModel, ProjectIdsViewModel,
    ProjectListViewModel,
};

// --------------------------------------------------------
// Project List View
// --------------------------------------------------------

pub struct ProjectListView<'a> {
    data: &'a ProjectListViewModel,
}

impl<'a> ProjectListView<'a> {
    pub fn new(data: &'a ProjectListViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ProjectListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.projects.is_empty() {
            return writeln!(f, "No projects in {}", self.data.index.display());
        }

        writeln!(
            f,
            "{:<24} {:<18} {:<10} {:<26} TITLE",
            "ID", "STATUS", "TEMPLATE", "LAST UPDATED"
        )?;
        writeln!(f, "{}", "-".repeat(100))?;

        for project in &self.data.projects {
            writeln!(
                f,
                "{:<24} {:<18} {:<10} {:<26} {}",
                project.id,
                project.status_label,
                project.template,
                project.last_updated,
                project.title
            )?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Project Ids View
// --------------------------------------------------------

pub struct ProjectIdsView<'a> {
    data: &'a ProjectIdsViewModel,
}

impl<'a> ProjectIdsView<'a> {
    pub fn new(data: &'a ProjectIdsViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ProjectIdsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for id in &self.data.ids {
            writeln!(f, "{}", id)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Project Detail View
// --------------------------------------------------------

pub struct ProjectDetailView<'a> {
    data: &'a ProjectDetailViewModel,
}

impl<'a> ProjectDetailView<'a> {
    pub fn new(data: &'a ProjectDetailViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ProjectDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        writeln!(f, "{}", data.title.as_deref().unwrap_or(&data.id))?;

        let mut meta = Vec::new();
        if let Some(creator) = &data.creator {
            meta.push(format!("By {}", creator));
        }
        if let Some(status) = &data.status_label {
            meta.push(status.clone());
        }
        if let Some(template) = &data.template {
            meta.push(format!("{} template", template));
        }
        if !meta.is_empty() {
            writeln!(f, "{}", meta.join(" • "))?;
        }
        if let Some(description) = &data.description {
            writeln!(f)?;
            writeln!(f, "{}", description)?;
        }

        writeln!(f)?;
        writeln!(f, "Directory: {}", data.dir.display())?;
        match &data.content {
            ContentViewModel::Rendered { source, bytes } => {
                writeln!(f, "Content:   {} ({} bytes)", source.display(), bytes)?
            }
            ContentViewModel::Missing => writeln!(f, "Content:   none yet")?,
            ContentViewModel::Failed { error } => writeln!(f, "Content:   failed to load ({})", error)?,
        }

        if !data.issues.is_empty() {
            writeln!(f)?;
            writeln!(f, "Excluded from the index:")?;
            for issue in &data.issues {
                writeln!(f, "  - {}", issue)?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Project Created View
// --------------------------------------------------------

pub struct ProjectCreatedView<'a> {
    data: &'a ProjectCreatedViewModel,
}

impl<'a> ProjectCreatedView<'a> {
    pub fn new(data: &'a ProjectCreatedViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ProjectCreatedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.dir.display())?;
        for file in &self.data.files {
            writeln!(f, "  {}", file)?;
        }
        writeln!(f)?;
        writeln!(f, "Gallery path: {}", self.data.url_path)
    }
}
