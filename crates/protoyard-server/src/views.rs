//! HTML views. Every user-supplied string passes through `escape_html`; the
//! only raw markup is a project's own content fragment.

use chrono::{DateTime, NaiveDate, Utc};
use protoyard_catalog::{ProjectPage, ResolvedProject, StoredMetadata, escape_html};
use protoyard_types::{ProjectRecord, ProjectStatus};
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #23232d; }
main, .project-header, nav { max-width: 72rem; margin: 0 auto; padding: 1rem 2rem; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 0.5rem; border-bottom: 1px solid #e3e3e8; }
.badge { border-radius: 1rem; padding: 0.1rem 0.6rem; font-size: 0.8rem; }
.badge-info { background: #dbeafe; }
.badge-warning { background: #fef3c7; }
.badge-success { background: #dcfce7; }
.badge-neutral { background: #e5e7eb; }
.meta span + span::before { content: " \2022 "; }
.empty-state, .not-found { text-align: center; padding: 4rem 2rem; }
"#;

const NEW_PROJECT_COMMAND: &str = "protoyard project new";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

/// "Jan 15, 2025"
fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Authored dates are shown formatted when they parse, verbatim otherwise.
fn format_created(created: &str) -> String {
    match NaiveDate::parse_from_str(created, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => escape_html(created),
    }
}

/// Link to a project page. The id is percent-encoded as a single path
/// segment, then escaped for the attribute.
fn project_href(id: &str) -> String {
    escape_html(&format!("/projects/{}", urlencoding::encode(id)))
}

fn status_badge(status: ProjectStatus) -> String {
    format!(
        "<span class=\"badge badge-{}\">{}</span>",
        status.badge().as_str(),
        status.label()
    )
}

/// Gallery page: every indexed project, newest first.
pub fn gallery(records: &[ProjectRecord]) -> String {
    let mut body = String::from(
        "<main>\n<header>\n<h1>Prototypes</h1>\n\
         <p>Designer prototyping playground</p>\n</header>\n",
    );

    if records.is_empty() {
        let _ = write!(
            body,
            "<section class=\"empty-state\">\n<h2>No projects yet</h2>\n\
             <p>Create your first project to get started with prototyping. \
             Run the command below in your terminal.</p>\n<code>{}</code>\n</section>\n",
            NEW_PROJECT_COMMAND
        );
    } else {
        let _ = write!(
            body,
            "<section>\n<h2>All Projects ({})</h2>\n<table>\n<thead><tr>\
             <th>Title</th><th>Description</th><th>Creator</th><th>Status</th>\
             <th>Template</th><th>Created</th><th>Last Updated</th><th></th>\
             </tr></thead>\n<tbody>\n",
            records.len()
        );
        for record in records {
            let project = &record.metadata;
            let _ = writeln!(
                body,
                "<tr><td><strong>{}</strong></td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>{}</td><td>{}</td><td>{}</td><td><a href=\"{}\">View</a></td></tr>",
                escape_html(&project.title),
                escape_html(&project.description),
                escape_html(&project.creator),
                status_badge(project.status),
                project.template.as_str(),
                format_created(&project.created_date),
                format_timestamp(&record.last_updated),
                project_href(&project.id),
            );
        }
        body.push_str("</tbody>\n</table>\n</section>\n");
    }

    let _ = write!(
        body,
        "<footer><p>To create a new project, run <code>{}</code> in your terminal</p></footer>\n</main>",
        NEW_PROJECT_COMMAND
    );

    layout("Prototypes", &body)
}

fn project_header(project: &ResolvedProject) -> String {
    let metadata: &StoredMetadata = &project.metadata;
    let title = metadata.title().unwrap_or(&project.id);

    let status = match (metadata.status(), metadata.get_str("status")) {
        (Some(status), _) => status_badge(status),
        (None, Some(raw)) => escape_html(raw),
        (None, None) => String::new(),
    };

    let mut meta = String::new();
    if let Some(creator) = metadata.creator() {
        let _ = write!(meta, "<span>By {}</span>", escape_html(creator));
    }
    if !status.is_empty() {
        let _ = write!(meta, "<span>{}</span>", status);
    }
    if let Some(template) = metadata.get_str("template") {
        let _ = write!(meta, "<span>{} template</span>", escape_html(template));
    }

    let mut header = format!(
        "<header class=\"project-header\">\n<h1>{}</h1>\n<div class=\"meta\">{}</div>\n",
        escape_html(title),
        meta
    );
    if let Some(description) = metadata.description() {
        let _ = writeln!(header, "<p>{}</p>", escape_html(description));
    }
    header.push_str("</header>\n");
    header
}

fn placeholder(project: &ResolvedProject, degraded: Option<&str>) -> String {
    match degraded {
        Some(err) => format!(
            "<div class=\"empty-state\">\n<h2>Prototype failed to load</h2>\n<p>{}</p>\n</div>",
            escape_html(err)
        ),
        None => format!(
            "<div class=\"empty-state\">\n<h2>No page.html found</h2>\n\
             <p>This project doesn&#39;t have a page.html file yet.</p>\n\
             <p>Create a <code>page.html</code> file in <code>projects/{}/</code> to get started.</p>\n</div>",
            escape_html(&project.id)
        ),
    }
}

/// Project page for a resolved project; `None` for [`ProjectPage::NotFound`].
pub fn project(page: &ProjectPage) -> Option<String> {
    let (project, content) = match page {
        ProjectPage::NotFound => return None,
        ProjectPage::MetadataOnly { project, degraded } => {
            (project, placeholder(project, degraded.as_deref()))
        }
        ProjectPage::Rendered { project, content } => (project, content.html.clone()),
    };

    let body = format!(
        "<nav><a href=\"/\">&larr; Back to Projects</a></nav>\n{}<main class=\"content\">\n{}\n</main>",
        project_header(project),
        content
    );
    let title = project.metadata.title().unwrap_or(&project.id);
    Some(layout(title, &body))
}

pub fn not_found() -> String {
    layout(
        "Project Not Found",
        "<div class=\"not-found\">\n<h1>Project Not Found</h1>\n\
         <p>The project you&#39;re looking for doesn&#39;t exist or has been deleted.</p>\n\
         <a href=\"/\">&larr; Back to Projects</a>\n</div>",
    )
}

pub fn internal_error() -> String {
    layout(
        "Something went wrong",
        "<div class=\"not-found\">\n<h1>Something went wrong</h1>\n\
         <a href=\"/\">&larr; Back to Projects</a>\n</div>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_dates() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "Jan 5, 2025");
        assert_eq!(format_created("2025-03-14"), "Mar 14, 2025");
        assert_eq!(format_created("<soon>"), "&lt;soon&gt;");
    }

    #[test]
    fn test_project_links_encode_the_id() {
        assert_eq!(project_href("alpha-2"), "/projects/alpha-2");
        assert_eq!(project_href("q&a #1?"), "/projects/q%26a%20%231%3F");
    }

    #[test]
    fn test_status_badge_uses_label_and_color() {
        insta::assert_snapshot!(
            status_badge(ProjectStatus::Ready),
            @r#"<span class="badge badge-success">Ready for handoff</span>"#
        );
    }

    #[test]
    fn test_empty_gallery_prompts_for_first_project() {
        let html = gallery(&[]);
        assert!(html.contains("No projects yet"));
        assert!(html.contains("<code>protoyard project new</code>"));
        assert!(!html.contains("<table>"));
    }
}
