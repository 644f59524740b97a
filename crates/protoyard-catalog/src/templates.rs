use protoyard_types::ProjectTemplate;

const BLANK_PAGE: &str = r#"<section class="prototype prototype-blank">
  <h2>{{title}}</h2>
  <p>Start building your prototype here.</p>
</section>
"#;

const DASHBOARD_PAGE: &str = r##"<div class="prototype prototype-dashboard">
  <nav class="dashboard-nav">
    <ul>
      <li><a href="#overview" aria-current="page">Overview</a></li>
      <li><a href="#sites">Sites</a></li>
      <li><a href="#team">Team</a></li>
      <li><a href="#settings">Settings</a></li>
    </ul>
  </nav>
  <main class="dashboard-content">
    <h2>{{title}}</h2>
    <p>Content area: replace this with your mockup.</p>
  </main>
</div>
"##;

const README: &str = r#"# {{title}}

{{description}}

- Creator: {{creator}}
- Template: {{template}}
- Created: {{createdDate}}

Edit `page.html` in this directory to build the prototype. Run
`protoyard aggregate` after changing `metadata.json` so the gallery picks
up the change.
"#;

/// Minimal `{{key}}` substitution in a single pass over the template.
/// Values are inserted as given and never rescanned, so a value that
/// itself contains `{{key}}` stays literal. Unknown keys are left alone.
pub(crate) fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn page_template(template: ProjectTemplate) -> &'static str {
    match template {
        ProjectTemplate::Blank => BLANK_PAGE,
        ProjectTemplate::Dashboard => DASHBOARD_PAGE,
    }
}

pub(crate) fn readme_template() -> &'static str {
    README
}
