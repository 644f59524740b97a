//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                   (Converter)        (Data)          (Driver)   ==(Text)==> [ View ] --> stdout
//! ```
//!
//! - `view_models/`: serializable data, no formatting. JSON output is an API.
//! - `presenters/`: domain results to view models; decides badges and tips.
//! - `views/`: `fmt::Display` layouts for the text output.
//! - `renderers/`: picks JSON or text and prints.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<crate::args::OutputFormat> for OutputFormat {
    fn from(format: crate::args::OutputFormat) -> Self {
        match format {
            crate::args::OutputFormat::Plain => Self::Text,
            crate::args::OutputFormat::Json => Self::Json,
        }
    }
}
