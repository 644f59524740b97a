use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::OutputFormat;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    /// Colors are used only when stdout is a terminal.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: std::io::stdout().is_terminal(),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.color {
                println!("{} {}", badge.icon(), badge.label.bold());
            } else {
                println!("{} {}", badge.icon(), badge.label);
            }
            println!();
        }

        print!("{}", result.content.create_view());

        if !result.suggestions.is_empty() {
            if self.color {
                println!("\n{}", "💡 Tips:".yellow().bold());
            } else {
                println!("\n💡 Tips:");
            }
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    if self.color {
                        print!(": {}", cmd.cyan());
                    } else {
                        print!(": {}", cmd);
                    }
                }
                println!();
            }
        }

        Ok(())
    }
}
