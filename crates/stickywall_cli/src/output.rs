//! Wall printers for the CLI.

use clap::ValueEnum;
use stickywall_core::{MemoryDom, WallController};

/// Output format for printed walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per card.
    Text,
    /// Wall container markup.
    Html,
    /// Board state as JSON.
    Json,
}

/// Prints the wall in `format`, always ending with a newline.
pub fn render_wall(
    controller: &WallController<MemoryDom>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut out = match format {
        OutputFormat::Text => render_text(controller),
        OutputFormat::Html => controller.host().wall_html(),
        OutputFormat::Json => serde_json::to_string_pretty(&controller.store().snapshot())?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

fn render_text(controller: &WallController<MemoryDom>) -> String {
    let store = controller.store();
    if store.is_empty() {
        return "(empty wall)".to_string();
    }

    let editing = store.editing_id();
    let mut lines = Vec::with_capacity(store.len());
    for note in store.iter() {
        let marker = if editing == Some(note.id) {
            " (editing)"
        } else {
            ""
        };
        let mut body = note.text.lines();
        let first = body.next().unwrap_or_default();
        lines.push(format!("[{}]{} {}", note.id, marker, first));
        for rest in body {
            lines.push(format!("    {rest}"));
        }
    }
    lines.join("\n")
}
