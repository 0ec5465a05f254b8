//! Format forests, listings, and selections as text.

use crate::archive::SkippedEntry;
use crate::tree::{FlatIndex, Forest, Node, SkippedRecord};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Message shown when a route selects nothing
pub const NOTHING_SELECTED: &str = "Nothing selected.";

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Render the forest as an indented tree. Directories end with `/`.
pub fn render_tree_text(forest: &Forest) -> String {
    fn walk(nodes: &[Node], prefix: &str, out: &mut String) {
        for (i, node) in nodes.iter().enumerate() {
            let last = i + 1 == nodes.len();
            let connector = if last { "└── " } else { "├── " };
            out.push_str(prefix);
            out.push_str(connector);
            out.push_str(node.name());
            if node.is_directory() {
                out.push('/');
            }
            out.push('\n');
            if let Some(children) = node.children() {
                let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
                walk(children, &child_prefix, out);
            }
        }
    }

    if forest.is_empty() {
        return "No records loaded.\n".to_string();
    }
    let mut out = String::new();
    walk(forest.roots(), "", &mut out);
    out
}

/// One row of the path listing
#[derive(Debug, Clone, Serialize)]
pub struct PathRow {
    pub path: String,
    pub is_dir: bool,
    /// Content length for files, child count for directories
    pub size: usize,
}

/// Listing rows in index order
pub fn path_rows(index: &FlatIndex<'_>) -> Vec<PathRow> {
    index
        .entries()
        .map(|(path, node)| PathRow {
            path: path.to_string(),
            is_dir: node.is_directory(),
            size: match node {
                Node::File(f) => f.content.len(),
                Node::Directory(d) => d.children.len(),
            },
        })
        .collect()
}

/// Format the path listing as a table.
pub fn format_path_listing_text(rows: &[PathRow]) -> String {
    if rows.is_empty() {
        return "No records loaded.\n".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Kind", "Size"]);
    for row in rows {
        let (kind, size) = if row.is_dir {
            ("dir", format!("{} entries", row.size))
        } else {
            ("file", format!("{} bytes", row.size))
        };
        table.add_row(vec![row.path.clone(), kind.to_string(), size]);
    }
    format!("{}\n\nTotal: {} paths.\n", table, rows.len())
}

/// Format the node selected by a route; None prints the neutral empty state.
pub fn format_selection_text(full_path: &str, node: Option<&Node>) -> String {
    match node {
        None => format!("{}\n", NOTHING_SELECTED),
        Some(Node::File(f)) => {
            let mut out = f.content.clone();
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out
        }
        Some(Node::Directory(d)) => {
            let mut out = format!("{}\n\n", format_section_heading(full_path));
            for child in &d.children {
                out.push_str("  ");
                out.push_str(child.name());
                if child.is_directory() {
                    out.push('/');
                }
                out.push('\n');
            }
            out
        }
    }
}

/// Import command summary
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub archive: String,
    pub snapshot: String,
    pub records: usize,
    pub nodes: usize,
    pub skipped_entries: Vec<SkippedEntry>,
    pub skipped_records: Vec<SkippedRecord>,
}

/// Format the import summary as human-readable text.
pub fn format_import_summary_text(summary: &ImportSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Import")));
    out.push_str(&format!("  Archive: {}\n", summary.archive));
    out.push_str(&format!("  Snapshot: {}\n", summary.snapshot));
    out.push_str(&format!("  Records: {}\n", summary.records));
    out.push_str(&format!("  Nodes: {}\n", summary.nodes));

    if !summary.skipped_entries.is_empty() || !summary.skipped_records.is_empty() {
        out.push_str(&format!("\n{}\n\n", format_section_heading("Skipped")));
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Path", "Reason"]);
        for entry in &summary.skipped_entries {
            table.add_row(vec![entry.name.clone(), entry.reason.to_string()]);
        }
        for record in &summary.skipped_records {
            table.add_row(vec![record.path.clone(), record.reason.to_string()]);
        }
        out.push_str(&format!("{}\n", table));
    }
    out
}
