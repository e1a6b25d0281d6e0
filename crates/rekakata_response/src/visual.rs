//! Visual specification table extraction.

use rekakata_core::{VisualField, VisualSpecs};
use strum::IntoEnumIterator;
use tracing::trace;

const MARKER: &str = "VISUAL";

/// Recover the visual specification table.
///
/// Rows of the form `| key | value |` inside a section opened by a line
/// containing `VISUAL` (any case) assign values to the five known keys.
/// Unknown keys, separator rows and rows with fewer than two cells are
/// ignored. The section closes at the next line containing `#` that does
/// not reopen it.
pub fn extract_visual_specs(text: &str) -> VisualSpecs {
    let mut specs = VisualSpecs::default();
    let mut in_section = false;

    for line in text.lines() {
        if line.to_uppercase().contains(MARKER) {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        if line.contains("---") {
            continue;
        }

        if line.contains('|') {
            let cells: Vec<&str> = line
                .split('|')
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .collect();
            if let [key, value, ..] = cells.as_slice() {
                if let Some(field) = lookup(key.trim_matches('*').trim()) {
                    let value = value.trim_matches('*').trim();
                    trace!(%field, value, "Visual specification row");
                    specs.set(field, value);
                }
            }
        }

        if line.contains('#') {
            in_section = false;
        }
    }

    specs
}

fn lookup(key: &str) -> Option<VisualField> {
    VisualField::iter().find(|field| field.to_string().eq_ignore_ascii_case(key))
}
