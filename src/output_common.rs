//! Shared output formatting utilities for all response types.

use crate::catalog::MenuCatalog;
use crate::error::MenuError;
use crate::output::{json_response, MenuResponse, OutputFormat};
use serde::Serialize;

/// Render any serializable response inside the JSON envelope
pub fn render_json_response<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<String, MenuError> {
    let payload = json_response(data);
    let rendered = if matches!(format, OutputFormat::Pretty) {
        serde_json::to_string_pretty(&payload)
    } else {
        serde_json::to_string(&payload)
    }?;
    Ok(rendered)
}

/// Format the "total: N" header for human-readable output
pub fn format_total_header(total: u64) -> String {
    format!("total: {}", total)
}

/// Check if format is JSON (either Json or Pretty)
pub fn is_json_format(format: OutputFormat) -> bool {
    matches!(format, OutputFormat::Json | OutputFormat::Pretty)
}

/// Render the whole catalog in the requested format.
pub fn render_menu(catalog: &MenuCatalog, format: OutputFormat) -> Result<String, MenuError> {
    if is_json_format(format) {
        return render_json_response(&MenuResponse::from_catalog(catalog), format);
    }
    Ok(format!(
        "{}\n{}",
        format_total_header(catalog.len() as u64),
        catalog.render()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_menu_has_total_header() {
        let rendered = render_menu(&MenuCatalog::house_menu(), OutputFormat::Human).unwrap();
        assert!(rendered.starts_with("total: 1\nCoffee\n----------\n"));
    }

    #[test]
    fn empty_human_menu_is_just_the_header() {
        let rendered = render_menu(&MenuCatalog::new(), OutputFormat::Human).unwrap();
        assert_eq!(rendered, "total: 0\n");
    }

    #[test]
    fn json_menu_is_wrapped_in_envelope() {
        let rendered = render_menu(&MenuCatalog::house_menu(), OutputFormat::Json).unwrap();
        assert!(!rendered.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["tool"], "coffeeshop");
        assert_eq!(value["schema_version"], "1.0.0");
        assert_eq!(value["data"]["total_count"], 1);
        assert_eq!(value["data"]["items"][0]["name"], "Coffee");
    }

    #[test]
    fn pretty_menu_spans_lines() {
        let rendered = render_menu(&MenuCatalog::new(), OutputFormat::Pretty).unwrap();
        assert!(rendered.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["data"]["total_count"], 0);
    }
}
