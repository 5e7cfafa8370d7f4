// crates/infra/src/report/html.rs
use std::fmt::Write as _;
use std::path::Path;

use usage_trends_domain::FileOccurrence;
use usage_trends_shared_kernel::{InfrastructureError, Result};

use crate::persistence::{FileReader, FileWriter};

/// Marker the template must contain; it gets replaced with the
/// generated per-category tables.
pub const TABLE_PLACEHOLDER: &str = "<!-- usage tables -->";

const FALLBACK_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Usage trends</title>
<style>
.categories { display: flex; flex-wrap: wrap; gap: 2em; }
.categories td.file { font-family: monospace; }
</style>
</head>
<body>
<h1>Usage trends</h1>
<img src="output_total.png" alt="Usage counts over the full history">
<!-- usage tables -->
</body>
</html>
"#;

/// One rendered table: category label plus its per-file rows, already
/// sorted.
pub struct CategoryTable {
    pub label: String,
    pub rows: Vec<FileOccurrence>,
}

pub fn load_template(path: Option<&Path>) -> Result<String> {
    let Some(path) = path else {
        return Ok(FALLBACK_TEMPLATE.to_string());
    };
    let template = FileReader::read_to_string(path).map_err(|e| {
        InfrastructureError::TemplateError { path: path.to_path_buf(), details: e.to_string() }
    })?;
    if !template.contains(TABLE_PLACEHOLDER) {
        return Err(InfrastructureError::TemplateError {
            path: path.to_path_buf(),
            details: format!("missing the {TABLE_PLACEHOLDER:?} placeholder"),
        }
        .into());
    }
    Ok(template)
}

pub fn render_index(template: &str, tables: &[CategoryTable], view_url: &str) -> String {
    let mut text = String::from("<div class=categories>");
    for table in tables {
        text.push_str(&build_table(table, view_url));
    }
    text.push_str("</div>");
    template.replace(TABLE_PLACEHOLDER, &text)
}

fn build_table(table: &CategoryTable, view_url: &str) -> String {
    let mut text = String::from("<div>");
    let _ = write!(text, "<h3>{}</h3>", table.label);
    text.push_str("<table><tr><th>File<th>Count");
    for row in &table.rows {
        let _ = write!(
            text,
            "<tr><td class=file><a href='{view_url}/{path}'>{path}</a><td>{count}\n",
            path = row.path,
            count = row.count,
        );
    }
    text.push_str("</table></div>");
    text
}

pub fn write_index(path: &Path, html: &str) -> Result<()> {
    FileWriter::atomic_write(path, html.as_bytes())
        .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
    Ok(())
}
