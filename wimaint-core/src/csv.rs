//! Minimal CSV rendering for spreadsheet-friendly templates.

use std::borrow::Cow;

/// Byte order mark so spreadsheet applications detect UTF-8.
pub const UTF8_BOM: char = '\u{feff}';

/// A table rendered as comma-separated values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Build a table column by column.
    ///
    /// Shorter columns are padded with empty cells.
    pub fn from_columns<S: AsRef<str>>(columns: &[(&str, &[S])]) -> Self {
        let headers = columns.iter().map(|(name, _)| name.to_string()).collect();
        let height = columns.iter().map(|(_, cells)| cells.len()).max().unwrap_or(0);
        let rows = (0..height)
            .map(|i| {
                columns
                    .iter()
                    .map(|(_, cells)| cells.get(i).map(|c| c.as_ref().to_string()).unwrap_or_default())
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Render with a leading BOM and `\n` line endings.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push(UTF8_BOM);
        push_record(&mut out, &self.headers);
        for row in &self.rows {
            push_record(&mut out, row);
        }
        out
    }
}

fn push_record(out: &mut String, cells: &[String]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(cell));
    }
    out.push('\n');
}

/// Quote a field only when it contains a separator, quote or line break.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
