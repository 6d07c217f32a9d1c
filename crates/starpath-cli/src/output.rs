//! Output formatting utilities

use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => anyhow::bail!("Unknown output format: {} (expected table, json or csv)", other),
        }
    }
}

/// A row that can be laid out as a table or CSV line
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// Format rows based on format type
pub fn format_output<T: Serialize + Tabular>(rows: &[T], format: OutputFormat) -> anyhow::Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(rows)?,
        OutputFormat::Csv => format_csv(rows),
        OutputFormat::Table => format_table(rows),
    };
    Ok(text)
}

fn format_csv<T: Tabular>(rows: &[T]) -> String {
    let mut output = T::headers().join(",");
    for row in rows {
        output.push('\n');
        let cells: Vec<String> = row.cells().iter().map(|c| csv_escape(c)).collect();
        output.push_str(&cells.join(","));
    }
    output
}

fn format_table<T: Tabular>(rows: &[T]) -> String {
    let headers: Vec<String> = T::headers().iter().map(|h| h.to_string()).collect();
    let cells: Vec<Vec<String>> = rows.iter().map(|r| r.cells()).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut lines = vec![render_line(&headers, &widths), render_line(&rule, &widths)];
    lines.extend(cells.iter().map(|row| render_line(row, &widths)));
    lines.join("\n")
}

fn render_line(values: &[String], widths: &[usize]) -> String {
    values
        .iter()
        .zip(widths)
        .map(|(v, w)| format!("{:<width$}", v, width = *w))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Escape a string for CSV output with formula injection protection
fn csv_escape(s: &str) -> String {
    // Protect against CSV formula injection (OWASP); negative numbers are
    // left alone so numeric columns stay numeric
    let needs_formula_protection = s
        .chars()
        .next()
        .map(|c| matches!(c, '=' | '+' | '@' | '\t' | '\r'))
        .unwrap_or(false)
        || (s.starts_with('-') && s.parse::<f64>().is_err());

    let escaped = if needs_formula_protection {
        format!("'{}", s)
    } else {
        s.to_string()
    };

    if escaped.contains(',') || escaped.contains('"') || escaped.contains('\n') {
        format!("\"{}\"", escaped.replace('"', "\"\""))
    } else {
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        name: String,
        radius: f64,
    }

    impl Tabular for Row {
        fn headers() -> &'static [&'static str] {
            &["name", "radius"]
        }

        fn cells(&self) -> Vec<String> {
            vec![self.name.clone(), self.radius.to_string()]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Sirius".to_string(),
                radius: 1.71,
            },
            Row {
                name: "Alkaid, Eta".to_string(),
                radius: -2.0,
            },
        ]
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("table").unwrap(), OutputFormat::Table);
        assert!(OutputFormat::parse("yaml").is_err());
    }

    #[test]
    fn test_csv() {
        let text = format_output(&rows(), OutputFormat::Csv).unwrap();

        assert_eq!(text, "name,radius\nSirius,1.71\n\"Alkaid, Eta\",-2");
    }

    #[test]
    fn test_csv_formula_protection() {
        assert_eq!(csv_escape("=SUM(A1)"), "'=SUM(A1)");
        assert_eq!(csv_escape("-cmd"), "'-cmd");
        assert_eq!(csv_escape("-4.5"), "-4.5");
    }

    #[test]
    fn test_table_alignment() {
        let text = format_output(&rows(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "name         radius");
        assert_eq!(lines[1], "-----------  ------");
        assert_eq!(lines[2], "Sirius       1.71");
        assert_eq!(lines[3], "Alkaid, Eta  -2");
    }

    #[test]
    fn test_json() {
        let text = format_output(&rows(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value[0]["name"], "Sirius");
        assert_eq!(value[1]["radius"], -2.0);
    }
}
