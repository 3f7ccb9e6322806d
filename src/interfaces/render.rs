use crate::application::use_cases::highlight::HighlightRule;
use crate::domain::table::{HighlightCategory, JoinedRow};

/// Absent employment and percentage cells render as an em-dash, never "0.00%".
pub const PLACEHOLDER: &str = "—";

/// The recognized cell shadings. Colors match the page the table replaces:
/// light green #abffbd for high rows, light red #ff9e9e for low rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowShade {
    Green,
    Red,
    Plain,
}

impl RowShade {
    fn from_category(category: HighlightCategory) -> Self {
        match category {
            HighlightCategory::High => RowShade::Green,
            HighlightCategory::Low => RowShade::Red,
            HighlightCategory::Neutral => RowShade::Plain,
        }
    }

    fn ansi_prefix(self) -> &'static str {
        match self {
            RowShade::Green => "\x1b[48;2;171;255;189;30m",
            RowShade::Red => "\x1b[48;2;255;158;158;30m",
            RowShade::Plain => "",
        }
    }
}

const ANSI_RESET: &str = "\x1b[0m";

/// fi-FI style integer grouping: thousands separated by a no-break space.
pub fn format_count(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Two decimals with a trailing percent sign, e.g. `46.00%`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Renders the joined rows as an aligned text table, one line per row, with
/// the row background keyed by the highlight rule when `color` is on.
pub fn render_table(rows: &[JoinedRow], rule: &HighlightRule, color: bool) -> String {
    let header = ["Region", "Population", "Employed", "Employed %"];

    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                format_count(row.population),
                row.employment.map(format_count).unwrap_or_else(|| PLACEHOLDER.to_string()),
                row.percentage
                    .map(format_percentage)
                    .unwrap_or_else(|| PLACEHOLDER.to_string()),
            ]
        })
        .collect();

    let mut widths: [usize; 4] = header.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_line(&header.map(String::from), &widths));
    out.push('\n');

    for (row, cell_row) in rows.iter().zip(&cells) {
        let shade = RowShade::from_category(rule.classify(row.percentage));
        let line = format_line(cell_row, &widths);
        if color && shade != RowShade::Plain {
            out.push_str(shade.ansi_prefix());
            out.push_str(&line);
            out.push_str(ANSI_RESET);
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }
    out
}

fn format_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let pad = |cell: &str, width: usize, left: bool| {
        let fill = width.saturating_sub(cell.chars().count());
        if left {
            format!("{}{}", cell, " ".repeat(fill))
        } else {
            format!("{}{}", " ".repeat(fill), cell)
        }
    };
    format!(
        "{}  {}  {}  {}",
        pad(&cells[0], widths[0], true),
        pad(&cells[1], widths[1], false),
        pad(&cells[2], widths[2], false),
        pad(&cells[3], widths[3], false),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, population: f64, employment: Option<f64>, percentage: Option<f64>) -> JoinedRow {
        JoinedRow {
            code: name.to_string(),
            name: name.to_string(),
            population,
            employment,
            percentage,
        }
    }

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(950.0), "950");
        assert_eq!(format_count(16500.0), "16\u{a0}500");
        assert_eq!(format_count(1234567.0), "1\u{a0}234\u{a0}567");
    }

    #[test]
    fn test_format_percentage_two_decimals() {
        assert_eq!(format_percentage(46.0), "46.00%");
        assert_eq!(format_percentage(24.9999), "25.00%");
    }

    #[test]
    fn test_absent_cells_render_placeholder() {
        let rows = vec![row("Beta", 500.0, None, None)];
        let table = render_table(&rows, &HighlightRule::default(), false);
        let data_line = table.lines().nth(1).unwrap();
        assert_eq!(data_line.matches(PLACEHOLDER).count(), 2);
    }

    #[test]
    fn test_high_row_shaded_when_color_on() {
        let rows = vec![
            row("Alpha", 1000.0, Some(460.0), Some(46.0)),
            row("Beta", 500.0, None, None),
        ];
        let table = render_table(&rows, &HighlightRule::default(), true);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[1].contains("\x1b[48;2;171;255;189"));
        assert!(!lines[2].contains("\x1b["));
    }

    #[test]
    fn test_low_row_shaded_red() {
        let rows = vec![row("Gamma", 1000.0, Some(200.0), Some(20.0))];
        let table = render_table(&rows, &HighlightRule::default(), true);
        assert!(table.lines().nth(1).unwrap().contains("\x1b[48;2;255;158;158"));
    }

    #[test]
    fn test_no_escapes_when_color_off() {
        let rows = vec![row("Alpha", 1000.0, Some(460.0), Some(46.0))];
        let table = render_table(&rows, &HighlightRule::default(), false);
        assert!(!table.contains('\x1b'));
    }

    #[test]
    fn test_header_and_row_count() {
        let rows = vec![
            row("Alpha", 1000.0, Some(460.0), Some(46.0)),
            row("Beta", 500.0, None, None),
        ];
        let table = render_table(&rows, &HighlightRule::default(), false);
        assert_eq!(table.lines().count(), 3);
        assert!(table.starts_with("Region"));
    }
}
