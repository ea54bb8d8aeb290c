//! Aligned plain-text tables for `--format table`.

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Which side of its column a cell sticks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A column header plus how its cells are laid out.
#[derive(Clone, Copy, Debug)]
pub struct Column<'a> {
    pub header: &'a str,
    pub align: Align,
    /// Whether the column may lose width to fit the terminal.
    pub shrink: bool,
}

impl<'a> Column<'a> {
    /// Left-aligned and shrinkable.
    #[must_use]
    pub const fn text(header: &'a str) -> Self {
        Self {
            header,
            align: Align::Left,
            shrink: true,
        }
    }

    /// Right-aligned and never truncated.
    #[must_use]
    pub const fn number(header: &'a str) -> Self {
        Self {
            header,
            align: Align::Right,
            shrink: false,
        }
    }
}

const MIN_WIDTH: usize = 6;
const GAP: &str = "  ";

/// Render rows under `columns`. Missing cells print as `-`.
#[must_use]
pub fn render_columns(
    columns: &[Column<'_>],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(column.header.len())
                .max(MIN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, columns, options.max_width);

    let header_line = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| {
            pad_cell(&truncate_text(column.header, *width), *width, column.align, None)
        })
        .collect::<Vec<_>>()
        .join(GAP);

    let divider = "-".repeat(header_line.chars().count());
    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);

    for row in rows {
        let line = columns
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(index, (column, width))| {
                let text = truncate_text(row.get(index).map_or("-", String::as_str), *width);
                let color = options.color.then(|| status_color(&text)).flatten();
                pad_cell(&text, *width, column.align, color)
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line);
    }

    lines.join("\n")
}

/// Render rows whose columns are only known by name.
///
/// A column is right-aligned when every present cell in it is a number.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let columns: Vec<Column<'_>> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let mut cells = rows
                .iter()
                .filter_map(|row| row.get(index))
                .filter(|cell| cell.as_str() != "-")
                .peekable();
            let numeric = cells.peek().is_some() && cells.all(|cell| looks_numeric(cell));
            if numeric {
                Column::number(header)
            } else {
                Column::text(header)
            }
        })
        .collect();

    render_columns(&columns, rows, options)
}

/// Take width from the widest shrinkable column until the row fits.
fn fit_widths(widths: &mut [usize], columns: &[Column<'_>], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let gaps = widths.len().saturating_sub(1) * GAP.len();
    let mut total = widths.iter().sum::<usize>() + gaps;

    while total > max_width {
        let widest = widths
            .iter()
            .zip(columns)
            .enumerate()
            .filter(|(_, (width, column))| {
                column.shrink && **width > column.header.len().max(MIN_WIDTH)
            })
            .max_by_key(|(_, (width, _))| **width)
            .map(|(index, _)| index);

        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let digits = value.trim().trim_start_matches(['-', '+']);
    !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

/// Pad to `width` visible characters, wrapping in an ANSI color if given.
fn pad_cell(value: &str, width: usize, align: Align, color: Option<&str>) -> String {
    let pad = " ".repeat(width.saturating_sub(value.chars().count()));
    let value = match color {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    };
    match align {
        Align::Left => format!("{value}{pad}"),
        Align::Right => format!("{pad}{value}"),
    }
}

fn status_color(value: &str) -> Option<&'static str> {
    match value {
        "open" | "live" | "true" => Some("32"),
        "draft" | "after_close" => Some("33"),
        "closed" | "archived" | "false" => Some("31"),
        _ => None,
    }
}
