//! Plain aligned tables for `--format table`.

/// Narrowest a column may shrink to when fitting the terminal.
const MIN_COLUMN: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render rows under `headers`, two spaces between columns.
///
/// Widths are measured in characters. Cells wider than their column are cut
/// with `…`; columns shrink widest-first until the table fits `max_width`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| width_of(cell))
                .chain(std::iter::once(width_of(header)))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();
    shrink_to_fit(&mut widths, headers, options.max_width);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push("-".repeat(width_of(&header_line)));
    lines.insert(0, header_line);

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(column, width)| {
                let cell = truncate(row.get(column).map_or("-", String::as_str), *width);
                let padded = pad(&cell, *width, is_numeric(&cell));
                if options.color {
                    colorize(&cell, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line);
    }
    lines.join("\n")
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let gaps = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(column, width)| **width > width_of(headers[*column]).max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(column, _)| column);
        let Some(column) = widest else {
            break;
        };
        widths[column] -= 1;
    }
}

fn truncate(text: &str, width: usize) -> String {
    if width_of(text) <= width {
        return text.to_string();
    }
    let mut out = text.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{text:>width$}")
    } else {
        format!("{text:<width$}")
    }
}

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| ch.is_ascii_digit())
}

/// Color the `active` flag. Applied after padding so widths stay exact.
fn colorize(cell: &str, padded: String) -> String {
    let code = match cell {
        "true" => "32",
        "false" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}
