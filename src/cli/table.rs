use super::output::current_preferences;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            min_width: 0,
            max_width: None,
            alignment,
        }
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Column metadata plus rows of pre-formatted cells.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub show_headers: bool,
    pub padding: usize,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            show_headers: true,
            padding: 1,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Widths from headers and rows, clamped by the column constraints.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                column.max_width.map_or(width, |max| width.min(max))
            })
            .collect()
    }

    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let rendered: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, widths[idx], column.alignment, self.padding)
            })
            .collect();
        rendered.join(" ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        if self.show_headers {
            let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
            lines.push(self.render_row(&header, &widths));
            lines.push(horizontal_rule(&widths, self.padding));
        }
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

/// Counts characters, skipping ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        width += 1;
    }
    width
}

fn truncate_text(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    // Truncated cells drop styling; the ellipsis marks the cut.
    let mut plain: String = strip_ansi(text).chars().take(width - 1).collect();
    plain.push('…');
    plain
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(visible_width(&fitted));
    let (left, right) = match alignment {
        Alignment::Left => (0, remaining),
        Alignment::Right => (remaining, 0),
        Alignment::Center => (remaining / 2, remaining - remaining / 2),
    };
    format!(
        "{pad}{}{fitted}{}{pad}",
        " ".repeat(left),
        " ".repeat(right),
        pad = " ".repeat(padding)
    )
}

pub fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let total: usize =
        widths.iter().map(|w| w + padding * 2).sum::<usize>() + widths.len().saturating_sub(1);
    let ch = if current_preferences().plain_mode { '-' } else { '─' };
    ch.to_string().repeat(total)
}
