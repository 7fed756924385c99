use std::{borrow::Cow, fmt::Write};

const COLUMN_GAP: &str = "  ";
const RULE: char = '-';

/// Builds a plain-text table whose columns line up in a monospace terminal.
///
/// Hangul and other non-ASCII characters are counted as two columns wide.
#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().enumerate().take(col_count) {
                col_widths[i] = col_widths[i].max(display_width(cell));
            }
        }

        let mut out = String::with_capacity(256);
        self.write_line(&mut out, self.headers, &col_widths);
        let rule_width =
            col_widths.iter().sum::<usize>() + COLUMN_GAP.len() * (col_count.saturating_sub(1));
        out.extend(std::iter::repeat_n(RULE, rule_width));
        out.push('\n');
        for row in &self.rows {
            self.write_line(&mut out, row.as_ref(), &col_widths);
        }
        out
    }

    fn write_line(&self, out: &mut String, cells: &[Cow<'_, str>], col_widths: &[usize]) {
        let mut line = String::new();
        for (i, width) in col_widths.iter().enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            let cell = cells.get(i).map(AsRef::as_ref).unwrap_or("");
            let alignment = self.alignments.get(i).copied().unwrap_or_default();
            pad(&mut line, cell, *width, alignment);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

fn pad(out: &mut String, text: &str, width: usize, alignment: Alignment) {
    let fill = width.saturating_sub(display_width(text));
    let (left, right) = match alignment {
        Alignment::Left => (0, fill),
        Alignment::Center => (fill / 2, fill - fill / 2),
        Alignment::Right => (fill, 0),
    };
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', right));
}

/// Terminal column count, assuming every non-ASCII character is full width.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}
