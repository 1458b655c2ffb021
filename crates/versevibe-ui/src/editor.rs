//! Manuscript text buffer with a grapheme cursor

use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Editable text plus cursor.
///
/// The cursor is a byte offset that always sits on a grapheme cluster
/// boundary, so editing never splits a user-perceived character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorBuffer {
    text: String,
    cursor: usize,
}

/// Screen rows of the buffer and where the cursor lands among them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLayout {
    /// Byte range of each row within the buffer text
    pub rows: Vec<Range<usize>>,
    /// Row and display column of the cursor
    pub cursor: (usize, usize),
}

impl EditorBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a byte offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole text, cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        // A combining mark or joiner merges with its neighbours.
        self.cursor = self.boundary_at_or_after(self.cursor + c.len_utf8());
    }

    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.prev_boundary() else {
            return false;
        };
        self.text.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        let Some(next) = self.next_boundary() else {
            return false;
        };
        self.text.replace_range(self.cursor..next, "");
        true
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = self.line_start();
    }

    pub fn move_end(&mut self) {
        self.cursor += self.text[self.cursor..]
            .find('\n')
            .unwrap_or(self.text.len() - self.cursor);
    }

    /// Zero-based line and column of the cursor, the column in graphemes
    pub fn line_and_column(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let column = before[self.line_start()..].graphemes(true).count();
        (line, column)
    }

    /// Lay the text out in rows. With a width, lines are word-wrapped to it;
    /// without one, each line is a single row.
    pub fn layout(&self, width: Option<usize>) -> EditorLayout {
        let mut rows = Vec::new();
        let mut cursor = (0, 0);
        let mut line_start = 0;

        for line in self.text.split('\n') {
            let first_row = rows.len();
            match width {
                Some(width) => wrap_line(line, line_start, width.max(1), &mut rows),
                None => rows.push(line_start..line_start + line.len()),
            }

            let line_end = line_start + line.len();
            if (line_start..=line_end).contains(&self.cursor) {
                // On a wrap point the cursor belongs to the row that starts there
                let row = (first_row..rows.len())
                    .rev()
                    .find(|row| rows[*row].start <= self.cursor)
                    .unwrap_or(first_row);
                cursor = (row, self.text[rows[row].start..self.cursor].width());
            }
            line_start = line_end + 1;
        }

        EditorLayout { rows, cursor }
    }

    fn line_start(&self) -> usize {
        self.text[..self.cursor].rfind('\n').map_or(0, |i| i + 1)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .graphemes(true)
            .next()
            .map(|grapheme| self.cursor + grapheme.len())
    }

    fn boundary_at_or_after(&self, at: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .map(|(i, _)| i)
            .find(|i| *i >= at)
            .unwrap_or(self.text.len())
    }
}

/// Greedy word wrap of one line. Rows break after whitespace when possible
/// and inside a word only when the word alone is wider than the row.
fn wrap_line(line: &str, offset: usize, width: usize, rows: &mut Vec<Range<usize>>) {
    let mut start = 0;
    let mut used = 0;
    let mut last_break = None;

    for (i, grapheme) in line.grapheme_indices(true) {
        let w = grapheme.width();
        if used + w > width && used > 0 {
            let cut = last_break.unwrap_or(i);
            rows.push(offset + start..offset + cut);
            start = cut;
            used = line[start..i].width();
            last_break = None;

            if used + w > width && used > 0 {
                rows.push(offset + start..offset + i);
                start = i;
                used = 0;
            }
        }

        used += w;
        if grapheme.chars().all(char::is_whitespace) {
            last_break = Some(i + grapheme.len());
        }
    }

    rows.push(offset + start..offset + line.len());
}
