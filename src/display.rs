//! # Display Port
//!
//! The Apple I terminal section is driven through the [`DisplayPort`] trait:
//! the PIA only knows how to emit a glyph, move to the next line, erase the
//! previous cell, and ask where the cursor is. [`TextScreen`] is an in-memory
//! character grid implementing it, used by the WebAssembly frontend and by
//! tests.

/// Host-side display callbacks invoked by display-data register writes.
pub trait DisplayPort {
    /// Draws `glyph` at the cursor and advances the cursor one column.
    fn emit_glyph(&mut self, glyph: char);

    /// Moves the cursor to column 0 of the next row, scrolling if needed.
    fn advance_line(&mut self);

    /// Blanks the cell left of the cursor and moves the cursor onto it.
    fn erase_previous_column(&mut self);

    fn cursor_column(&self) -> u16;

    fn window_columns(&self) -> u16;
}

/// Default screen width of the Apple I terminal.
pub const DEFAULT_COLUMNS: u16 = 40;

/// Default screen height of the Apple I terminal.
pub const DEFAULT_ROWS: u16 = 24;

/// A fixed-size character grid with a cursor.
///
/// # Examples
///
/// ```
/// use apple1::{DisplayPort, TextScreen};
///
/// let mut screen = TextScreen::new();
/// screen.emit_glyph('H');
/// screen.emit_glyph('I');
/// assert_eq!(screen.line(0), "HI");
/// assert_eq!(screen.cursor_column(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TextScreen {
    columns: u16,
    rows: u16,
    cells: Vec<char>,
    cursor_column: u16,
    cursor_row: u16,
}

impl TextScreen {
    /// Creates a 40x24 screen.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }

    /// Creates a screen with the given geometry. Zero dimensions are raised to 1.
    pub fn with_size(columns: u16, rows: u16) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        Self {
            columns,
            rows,
            cells: vec![' '; columns as usize * rows as usize],
            cursor_column: 0,
            cursor_row: 0,
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cursor_row(&self) -> u16 {
        self.cursor_row
    }

    /// Blanks the whole grid and homes the cursor.
    pub fn clear(&mut self) {
        self.cells.fill(' ');
        self.cursor_column = 0;
        self.cursor_row = 0;
    }

    /// Writes host text (e.g. a banner). `\n` starts a new line; other
    /// characters are drawn as-is and wrap at the right edge.
    pub fn write_str(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.advance_line();
                continue;
            }
            if self.cursor_column >= self.columns {
                self.advance_line();
            }
            self.emit_glyph(ch);
        }
    }

    /// Returns row `row` with trailing blanks removed. Out-of-range rows are empty.
    pub fn line(&self, row: u16) -> String {
        if row >= self.rows {
            return String::new();
        }
        let start = row as usize * self.columns as usize;
        let end = start + self.columns as usize;
        self.cells[start..end]
            .iter()
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    /// Returns the whole grid, one line per row, trailing blank rows dropped.
    pub fn text(&self) -> String {
        let mut lines: Vec<String> = (0..self.rows).map(|row| self.line(row)).collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }

    fn cell_index(&self, column: u16, row: u16) -> usize {
        row as usize * self.columns as usize + column as usize
    }

    fn scroll(&mut self) {
        let width = self.columns as usize;
        self.cells.drain(..width);
        self.cells.extend(std::iter::repeat(' ').take(width));
    }
}

impl Default for TextScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for TextScreen {
    fn emit_glyph(&mut self, glyph: char) {
        // Past the right edge nothing is drawn until the line advances
        if self.cursor_column < self.columns {
            let index = self.cell_index(self.cursor_column, self.cursor_row);
            self.cells[index] = glyph;
        }
        self.cursor_column = self.cursor_column.saturating_add(1);
    }

    fn advance_line(&mut self) {
        self.cursor_column = 0;
        if self.cursor_row + 1 < self.rows {
            self.cursor_row += 1;
        } else {
            self.scroll();
        }
    }

    fn erase_previous_column(&mut self) {
        // Column 0 is never erased
        if self.cursor_column <= 1 {
            return;
        }
        self.cursor_column -= 1;
        if self.cursor_column < self.columns {
            let index = self.cell_index(self.cursor_column, self.cursor_row);
            self.cells[index] = ' ';
        }
    }

    fn cursor_column(&self) -> u16 {
        self.cursor_column
    }

    fn window_columns(&self) -> u16 {
        self.columns
    }
}
