//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::crossword::Crossword;
use crate::generate::Solution;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

/// Pixel size of one cell in SVG output
const CELL_SIZE: usize = 100;
const CELL_BORDER: usize = 2;
const FONT_SIZE: usize = 80;

/// Format solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Render letters over the structure: `█` for blocked cells, a space for
    /// fillable cells without a letter
    pub fn format_grid(crossword: &Crossword, letters: &[Vec<Option<char>>]) -> String {
        let mut output = String::new();
        for i in 0..crossword.height {
            for j in 0..crossword.width {
                let letter = letters.get(i).and_then(|row| row.get(j)).copied().flatten();
                output.push(match letter {
                    _ if !crossword.is_fillable(i, j) => '█',
                    Some(letter) => letter,
                    None => ' ',
                });
            }
            output.push('\n');
        }
        output
    }

    /// Terminal rendering of a solution's grid
    pub fn format_solution(solution: &Solution) -> String {
        let mut output = String::new();
        for row in &solution.rows {
            output.extend(row.chars().map(|c| if c == '#' { '█' } else { c }));
            output.push('\n');
        }
        output
    }

    /// One line per slot with the word placed in it
    pub fn format_entries(solution: &Solution) -> String {
        let mut output = String::new();
        for entry in &solution.entries {
            let _ = writeln!(output, "{:<24} {}", entry.variable.to_string(), entry.word);
        }
        output
    }

    /// Format the bare structure with row and column numbers
    pub fn format_crossword_with_coords(crossword: &Crossword) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for j in 0..crossword.width {
            let _ = write!(output, "{:2}", j % 10);
        }
        output.push('\n');

        for i in 0..crossword.height {
            let _ = write!(output, "{:2} ", i);
            for j in 0..crossword.width {
                output.push_str(if crossword.is_fillable(i, j) { "··" } else { "██" });
            }
            output.push('\n');
        }

        output
    }

    /// Vector image of the filled grid: black background, bordered white cells and
    /// centred letters
    pub fn render_svg(solution: &Solution) -> String {
        let width = solution.metadata.width * CELL_SIZE;
        let height = solution.metadata.height * CELL_SIZE;
        let interior = CELL_SIZE - 2 * CELL_BORDER;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        let _ = writeln!(svg, r#"  <rect width="{width}" height="{height}" fill="black"/>"#);

        for (i, row) in solution.rows.iter().enumerate() {
            for (j, cell) in row.chars().enumerate() {
                if cell == '#' {
                    continue;
                }
                let x = j * CELL_SIZE + CELL_BORDER;
                let y = i * CELL_SIZE + CELL_BORDER;
                let _ = writeln!(
                    svg,
                    r#"  <rect x="{x}" y="{y}" width="{interior}" height="{interior}" fill="white"/>"#
                );
                if cell != ' ' {
                    let _ = writeln!(
                        svg,
                        r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="{FONT_SIZE}" text-anchor="middle" dominant-baseline="central">{cell}</text>"#,
                        j * CELL_SIZE + CELL_SIZE / 2,
                        i * CELL_SIZE + CELL_SIZE / 2,
                    );
                }
            }
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Save a solution to `path` in the given format
    pub fn save_solution<P: AsRef<Path>>(
        solution: &Solution,
        path: P,
        format: OutputFormat,
    ) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        match format {
            OutputFormat::Text => {
                let content = format!(
                    "{}\n{}",
                    Self::format_solution(solution),
                    Self::format_entries(solution)
                );
                std::fs::write(path, content)
            }
            OutputFormat::Json => {
                let json = solution.to_json().context("Failed to serialize solution")?;
                std::fs::write(path, json)
            }
            OutputFormat::Svg => std::fs::write(path, Self::render_svg(solution)),
        }
        .with_context(|| format!("Failed to write solution: {}", path.display()))?;

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && std::env::var("TERM").unwrap_or_default() != "dumb"
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
