//! File I/O for crossword structures and word lists

use super::{Crossword, Vocabulary};
use anyhow::{Context, Result};
use std::path::Path;

/// Structure shipped by `setup`; it has a single fill with the matching word list.
pub const EXAMPLE_STRUCTURE: &str = "#___#\n#_##_\n#_##_\n#_##_\n#____\n";

pub const EXAMPLE_WORDS: &str = "one\ntwo\nthree\nfour\nfive\nsix\nseven\neight\nnine\nten\n";

/// A 3x3 corner crossing with no fill for the matching word list
pub const UNSOLVABLE_STRUCTURE: &str = "___\n#_#\n#_#\n";

pub const UNSOLVABLE_WORDS: &str = "cat\ndog\n";

/// Load a crossword structure from a text file
/// Format: each line is a row, `_` for fillable cells and any other character for blocks
pub fn load_crossword_from_file<P: AsRef<Path>>(path: P) -> Result<Crossword> {
    let content = std::fs::read_to_string(&path).with_context(|| {
        format!("Failed to read structure file: {}", path.as_ref().display())
    })?;

    Crossword::parse(&content).with_context(|| {
        format!("Failed to parse structure file: {}", path.as_ref().display())
    })
}

/// Load a word list with one word per line
pub fn load_vocabulary_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read words file: {}", path.as_ref().display()))?;

    Vocabulary::parse(&content)
        .with_context(|| format!("Failed to parse words file: {}", path.as_ref().display()))
}

/// Write a crossword structure back to its text layout
pub fn save_crossword_to_file<P: AsRef<Path>>(crossword: &Crossword, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, crossword.to_string()).with_context(|| {
        format!("Failed to write structure file: {}", path.as_ref().display())
    })?;

    Ok(())
}

/// Create example structure and word files
pub fn create_example_puzzles<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let files = [
        ("structure0.txt", EXAMPLE_STRUCTURE),
        ("words0.txt", EXAMPLE_WORDS),
        ("unsolvable.txt", UNSOLVABLE_STRUCTURE),
        ("unsolvable_words.txt", UNSOLVABLE_WORDS),
    ];
    for (name, content) in files {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}
