use std::fs;
use std::io::Read;
use std::path::{Component::Normal, Path};

use srcloc_text::Position;
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("invalid input filename: {0}")]
    InvalidFilename(std::path::PathBuf),
    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Source text loaded in full, with the byte offset at which each line starts.
pub struct SourceFile {
    pub filename: String,
    pub src:      String,
    lines:        Vec<usize>,
}

impl SourceFile {
    pub fn load_file(path: &Path) -> Result<Self, SourceError> {
        let filename = String::from(match path.components().last() {
            Some(Normal(p)) => p
                .to_str()
                .ok_or_else(|| SourceError::InvalidFilename(path.to_path_buf())),
            _ => Err(SourceError::InvalidFilename(path.to_path_buf())),
        }?);

        let src = fs::read_to_string(path)?;

        Ok(SourceFile::new_from_source(filename, src))
    }

    pub fn load_reader<R: Read>(filename: String, mut reader: R) -> Result<Self, SourceError> {
        let mut src = String::new();
        reader.read_to_string(&mut src)?;

        Ok(SourceFile::new_from_source(filename, src))
    }

    pub fn new_from_source(filename: String, src: String) -> Self {
        let lines = SourceFile::map_lines(&src);
        debug!(
            filename = filename.as_str(),
            len = src.len(),
            lines = lines.len(),
            "loaded source"
        );

        Self {
            filename,
            src,
            lines,
        }
    }

    fn map_lines(src: &str) -> Vec<usize> {
        std::iter::once(0)
            .chain(src.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect()
    }

    /// Build a position for a byte offset.
    ///
    /// Lines count from 1 and columns from 0. An offset past the end of the source keeps its
    /// value but is placed on the last line.
    pub fn position_at(&self, offset: usize) -> Position {
        let clamped = offset.min(self.src.len());
        let line = self
            .lines
            .partition_point(|start| *start <= clamped)
            .saturating_sub(1);
        let column = clamped - self.lines.get(line).copied().unwrap_or_default();

        Position::new(line + 1, column, offset)
    }
}
