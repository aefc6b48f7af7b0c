//! Raw byte persistence.
//!
//! Save writes the pre-gap segment then the post-gap segment, reproducing the
//! logical content exactly. Load reads the whole source first and only then
//! replaces the buffer, so a failed read leaves the buffer untouched.

use crate::GapBuffer;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GapBuffer {
    /// Write the logical content to `out` as two contiguous ranges.
    pub fn save_to_writer<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let (before, after) = self.segments();
        out.write_all(before)?;
        out.write_all(after)?;
        out.flush()
    }

    /// Replace the content with everything readable from `input`. The point resets to 0.
    pub fn load_from_reader<R: Read>(&mut self, input: &mut R) -> std::io::Result<usize> {
        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes)?;
        self.replace_contents(&bytes);
        Ok(bytes.len())
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        let mut file = fs::File::create(path).map_err(|source| PersistError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        self.save_to_writer(&mut file)
            .map_err(|source| PersistError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(target: "text.io", file = %path.display(), size_bytes = self.len(), "saved");
        Ok(())
    }

    /// Load `path` into this buffer. On failure the buffer is left unchanged.
    pub fn load(&mut self, path: &Path) -> Result<usize, PersistError> {
        let bytes = fs::read(path).map_err(|source| PersistError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.replace_contents(&bytes);
        tracing::debug!(target: "text.io", file = %path.display(), size_bytes = bytes.len(), "loaded");
        Ok(bytes.len())
    }

    /// Discard current content, make room for `bytes` and copy them into the pre-gap region.
    fn replace_contents(&mut self, bytes: &[u8]) {
        self.clear();
        self.ensure_gap(bytes.len());
        self.data[..bytes.len()].copy_from_slice(bytes);
        self.gap_start = bytes.len();
    }
}
