//! Transient on-disk payloads for bulk operations.
//!
//! Bulk imports can be far larger than a command line allows, so the payload
//! is written to a temporary file and the file path is passed instead. The
//! file lives exactly as long as the [`StagedPayload`] value.

use std::io::Write;
use std::path::Path;

use tempfile::TempPath;
use tracing::debug;

use super::error::CommandError;

/// A payload written to a temporary file, removed when dropped.
#[derive(Debug)]
pub struct StagedPayload {
    path: TempPath,
}

impl StagedPayload {
    /// Write `contents` to a fresh temporary file named `<prefix>XXXX<suffix>`.
    pub fn write(prefix: &str, suffix: &str, contents: &str) -> Result<Self, CommandError> {
        let mut file = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(suffix)
            .tempfile()?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;

        // Close the handle so the external tool can open the file on any platform.
        let path = file.into_temp_path();
        debug!("Staged {} bytes at {}", contents.len(), path.display());

        Ok(Self { path })
    }

    /// Location of the staged file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The staged file location as a command line argument.
    pub fn arg(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}
