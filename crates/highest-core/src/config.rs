use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::number::{IntPrefix, parse_int_prefix};

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub path: PathBuf,
    pub display_length: usize,
}

impl RunConfig {
    /// Build a config from the two positional arguments.
    ///
    /// The display length is checked before the path, and the path only has
    /// to exist at this point.
    pub fn new(path: impl Into<PathBuf>, display_length: &str) -> Result<Self> {
        let display_length = parse_display_length(display_length)?;
        let path = path.into();

        if !path.exists() {
            return Err(Error::FileNotFound(path));
        }

        debug!("Config: path={:?}, display_length={}", path, display_length);
        Ok(Self {
            path,
            display_length,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse the requested number of records. Values past `usize::MAX` saturate.
pub fn parse_display_length(text: &str) -> Result<usize> {
    match parse_int_prefix(text) {
        Some(IntPrefix::NonNegative(n)) if n >= 1 => {
            Ok(usize::try_from(n).unwrap_or(usize::MAX))
        }
        Some(IntPrefix::Overflow) => Ok(usize::MAX),
        _ => Err(Error::InvalidDisplayLength(text.to_string())),
    }
}
