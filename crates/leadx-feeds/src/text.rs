//! Pasted text block input — a file or stdin, read whole.

use std::io::Read;
use std::path::PathBuf;

use crate::FeedError;

/// Where a pasted text block comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Stdin,
    File(PathBuf),
}

impl TextSource {
    /// `None` and `"-"` both mean stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => TextSource::File(path),
            _ => TextSource::Stdin,
        }
    }
}

/// Read the whole text block.
pub fn read_text(source: &TextSource) -> Result<String, FeedError> {
    match source {
        TextSource::File(path) => std::fs::read_to_string(path).map_err(|source| FeedError::Io {
            path: path.clone(),
            source,
        }),
        TextSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut buf)
                .map_err(FeedError::Stdin)?;
            Ok(buf)
        }
    }
}
