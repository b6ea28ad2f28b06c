//! File validator: accepts only `.txt`, `.zip` and `.json` uploads (case-insensitive).

use std::fmt;
use std::path::Path;

use relay_core::HandlerError;

/// Accepted upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Txt,
    Zip,
    Json,
}

impl FileKind {
    pub const ALL: [FileKind; 3] = [FileKind::Txt, FileKind::Zip, FileKind::Json];

    /// Lowercase extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Txt => "txt",
            FileKind::Zip => "zip",
            FileKind::Json => "json",
        }
    }

    /// Uppercased extension with the dot, as shown to reviewers (`.TXT`).
    pub fn label(self) -> String {
        format!(".{}", self.extension().to_uppercase())
    }

    /// MIME type implied by the extension.
    pub fn mime_hint(self) -> &'static str {
        match self {
            FileKind::Txt => "text/plain",
            FileKind::Zip => "application/zip",
            FileKind::Json => "application/json",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension().eq_ignore_ascii_case(ext))
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Classifies `file_name` by its final extension segment. A name with no extension
/// (including dotfiles such as `.txt`) or with any other extension is rejected.
pub fn validate_file_name(file_name: Option<&str>) -> Result<FileKind, HandlerError> {
    let name = file_name
        .filter(|n| !n.is_empty())
        .ok_or(HandlerError::MissingFileName)?;

    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(FileKind::from_extension)
        .ok_or_else(|| HandlerError::UnsupportedFile(name.to_string()))
}
