use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why a background asset could not be used.
#[derive(Debug)]
pub enum AssetError {
    Missing { path: PathBuf },
    Empty { path: PathBuf },
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path } => write!(f, "asset not found: {}", path.display()),
            Self::Empty { path } => write!(f, "asset has no drawable rows: {}", path.display()),
            Self::Io { path, source } => {
                write!(f, "failed to read asset {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
