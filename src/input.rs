//! Read trait abstractions for results files or stdin.

use crate::error::Error;
use std::fmt::{self, Formatter};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// `Input` to read a results table from a file or stdin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Input {
    #[default]
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Construct an `Input` from a file path or stdin (designated by "-").
    pub fn new<P: AsRef<Path>>(p: P) -> Self {
        let path = p.as_ref();
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Opens a reader over the input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if a file can't be opened.
    pub fn reader(&self) -> Result<Box<dyn Read>, Error> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => Ok(Box::new(BufReader::new(open_file(path)?))),
        }
    }

    /// Returns the file name of the input or `"-"` for stdin.
    pub fn source(&self) -> String {
        match self {
            Self::Stdin => "-".to_string(),
            Self::File(path) => path.file_name().map_or_else(
                || format!("No filename: {}", path.display()),
                |name| name.to_string_lossy().into_owned(),
            ),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "Stdin"),
            Self::File(path) => write!(f, "File({})", path.display()),
        }
    }
}

/// Opens a file, naming the common failures.
fn open_file(path: &Path) -> Result<File, Error> {
    File::open(path).map_err(|source| {
        let message = match source.kind() {
            io::ErrorKind::NotFound => "no such file",
            io::ErrorKind::PermissionDenied => "permission denied",
            _ => "failed to open input file",
        };

        Error::Io {
            path: path.display().to_string(),
            message: message.to_string(),
            source,
        }
    })
}
