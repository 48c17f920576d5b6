use std::{error::Error as StdError, fmt, io, path::PathBuf};

use fleece::{AccessError, ParseError, PathError};

#[derive(Debug)]
pub(crate) enum CliError {
    Read { path: PathBuf, source: io::Error },
    Write(io::Error),
    Parse(ParseError),
    Access(AccessError),
    Path(PathError),
}

impl CliError {
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            CliError::Read { .. } | CliError::Write(_) => 1,
            CliError::Parse(_) => 3,
            CliError::Access(_) | CliError::Path(_) => 4,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Read { path, .. } => write!(f, "Failed to read '{}'", path.display()),
            CliError::Write(_) => f.write_str("Failed to write output"),
            CliError::Parse(_) => f.write_str("Failed to load document"),
            CliError::Access(_) | CliError::Path(_) => f.write_str("Lookup failed"),
        }
    }
}

impl StdError for CliError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            CliError::Read { source, .. } | CliError::Write(source) => Some(source),
            CliError::Parse(error) => Some(error),
            CliError::Access(error) => Some(error),
            CliError::Path(error) => Some(error),
        }
    }
}

impl From<ParseError> for CliError {
    fn from(error: ParseError) -> Self {
        CliError::Parse(error)
    }
}

impl From<AccessError> for CliError {
    fn from(error: AccessError) -> Self {
        CliError::Access(error)
    }
}

impl From<PathError> for CliError {
    fn from(error: PathError) -> Self {
        CliError::Path(error)
    }
}

impl From<io::Error> for CliError {
    fn from(error: io::Error) -> Self {
        CliError::Write(error)
    }
}

/// Render an error and its chain of causes, one per line.
pub(crate) fn render(error: &dyn StdError) -> String {
    let mut output = format!("error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        output.push_str("\ncaused by: ");
        output.push_str(&cause.to_string());
        source = cause.source();
    }
    output
}
