/// Line-oriented reading of hop files and stdin.
///
/// This module is the single entry point for all input I/O in the `hopcycle`
/// binary. `hopcycle-core` never touches the filesystem; all reading happens
/// here.
///
/// Key behaviours:
/// - Input is streamed one line at a time, so memory use is bounded by the
///   graphs being built rather than by the file size.
/// - Lines that are empty after trimming are skipped but still counted, so
///   reported line numbers match the file.
/// - UTF-8 is validated per line; the first bad line ends the stream.
/// - All I/O errors are converted to [`CliError`] variants with exit code 2.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

// ---------------------------------------------------------------------------
// SourceLine
// ---------------------------------------------------------------------------

/// One non-blank input line together with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based position of the line in the input.
    pub number: usize,
    /// Line contents without the trailing line terminator.
    pub text: String,
}

// ---------------------------------------------------------------------------
// LineSource
// ---------------------------------------------------------------------------

/// Iterator over the non-blank lines of a file or stdin.
///
/// Yields `Err` at most once: after the first read error the iterator is
/// exhausted.
pub struct LineSource {
    reader: Box<dyn BufRead>,
    label: String,
    line_number: usize,
    buf: String,
    done: bool,
}

impl LineSource {
    /// Opens `source` for line-by-line reading.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::FileNotFound`], [`CliError::PermissionDenied`] or
    /// [`CliError::IoError`] when a disk file cannot be opened.
    pub fn open(source: &PathOrStdin) -> Result<Self, CliError> {
        match source {
            PathOrStdin::Stdin => Ok(Self::from_reader(
                Box::new(std::io::stdin().lock()),
                source.to_string(),
            )),
            PathOrStdin::Path(path) => {
                let file = File::open(path).map_err(|e| open_error_to_cli(&e, path))?;
                Ok(Self::from_reader(
                    Box::new(BufReader::new(file)),
                    path.display().to_string(),
                ))
            }
        }
    }

    /// Wraps an arbitrary buffered reader. `label` names the source in error
    /// messages.
    pub fn from_reader(reader: Box<dyn BufRead>, label: String) -> Self {
        Self {
            reader,
            label,
            line_number: 0,
            buf: String::new(),
            done: false,
        }
    }

    /// Human-readable name of the source: the path, or `-` for stdin.
    pub fn label(&self) -> &str {
        &self.label
    }

    fn read_error(&self, e: &std::io::Error) -> CliError {
        if e.kind() == std::io::ErrorKind::InvalidData {
            CliError::InvalidUtf8 {
                source: self.label.clone(),
                line: self.line_number,
            }
        } else {
            CliError::IoError {
                source: self.label.clone(),
                detail: e.to_string(),
            }
        }
    }
}

impl Iterator for LineSource {
    type Item = Result<SourceLine, CliError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            self.line_number += 1;
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    let text = self.buf.trim_end_matches(['\n', '\r']);
                    if text.trim().is_empty() {
                        continue;
                    }
                    return Some(Ok(SourceLine {
                        number: self.line_number,
                        text: text.to_owned(),
                    }));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(self.read_error(&e)));
                }
            }
        }
        None
    }
}

/// Maps a `std::io::Error` from opening a disk file to a [`CliError`].
fn open_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == std::io::ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == std::io::ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
