//! Codepoint-level UTF-8 processing that never fails on ill-formed input.
//!
//! Malformed byte runs are replaced with U+FFFD and processing continues, so
//! every traversal terminates. The crate provides:
//!
//! - [`strings`]: validation, character counting and first-character split.
//! - [`Utf8CharCursor`] / [`Utf8StrCursor`]: forward cursors yielding
//!   codepoints or per-character byte slices.
//! - [`Utf8AsChars32`] / [`Utf8AsChars`]: views with iteration and constant
//!   time `front()` / `back()`.
//! - [`convert`]: whole-buffer UTF-8 and UTF-32 conversion.

pub mod convert;
pub mod cursor;
pub mod error;
pub mod report;
pub mod strings;
pub mod utf8;
pub mod view;

use std::ffi::OsString;
use std::io::Write;

use log::{debug, warn};

pub use convert::{append_encoded_char, push_code_point, utf32_to_utf8, utf8_to_utf32};
pub use cursor::{Utf8CharCursor, Utf8StrCursor};
pub use error::Error;
pub use report::Report;
pub use strings::{at_least_chars_len, chars_len, front_char, is_valid_utf8};
pub use utf8::{char_len_at, leading_byte_len, REPLACEMENT_CHARACTER};
pub use view::{Utf8AsChars, Utf8AsChars32};

/// Command line settings for [`run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub paths: Vec<OsString>,
    /// Stop counting characters once this many have been seen.
    pub max_chars: usize,
}

impl Options {
    pub fn parse<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut paths = Vec::new();
        let mut max_chars = usize::MAX;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.to_str() {
                Some("--max-chars") => {
                    let value = args
                        .next()
                        .ok_or_else(|| Error::MissingValue("--max-chars".into()))?;
                    max_chars = value
                        .to_str()
                        .and_then(|v| v.parse().ok())
                        .ok_or_else(|| Error::InvalidValue {
                            flag: "--max-chars".into(),
                            value: value.to_string_lossy().into_owned(),
                        })?;
                }
                Some("--") => {
                    paths.extend(args.by_ref());
                }
                Some(flag) if flag.starts_with("--") => {
                    return Err(Error::UnknownOption(flag.to_owned()));
                }
                _ => paths.push(arg),
            }
        }
        Ok(Self { paths, max_chars })
    }
}

/// Reports on every file named in `args` to standard output.
pub fn run<I>(args: I) -> Result<(), Error>
where
    I: IntoIterator<Item = OsString>,
{
    run_to(args, &mut std::io::stdout().lock())
}

/// Reports on every file named in `args`, one line each, to `out`.
///
/// Unreadable files get their I/O error printed in place of a report and do
/// not stop the run.
pub fn run_to<I, W>(args: I, out: &mut W) -> Result<(), Error>
where
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    let options = Options::parse(args)?;
    if options.paths.is_empty() {
        return Err(Error::NoInput);
    }
    for path in &options.paths {
        let name = path.to_string_lossy();
        match std::fs::read(path) {
            Ok(contents) => {
                debug!("read {} bytes from {name}", contents.len());
                writeln!(out, "{name}: {}", Report::new(&contents, options.max_chars))?;
            }
            Err(error) => {
                warn!("cannot read {name}: {error}");
                writeln!(out, "{name}: {error}")?;
            }
        }
    }
    Ok(())
}
