use std::fmt;

use itertools::Itertools;

use crate::cursor::Utf8CharCursor;
use crate::strings::{at_least_chars_len, is_valid_utf8};
use crate::view::Utf8AsChars32;

// Codepoints listed at the start of a report line.
const PREVIEW_CHARS: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    Empty,
    Ascii,
    Utf8,
    IllFormed,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Classification::Empty => "empty",
            Classification::Ascii => "ASCII text",
            Classification::Utf8 => "UTF-8 text",
            Classification::IllFormed => "ill-formed UTF-8",
        })
    }
}

pub fn classify(contents: &[u8]) -> Classification {
    if contents.is_empty() {
        return Classification::Empty;
    }
    if contents.is_ascii() {
        return Classification::Ascii;
    }
    if is_valid_utf8(contents) {
        return Classification::Utf8;
    }
    Classification::IllFormed
}

/// Summary of one buffer: its classification, sizes, and a glimpse of the
/// characters at either end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub classification: Classification,
    pub bytes: usize,
    pub chars: usize,
    /// Counting stopped at the `--max-chars` limit.
    pub capped: bool,
    pub preview: Vec<char>,
    pub last: Option<char>,
}

impl Report {
    /// Builds the report for `contents`, counting at most `max_chars`
    /// characters.
    pub fn new(contents: &[u8], max_chars: usize) -> Self {
        let classification = classify(contents);
        // Leading-byte counting is only meaningful for well-formed input.
        let chars = match classification {
            Classification::IllFormed => Utf8CharCursor::new(contents).take(max_chars).count(),
            _ => at_least_chars_len(contents, max_chars),
        };
        let view = Utf8AsChars32::new(contents);
        Self {
            classification,
            bytes: contents.len(),
            chars,
            capped: chars == max_chars && view.begin().nth(max_chars).is_some(),
            preview: view.begin().take(PREVIEW_CHARS).collect(),
            last: view.back(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.classification == Classification::Empty {
            return write!(f, "{}", self.classification);
        }
        write!(
            f,
            "{}, {} bytes, {}{} chars, starts [{}]",
            self.classification,
            self.bytes,
            self.chars,
            if self.capped { "+" } else { "" },
            self.preview.iter().map(|&c| code_point_label(c)).join(" "),
        )?;
        if let Some(last) = self.last {
            write!(f, ", ends {}", code_point_label(last))?;
        }
        Ok(())
    }
}

fn code_point_label(c: char) -> String {
    format!("U+{:04X}", c as u32)
}
