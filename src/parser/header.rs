// file: src/parser/header.rs
// description: title/description extraction from a document's leading header block
// reference: line-oriented metadata header followed by a blank line and the body

use tracing::trace;

pub const DEFAULT_TITLE: &str = "N/A";
pub const DEFAULT_DESCRIPTION: &str = "No description provided.";
pub const DEFAULT_DESCRIPTION_LINES: usize = 2;

const TITLE_PREFIX: &str = "title:";
const DESCRIPTION_SEPARATOR: &str = " / ";
// Tightening only recognizes CRLF paragraph breaks.
const PARAGRAPH_BREAK: &str = "\r\n\r\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    pub title: String,
    pub description: String,
    /// Byte length of the header region; always a char boundary within the content.
    pub header_length: usize,
}

impl DocumentHeader {
    /// Body text following the header, trimmed.
    pub fn snippet<'a>(&self, content: &'a str) -> &'a str {
        content
            .get(self.header_length.min(content.len())..)
            .unwrap_or("")
            .trim()
    }
}

pub struct HeaderParser {
    description_lines: usize,
}

impl HeaderParser {
    pub fn new() -> Self {
        Self::with_description_lines(DEFAULT_DESCRIPTION_LINES)
    }

    pub fn with_description_lines(description_lines: usize) -> Self {
        Self {
            description_lines: description_lines.max(1),
        }
    }

    pub fn parse(&self, content: &str) -> DocumentHeader {
        let mut title = DEFAULT_TITLE.to_string();
        let mut description_parts: Vec<&str> = Vec::with_capacity(self.description_lines);
        let mut header_length = 0;
        let mut in_header = true;

        for (line, width) in Lines::new(content) {
            header_length += width;
            let blank = line.trim().is_empty();

            if in_header {
                if blank {
                    in_header = false;
                } else if let Some(value) = strip_title_prefix(line) {
                    title = value.trim().to_string();
                }
                continue;
            }

            if blank {
                continue;
            }

            description_parts.push(line.trim());

            if description_parts.len() >= self.description_lines {
                if let Some(end) = tightened_header_end(content, &title) {
                    trace!(running = header_length, tightened = end, "Tightened header boundary");
                    header_length = end;
                }
                break;
            }
        }

        let description = if description_parts.is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            description_parts.join(DESCRIPTION_SEPARATOR)
        };

        DocumentHeader {
            title,
            description,
            header_length: header_length.min(content.len()),
        }
    }
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_title_prefix(line: &str) -> Option<&str> {
    match line.get(..TITLE_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(TITLE_PREFIX) => {
            Some(&line[TITLE_PREFIX.len()..])
        }
        _ => None,
    }
}

fn tightened_header_end(content: &str, title: &str) -> Option<usize> {
    let title_start = find_ignore_case(content, title)?;
    let break_start = content[title_start..].find(PARAGRAPH_BREAK)?;
    Some(title_start + break_start + PARAGRAPH_BREAK.len())
}

/// Byte offset of the first case-insensitive occurrence of `needle`.
/// An empty needle matches at offset 0.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    haystack
        .char_indices()
        .map(|(start, _)| start)
        .find(|&start| starts_with_ignore_case(&haystack[start..], needle))
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text_chars = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|expected| text_chars.next() == Some(expected))
}

/// Splits content into lines, yielding each line with its byte width
/// including the terminator (`\r\n`, `\n` or `\r`).
struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Lines<'a> {
    fn new(content: &'a str) -> Self {
        Self { rest: content }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let (line, terminator) = match self.rest.find(['\r', '\n']) {
            Some(pos) if self.rest[pos..].starts_with("\r\n") => (&self.rest[..pos], 2),
            Some(pos) => (&self.rest[..pos], 1),
            None => (self.rest, 0),
        };

        let width = line.len() + terminator;
        self.rest = &self.rest[width..];
        Some((line, width))
    }
}
