//! Dictionaries parsed from line-oriented `key=value` lang files

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use tracing::{debug, warn};

/// An immutable key→value mapping loaded from one resolved resource path.
///
/// Missing, unreadable, or malformed sources all degrade to an empty
/// dictionary; loading never raises to the resolver.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// An empty dictionary, used when a source is missing or malformed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse `key=value` text from an optional stream, degrading every
    /// failure to an empty dictionary. `path` is used for logging only.
    pub(crate) fn load_or_empty(stream: Option<Box<dyn Read + Send>>, path: &str) -> Self {
        let Some(mut stream) = stream else {
            debug!(path, "no resource stream, using empty dictionary");
            return Self::empty();
        };
        let mut bytes = Vec::new();
        if let Err(err) = stream.read_to_end(&mut bytes) {
            warn!(path, error = %err, "failed to read lang file, using empty dictionary");
            return Self::empty();
        }
        let text = String::from_utf8_lossy(&bytes);
        match parse_lang_text(&text) {
            Ok(entries) => {
                debug!(path, entries = entries.len(), "loaded dictionary");
                Self { entries }
            }
            Err(err) => {
                warn!(path, error = %err, "malformed lang file, using empty dictionary");
                Self::empty()
            }
        }
    }
}

#[derive(Debug)]
struct MalformedEscape(String);

impl fmt::Display for MalformedEscape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse the full text of one lang file.
///
/// Comment lines start with `#` or `!` after leading whitespace. A natural
/// line ending in an odd number of backslashes continues onto the next line
/// with that line's leading whitespace dropped. Later duplicates of a key
/// overwrite earlier ones. A malformed `\u` escape fails the whole file.
fn parse_lang_text(text: &str) -> Result<HashMap<String, String>, MalformedEscape> {
    let mut entries = HashMap::new();
    let mut lines = text.lines();

    while let Some(raw) = lines.next() {
        let line = raw.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let mut logical = String::from(line);
        while ends_with_odd_backslashes(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start()),
                None => break,
            }
        }
        let (key, value) = split_key_value(&logical)?;
        entries.insert(key, value);
    }
    Ok(entries)
}

fn ends_with_odd_backslashes(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split one logical line into an unescaped key and value.
///
/// The key ends at the first unescaped `=`, `:`, or whitespace; a single
/// separator after the whitespace run is consumed, and leading whitespace
/// of the value is dropped.
fn split_key_value(line: &str) -> Result<(String, String), MalformedEscape> {
    let chars: Vec<char> = line.chars().collect();

    let mut i = 0;
    let mut key_end = chars.len();
    let mut separator = None;
    while i < chars.len() {
        let c = chars[i];
        if c == '\\' {
            i += 2;
            continue;
        }
        if c == '=' || c == ':' || c.is_whitespace() {
            key_end = i;
            separator = Some(c);
            break;
        }
        i += 1;
    }

    let key = unescape(&chars[..key_end.min(chars.len())])?;

    let mut j = key_end;
    if let Some(c) = separator {
        if c == '=' || c == ':' {
            j += 1;
        } else {
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && (chars[j] == '=' || chars[j] == ':') {
                j += 1;
            }
        }
    }
    while j < chars.len() && chars[j].is_whitespace() {
        j += 1;
    }

    let value = unescape(&chars[j..])?;
    Ok((key, value))
}

fn unescape(chars: &[char]) -> Result<String, MalformedEscape> {
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c != '\\' {
            out.push(c);
            i += 1;
            continue;
        }
        i += 1;
        let Some(&escaped) = chars.get(i) else {
            // trailing lone backslash, dropped
            break;
        };
        i += 1;
        match escaped {
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'f' => out.push('\u{000C}'),
            'r' => out.push('\r'),
            'u' => {
                if i + 4 > chars.len() {
                    return Err(MalformedEscape("truncated \\u escape".to_string()));
                }
                let hex: String = chars[i..i + 4].iter().collect();
                let code = u32::from_str_radix(&hex, 16)
                    .map_err(|_| MalformedEscape(format!("bad \\u escape: \\u{hex}")))?;
                let ch = char::from_u32(code)
                    .ok_or_else(|| MalformedEscape(format!("bad \\u escape: \\u{hex}")))?;
                out.push(ch);
                i += 4;
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> HashMap<String, String> {
        parse_lang_text(text).unwrap()
    }

    #[test]
    fn test_basic_pairs() {
        let entries = parse("greeting=Hello!\nfarewell=Goodbye!\n");
        assert_eq!(entries["greeting"], "Hello!");
        assert_eq!(entries["farewell"], "Goodbye!");
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let entries = parse("# a comment\n\n  ! another\nkey=value\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["key"], "value");
    }

    #[test]
    fn test_colon_and_whitespace_separators() {
        let entries = parse("a:1\nb 2\nc = 3\nd : 4\n");
        assert_eq!(entries["a"], "1");
        assert_eq!(entries["b"], "2");
        assert_eq!(entries["c"], "3");
        assert_eq!(entries["d"], "4");
    }

    #[test]
    fn test_value_leading_whitespace_dropped() {
        let entries = parse("key=    padded value  \n");
        assert_eq!(entries["key"], "padded value  ");
    }

    #[test]
    fn test_escapes() {
        let entries = parse("tabs=a\\tb\nnewline=a\\nb\nunicode=\\u00e9\nequals=a\\=b\n");
        assert_eq!(entries["tabs"], "a\tb");
        assert_eq!(entries["newline"], "a\nb");
        assert_eq!(entries["unicode"], "é");
        assert_eq!(entries["equals"], "a=b");
    }

    #[test]
    fn test_escaped_separator_in_key() {
        let entries = parse("a\\=b=c\nspaced\\ key=d\n");
        assert_eq!(entries["a=b"], "c");
        assert_eq!(entries["spaced key"], "d");
    }

    #[test]
    fn test_line_continuation() {
        let entries = parse("key=first \\\n    second\n");
        assert_eq!(entries["key"], "first second");
    }

    #[test]
    fn test_double_backslash_is_not_continuation() {
        let entries = parse("key=ends with backslash\\\\\nother=x\n");
        assert_eq!(entries["key"], "ends with backslash\\");
        assert_eq!(entries["other"], "x");
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let entries = parse("key=first\nkey=second\n");
        assert_eq!(entries["key"], "second");
    }

    #[test]
    fn test_key_without_value() {
        let entries = parse("lonely\n");
        assert_eq!(entries["lonely"], "");
    }

    #[test]
    fn test_malformed_unicode_escape_fails_file() {
        assert!(parse_lang_text("ok=fine\nbad=\\uZZZZ\n").is_err());
        assert!(parse_lang_text("bad=\\u12\n").is_err());
    }

    #[test]
    fn test_load_or_empty_degrades_malformed_stream() {
        let stream: Box<dyn Read + Send> = Box::new(std::io::Cursor::new(b"bad=\\uXYZ1\n".to_vec()));
        let dict = Dictionary::load_or_empty(Some(stream), "lang/en.properties");
        assert!(dict.is_empty());
    }

    #[test]
    fn test_load_or_empty_missing_stream() {
        let dict = Dictionary::load_or_empty(None, "lang/en.properties");
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
    }

    #[test]
    fn test_load_or_empty_parses_stream() {
        let stream: Box<dyn Read + Send> = Box::new(std::io::Cursor::new(b"a=b\n".to_vec()));
        let dict = Dictionary::load_or_empty(Some(stream), "lang/en.properties");
        assert_eq!(dict.get("a"), Some("b"));
        assert_eq!(dict.get("missing"), None);
    }
}
