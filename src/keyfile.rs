//! Reader for desktop-entry style key files.
//!
//! Tablet descriptors and the stylus catalog are plain text files made of
//! `[Group]` headers followed by `Key=Value` lines:
//!
//! ```text
//! # Intuos4 6x9
//! [Device]
//! Product=Intuos4 6x9
//! DeviceMatch=usb:0x056a:0x00b9
//! Styli=0x802;0x804;
//!
//! [Features]
//! Stylus=true
//! Buttons=9
//! ```
//!
//! Repeated group headers re-open the earlier group, so fields merge and the
//! last value written for a key wins. Group order is the order of first
//! appearance.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::trace;

/// Errors raised while loading or querying a key file.
#[derive(Debug, Error)]
pub enum KeyfileError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a valid key file.
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// The requested group does not exist.
    #[error("group '{0}' not found")]
    GroupNotFound(String),

    /// The requested key does not exist in the group.
    #[error("key '{key}' not found in group '{group}'")]
    KeyNotFound { group: String, key: String },

    /// The value exists but cannot be read as the requested type.
    #[error("value '{value}' of key '{key}' is not a valid {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    value: String,
    /// False if the line held bytes that are not UTF-8.
    utf8: bool,
}

#[derive(Debug, Clone)]
struct Group {
    name: String,
    entries: Vec<Entry>,
}

impl Group {
    fn set(&mut self, key: &str, value: &str, utf8: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.value = value.to_string();
            entry.utf8 = utf8;
        } else {
            self.entries.push(Entry {
                key: key.to_string(),
                value: value.to_string(),
                utf8,
            });
        }
    }
}

/// A parsed key file.
#[derive(Debug, Clone, Default)]
pub struct KeyFile {
    groups: Vec<Group>,
}

impl KeyFile {
    /// Loads and parses the key file at `path`.
    pub fn load(path: &Path) -> Result<Self, KeyfileError> {
        let bytes = std::fs::read(path).map_err(|source| KeyfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        trace!(path = %path.display(), bytes = bytes.len(), "Parsing key file");
        Self::parse_bytes(&bytes)
    }

    /// Parses key file text.
    pub fn parse(text: &str) -> Result<Self, KeyfileError> {
        Self::parse_bytes(text.as_bytes())
    }

    /// Parses key file bytes.
    ///
    /// Bytes that are not UTF-8 only spoil the line they sit on: comments are
    /// skipped as usual, and a value read from such a line fails to read as a
    /// string instead of failing the whole file.
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, KeyfileError> {
        let mut keyfile = Self::default();
        let mut current: Option<usize> = None;

        for (idx, raw) in bytes.split(|&b| b == b'\n').enumerate() {
            let line_no = idx + 1;
            let utf8 = std::str::from_utf8(raw).is_ok();
            let decoded = String::from_utf8_lossy(raw);
            let line = decoded.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let name = rest
                    .strip_suffix(']')
                    .ok_or_else(|| syntax(line_no, "unterminated group header"))?;
                if name.is_empty() || name.contains(['[', ']']) {
                    return Err(syntax(line_no, format!("invalid group name '{name}'")));
                }
                current = Some(keyfile.open_group(name));
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(syntax(line_no, format!("expected Key=Value, got '{line}'")));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(syntax(line_no, "empty key name"));
            }
            let Some(group) = current else {
                return Err(syntax(line_no, "key file does not start with a group"));
            };
            keyfile.groups[group].set(key, value.trim(), utf8);
        }

        Ok(keyfile)
    }

    fn open_group(&mut self, name: &str) -> usize {
        if let Some(pos) = self.groups.iter().position(|g| g.name == name) {
            return pos;
        }
        self.groups.push(Group {
            name: name.to_string(),
            entries: Vec::new(),
        });
        self.groups.len() - 1
    }

    /// Group names in order of first appearance.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Returns true if the file has a group called `group`.
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g.name == group)
    }

    /// Returns the raw, unescaped text of a value.
    pub fn raw_value(&self, group: &str, key: &str) -> Result<&str, KeyfileError> {
        let grp = self
            .groups
            .iter()
            .find(|g| g.name == group)
            .ok_or_else(|| KeyfileError::GroupNotFound(group.to_string()))?;
        let entry = grp
            .entries
            .iter()
            .find(|e| e.key == key)
            .ok_or_else(|| KeyfileError::KeyNotFound {
                group: group.to_string(),
                key: key.to_string(),
            })?;
        if !entry.utf8 {
            return Err(invalid(key, &entry.value, "UTF-8 string"));
        }
        Ok(&entry.value)
    }

    /// Reads a string value, resolving `\s`, `\n`, `\t`, `\r` and `\\` escapes.
    pub fn get_string(&self, group: &str, key: &str) -> Result<String, KeyfileError> {
        self.raw_value(group, key).map(unescape)
    }

    /// Reads a boolean value (`true`, `false`, `1` or `0`).
    pub fn get_boolean(&self, group: &str, key: &str) -> Result<bool, KeyfileError> {
        let value = self.raw_value(group, key)?;
        match value {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(invalid(key, value, "boolean")),
        }
    }

    /// Reads a decimal integer value.
    pub fn get_integer(&self, group: &str, key: &str) -> Result<i32, KeyfileError> {
        let value = self.raw_value(group, key)?;
        value
            .parse::<i32>()
            .map_err(|_| invalid(key, value, "integer"))
    }

    /// Reads a list of strings separated by `;` or `,`.
    ///
    /// A trailing separator does not produce an empty last element.
    pub fn get_string_list(&self, group: &str, key: &str) -> Result<Vec<String>, KeyfileError> {
        self.raw_value(group, key).map(split_list)
    }
}

fn syntax(line: usize, message: impl Into<String>) -> KeyfileError {
    KeyfileError::Syntax {
        line,
        message: message.into(),
    }
}

fn invalid(key: &str, value: &str, expected: &'static str) -> KeyfileError {
    KeyfileError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => out.push(' '),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn split_list(value: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        match c {
            ';' | ',' => items.push(std::mem::take(&mut current)),
            '\\' => match chars.next() {
                Some(sep @ (';' | ',')) => current.push(sep),
                Some(other) => {
                    current.push('\\');
                    current.push(other);
                }
                None => current.push('\\'),
            },
            _ => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        items.push(current);
    }

    items.into_iter().map(|s| unescape(s.trim())).collect()
}
