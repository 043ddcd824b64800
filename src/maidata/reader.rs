use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;
use regex::Regex;
use crate::{RenameError, Result};

// Pre-compiled field pattern, shared across parses
fn field_start() -> &'static Regex {
    static FIELD_START: OnceLock<Regex> = OnceLock::new();
    FIELD_START.get_or_init(|| Regex::new(r"^&([^=]+)=(.*)$").unwrap())
}

/// A parsed maidata.txt file.
///
/// The simai format stores its header as `&key=value` lines. A value runs
/// until the next line starting a new `&key=` field or end of file, so values
/// may span multiple lines. Keys are matched case-insensitively; when a key
/// appears more than once, the first occurrence wins. Anything that is not
/// part of a field (chart body content) is ignored.
#[derive(Debug)]
pub struct MaidataFile {
    fields: HashMap<String, String>,
}

impl MaidataFile {
    /// Reads and parses the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RenameError::MetadataNotFound(path.to_path_buf()),
            _ => RenameError::Io(e),
        })?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        // Tolerate a UTF-8 byte order mark at the start of the file
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let mut fields: HashMap<String, String> = HashMap::new();
        let mut current: Option<(String, String)> = None;

        for line in content.lines() {
            if let Some(caps) = field_start().captures(line) {
                if let Some((key, value)) = current.take() {
                    fields.entry(key).or_insert_with(|| value.trim().to_string());
                }
                current = Some((caps[1].to_lowercase(), caps[2].to_string()));
            } else if let Some((_, value)) = current.as_mut() {
                value.push('\n');
                value.push_str(line);
            }
            // Lines before the first field are chart content, skip them
        }

        if let Some((key, value)) = current.take() {
            fields.entry(key).or_insert_with(|| value.trim().to_string());
        }

        Self { fields }
    }

    /// Looks up a field value by key, case-insensitively.
    pub fn get_value(&self, key: &str) -> Result<&str> {
        self.fields
            .get(&key.to_lowercase())
            .map(String::as_str)
            .ok_or_else(|| RenameError::KeyNotFound(key.to_string()))
    }
}
