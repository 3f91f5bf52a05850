//! Dependency descriptor parsing
//!
//! Reads an Eclipse-style `.classpath` file and extracts the library
//! entries that make up the compile classpath.
//!
//! Only `<classpathentry .../>` lines are considered; everything else in the
//! file (XML prolog, the `<classpath>` root, comments) is ignored. Attributes
//! are read by name, so their order within a line does not matter.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::defaults::KIND_LIB;
use crate::error::DescriptorError;

const ENTRY_TAG: &str = "<classpathentry";

/// What to do with a classpath entry line that cannot be parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort with a descriptor-format error
    #[default]
    Error,
    /// Drop the line and log a warning
    Skip,
}

/// A single parsed `<classpathentry>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClasspathEntry {
    /// Value of the `kind` attribute
    pub kind: String,
    /// Value of the `path` attribute
    pub path: String,
    /// 1-based line number in the descriptor
    pub line: usize,
}

impl ClasspathEntry {
    /// Whether this entry names a library archive
    pub fn is_library(&self) -> bool {
        self.kind.contains(KIND_LIB)
    }
}

fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^\s*([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*"([^"]*)""#)
            .expect("attribute pattern is valid")
    })
}

/// Decode the predefined XML entities in an attribute value
fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Parse the attribute list of an element into name/value pairs
fn parse_attributes(mut rest: &str) -> Result<Vec<(String, String)>, String> {
    let re = attribute_regex();
    let mut attributes = Vec::new();

    while !rest.trim().is_empty() {
        let Some(caps) = re.captures(rest) else {
            return Err(format!("unexpected text '{}'", rest.trim()));
        };
        attributes.push((caps[1].to_string(), decode_entities(&caps[2])));
        rest = &rest[caps[0].len()..];
    }

    Ok(attributes)
}

/// Parse one trimmed descriptor line.
///
/// Returns `Ok(None)` for lines that are not classpath entries.
fn parse_line(line: &str, line_no: usize) -> Result<Option<ClasspathEntry>, String> {
    let Some(after_tag) = line.strip_prefix(ENTRY_TAG) else {
        return Ok(None);
    };

    // `<classpathentryfoo>` is a different element
    if let Some(next) = after_tag.chars().next() {
        if !next.is_whitespace() && next != '/' && next != '>' {
            return Ok(None);
        }
    }

    let body = after_tag
        .strip_suffix("/>")
        .or_else(|| after_tag.strip_suffix('>'))
        .ok_or_else(|| "entry is not closed on the same line".to_string())?;

    let attributes = parse_attributes(body)?;
    let get = |name: &str| {
        attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    };

    let kind = get("kind").ok_or_else(|| "missing 'kind' attribute".to_string())?;
    let path = get("path").unwrap_or_default();

    let entry = ClasspathEntry {
        kind,
        path,
        line: line_no,
    };

    if entry.is_library() && entry.path.trim().is_empty() {
        return Err("library entry has no 'path' attribute".to_string());
    }

    Ok(Some(entry))
}

/// Parse every classpath entry in a descriptor
pub fn parse_entries(
    content: &str,
    policy: MalformedPolicy,
) -> Result<Vec<ClasspathEntry>, DescriptorError> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        match parse_line(raw.trim(), line_no) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {}
            Err(reason) => match policy {
                MalformedPolicy::Error => {
                    return Err(DescriptorError::Malformed {
                        line: line_no,
                        reason,
                    });
                }
                MalformedPolicy::Skip => {
                    tracing::warn!("Skipping malformed classpath entry on line {line_no}: {reason}");
                }
            },
        }
    }

    Ok(entries)
}

/// Extract library paths from descriptor text, in file order
pub fn extract_library_paths(
    content: &str,
    policy: MalformedPolicy,
) -> Result<Vec<String>, DescriptorError> {
    let libs: Vec<String> = parse_entries(content, policy)?
        .into_iter()
        .filter(ClasspathEntry::is_library)
        .map(|entry| entry.path)
        .collect();

    tracing::debug!("Extracted {} library entries", libs.len());
    Ok(libs)
}

/// Read a descriptor file and extract its library paths
pub fn read_library_paths(
    path: &Path,
    policy: MalformedPolicy,
) -> Result<Vec<String>, DescriptorError> {
    let content = std::fs::read_to_string(path).map_err(|e| DescriptorError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    extract_library_paths(&content, policy)
}
