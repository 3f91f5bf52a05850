//! Fully qualified class identifiers
//!
//! Plugins and the application entry point are named by their main class,
//! e.g. `de.mpg.cbs.edledplugin.stimulus.StimulusPlugin`. Everything the
//! pipeline needs to know about a plugin is derived from that name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::defaults::{ARCHIVE_EXT, SOURCE_EXT};
use crate::error::ConfigError;

/// A dotted Java class name with at least a package and a class component
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassId {
    components: Vec<String>,
}

impl ClassId {
    /// Parse and validate a dotted class name
    pub fn parse(id: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidIdentifier {
            id: id.to_string(),
            reason: reason.to_string(),
        };

        let components: Vec<String> = id.split('.').map(String::from).collect();
        if components.len() < 2 {
            return Err(invalid("expected a package and a class name"));
        }
        for component in &components {
            let mut chars = component.chars();
            match chars.next() {
                None => return Err(invalid("empty component")),
                Some(c) if !(c.is_alphabetic() || c == '_' || c == '$') => {
                    return Err(invalid("component must start with a letter"));
                }
                Some(_) => {}
            }
            if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
                return Err(invalid("component contains invalid characters"));
            }
        }

        Ok(Self { components })
    }

    /// The simple class name (last component)
    pub fn class_name(&self) -> &str {
        &self.components[self.components.len() - 1]
    }

    /// Package directory relative to the build root, with a trailing `/`.
    ///
    /// `a.b.C` gives `a/b/`.
    pub fn package_dir(&self) -> String {
        let package = &self.components[..self.components.len() - 1];
        format!("{}/", package.join("/"))
    }

    /// Archive file name: the identifier plus `.jar`
    pub fn archive_name(&self) -> String {
        format!("{self}{ARCHIVE_EXT}")
    }

    /// Source file of the class relative to the build root.
    ///
    /// `a.b.C` gives `a/b/C.java`.
    pub fn source_file(&self) -> String {
        format!("{}{}{SOURCE_EXT}", self.package_dir(), self.class_name())
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("."))
    }
}

impl FromStr for ClassId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ClassId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClassId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
