//! Project file (jarforge.toml) parsing and validation
//!
//! The project file replaces the hard-coded paths and plugin list of a
//! one-off build script. String values support environment variable
//! substitution using `${VAR}` syntax.

use std::path::{Component, Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::defaults::{
    ARCHIVE_EXT, CLASSPATH_SEPARATOR, DEFAULT_BUILD_DIR, DEFAULT_COMPILER, DEFAULT_DESCRIPTOR,
    DEFAULT_DIST_DIR, DEFAULT_PLUGIN_SUPPORT_DIR, DEFAULT_RESOURCE_DIR, DEFAULT_SOURCE_DIR,
    PROJECT_FILE,
};
use crate::core::descriptor::MalformedPolicy;
use crate::core::plugin::ClassId;
use crate::error::ConfigError;

/// The project file (jarforge.toml)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectConfig {
    /// Plugin main classes, packaged in this order
    #[serde(default)]
    pub plugins: Vec<ClassId>,

    /// Project metadata
    #[serde(default)]
    pub project: ProjectSection,

    /// Input and output locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Compiler settings
    #[serde(default)]
    pub compiler: CompilerConfig,

    /// Main application
    pub application: ApplicationConfig,

    /// Descriptor parsing settings
    #[serde(default)]
    pub descriptor: DescriptorConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSection {
    /// Project name
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    "unnamed".to_string()
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

/// Project-relative locations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
    /// Java source tree
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Build output tree, recreated on every run
    #[serde(default = "default_build")]
    pub build: PathBuf,

    /// Resource tree copied into the distribution
    #[serde(default = "default_resources")]
    pub resources: PathBuf,

    /// Plugin support tree copied into the distribution
    #[serde(default = "default_plugin_support")]
    pub plugin_support: PathBuf,

    /// Dependency descriptor
    #[serde(default = "default_descriptor")]
    pub descriptor: PathBuf,

    /// Distribution directory, relative to the build tree
    #[serde(default = "default_dist")]
    pub dist: PathBuf,

    /// Files copied into the distribution root
    #[serde(default)]
    pub docs: Vec<PathBuf>,
}

fn default_source() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_DIR)
}

fn default_build() -> PathBuf {
    PathBuf::from(DEFAULT_BUILD_DIR)
}

fn default_resources() -> PathBuf {
    PathBuf::from(DEFAULT_RESOURCE_DIR)
}

fn default_plugin_support() -> PathBuf {
    PathBuf::from(DEFAULT_PLUGIN_SUPPORT_DIR)
}

fn default_descriptor() -> PathBuf {
    PathBuf::from(DEFAULT_DESCRIPTOR)
}

fn default_dist() -> PathBuf {
    PathBuf::from(DEFAULT_DIST_DIR)
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            build: default_build(),
            resources: default_resources(),
            plugin_support: default_plugin_support(),
            descriptor: default_descriptor(),
            dist: default_dist(),
            docs: Vec::new(),
        }
    }
}

/// Compiler settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompilerConfig {
    /// Compiler executable
    #[serde(default = "default_compiler")]
    pub command: String,

    /// Classpath separator (platform separator if unset)
    #[serde(default)]
    pub separator: Option<String>,

    /// Extra arguments passed before the entry-point file
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_compiler() -> String {
    DEFAULT_COMPILER.to_string()
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            command: default_compiler(),
            separator: None,
            args: Vec::new(),
        }
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationConfig {
    /// Main class, compiled first
    pub main: ClassId,

    /// Archive file name
    pub archive: String,

    /// Directory packaged into the archive (package of `main` if unset)
    #[serde(default)]
    pub package_root: Option<String>,

    /// Manifest merged into the archive
    #[serde(default)]
    pub manifest: Option<PathBuf>,
}

impl ApplicationConfig {
    /// Member directory of the application archive, with a trailing `/`
    pub fn member_dir(&self) -> String {
        match &self.package_root {
            Some(root) if root.ends_with('/') => root.clone(),
            Some(root) => format!("{root}/"),
            None => self.main.package_dir(),
        }
    }
}

/// Descriptor parsing settings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DescriptorConfig {
    /// Handling of entry lines that cannot be parsed
    #[serde(default)]
    pub on_malformed: MalformedPolicy,
}

/// Absolute locations derived from a project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Project root
    pub project: PathBuf,
    /// Source tree
    pub source: PathBuf,
    /// Build tree
    pub build: PathBuf,
    /// Resource tree
    pub resources: PathBuf,
    /// Plugin support tree
    pub plugin_support: PathBuf,
    /// Descriptor file
    pub descriptor: PathBuf,
    /// Distribution root inside the build tree
    pub dist: PathBuf,
    /// Application manifest, if any
    pub manifest: Option<PathBuf>,
    /// Documentation files
    pub docs: Vec<PathBuf>,
}

/// Substitute environment variables in a string using ${VAR} syntax.
///
/// Unset variables expand to the empty string.
///
/// # Examples
/// ```
/// use jarforge::core::project::substitute_env_vars;
///
/// std::env::set_var("JARFORGE_DOC_VAR", "lib");
/// let result = substitute_env_vars("res/${JARFORGE_DOC_VAR}/x.jar").unwrap();
/// assert_eq!(result, "res/lib/x.jar");
/// std::env::remove_var("JARFORGE_DOC_VAR");
/// ```
pub fn substitute_env_vars(input: &str) -> Result<String, String> {
    let re =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| format!("Invalid regex: {e}"))?;

    let mut last_end = 0;
    let mut output = String::new();

    for cap in re.captures_iter(input) {
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        output.push_str(&input[last_end..full_match.start()]);
        output.push_str(&std::env::var(&cap[1]).unwrap_or_default());
        last_end = full_match.end();
    }

    output.push_str(&input[last_end..]);
    Ok(output)
}

/// Recursively substitute environment variables in a TOML value
fn substitute_in_value(value: &mut toml::Value) -> Result<(), String> {
    match value {
        toml::Value::String(s) => {
            *s = substitute_env_vars(s)?;
        }
        toml::Value::Array(arr) => {
            for item in arr.iter_mut() {
                substitute_in_value(item)?;
            }
        }
        toml::Value::Table(table) => {
            for (_, v) in table.iter_mut() {
                substitute_in_value(v)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Whether a configured path names something strictly inside its base
/// directory. `.`, `./` and the empty path name the base itself.
fn is_contained(path: &Path) -> bool {
    path.is_relative()
        && path.components().any(|c| matches!(c, Component::Normal(_)))
        && path
            .components()
            .all(|c| !matches!(c, Component::ParentDir))
}

/// Normal components of a relative path, so `./src/` and `src` compare equal
fn normalized(path: &Path) -> Vec<&std::ffi::OsStr> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}

/// Whether either path is the other or lies inside it
fn overlaps(a: &Path, b: &Path) -> bool {
    let (a, b) = (normalized(a), normalized(b));
    a.starts_with(&b) || b.starts_with(&a)
}

impl ProjectConfig {
    /// Load the project file from a project directory, substituting `${VAR}`
    pub fn load(project_dir: &Path) -> Result<Self, ConfigError> {
        let path = project_dir.join(PROJECT_FILE);
        if !path.exists() {
            return Err(ConfigError::NotFound { path });
        }
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            error: e.to_string(),
        })?;
        Self::from_toml_with_env(&content)
    }

    /// Parse project file content after environment substitution
    pub fn from_toml_with_env(content: &str) -> Result<Self, ConfigError> {
        let mut value: toml::Value =
            toml::from_str(content).map_err(|source| ConfigError::Parse { source })?;
        substitute_in_value(&mut value).map_err(ConfigError::Substitution)?;
        value
            .try_into::<Self>()
            .map_err(|source| ConfigError::Parse { source })
    }

    /// Parse project file content verbatim
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Classpath separator in effect
    pub fn separator(&self) -> &str {
        self.compiler
            .separator
            .as_deref()
            .unwrap_or(CLASSPATH_SEPARATOR)
    }

    /// Entry points in compile order: the application, then each plugin
    pub fn entry_points(&self) -> Vec<&ClassId> {
        std::iter::once(&self.application.main)
            .chain(self.plugins.iter())
            .collect()
    }

    /// Resolve all configured locations against the project directory
    pub fn resolve(&self, project_dir: &Path) -> ResolvedPaths {
        let build = project_dir.join(&self.paths.build);
        ResolvedPaths {
            project: project_dir.to_path_buf(),
            source: project_dir.join(self.paths.source.as_path()),
            dist: build.join(&self.paths.dist),
            build,
            resources: project_dir.join(self.paths.resources.as_path()),
            plugin_support: project_dir.join(self.paths.plugin_support.as_path()),
            descriptor: project_dir.join(self.paths.descriptor.as_path()),
            manifest: self.application.manifest.as_ref().map(|m| project_dir.join(m)),
            docs: self.paths.docs.iter().map(|d| project_dir.join(d)).collect(),
        }
    }

    /// Project inputs that must survive a build, keyed by setting name
    fn inputs(&self) -> Vec<(&'static str, &Path)> {
        let mut inputs: Vec<(&'static str, &Path)> = vec![
            ("paths.source", self.paths.source.as_path()),
            ("paths.resources", self.paths.resources.as_path()),
            ("paths.plugin_support", self.paths.plugin_support.as_path()),
            ("paths.descriptor", self.paths.descriptor.as_path()),
        ];
        if let Some(manifest) = &self.application.manifest {
            inputs.push(("application.manifest", manifest.as_path()));
        }
        inputs.extend(self.paths.docs.iter().map(|d| ("paths.docs", d.as_path())));
        inputs
    }

    /// Validate the configuration and report every problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        let archive = &self.application.archive;
        if !archive.ends_with(ARCHIVE_EXT) || archive.len() == ARCHIVE_EXT.len() {
            problems.push(format!(
                "application.archive '{archive}' must be a file name ending in {ARCHIVE_EXT}"
            ));
        }
        if archive.contains('/') || archive.contains('\\') {
            problems.push(format!(
                "application.archive '{archive}' must not contain path separators"
            ));
        }

        if let Some(root) = &self.application.package_root {
            if !is_contained(Path::new(root)) {
                problems.push(format!(
                    "application.package_root '{root}' must be a relative path inside the build tree"
                ));
            }
        }

        if !is_contained(&self.paths.build) {
            problems.push(format!(
                "paths.build '{}' must be a relative path inside the project",
                self.paths.build.display()
            ));
        } else {
            for (key, input) in self.inputs() {
                let local = input.is_relative()
                    && !input.components().any(|c| matches!(c, Component::ParentDir));
                if local && overlaps(&self.paths.build, input) {
                    problems.push(format!(
                        "paths.build '{}' overlaps {key} '{}'; the build directory is deleted on every run",
                        self.paths.build.display(),
                        input.display()
                    ));
                }
            }
        }
        if !is_contained(&self.paths.dist) {
            problems.push(format!(
                "paths.dist '{}' must be a relative path inside the build tree",
                self.paths.dist.display()
            ));
        }

        if self.compiler.command.trim().is_empty() {
            problems.push("compiler.command must not be empty".to_string());
        }
        if self.compiler.separator.as_deref() == Some("") {
            problems.push("compiler.separator must not be empty".to_string());
        }

        for (index, plugin) in self.plugins.iter().enumerate() {
            if self.plugins[..index].contains(plugin) {
                problems.push(format!("plugin '{plugin}' is listed more than once"));
            }
            if plugin.archive_name() == *archive {
                problems.push(format!(
                    "plugin '{plugin}' archive collides with application.archive"
                ));
            }
            if *plugin == self.application.main {
                problems.push(format!("plugin '{plugin}' is the application main class"));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid { problems })
        }
    }

    /// Template written by `jarforge init`
    ///
    /// The name is written as an escaped TOML string. It doubles as the
    /// distribution directory only when it is a single plain path component.
    pub fn template(name: &str) -> String {
        let quoted = toml::Value::String(name.to_string()).to_string();
        let plain = name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'));
        let dist = if plain && is_contained(Path::new(name)) {
            quoted.clone()
        } else {
            toml::Value::String(DEFAULT_DIST_DIR.to_string()).to_string()
        };
        format!(
            r#"# Plugin main classes, packaged in this order
plugins = []

[project]
name = {quoted}

[paths]
source = "{DEFAULT_SOURCE_DIR}"
build = "{DEFAULT_BUILD_DIR}"
resources = "{DEFAULT_RESOURCE_DIR}"
plugin_support = "{DEFAULT_PLUGIN_SUPPORT_DIR}"
descriptor = "{DEFAULT_DESCRIPTOR}"
dist = {dist}
docs = []

[compiler]
command = "{DEFAULT_COMPILER}"
args = []

[application]
main = "com.example.app.Main"
archive = "app.jar"
# package_root = "com/example/app/"
# manifest = "MANIFEST.MF"

[descriptor]
# "error" aborts on unparseable <classpathentry> lines, "skip" drops them
on_malformed = "error"
"#
        )
    }
}
