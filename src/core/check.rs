//! Check command logic
//!
//! Validates configuration, the descriptor, input paths and compiler
//! availability, and reports what would be built without building.

use std::path::Path;

use crate::core::classpath;
use crate::core::compile;
use crate::core::descriptor;
use crate::core::package;
use crate::core::project::ProjectConfig;
use crate::infra::toolchain::JavaCompiler;

/// Result of the check operation
#[derive(Debug, Default)]
pub struct CheckResult {
    /// Configuration problems
    pub config_errors: Vec<String>,
    /// Descriptor or classpath problem
    pub classpath_error: Option<String>,
    /// Library entries found
    pub libraries: Vec<String>,
    /// Missing input paths
    pub missing_paths: Vec<String>,
    /// Whether the compiler was found
    pub compiler_available: bool,
    /// Entry points that would be compiled
    pub entry_points: Vec<String>,
    /// Archive instructions that would run
    pub archives: Vec<String>,
    /// Warnings encountered during check
    pub warnings: Vec<String>,
}

impl CheckResult {
    /// Check if all validations passed
    pub fn is_valid(&self) -> bool {
        self.config_errors.is_empty()
            && self.classpath_error.is_none()
            && self.missing_paths.is_empty()
            && self.compiler_available
    }
}

/// Perform check operation on a project
pub fn check(project_dir: &Path, config: &ProjectConfig) -> CheckResult {
    let mut result = CheckResult::default();
    let paths = config.resolve(project_dir);

    if let Err(e) = config.validate() {
        result.config_errors.push(e.to_string());
    }

    match descriptor::read_library_paths(&paths.descriptor, config.descriptor.on_malformed) {
        Ok(libs) => {
            if let Err(e) = classpath::join(&libs, config.separator()) {
                result.classpath_error = Some(e.to_string());
            }
            for lib in &libs {
                if !project_dir.join(lib).exists() {
                    result
                        .warnings
                        .push(format!("Library '{lib}' does not exist"));
                }
            }
            result.libraries = libs;
        }
        Err(e) => result.classpath_error = Some(e.to_string()),
    }

    let mut required = vec![
        paths.source.clone(),
        paths.resources.clone(),
        paths.plugin_support.clone(),
    ];
    required.extend(paths.manifest.iter().cloned());
    required.extend(paths.docs.iter().cloned());
    for path in required {
        if !path.exists() {
            result.missing_paths.push(path.display().to_string());
        }
    }

    let entries = config.entry_points();
    for source in compile::entry_sources(&entries, &paths.source) {
        if !source.is_file() {
            result
                .missing_paths
                .push(source.display().to_string());
        }
    }
    result.entry_points = entries.iter().map(ToString::to_string).collect();

    result.compiler_available = JavaCompiler::new(config.compiler.command.clone())
        .locate()
        .is_some();

    result.archives = package::plan_archives(config, project_dir)
        .iter()
        .map(ToString::to_string)
        .collect();

    result
}
