//! Compilation driver
//!
//! Sources are staged into the build tree and compiled in place: the build
//! tree is both the source path and the destination. Each entry point is a
//! full, independent compiler run that pulls in everything it references.

use std::path::{Path, PathBuf};

use crate::core::plugin::ClassId;
use crate::error::{CompileError, FilesystemError};
use crate::infra::filesystem;
use crate::infra::toolchain::{Invocation, JavaCompiler};

/// Copy the source tree into the build tree.
///
/// Returns the top-level names that were staged; these are the transient
/// trees removed once archiving is done.
pub fn stage_sources(source: &Path, build: &Path) -> Result<Vec<String>, FilesystemError> {
    if !source.is_dir() {
        return Err(FilesystemError::NotFound {
            path: source.to_path_buf(),
        });
    }
    let staged = filesystem::list_dir_names(source)?;
    let copied = filesystem::copy_dir_contents(source, build)?;
    tracing::info!("Staged {copied} source files into {}", build.display());
    Ok(staged)
}

/// Build the compiler invocation for one entry point
pub fn invocation_for(
    entry: &ClassId,
    build: &Path,
    classpath: &str,
    extra_args: &[String],
) -> Invocation {
    Invocation {
        source_path: build.to_path_buf(),
        classpath: classpath.to_string(),
        destination: build.to_path_buf(),
        extra_args: extra_args.to_vec(),
        source_file: build.join(entry.source_file()),
    }
}

/// Compile a single entry point
pub fn compile_entry(
    compiler: &JavaCompiler,
    entry: &ClassId,
    build: &Path,
    classpath: &str,
    extra_args: &[String],
    working_dir: &Path,
) -> Result<(), CompileError> {
    let invocation = invocation_for(entry, build, classpath, extra_args);
    if !invocation.source_file.is_file() {
        return Err(CompileError::MissingEntryPoint {
            entry: entry.to_string(),
            path: invocation.source_file,
        });
    }

    tracing::info!("Compiling {entry}");
    compiler.compile(&entry.to_string(), &invocation, working_dir)
}

/// Source files of every entry point, for reporting
pub fn entry_sources(entries: &[&ClassId], build: &Path) -> Vec<PathBuf> {
    entries
        .iter()
        .map(|entry| build.join(entry.source_file()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invocation_uses_build_tree_for_sources_and_output() {
        let entry = ClassId::parse("de.mpg.cbs.edled.Launcher").unwrap();
        let invocation = invocation_for(&entry, Path::new("build"), "a.jar", &[]);

        assert_eq!(invocation.source_path, PathBuf::from("build"));
        assert_eq!(invocation.destination, PathBuf::from("build"));
        assert_eq!(invocation.classpath, "a.jar");
        assert_eq!(
            invocation.source_file,
            PathBuf::from("build/de/mpg/cbs/edled/Launcher.java")
        );
    }

    #[test]
    fn test_stage_sources_reports_top_level_names() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        std::fs::create_dir_all(src.join("de/mpg")).unwrap();
        std::fs::write(src.join("de/mpg/A.java"), "class A {}").unwrap();
        std::fs::write(src.join("log4j.properties"), "").unwrap();

        let build = dir.path().join("build");
        let staged = stage_sources(&src, &build).unwrap();

        assert_eq!(staged, vec!["de", "log4j.properties"]);
        assert!(build.join("de/mpg/A.java").is_file());
    }

    #[test]
    fn test_stage_missing_source_tree() {
        let dir = TempDir::new().unwrap();
        let err = stage_sources(&dir.path().join("src"), &dir.path().join("build")).unwrap_err();
        assert!(matches!(err, FilesystemError::NotFound { .. }));
    }

    #[test]
    fn test_missing_entry_point_is_reported_before_running() {
        let dir = TempDir::new().unwrap();
        let entry = ClassId::parse("p.q.A").unwrap();
        let compiler = JavaCompiler::new("jarforge-no-such-compiler");

        let err = compile_entry(&compiler, &entry, dir.path(), "a.jar", &[], dir.path())
            .unwrap_err();
        assert!(matches!(err, CompileError::MissingEntryPoint { .. }));
    }

    #[test]
    fn test_entry_sources() {
        let a = ClassId::parse("p.q.A").unwrap();
        let b = ClassId::parse("p.r.B").unwrap();
        assert_eq!(
            entry_sources(&[&a, &b], Path::new("build")),
            vec![
                PathBuf::from("build/p/q/A.java"),
                PathBuf::from("build/p/r/B.java")
            ]
        );
    }
}
