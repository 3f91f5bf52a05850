//! Build orchestration logic
//!
//! Runs the fixed recipe: clean, stage sources, extract and format the
//! classpath, compile each entry point, package, assemble the layout.
//! Every stage is fail-fast and errors carry the stage that raised them.

use std::path::{Path, PathBuf};

use crate::core::classpath;
use crate::core::compile;
use crate::core::descriptor;
use crate::core::layout::{self, LayoutReport};
use crate::core::package::{self, ArchiveSpec};
use crate::core::plugin::ClassId;
use crate::core::project::{ProjectConfig, ResolvedPaths};
use crate::error::{JarforgeError, PipelineError, Stage};
use crate::infra::filesystem;
use crate::infra::toolchain::{Invocation, JavaCompiler};

/// Receives progress notifications while the pipeline runs
pub trait BuildObserver {
    /// A stage is about to start
    fn stage_started(&mut self, _stage: Stage) {}

    /// An entry point is about to be compiled
    fn compiling(&mut self, _entry: &ClassId) {}

    /// An entry point compiled successfully
    fn compiled(&mut self, _entry: &ClassId) {}
}

/// Observer that ignores every notification
#[derive(Debug, Default)]
pub struct SilentObserver;

impl BuildObserver for SilentObserver {}

/// Outcome of a successful build
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Library paths from the descriptor
    pub libraries: Vec<String>,
    /// Joined classpath
    pub classpath: String,
    /// Entry points compiled, in order
    pub compiled: Vec<ClassId>,
    /// Archive name and entry list, in packaging order
    pub archives: Vec<(String, Vec<String>)>,
    /// Layout result
    pub layout: LayoutReport,
}

/// Everything a build would do, without doing it
#[derive(Debug, Clone)]
pub struct BuildPlan {
    /// Resolved locations
    pub paths: ResolvedPaths,
    /// Joined classpath
    pub classpath: String,
    /// Compiler invocations, in order
    pub compilations: Vec<(ClassId, Invocation)>,
    /// Archives to write, in order
    pub archives: Vec<ArchiveSpec>,
}

/// Build orchestrator
#[derive(Debug)]
pub struct BuildOrchestrator<'a> {
    config: &'a ProjectConfig,
    project_dir: PathBuf,
    compiler: JavaCompiler,
}

impl<'a> BuildOrchestrator<'a> {
    /// Create an orchestrator for a project directory
    pub fn new(config: &'a ProjectConfig, project_dir: &Path) -> Self {
        Self {
            config,
            project_dir: project_dir.to_path_buf(),
            compiler: JavaCompiler::new(config.compiler.command.clone()),
        }
    }

    /// Resolved project locations
    pub fn paths(&self) -> ResolvedPaths {
        self.config.resolve(&self.project_dir)
    }

    /// Read the descriptor and join its library entries
    pub fn classpath(&self) -> Result<(Vec<String>, String), PipelineError> {
        let paths = self.paths();
        let libraries =
            descriptor::read_library_paths(&paths.descriptor, self.config.descriptor.on_malformed)
                .map_err(|e| PipelineError::new(Stage::ExtractClasspath, e))?;
        let joined = classpath::join(&libraries, self.config.separator())
            .map_err(|e| PipelineError::new(Stage::FormatClasspath, e))?;
        Ok((libraries, joined))
    }

    /// Compute the build plan without touching the filesystem
    pub fn plan(&self) -> Result<BuildPlan, PipelineError> {
        let paths = self.paths();
        let (_, joined) = self.classpath()?;
        let compilations = self
            .config
            .entry_points()
            .into_iter()
            .map(|entry| {
                let invocation =
                    compile::invocation_for(entry, &paths.build, &joined, &self.config.compiler.args);
                (entry.clone(), invocation)
            })
            .collect();

        Ok(BuildPlan {
            archives: package::plan_archives(self.config, &self.project_dir),
            paths,
            classpath: joined,
            compilations,
        })
    }

    /// Run the full pipeline
    pub fn run(&self, observer: &mut dyn BuildObserver) -> Result<BuildReport, PipelineError> {
        let paths = self.paths();
        tracing::info!("Building {}", self.config.project.name);

        observer.stage_started(Stage::Clean);
        self.config
            .validate()
            .map_err(|e| PipelineError::new(Stage::Clean, e))?;
        filesystem::remove_dir_all(&paths.build)
            .and_then(|()| filesystem::create_dir_all(&paths.build))
            .map_err(|e| PipelineError::new(Stage::Clean, e))?;

        observer.stage_started(Stage::StageSources);
        let staged = compile::stage_sources(&paths.source, &paths.build)
            .map_err(|e| PipelineError::new(Stage::StageSources, e))?;

        observer.stage_started(Stage::ExtractClasspath);
        let (libraries, joined) = self.classpath()?;
        tracing::info!("Classpath has {} libraries", libraries.len());

        observer.stage_started(Stage::Compile);
        let mut compiled = Vec::new();
        for entry in self.config.entry_points() {
            observer.compiling(entry);
            compile::compile_entry(
                &self.compiler,
                entry,
                &paths.build,
                &joined,
                &self.config.compiler.args,
                &self.project_dir,
            )
            .map_err(|e| PipelineError::new(Stage::Compile, e))?;
            observer.compiled(entry);
            compiled.push(entry.clone());
        }

        observer.stage_started(Stage::Package);
        let specs = package::plan_archives(self.config, &self.project_dir);
        let reports = package::write_archives(&specs, &paths.build)
            .map_err(|e| PipelineError::new(Stage::Package, e))?;
        let archives = reports
            .iter()
            .map(|r| (r.archive.clone(), r.entries.clone()))
            .collect();

        observer.stage_started(Stage::AssembleLayout);
        let layout = layout::assemble(&paths, &reports, &staged)
            .map_err(|e| PipelineError::new(Stage::AssembleLayout, e))?;

        tracing::info!("Build complete: {}", layout.dist.display());
        Ok(BuildReport {
            libraries,
            classpath: joined,
            compiled,
            archives,
            layout,
        })
    }
}

/// Load, validate and build the project in `project_dir`
pub fn build_project(
    project_dir: &Path,
    observer: &mut dyn BuildObserver,
) -> Result<BuildReport, JarforgeError> {
    let config = ProjectConfig::load(project_dir)?;
    config.validate()?;
    Ok(BuildOrchestrator::new(&config, project_dir).run(observer)?)
}
