//! Shared pipeline helpers for CLI commands.
//!
//! Project root resolution, configuration loading, input loading with
//! diagnostic rendering, and routing option overrides.

use std::path::{Path, PathBuf};

use dieroute_config::{
    load_config, load_config_from_str, resolve_paths, ProjectConfig, ResolvedPaths,
    CONFIG_FILE_NAME,
};
use dieroute_diagnostics::{DiagnosticRenderer, DiagnosticSink, Severity, TerminalRenderer};
use dieroute_input::{load_inputs, DesignInputs, InputError};

use crate::GlobalArgs;

/// A loaded project: its directory, configuration and resolved file paths.
pub struct Project {
    /// The directory containing the configuration file.
    pub dir: PathBuf,
    /// The parsed configuration.
    pub config: ProjectConfig,
    /// Input and output paths anchored at `dir`.
    pub paths: ResolvedPaths,
}

/// Walks up from `start` looking for the nearest directory containing `dieroute.toml`.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE_NAME).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find {CONFIG_FILE_NAME} in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Loads the project selected by the global flags.
///
/// If `--config` names a file, that file is loaded and its directory is the
/// project directory. If it names a directory, `dieroute.toml` is loaded from
/// there. Otherwise the current directory and its parents are searched.
pub fn load_project(global: &GlobalArgs) -> Result<Project, Box<dyn std::error::Error>> {
    let (dir, config) = match &global.config {
        Some(config_path) => {
            let path = PathBuf::from(config_path);
            if path.is_file() {
                let content = std::fs::read_to_string(&path)?;
                let dir = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                (dir, load_config_from_str(&content)?)
            } else {
                let config = load_config(&path)?;
                (path, config)
            }
        }
        None => {
            let dir = find_project_root(&std::env::current_dir()?)?;
            let config = load_config(&dir)?;
            (dir, config)
        }
    };
    let paths = resolve_paths(&config, &dir);
    Ok(Project { dir, config, paths })
}

/// Loads the design inputs and renders every diagnostic produced on the way.
///
/// Returns `Ok(None)` if the inputs had errors; they have been rendered and
/// the caller should exit with status 1.
pub fn load_design(
    project: &Project,
    global: &GlobalArgs,
) -> Result<Option<DesignInputs>, Box<dyn std::error::Error>> {
    let sink = DiagnosticSink::new();
    let loaded = load_inputs(&project.paths, &sink);
    render_diagnostics(&sink, global);
    match loaded {
        Ok(design) => Ok(Some(design)),
        Err(InputError::Invalid { errors }) => {
            if !global.quiet {
                eprintln!("   Aborted: {errors} input error(s)");
            }
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Renders the diagnostics in `sink` to stderr.
///
/// In quiet mode only errors are shown. Returns the number rendered.
pub fn render_diagnostics(sink: &DiagnosticSink, global: &GlobalArgs) -> usize {
    let renderer = TerminalRenderer::new(global.color);
    let mut rendered = 0;
    for diag in sink.diagnostics() {
        if global.quiet && diag.severity != Severity::Error {
            continue;
        }
        eprintln!("{}", renderer.render(&diag));
        rendered += 1;
    }
    rendered
}
