//! Path resolution: anchoring configured file paths to the project directory.

use crate::types::ProjectConfig;
use std::path::{Path, PathBuf};

/// Input and output file locations with relative paths resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// The die placement file.
    pub position: PathBuf,
    /// The capacity matrix file.
    pub network: PathBuf,
    /// The endpoint declaration file.
    pub net: PathBuf,
    /// The report file.
    pub output: PathBuf,
}

/// Resolves every configured path against `project_dir`.
///
/// Absolute paths are kept as written; relative paths are joined onto the
/// directory that contains `dieroute.toml`.
pub fn resolve_paths(config: &ProjectConfig, project_dir: &Path) -> ResolvedPaths {
    let anchor = |p: &str| -> PathBuf {
        let path = Path::new(p);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_dir.join(path)
        }
    };

    ResolvedPaths {
        position: anchor(&config.inputs.position),
        network: anchor(&config.inputs.network),
        net: anchor(&config.inputs.net),
        output: anchor(&config.report.output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn relative_paths_join_project_dir() {
        let toml = r#"
[project]
name = "design"

[inputs]
position = "inputs/design.die.position"
network = "inputs/design.die.network"
net = "inputs/design.net"
"#;
        let config = load_config_from_str(toml).unwrap();
        let resolved = resolve_paths(&config, Path::new("/work/proj"));
        assert_eq!(
            resolved.position,
            PathBuf::from("/work/proj/inputs/design.die.position")
        );
        assert_eq!(resolved.net, PathBuf::from("/work/proj/inputs/design.net"));
        assert_eq!(
            resolved.output,
            PathBuf::from("/work/proj/path_allocation_results.txt")
        );
    }

    #[test]
    fn absolute_paths_preserved() {
        let toml = r#"
[project]
name = "design"

[inputs]
position = "/data/a.die.position"
network = "b.die.network"
net = "/data/c.net"

[report]
output = "/tmp/report.txt"
"#;
        let config = load_config_from_str(toml).unwrap();
        let resolved = resolve_paths(&config, Path::new("/work/proj"));
        assert_eq!(resolved.position, PathBuf::from("/data/a.die.position"));
        assert_eq!(resolved.network, PathBuf::from("/work/proj/b.die.network"));
        assert_eq!(resolved.net, PathBuf::from("/data/c.net"));
        assert_eq!(resolved.output, PathBuf::from("/tmp/report.txt"));
    }
}
