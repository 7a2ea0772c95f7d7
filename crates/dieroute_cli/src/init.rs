//! `dieroute init`: project scaffolding command.
//!
//! Creates a project directory with a `dieroute.toml` and a small three-die
//! example design under `inputs/`, so `dieroute run` works right away.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dieroute_config::CONFIG_FILE_NAME;

use crate::GlobalArgs;

const SAMPLE_POSITION: &str = "\
Die0: g1 g2 g3
Die1: g4 g5 gp1
Die2: g6 g7
";

const SAMPLE_NETWORK: &str = "\
0 2 1
1 0 2
1 1 0
";

const SAMPLE_NET: &str = "\
# <node> <type> [<weight>]
#   s = source endpoint, l = relay endpoint
g1 s
g2 s 2
g3 l
g4 s
g5 l
gp1 l
g6 l
g7 s
";

/// Runs the `dieroute init` command.
///
/// If `name` is `Some`, creates a new subdirectory with that name.
/// Otherwise initializes in the current working directory.
pub fn run(name: Option<String>, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = match &name {
        Some(n) => {
            let dir = PathBuf::from(n);
            if dir.exists() {
                return Err(format!("directory '{n}' already exists").into());
            }
            fs::create_dir_all(&dir)?;
            dir
        }
        None => std::env::current_dir()?,
    };
    if project_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(format!(
            "{CONFIG_FILE_NAME} already exists in {}",
            project_dir.display()
        )
        .into());
    }

    let project_name = project_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("design");

    if !global.quiet {
        eprintln!("  Creating new dieroute project `{project_name}`");
    }

    let created = write_project(&project_dir, project_name)?;
    if !global.quiet {
        for path in created {
            eprintln!("     Created {}", path.display());
        }
    }
    Ok(0)
}

/// Writes the configuration and the sample inputs, returning the created files.
fn write_project(root: &Path, name: &str) -> io::Result<Vec<PathBuf>> {
    let inputs = root.join("inputs");
    fs::create_dir_all(&inputs)?;

    let files = [
        (root.join(CONFIG_FILE_NAME), config_template(name)),
        (
            inputs.join(format!("{name}.die.position")),
            SAMPLE_POSITION.to_string(),
        ),
        (
            inputs.join(format!("{name}.die.network")),
            SAMPLE_NETWORK.to_string(),
        ),
        (inputs.join(format!("{name}.net")), SAMPLE_NET.to_string()),
    ];
    let mut created = Vec::with_capacity(files.len());
    for (path, content) in files {
        fs::write(&path, content)?;
        created.push(path);
    }
    Ok(created)
}

fn config_template(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"
description = ""

[inputs]
position = "inputs/{name}.die.position"
network = "inputs/{name}.die.network"
net = "inputs/{name}.net"

[routing]
hop_limit = 4              # maximum dies per route, both ends included
exploration_budget = 1000  # candidate sequences collected per die pair
dead_ends = "keep"         # "keep" | "discard"
relay_reuse = "local"      # "local" | "exclusive"

[report]
output = "path_allocation_results.txt"
max_listed = 1000
format = "text"            # "text" | "json"
"#
    )
}
