//! Configuration types deserialized from `dieroute.toml`.

use serde::{Deserialize, Serialize};

/// Default maximum number of dies in a route, both ends included.
pub const DEFAULT_HOP_LIMIT: usize = 4;

/// Default number of candidate sequences collected per die pair.
pub const DEFAULT_EXPLORATION_BUDGET: usize = 1000;

/// Default number of routes listed individually in the text report.
pub const DEFAULT_MAX_LISTED: usize = 1000;

/// The top-level project configuration parsed from `dieroute.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Project metadata.
    pub project: ProjectMeta,
    /// Locations of the three input description files.
    pub inputs: InputPaths,
    /// Path search and allocation options.
    #[serde(default)]
    pub routing: RoutingConfig,
    /// Report output settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Project metadata.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project (design) name.
    pub name: String,
    /// A brief description of the design.
    #[serde(default)]
    pub description: String,
}

/// Paths of the input files, relative to the project directory unless absolute.
#[derive(Debug, Deserialize)]
pub struct InputPaths {
    /// Die placement file: one `<label>: <node> ...` line per die.
    pub position: String,
    /// Inter-die capacity matrix file.
    pub network: String,
    /// Endpoint type and weight declarations.
    pub net: String,
}

/// Options controlling path enumeration and allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Maximum number of dies in a candidate route, including both ends.
    pub hop_limit: usize,
    /// Maximum number of sequences collected per (source, target, hop limit).
    pub exploration_budget: usize,
    /// What the path search does with sequences cut off by the hop limit.
    pub dead_ends: DeadEndPolicy,
    /// Whether repeaters may be shared between unrelated allocations.
    pub relay_reuse: RelayPolicy,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            hop_limit: DEFAULT_HOP_LIMIT,
            exploration_budget: DEFAULT_EXPLORATION_BUDGET,
            dead_ends: DeadEndPolicy::default(),
            relay_reuse: RelayPolicy::default(),
        }
    }
}

/// Treatment of sequences that hit the hop limit before reaching the target die.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadEndPolicy {
    /// Collect them as candidates, exactly like sequences that arrive (default).
    ///
    /// A kept dead-end can be committed as an allocation whose die sequence
    /// ends short of the relay endpoint's die.
    #[default]
    Keep,
    /// Drop them: only sequences ending at the target die are candidates.
    Discard,
}

/// Scope of relay-endpoint uniqueness when choosing repeaters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayPolicy {
    /// Unique within one route only; other routes may reuse a repeater (default).
    #[default]
    Local,
    /// A repeater committed by any earlier route is never chosen again.
    Exclusive,
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Path of the report file written after allocation.
    pub output: String,
    /// How many routes the text report lists individually.
    pub max_listed: usize,
    /// Report file format.
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: "path_allocation_results.txt".to_string(),
            max_listed: DEFAULT_MAX_LISTED,
            format: ReportFormat::default(),
        }
    }
}

/// Report file format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable listing of routes and link usage (default).
    #[default]
    Text,
    /// The full allocation result as JSON.
    Json,
}
