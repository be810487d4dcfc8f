//! Configuration for pagesim runs.
//!
//! A [`SimulationConfig`] bundles everything the collaborators around the
//! engine need: the reference string, the frame count, which policies to
//! run and how to present the results. It can be written as JSON:
//!
//! ```json
//! {
//!   "references": [7, 0, 1, 2, 0, 3, 0, 4],
//!   "frames": 3,
//!   "policies": ["fifo", "lru", "optimal"],
//!   "optimal_strategy": "scan",
//!   "output": "table"
//! }
//! ```
//!
//! Every field is optional and falls back to [`SimulationConfig::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{Capacity, Error, PageId, Result};
use crate::engine::{OptimalStrategy, Policy};

/// Default number of frames.
///
/// Three frames is the textbook setting most classroom reference strings
/// are worked against.
pub const DEFAULT_FRAMES: i64 = 3;

/// How results are presented.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One "<policy> Page Faults: N" line per policy.
    #[default]
    Summary,
    /// Step-by-step frame table per policy.
    Table,
    /// Full results as JSON.
    Json,
}

/// Parameters for one invocation of the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct SimulationConfig {
    /// Reference string to simulate.
    pub references: Vec<PageId>,

    /// Number of frames. Signed so that negative input reaches validation.
    pub frames: i64,

    /// Policies to run, in output order.
    pub policies: Vec<Policy>,

    /// Lookahead strategy for the Optimal policy.
    pub optimal_strategy: OptimalStrategy,

    pub output: OutputFormat,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            references: Vec::new(),
            frames: DEFAULT_FRAMES,
            policies: Policy::ALL.to_vec(),
            optimal_strategy: OptimalStrategy::default(),
            output: OutputFormat::default(),
        }
    }
}

/// On-disk form of [`SimulationConfig`], with policy selectors still as
/// text so that unknown names surface as `Error::InvalidPolicy`.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    references: Vec<PageId>,
    frames: i64,
    policies: Vec<String>,
    optimal_strategy: OptimalStrategy,
    output: OutputFormat,
}

impl Default for RawConfig {
    fn default() -> Self {
        let config = SimulationConfig::default();
        Self {
            references: config.references,
            frames: config.frames,
            policies: config.policies.iter().map(|p| p.name().to_string()).collect(),
            optimal_strategy: config.optimal_strategy,
            output: config.output,
        }
    }
}

impl TryFrom<RawConfig> for SimulationConfig {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let policies = raw
            .policies
            .iter()
            .map(|name| name.parse())
            .collect::<Result<Vec<Policy>>>()?;
        Ok(Self {
            references: raw.references,
            frames: raw.frames,
            policies,
            optimal_strategy: raw.optimal_strategy,
            output: raw.output,
        })
    }
}

impl SimulationConfig {
    /// Parse a configuration from JSON text.
    ///
    /// Policy names are matched like `Policy::from_str`: any case, with the
    /// opt/belady aliases.
    ///
    /// # Errors
    /// - `Error::Json` if the text is not a valid configuration
    /// - `Error::InvalidPolicy` for an unknown policy name
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(text)?;
        raw.try_into()
    }

    /// Read a configuration file.
    ///
    /// # Errors
    /// - `Error::Io` if the file cannot be read
    /// - `Error::Json` if it is not a valid configuration
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Check the configuration can be run, returning the frame capacity.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames` < 1
    /// - `Error::EmptyReferenceString` if there are no references
    pub fn validate(&self) -> Result<Capacity> {
        let capacity = Capacity::try_from(self.frames)?;
        if self.references.is_empty() {
            return Err(Error::EmptyReferenceString);
        }
        Ok(capacity)
    }

    /// Policies to run, falling back to all of them when none are listed.
    pub fn policies(&self) -> &[Policy] {
        if self.policies.is_empty() {
            &Policy::ALL
        } else {
            &self.policies
        }
    }
}
