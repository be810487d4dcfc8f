//! Policy selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::Error;

/// The replacement policies the engine knows how to run.
///
/// Serializes as the lowercase name. Deserializes through [`FromStr`], so
/// configuration files accept the same spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Policy {
    /// First-in, first-out: evict the page that arrived earliest.
    Fifo,
    /// Least recently used: evict the page referenced longest ago.
    Lru,
    /// Belady's offline algorithm: evict the page reused farthest in the future.
    Optimal,
}

impl Policy {
    /// Every policy, in the order comparisons report them.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    /// Parse a selector name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    /// `Error::InvalidPolicy` for anything but fifo, lru, optimal (or the
    /// opt/belady aliases).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" | "belady" => Ok(Policy::Optimal),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

impl TryFrom<String> for Policy {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// How the Optimal policy looks ahead for the next use of a resident page.
///
/// Both strategies choose the same victim on every fault.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OptimalStrategy {
    /// Scan the unprocessed suffix for every resident page on each fault.
    #[default]
    Scan,
    /// Precompute each reference's next occurrence once per run.
    #[value(name = "table")]
    #[serde(alias = "table")]
    NextUseTable,
}
