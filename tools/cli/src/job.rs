//! Generator jobs: a seed, a chain of fork steps and a word count.
//!
//! A job is built from command-line flags or loaded from a JSON file.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use tfgen::TfGen;
use tfgen_common::{Error, Seed};

/// Words printed when a job does not say otherwise.
pub const DEFAULT_COUNT: usize = 16;

/// One step on the way from the seeded root to the generator that is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum Fork {
    /// Split and continue with the caller.
    Parent,
    /// Split and continue with the new sibling.
    Child,
    /// Re-key early if the path budget is low.
    Level,
    /// Batch split and continue with child `index` of `2^width`.
    Batch { width: u32, index: u32 },
}

impl Fork {
    fn apply(self, mut gen: TfGen) -> tfgen::Result<TfGen> {
        match self {
            Fork::Parent => {
                gen.split()?;
                Ok(gen)
            }
            Fork::Child => gen.split(),
            Fork::Level => {
                gen.level()?;
                Ok(gen)
            }
            Fork::Batch { width, index } => gen.split_n(width, index),
        }
    }
}

impl FromStr for Fork {
    type Err = Error;

    fn from_str(s: &str) -> tfgen::Result<Self> {
        match s.trim() {
            "parent" => Ok(Fork::Parent),
            "child" => Ok(Fork::Child),
            "level" => Ok(Fork::Level),
            other => {
                let mut parts = other.split(':');
                match (parts.next(), parts.next(), parts.next(), parts.next()) {
                    (Some("batch"), Some(width), Some(index), None) => Ok(Fork::Batch {
                        width: parse_number(width)?,
                        index: parse_number(index)?,
                    }),
                    _ => Err(Error::InvalidInput(format!(
                        "Unknown fork '{}'. Use: parent, child, level, or batch:WIDTH:INDEX",
                        other
                    ))),
                }
            }
        }
    }
}

impl fmt::Display for Fork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fork::Parent => write!(f, "parent"),
            Fork::Child => write!(f, "child"),
            Fork::Level => write!(f, "level"),
            Fork::Batch { width, index } => write!(f, "batch:{}:{}", width, index),
        }
    }
}

fn parse_number(text: &str) -> tfgen::Result<u32> {
    text.parse::<u32>()
        .map_err(|e| Error::InvalidInput(format!("Invalid number '{}': {}", text, e)))
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

/// Parameters of one sampling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Seed of the root generator.
    pub seed: Seed,
    /// Words discarded from the root before forking.
    #[serde(default)]
    pub skip: usize,
    /// Words sampled after forking.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Fork steps, applied in order.
    #[serde(default)]
    pub forks: Vec<Fork>,
}

impl Job {
    /// Deserialize a job from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid job description")
    }

    /// Load a job from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job file {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Run the job and return the sampled words.
    pub fn run(&self) -> tfgen::Result<Vec<u32>> {
        let mut gen = TfGen::from(self.seed);
        for _ in 0..self.skip {
            gen.next_u32()?;
        }

        for fork in &self.forks {
            debug!("Applying fork {} at depth {}", fork, gen.path().depth());
            gen = fork.apply(gen)?;
        }

        (0..self.count).map(|_| gen.next_u32()).collect()
    }
}
