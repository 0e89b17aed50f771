pub mod corpus;
pub mod harness;
pub mod list;
pub mod set;
pub mod trie;

pub use anyhow::{Context, Result};
pub use corpus::*;
pub use harness::*;
pub use trie::*;

use anyhow::bail;
use std::{fmt::Display, str::FromStr};

/// A string container whose lookup cost is being measured.
pub trait Container: Default {
    /// Inserts a value into the container.
    fn add(&mut self, value: String);

    /// Returns `true` if the container holds the specified value.
    fn contains(&self, value: &str) -> bool;

    /// Removes every value from the container.
    fn clear(&mut self);

    /// Returns the number of values in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Trie,
    HashSet,
    FxHashSet,
    Array,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 4] = [
        ContainerKind::Trie,
        ContainerKind::HashSet,
        ContainerKind::FxHashSet,
        ContainerKind::Array,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContainerKind::Trie => "trie",
            ContainerKind::HashSet => "hash_set",
            ContainerKind::FxHashSet => "fx_hash_set",
            ContainerKind::Array => "array",
        }
    }

    /// The setup granularity each kind is measured with unless overridden.
    pub fn default_setup_level(&self) -> SetupLevel {
        match self {
            ContainerKind::Trie => SetupLevel::Invocation,
            _ => SetupLevel::Iteration,
        }
    }
}

impl Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContainerKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match ContainerKind::ALL
            .into_iter()
            .find(|kind| kind.name() == value)
        {
            Some(kind) => Ok(kind),
            None => bail!(
                "unknown container '{value}', expected one of: {}",
                itertools::join(ContainerKind::ALL.iter().map(|k| k.name()), ", ")
            ),
        }
    }
}
