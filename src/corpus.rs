use super::*;
use anyhow::ensure;
use itertools::Itertools;
use rand::{distributions::Uniform, Rng};

pub const DEFAULT_STRING_LEN: usize = 320;
pub const DEFAULT_CORPUS_SIZE: usize = 10_000;

/// The characters random strings are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the distinct characters of `symbols`, keeping
    /// the order they first appear in.
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols = symbols.chars().unique().collect::<Vec<_>>();
        ensure!(
            !symbols.is_empty(),
            "alphabet must contain at least one character"
        );
        Ok(Self { symbols })
    }

    /// The 26 lowercase ASCII letters.
    pub fn lowercase() -> Self {
        Self {
            symbols: ('a'..='z').collect(),
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl std::str::FromStr for Alphabet {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        Alphabet::new(value)
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbols.iter().collect::<String>())
    }
}

/// Returns a string of `len` characters, each drawn uniformly from `alphabet`.
pub fn generate_string<R: Rng + ?Sized>(rng: &mut R, alphabet: &Alphabet, len: usize) -> String {
    let dist = Uniform::new(0, alphabet.len());
    (0..len).map(|_| alphabet.symbols[rng.sample(dist)]).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    pub alphabet: Alphabet,
    pub string_len: usize,
    pub size: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            string_len: DEFAULT_STRING_LEN,
            size: DEFAULT_CORPUS_SIZE,
        }
    }
}

impl CorpusConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.size > 0,
            "corpus size must be at least 1 to pick a lookup target"
        );
        Ok(())
    }
}

/// A set of random strings, one of which is remembered as the lookup target.
#[derive(Debug, Clone)]
pub struct Corpus {
    strings: Vec<String>,
    target: usize,
}

impl Corpus {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &CorpusConfig) -> Result<Self> {
        config.validate()?;

        let target = rng.gen_range(0..config.size);
        let strings = (0..config.size)
            .map(|_| generate_string(rng, &config.alphabet, config.string_len))
            .collect();

        Ok(Self { strings, target })
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn target_index(&self) -> usize {
        self.target
    }

    pub fn target(&self) -> &str {
        &self.strings[self.target]
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Clears `container` and inserts every string of the corpus.
    pub fn populate<C: Container>(&self, container: &mut C) {
        container.clear();
        for value in self.strings.iter() {
            container.add(value.clone());
        }
    }

    /// Builds a fresh container holding the corpus.
    pub fn build<C: Container>(&self) -> C {
        let mut container = C::default();
        self.populate(&mut container);
        container
    }
}
