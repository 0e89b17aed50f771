use super::*;
use anyhow::{bail, ensure};
use fxhash::FxHashSet;
use log::{debug, info};
use rand::Rng;
use std::{
    collections::HashSet,
    hint::black_box,
    time::{Duration, Instant},
};

/// How often a container is rebuilt while it is being measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetupLevel {
    /// Rebuilt before every single timed lookup.
    Invocation,
    /// Rebuilt once per measurement iteration.
    Iteration,
}

impl SetupLevel {
    pub fn name(&self) -> &'static str {
        match self {
            SetupLevel::Invocation => "invocation",
            SetupLevel::Iteration => "iteration",
        }
    }
}

impl Display for SetupLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SetupLevel {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "invocation" => Ok(SetupLevel::Invocation),
            "iteration" => Ok(SetupLevel::Iteration),
            _ => bail!("unknown setup level '{value}', expected 'invocation' or 'iteration'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub corpus: CorpusConfig,
    pub warmup_iterations: usize,
    pub iterations: usize,
    /// Timed lookups per iteration.
    pub invocations: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            corpus: CorpusConfig::default(),
            warmup_iterations: 1,
            iterations: 10,
            invocations: 10,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        self.corpus.validate()?;
        ensure!(self.iterations > 0, "at least one iteration is required");
        ensure!(self.invocations > 0, "at least one invocation is required");
        ensure!(
            u32::try_from(self.iterations).is_ok(),
            "too many iterations: {}",
            self.iterations
        );
        ensure!(
            u32::try_from(self.invocations).is_ok(),
            "too many invocations per iteration: {}",
            self.invocations
        );
        Ok(())
    }
}

/// A populated container and the string that will be looked up in it.
#[derive(Debug, Default)]
pub struct Fixture<C: Container> {
    container: C,
    target: String,
    setups: usize,
}

impl<C: Container> Fixture<C> {
    /// Refills the container with a freshly generated corpus and picks a new
    /// target from it.
    pub fn setup<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &CorpusConfig) -> Result<()> {
        let corpus = Corpus::generate(rng, config)?;
        corpus.populate(&mut self.container);
        self.target = corpus.target().to_string();
        self.setups += 1;
        debug!(
            "populated {} values, target is #{}",
            self.container.len(),
            corpus.target_index()
        );
        Ok(())
    }

    /// The timed operation.
    #[inline]
    pub fn lookup(&self) -> bool {
        self.container.contains(&self.target)
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of times [`Fixture::setup`] has run.
    pub fn setups(&self) -> usize {
        self.setups
    }
}

/// Per-iteration average lookup times for one container.
#[derive(Debug, Clone)]
pub struct Report {
    pub kind: ContainerKind,
    pub setup_level: SetupLevel,
    pub samples: Vec<Duration>,
    pub setups: usize,
}

impl Report {
    pub fn average(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        let total = self.samples.iter().sum::<Duration>();
        Duration::from_secs_f64(total.as_secs_f64() / self.samples.len() as f64)
    }

    pub fn min(&self) -> Duration {
        self.samples.iter().copied().min().unwrap_or_default()
    }

    pub fn max(&self) -> Duration {
        self.samples.iter().copied().max().unwrap_or_default()
    }
}

fn micros(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000_000.0
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<12} setup={:<10} avg {:>10.3} us/op  min {:>10.3}  max {:>10.3}  ({} iterations)",
            self.kind.name(),
            self.setup_level.name(),
            micros(self.average()),
            micros(self.min()),
            micros(self.max()),
            self.samples.len()
        )
    }
}

fn measure_iteration<C: Container, R: Rng + ?Sized>(
    fixture: &mut Fixture<C>,
    setup_level: SetupLevel,
    config: &BenchConfig,
    rng: &mut R,
) -> Result<Duration> {
    let elapsed = match setup_level {
        SetupLevel::Iteration => {
            fixture.setup(rng, &config.corpus)?;

            // One timer around the whole batch
            let start = Instant::now();
            for _ in 0..config.invocations {
                black_box(black_box(&*fixture).lookup());
            }
            start.elapsed()
        }
        SetupLevel::Invocation => {
            let mut elapsed = Duration::ZERO;
            for _ in 0..config.invocations {
                fixture.setup(rng, &config.corpus)?;

                let start = Instant::now();
                black_box(black_box(&*fixture).lookup());
                elapsed += start.elapsed();
            }
            elapsed
        }
    };

    Ok(elapsed / config.invocations as u32)
}

/// Measures the average time of a single lookup in container `C`.
///
/// Setup time is excluded from the measurement. Warmup iterations run the
/// same way but their samples are dropped.
pub fn run<C: Container, R: Rng + ?Sized>(
    kind: ContainerKind,
    setup_level: SetupLevel,
    config: &BenchConfig,
    rng: &mut R,
) -> Result<Report> {
    config.validate()?;

    let mut fixture = Fixture::<C>::default();

    for i in 0..config.warmup_iterations {
        let sample = measure_iteration(&mut fixture, setup_level, config, rng)?;
        debug!("{kind} warmup {}: {:.3} us/op", i + 1, micros(sample));
    }

    let mut samples = Vec::with_capacity(config.iterations);
    for i in 0..config.iterations {
        let sample = measure_iteration(&mut fixture, setup_level, config, rng)?;
        debug!("{kind} iteration {}: {:.3} us/op", i + 1, micros(sample));
        samples.push(sample);
    }

    let report = Report {
        kind,
        setup_level,
        samples,
        setups: fixture.setups(),
    };
    info!("{kind} done after {} setups", report.setups);
    Ok(report)
}

/// Runs [`run`] with the concrete container type behind `kind`.
pub fn run_kind<R: Rng + ?Sized>(
    kind: ContainerKind,
    setup_level: SetupLevel,
    config: &BenchConfig,
    rng: &mut R,
) -> Result<Report> {
    match kind {
        ContainerKind::Trie => run::<Trie, _>(kind, setup_level, config, rng),
        ContainerKind::HashSet => run::<HashSet<String>, _>(kind, setup_level, config, rng),
        ContainerKind::FxHashSet => run::<FxHashSet<String>, _>(kind, setup_level, config, rng),
        ContainerKind::Array => run::<Vec<String>, _>(kind, setup_level, config, rng),
    }
}
