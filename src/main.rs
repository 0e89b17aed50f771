use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use trie_bench::*;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Containers to benchmark
    #[clap(
        long,
        value_delimiter = ',',
        default_values_t = [ContainerKind::Trie, ContainerKind::HashSet, ContainerKind::Array]
    )]
    containers: Vec<ContainerKind>,

    /// Number of measurement iterations
    #[clap(long, default_value_t = 10)]
    iterations: usize,

    /// Number of warmup iterations, not reported
    #[clap(long, default_value_t = 1)]
    warmup: usize,

    /// Timed lookups per iteration
    #[clap(long, default_value_t = 10)]
    invocations: usize,

    /// Number of strings inserted into each container
    #[clap(long, default_value_t = DEFAULT_CORPUS_SIZE)]
    size: usize,

    /// Length of every generated string
    #[clap(long, default_value_t = DEFAULT_STRING_LEN)]
    length: usize,

    /// Characters the strings are drawn from
    #[clap(long, default_value_t = Alphabet::lowercase())]
    alphabet: Alphabet,

    /// Seed for reproducible runs
    #[clap(long)]
    seed: Option<u64>,

    /// Rebuild every container at this granularity instead of its default
    #[clap(long)]
    setup_level: Option<SetupLevel>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = BenchConfig {
        corpus: CorpusConfig {
            alphabet: args.alphabet,
            string_len: args.length,
            size: args.size,
        },
        warmup_iterations: args.warmup,
        iterations: args.iterations,
        invocations: args.invocations,
    };
    config.validate()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        "{} strings of length {} over '{}'",
        config.corpus.size, config.corpus.string_len, config.corpus.alphabet
    );

    for kind in args.containers {
        let setup_level = args
            .setup_level
            .unwrap_or_else(|| kind.default_setup_level());
        let report = run_kind(kind, setup_level, &config, &mut rng)
            .with_context(|| format!("Failed to benchmark {kind}"))?;
        println!("{report}");
    }

    Ok(())
}
