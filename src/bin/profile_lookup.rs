use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;
use trie_bench::*;

fn main() -> Result<()> {
    env_logger::init();

    // Build one fixture and hammer it so the lookup dominates the profile
    let mut rng = StdRng::seed_from_u64(0);
    let mut fixture = Fixture::<Trie>::default();
    fixture.setup(&mut rng, &CorpusConfig::default())?;
    info!("trie holds {} nodes", fixture.container().node_count());

    let mut hits = 0usize;
    for _ in 0..1_000_000 {
        if black_box(&fixture).lookup() {
            hits += 1;
        }
    }
    info!("{hits} hits");

    Ok(())
}
