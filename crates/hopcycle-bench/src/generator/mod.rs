//! Hop-stream generator.
//!
//! Produces shuffled streams of [`Hop`]s spread over many claim/status
//! graphs. Every graph draws its systems from one shared name pool, so the
//! same system names appear under many keys.

pub mod topology;

use hopcycle_core::Hop;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom as _;

use topology::{background_hops, ring_hops};

/// Configuration for the hop-stream generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of distinct claim ids.
    pub num_claims: usize,
    /// Status codes per claim; each (claim, status) pair is one graph.
    pub statuses_per_claim: usize,
    /// Size of the shared system-name pool.
    pub system_pool: usize,
    /// Random background hops per graph. Background hops never form a cycle.
    pub hops_per_graph: usize,
    /// Whether to add one ring of `ring_length` systems to every graph.
    pub inject_rings: bool,
    /// Number of edges in each injected ring (at least 2).
    pub ring_length: usize,
}

impl GeneratorConfig {
    /// Number of claim/status graphs the configuration produces.
    pub fn graph_count(&self) -> usize {
        self.num_claims * self.statuses_per_claim
    }

    /// Total number of hops [`generate_hops`] emits.
    pub fn hop_count(&self) -> usize {
        let ring = if self.inject_rings { self.ring_length } else { 0 };
        self.graph_count() * (self.hops_per_graph + ring)
    }
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 20 graphs, ~600 hops
    Small,
    /// 300 graphs, ~21k hops
    Medium,
    /// 2000 graphs, ~280k hops
    Large,
    /// 8000 graphs, ~2.1M hops
    XLarge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                num_claims: 10,
                statuses_per_claim: 2,
                system_pool: 24,
                hops_per_graph: 24,
                inject_rings: true,
                ring_length: 5,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                num_claims: 100,
                statuses_per_claim: 3,
                system_pool: 64,
                hops_per_graph: 64,
                inject_rings: true,
                ring_length: 8,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                num_claims: 500,
                statuses_per_claim: 4,
                system_pool: 128,
                hops_per_graph: 128,
                inject_rings: true,
                ring_length: 12,
            },
            SizeTier::XLarge => GeneratorConfig {
                seed,
                num_claims: 2000,
                statuses_per_claim: 4,
                system_pool: 256,
                hops_per_graph: 256,
                inject_rings: true,
                ring_length: 16,
            },
        }
    }
}

/// Generates a shuffled hop stream from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_hops(config: &GeneratorConfig) -> Vec<Hop> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut hops = Vec::with_capacity(config.hop_count());

    for claim in 0..config.num_claims {
        for status in 0..config.statuses_per_claim {
            let claim_id = format!("CLM{claim:05}");
            let status_code = format!("ST{status:02}");
            hops.extend(background_hops(
                &mut rng,
                &claim_id,
                &status_code,
                config.system_pool,
                config.hops_per_graph,
            ));
            if config.inject_rings {
                hops.extend(ring_hops(&claim_id, &status_code, config.ring_length));
            }
        }
    }

    hops.shuffle(&mut rng);
    hops
}

/// Renders hops as newline-terminated input lines.
pub fn render_lines(hops: &[Hop]) -> String {
    let mut out = String::new();
    for hop in hops {
        out.push_str(&hop.to_string());
        out.push('\n');
    }
    out
}
