//! Per-graph topologies: an acyclic background and an optional ring.

use hopcycle_core::Hop;
use rand::Rng;
use rand::rngs::StdRng;

/// Name of the `i`-th system in the shared pool.
pub fn system_name(i: usize) -> String {
    format!("SYS{i:04}")
}

/// Name of the `i`-th ring system. Ring names never collide with pool names.
pub fn ring_system_name(i: usize) -> String {
    format!("RING{i:03}")
}

/// Draws `count` random hops between pool systems.
///
/// Every hop points from the lower pool index to the higher one, so the
/// background of a graph is a DAG and can never close a cycle. Self-loops are
/// never produced; with fewer than two systems nothing is produced.
pub fn background_hops(
    rng: &mut StdRng,
    claim_id: &str,
    status_code: &str,
    pool: usize,
    count: usize,
) -> Vec<Hop> {
    if pool < 2 {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let a = rng.gen_range(0..pool);
            let mut b = rng.gen_range(0..pool - 1);
            if b >= a {
                b += 1;
            }
            Hop::new(
                system_name(a.min(b)),
                system_name(a.max(b)),
                claim_id,
                status_code,
            )
        })
        .collect()
}

/// The hops of a directed ring over `length` dedicated systems.
///
/// The ring touches no pool system, so in an otherwise acyclic graph the last
/// ring hop to arrive closes a cycle of exactly `length` edges.
pub fn ring_hops(claim_id: &str, status_code: &str, length: usize) -> Vec<Hop> {
    (0..length)
        .map(|i| {
            Hop::new(
                ring_system_name(i),
                ring_system_name((i + 1) % length),
                claim_id,
                status_code,
            )
        })
        .collect()
}
