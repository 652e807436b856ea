use gde_core::derive_substream_seed;

/// Derives the deterministic seed for one proposal iteration within a chain.
///
/// Chains and iterations map to disjoint substreams of the master seed, so
/// independent chains never share randomness and a run is reproducible from
/// `(master_seed, chain_index, iteration)` alone.
pub fn step_seed(master_seed: u64, chain_index: usize, iteration: usize) -> u64 {
    let intermediate = derive_substream_seed(master_seed, chain_index as u64);
    derive_substream_seed(intermediate, iteration as u64)
}
