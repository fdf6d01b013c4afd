//! Multi-threaded back-end of batch evaluation

use crate::{
    batch::{evaluate_pair, PAIR_BATCH_SIZE},
    dilepton::DileptonKinematics,
    momentum::Momentum,
    weights::AngularWeights,
};
use rayon::prelude::*;

/// Evaluate lepton pairs on rayon's thread pool
///
/// Each pair is evaluated independently of all others, so unlike an
/// accumulation, the output does not depend on how the work was split.
///
pub fn evaluate_impl(
    pairs: &[(Momentum, Momentum)],
    weights: &AngularWeights,
) -> Vec<DileptonKinematics> {
    pairs
        .par_iter()
        .with_min_len(PAIR_BATCH_SIZE)
        .map(|pair| evaluate_pair(pair, weights))
        .collect()
}
