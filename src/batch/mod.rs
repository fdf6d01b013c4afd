//! This module takes care of evaluating the kinematics of many lepton pairs,
//! encapsulating use of multiple threads

#[cfg(not(feature = "multi-threading"))]
mod sequential;
#[cfg(feature = "multi-threading")]
mod multi_threading;

use crate::{dilepton::DileptonKinematics, momentum::Momentum, weights::AngularWeights};

/// Minimal number of pairs handled by one parallel task
///
/// The per-pair work is tiny, so handing out single pairs to worker threads
/// would be dominated by scheduling overhead.
///
#[cfg_attr(not(feature = "multi-threading"), allow(dead_code))]
const PAIR_BATCH_SIZE: usize = 10_000;

/// Evaluate the kinematics of a set of lepton pairs in the manner that was
/// configured at build time.
///
/// Results come out in the same order as the input pairs, and are identical
/// no matter how the work was scheduled.
///
pub fn evaluate(
    pairs: &[(Momentum, Momentum)],
    weights: &AngularWeights,
) -> Vec<DileptonKinematics> {
    // ...in sequential mode
    #[cfg(not(feature = "multi-threading"))]
    {
        sequential::evaluate_impl(pairs, weights)
    }

    // ...in multi-threaded mode
    #[cfg(feature = "multi-threading")]
    {
        multi_threading::evaluate_impl(pairs, weights)
    }
}

/// Evaluate a single pair, this is what all back-ends do for every pair
#[inline]
fn evaluate_pair(pair: &(Momentum, Momentum), weights: &AngularWeights) -> DileptonKinematics {
    DileptonKinematics::with_weights(pair.0, pair.1, weights)
}
