//! Sequential back-end of batch evaluation

use crate::{
    batch::evaluate_pair, dilepton::DileptonKinematics, momentum::Momentum,
    weights::AngularWeights,
};

/// Evaluate lepton pairs one after the other
pub fn evaluate_impl(
    pairs: &[(Momentum, Momentum)],
    weights: &AngularWeights,
) -> Vec<DileptonKinematics> {
    pairs
        .iter()
        .map(|pair| evaluate_pair(pair, weights))
        .collect()
}
