//! Properties of the system formed by a pair of particles
//!
//! Every function here sums the two 4-momenta and reads one property of the
//! result. None of them guard against unphysical input: NaNs and infinities
//! are simply propagated.

use crate::{
    momentum::{FourMomentum, Momentum},
    numeric::Float,
};
use num_traits::Zero;

/// 4-momentum of the two-particle system
#[inline]
pub fn system_four_vector<P: FourMomentum>(p1: P, p2: P) -> P {
    p1 + p2
}

/// 4-momentum of a system with any number of particles
pub fn total_momentum(particles: impl IntoIterator<Item = Momentum>) -> Momentum {
    particles
        .into_iter()
        .fold(Momentum::zero(), |total, p| total + p)
}

/// Invariant mass of the two-particle system
#[inline]
pub fn inv_mass<P: FourMomentum>(p1: P, p2: P) -> Float {
    system_four_vector(p1, p2).mass()
}

/// Rapidity of the two-particle system
#[inline]
pub fn rapidity<P: FourMomentum>(p1: P, p2: P) -> Float {
    system_four_vector(p1, p2).rapidity()
}

/// Longitudinal momentum of the two-particle system
#[inline]
pub fn pz<P: FourMomentum>(p1: P, p2: P) -> Float {
    system_four_vector(p1, p2).pz()
}

/// Transverse momentum of the two-particle system
#[inline]
pub fn system_pt<P: FourMomentum>(p1: P, p2: P) -> Float {
    system_four_vector(p1, p2).pt()
}
