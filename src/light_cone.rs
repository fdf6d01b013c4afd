//! Light-cone components of single-particle 4-momenta
//!
//! The Collins-Soper angle is expressed in terms of the P⁺ = (E + p_z)/√2 and
//! P⁻ = (E - p_z)/√2 components of both leptons. The per-lepton entry points
//! all share the same two formulas, they only exist so that call sites state
//! which lepton of the pair they are looking at.

use crate::{
    momentum::FourMomentum,
    numeric::{reals::consts::SQRT_2, Float},
};

/// Light-cone "plus" component of a 4-momentum
#[inline]
pub fn plus<P: FourMomentum>(p: P) -> Float {
    (p.e() + p.pz()) / SQRT_2
}

/// Light-cone "minus" component of a 4-momentum
#[inline]
pub fn minus<P: FourMomentum>(p: P) -> Float {
    (p.e() - p.pz()) / SQRT_2
}

/// P⁺ of the first lepton
#[inline]
pub fn p1_plus<P: FourMomentum>(p1: P) -> Float {
    plus(p1)
}

/// P⁺ of the second lepton
#[inline]
pub fn p2_plus<P: FourMomentum>(p2: P) -> Float {
    plus(p2)
}

/// P⁻ of the first lepton
#[inline]
pub fn p1_minus<P: FourMomentum>(p1: P) -> Float {
    minus(p1)
}

/// P⁻ of the second lepton
#[inline]
pub fn p2_minus<P: FourMomentum>(p2: P) -> Float {
    minus(p2)
}
