//! This module implements some domain-specific 4-momentum handling logic.

use crate::numeric::{functions::sqr, Float};
use nalgebra::SVector;
use prefix_num_ops::real::*;
use std::ops::Add;

/// 4-momentum dimension
pub const MOMENTUM_DIM: usize = 4;

/// Relativistic 4-momentum
pub type Momentum = SVector<Float, MOMENTUM_DIM>;

/// Convenience const for accessing the X coordinate of a 4-vector
pub const X: usize = 0;

/// Convenience const for accessing the Y coordinate of a 4-vector
pub const Y: usize = 1;

/// Convenience const for accessing the Z coordinate of a 4-vector
pub const Z: usize = 2;

/// Convenience const for accessing the E coordinate of a 4-vector
pub const E: usize = 3;

/// Build a 4-momentum from its (pT, η, φ, m) parametrization
///
/// Nothing is validated. A negative mass is understood as a spacelike
/// 4-vector (signed squared mass m·|m|), which is the convention of the
/// four-vector libraries used in collider analyses. As in those libraries,
/// E² is clamped at zero when |m| exceeds the 3-momentum, so the energy is
/// never NaN for finite inputs.
///
pub fn vector(pt: Float, eta: Float, phi: Float, mass: Float) -> Momentum {
    let px = pt * cos(phi);
    let py = pt * sin(phi);
    let pz = pt * sinh(eta);
    let e = sqrt((sqr(px) + sqr(py) + sqr(pz) + mass * abs(mass)).max(0.));
    Momentum::new(px, py, pz, e)
}

/// What the kinematics formulas need to know about a 4-momentum
///
/// Only the Cartesian components are required, everything else is derived
/// from them. Sums of 4-momenta must be 4-momenta too.
///
pub trait FourMomentum: Copy + Add<Output = Self> {
    /// Energy
    fn e(&self) -> Float;

    /// Momentum along the X axis
    fn px(&self) -> Float;

    /// Momentum along the Y axis
    fn py(&self) -> Float;

    /// Longitudinal momentum (along the beam axis)
    fn pz(&self) -> Float;

    /// Transverse momentum
    fn pt(&self) -> Float {
        sqrt(sqr(self.px()) + sqr(self.py()))
    }

    /// Invariant mass (NaN for spacelike 4-vectors)
    fn mass(&self) -> Float {
        let p2 = sqr(self.px()) + sqr(self.py()) + sqr(self.pz());
        sqrt(sqr(self.e()) - p2)
    }

    /// Rapidity
    fn rapidity(&self) -> Float {
        0.5 * ln((self.e() + self.pz()) / (self.e() - self.pz()))
    }

    /// Pseudorapidity
    fn eta(&self) -> Float {
        (self.pz() / self.pt()).asinh()
    }

    /// Azimuthal angle
    fn phi(&self) -> Float {
        self.py().atan2(self.px())
    }
}

impl FourMomentum for Momentum {
    #[inline]
    fn e(&self) -> Float {
        self[E]
    }

    #[inline]
    fn px(&self) -> Float {
        self[X]
    }

    #[inline]
    fn py(&self) -> Float {
        self[Y]
    }

    #[inline]
    fn pz(&self) -> Float {
        self[Z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::reals::consts::PI;
    use approx::assert_relative_eq;

    /// Recovering a light mass from a boosted 4-vector subtracts two nearly
    /// equal squares, single precision only keeps a couple of digits of it
    const MASS_RELATIVE: Float = if cfg!(feature = "f32") { 2e-2 } else { 1e-6 };

    #[test]
    fn components_follow_the_parametrization() {
        let p = vector(30., 0.5, 0., 0.1057);
        assert_relative_eq!(p.px(), 30., max_relative = 1e-6);
        assert_eq!(p.py(), 0.);
        assert_relative_eq!(p.pz(), 15.632859164812421, max_relative = 1e-6);
        assert_relative_eq!(p.e(), 33.82894408870693, max_relative = 1e-6);
    }

    #[test]
    fn accessors_recover_construction_parameters() {
        for &(pt, eta, phi, mass) in &[
            (30., 0.5, 0., 0.1057),
            (25., -0.3, 3., 0.1057),
            (45.2, 2.1, -1.2, 0.4937),
            (7.5, -1.8, PI / 3., 4.2),
        ] {
            let p = vector(pt, eta, phi, mass);
            assert_relative_eq!(p.pt(), pt, max_relative = 1e-6);
            assert_relative_eq!(p.eta(), eta, max_relative = 1e-5);
            assert_relative_eq!(p.phi(), phi, epsilon = 1e-6, max_relative = 1e-6);
            assert_relative_eq!(p.mass(), mass, max_relative = MASS_RELATIVE);
        }
    }

    #[test]
    fn massless_particle_has_energy_equal_to_momentum() {
        let p = vector(10., 1., 0.5, 0.);
        let p_norm = sqrt(sqr(p.px()) + sqr(p.py()) + sqr(p.pz()));
        assert_relative_eq!(p.e(), p_norm, max_relative = 1e-6);
    }

    #[test]
    fn negative_mass_is_spacelike() {
        let p = vector(10., 0., 0., -1.);
        assert_relative_eq!(p.e(), sqrt(99.), max_relative = 1e-6);
        assert!(p.mass().is_nan());
    }

    #[test]
    fn energy_of_very_spacelike_vector_is_clamped() {
        let p = vector(0.5, 0., 0., -1.);
        assert_eq!(p.e(), 0.);
        assert_eq!(p.px(), 0.5);
        assert!(p.mass().is_nan());

        // Same thing at the boundary, where E² is exactly zero
        let p = vector(1., 0., 0., -1.);
        assert_eq!(p.e(), 0.);
    }

    #[test]
    fn sums_are_four_momenta() {
        let p = vector(30., 0.5, 0., 0.1057) + vector(25., -0.3, 3., 0.1057);
        assert_relative_eq!(p.e(), 59.96262069936982, max_relative = 1e-6);
        assert_relative_eq!(p.mass(), 59.08626407790495, max_relative = 1e-6);
    }
}
