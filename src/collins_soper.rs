//! Polar angle of the lepton pair in the Collins-Soper frame

use crate::{
    light_cone::{p1_minus, p1_plus, p2_minus, p2_plus},
    momentum::FourMomentum,
    numeric::{functions::sqr, Float},
    system::{inv_mass, pz, system_pt},
};
use prefix_num_ops::real::*;

/// Cosine of the Collins-Soper polar angle, from precomputed pair properties
///
/// All arguments must come from the same lepton pair, which is not checked:
/// mismatched inputs give a meaningless number. A system with zero
/// longitudinal momentum makes this a 0/0 division, and the result is NaN.
///
#[inline]
pub fn cos_theta(
    inv_mass: Float,
    pz: Float,
    p1_plus: Float,
    p2_plus: Float,
    p1_minus: Float,
    p2_minus: Float,
    system_pt: Float,
) -> Float {
    let m2 = sqr(inv_mass);
    let num = 2. * (p1_plus * p2_minus - p1_minus * p2_plus) * pz;
    let denom = sqrt(m2 * (m2 + sqr(system_pt))) * abs(pz);
    num / denom
}

/// Cosine of the Collins-Soper polar angle of a lepton pair
///
/// Gives exactly the same result as feeding `cos_theta()` with the outputs of
/// the individual pair property functions.
///
pub fn cos_theta_of_pair<P: FourMomentum>(p1: P, p2: P) -> Float {
    cos_theta(
        inv_mass(p1, p2),
        pz(p1, p2),
        p1_plus(p1),
        p2_plus(p2),
        p1_minus(p1),
        p2_minus(p2),
        system_pt(p1, p2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::momentum::vector;
    use approx::assert_relative_eq;

    #[test]
    fn reference_pair() {
        let p1 = vector(30., 0.5, 0., 0.1057);
        let p2 = vector(25., -0.3, 3., 0.1057);
        assert_relative_eq!(
            cos_theta_of_pair(p1, p2),
            0.379412378319231,
            max_relative = 1e-6
        );
    }

    #[test]
    fn pair_helper_matches_manual_composition() {
        let p1 = vector(41.3, -1.1, 0.4, 0.000511);
        let p2 = vector(38.9, 0.7, -2.6, 0.000511);
        let manual = cos_theta(
            inv_mass(p1, p2),
            pz(p1, p2),
            p1_plus(p1),
            p2_plus(p2),
            p1_minus(p1),
            p2_minus(p2),
            system_pt(p1, p2),
        );
        assert_eq!(cos_theta_of_pair(p1, p2).to_bits(), manual.to_bits());
    }

    #[test]
    fn swapping_leptons_flips_the_sign() {
        let p1 = vector(30., 0.5, 0., 0.1057);
        let p2 = vector(25., -0.3, 3., 0.1057);
        assert_eq!(cos_theta_of_pair(p2, p1), -cos_theta_of_pair(p1, p2));
    }

    #[test]
    fn stays_within_physical_range() {
        let p1 = vector(52.1, 1.9, 1.0, 0.);
        let p2 = vector(12.4, 0.2, -0.5, 0.);
        let cos = cos_theta_of_pair(p1, p2);
        assert!((-1. ..=1.).contains(&cos));
    }

    #[test]
    fn zero_pz_is_not_guarded() {
        let cos = cos_theta(91.2, 0., 30., 20., 10., 25., 5.);
        assert!(cos.is_nan());
    }

    #[test]
    fn sign_follows_pz() {
        let forward = cos_theta(91.2, 10., 30., 20., 10., 25., 5.);
        let backward = cos_theta(91.2, -10., 30., 20., 10., 25., 5.);
        assert_eq!(forward, -backward);
        assert!(forward > 0.);
    }
}
