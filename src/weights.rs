//! Angular weights used in spin-alignment and forward-backward measurements
//!
//! The angular distribution of the leptons is assumed to follow
//! 1 + cos²θ + h(cos θ), where h carries the A₀ anisotropy. Events are then
//! weighted with w_D in the denominator and w_N in the numerator of the
//! weighted asymmetry.

use crate::numeric::{functions::sqr, Float};
use prefix_num_ops::real::*;

/// Default A₀ angular coefficient
///
/// Changing it changes the physics results: this is an analysis choice.
///
pub const A0: Float = 0.1;

/// Angular distribution shape factor, for the default A₀ coefficient
#[inline]
pub fn h(cos_theta: Float) -> Float {
    AngularWeights::DEFAULT.h(cos_theta)
}

/// Denominator weight
#[inline]
pub fn w_d(cos_theta: Float, h: Float) -> Float {
    0.5 * sqr(cos_theta) / (1. + sqr(cos_theta) + h).powi(3)
}

/// Numerator weight
#[inline]
pub fn w_n(cos_theta: Float, h: Float) -> Float {
    0.5 * abs(cos_theta) / (1. + sqr(cos_theta) + h).powi(2)
}

/// Angular weighting with a configurable A₀ coefficient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularWeights {
    /// A₀ angular coefficient
    pub a0: Float,
}
//
impl AngularWeights {
    /// Weighting used by the reference analysis
    pub const DEFAULT: Self = Self { a0: A0 };

    /// Set up angular weighting for some A₀ coefficient
    pub fn new(a0: Float) -> Self {
        Self { a0 }
    }

    /// Angular distribution shape factor
    #[inline]
    pub fn h(&self, cos_theta: Float) -> Float {
        0.5 * self.a0 * (1. - 3. * sqr(cos_theta))
    }

    /// Compute the shape factor and both weights of an event
    #[inline]
    pub fn evaluate(&self, cos_theta: Float) -> EventWeights {
        let h = self.h(cos_theta);
        EventWeights {
            h,
            w_d: w_d(cos_theta, h),
            w_n: w_n(cos_theta, h),
        }
    }
}

impl Default for AngularWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Angular weighting of one event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventWeights {
    /// Shape factor
    pub h: Float,

    /// Denominator weight
    pub w_d: Float,

    /// Numerator weight
    pub w_n: Float,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn shape_factor_at_zero() {
        assert_eq!(h(0.), 0.05);
    }

    #[test]
    fn shape_factor_vanishes_at_magic_angle() {
        let cos_magic = sqrt(1. / 3.);
        assert_relative_eq!(h(cos_magic), 0., epsilon = 1e-7);
        assert_relative_eq!(h(1.), -0.1, max_relative = 1e-6);
    }

    #[test]
    fn weights_vanish_at_zero_angle() {
        for &h in &[-0.5, 0., 0.05, 0.3, 2.] {
            assert_eq!(w_d(0., h), 0.);
            assert_eq!(w_n(0., h), 0.);
        }
    }

    #[test]
    fn weights_are_even_in_cos_theta() {
        for &cos in &[0.1, 0.38, 0.7, 1.] {
            let hf = h(cos);
            assert_eq!(h(-cos), hf);
            assert_eq!(w_d(-cos, hf), w_d(cos, hf));
            assert_eq!(w_n(-cos, hf), w_n(cos, hf));
        }
    }

    #[test]
    fn reference_values() {
        let cos = 0.379412378319231;
        let hf = h(cos);
        assert_relative_eq!(hf, 0.028406937076721706, max_relative = 1e-6);
        assert_relative_eq!(w_d(cos, hf), 0.04466931083780313, max_relative = 1e-6);
        assert_relative_eq!(w_n(cos, hf), 0.13802539680726725, max_relative = 1e-6);
    }

    #[test]
    fn default_weighting_matches_free_functions() {
        let weights = AngularWeights::default();
        assert_eq!(weights.a0, A0);
        for &cos in &[-0.9, -0.2, 0., 0.45, 1.] {
            let ev = weights.evaluate(cos);
            assert_eq!(ev.h, h(cos));
            assert_eq!(ev.w_d, w_d(cos, h(cos)));
            assert_eq!(ev.w_n, w_n(cos, h(cos)));
        }
    }

    #[test]
    fn isotropic_weighting_has_no_shape_factor() {
        let weights = AngularWeights::new(0.);
        assert_eq!(weights.h(0.6), 0.);
        let ev = weights.evaluate(0.5);
        assert_relative_eq!(ev.w_d, 0.064, max_relative = 1e-6);
        assert_relative_eq!(ev.w_n, 0.16, max_relative = 1e-6);
    }

    #[test]
    fn singular_denominator_is_not_guarded() {
        assert!(w_d(0., -1.).is_nan());
        assert!(w_n(0.5, -1.25).is_infinite());
    }
}
