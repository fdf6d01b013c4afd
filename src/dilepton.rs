//! Everything the analysis wants to know about one lepton pair

use crate::{
    collins_soper::cos_theta,
    light_cone::{p1_minus, p1_plus, p2_minus, p2_plus},
    momentum::{vector, FourMomentum, Momentum},
    numeric::Float,
    system::{inv_mass, pz, rapidity, system_pt},
    weights::AngularWeights,
};
use prefix_num_ops::real::*;
use std::ops::Range;

/// Invariant mass window of the dilepton mass spectra (GeV)
pub const MASS_WINDOW: Range<Float> = 60.0..120.0;

/// Number of bins of the dilepton mass spectra
pub const MASS_BINS: usize = 60;

/// Truth that a dilepton mass falls inside of the studied window
pub fn in_mass_window(mass: Float) -> bool {
    MASS_WINDOW.contains(&mass)
}

/// Lepton flavours considered by the analysis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lepton {
    /// μ
    Muon,
    /// e
    Electron,
}
//
impl Lepton {
    /// Rest mass (GeV)
    pub fn mass(self) -> Float {
        match self {
            Lepton::Muon => 0.1056583755,
            Lepton::Electron => 0.00051099895,
        }
    }

    /// Build the 4-momentum of a lepton of this flavour
    pub fn vector(self, pt: Float, eta: Float, phi: Float) -> Momentum {
        vector(pt, eta, phi, self.mass())
    }
}

/// Representative rapidity regions in which the mass spectrum is studied
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RapidityRegion {
    /// 0 < |y| < 0.4
    Central,
    /// 0.8 < |y| < 1.2
    Intermediate,
    /// 1.6 < |y| < 2.0
    Forward,
}
//
impl RapidityRegion {
    /// All regions, in order of increasing |y|
    pub const ALL: [RapidityRegion; 3] = [
        RapidityRegion::Central,
        RapidityRegion::Intermediate,
        RapidityRegion::Forward,
    ];

    /// Open interval of |y| covered by this region
    pub fn bounds(self) -> (Float, Float) {
        match self {
            RapidityRegion::Central => (0.0, 0.4),
            RapidityRegion::Intermediate => (0.8, 1.2),
            RapidityRegion::Forward => (1.6, 2.0),
        }
    }

    /// Find the region that a system rapidity belongs to, if any
    ///
    /// Bounds are exclusive, so rapidities in the gaps between regions, on
    /// region boundaries, or NaN, belong to no region.
    ///
    pub fn classify(y: Float) -> Option<Self> {
        let abs_y = abs(y);
        Self::ALL.into_iter().find(|region| {
            let (low, high) = region.bounds();
            abs_y > low && abs_y < high
        })
    }
}

/// Kinematics of a lepton pair
///
/// Every member is computed from the same pair of 4-momenta, so the
/// Collins-Soper angle cannot be fed with inconsistent inputs.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DileptonKinematics {
    /// Invariant mass of the pair
    pub inv_mass: Float,

    /// Rapidity of the pair
    pub rapidity: Float,

    /// Longitudinal momentum of the pair
    pub pz: Float,

    /// Transverse momentum of the pair
    pub system_pt: Float,

    /// P⁺ of the first lepton
    pub p1_plus: Float,

    /// P⁺ of the second lepton
    pub p2_plus: Float,

    /// P⁻ of the first lepton
    pub p1_minus: Float,

    /// P⁻ of the second lepton
    pub p2_minus: Float,

    /// Cosine of the Collins-Soper polar angle
    pub cos_theta: Float,

    /// Angular distribution shape factor
    pub h: Float,

    /// Denominator weight
    pub w_d: Float,

    /// Numerator weight
    pub w_n: Float,
}
//
impl DileptonKinematics {
    /// Compute the kinematics of a pair with the default angular weighting
    pub fn new<P: FourMomentum>(p1: P, p2: P) -> Self {
        Self::with_weights(p1, p2, &AngularWeights::default())
    }

    /// Compute the kinematics of a pair with some angular weighting
    pub fn with_weights<P: FourMomentum>(p1: P, p2: P, weights: &AngularWeights) -> Self {
        let inv_mass = inv_mass(p1, p2);
        let pz = pz(p1, p2);
        let system_pt = system_pt(p1, p2);
        let p1_plus = p1_plus(p1);
        let p2_plus = p2_plus(p2);
        let p1_minus = p1_minus(p1);
        let p2_minus = p2_minus(p2);
        let cos_theta = cos_theta(
            inv_mass, pz, p1_plus, p2_plus, p1_minus, p2_minus, system_pt,
        );
        let ev_weights = weights.evaluate(cos_theta);
        Self {
            inv_mass,
            rapidity: rapidity(p1, p2),
            pz,
            system_pt,
            p1_plus,
            p2_plus,
            p1_minus,
            p2_minus,
            cos_theta,
            h: ev_weights.h,
            w_d: ev_weights.w_d,
            w_n: ev_weights.w_n,
        }
    }

    /// Rapidity region of the pair, if any
    pub fn rapidity_region(&self) -> Option<RapidityRegion> {
        RapidityRegion::classify(self.rapidity)
    }

    /// Truth that the pair falls inside of the studied mass window
    pub fn in_mass_window(&self) -> bool {
        in_mass_window(self.inv_mass)
    }
}
