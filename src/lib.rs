//! Dilepton kinematics: the formula sheet of a Drell-Yan analysis
//!
//!
//! # Introduction (for the physicist)
//!
//! Lepton pairs produced in hadron collisions (pp → Z/γ* → ℓ⁺ℓ⁻) are studied
//! through a handful of kinematic quantities: the invariant mass, rapidity,
//! longitudinal and transverse momentum of the pair, and the polar angle of
//! the leptons in the Collins-Soper frame. The latter is used to weight events
//! when measuring angular coefficients and forward-backward asymmetries,
//! assuming an angular distribution parametrized by an A₀ coefficient.
//!
//!
//! # Introduction (for the numerical guy)
//!
//! Every quantity is a closed-form expression of the leptons' 4-momenta.
//! None of the formulas check their inputs: unphysical values simply produce
//! NaNs or infinities following IEEE-754 rules, and it is up to the caller not
//! to feed them. Computations are carried out in double precision by default,
//! or in single precision with the `f32` feature, which is what ROOT-based
//! dilepton analyses commonly use. Expect last-digit differences between the
//! two.
//!
//!
//! # Introduction (for the computer guy)
//!
//! All functions are pure, so they can be called from any number of threads.
//! The 4-momentum type is a small nalgebra vector, but the formulas only rely
//! on the `FourMomentum` trait. `DileptonKinematics` computes everything at
//! once for a pair, and the `batch` module does so for many pairs, optionally
//! in parallel.

#![warn(missing_docs)]

pub mod batch;
pub mod collins_soper;
pub mod config;
pub mod dilepton;
pub mod light_cone;
pub mod momentum;
pub mod numeric;
pub mod output;
pub mod system;
pub mod weights;


pub use crate::{
    collins_soper::{cos_theta, cos_theta_of_pair},
    dilepton::{DileptonKinematics, Lepton, RapidityRegion},
    light_cone::{p1_minus, p1_plus, p2_minus, p2_plus},
    momentum::{vector, FourMomentum, Momentum},
    numeric::Float,
    system::{inv_mass, pz, rapidity, system_four_vector, system_pt, total_momentum},
    weights::{h, w_d, w_n, AngularWeights, A0},
};
