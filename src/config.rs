//! Mechanism for loading and checking the configuration of the driver program

use crate::{
    momentum::{vector, Momentum},
    numeric::Float,
    weights::AngularWeights,
};

use eyre::{ensure, eyre, Result, WrapErr};
use log::info;

use std::{fs, str::FromStr};

/// Kinematics of one lepton, in (pT, η, φ, m) parametrization
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeptonConfig {
    /// Transverse momentum (GeV)
    pub pt: Float,

    /// Pseudorapidity
    pub eta: Float,

    /// Azimuthal angle (rad)
    pub phi: Float,

    /// Mass (GeV)
    pub mass: Float,
}
//
impl LeptonConfig {
    /// Build the 4-momentum of this lepton
    pub fn vector(&self) -> Momentum {
        vector(self.pt, self.eta, self.phi, self.mass)
    }

    /// Check that this lepton makes physical sense
    fn check(&self, name: &str) -> Result<()> {
        ensure!(
            self.pt.is_finite() && self.eta.is_finite() && self.phi.is_finite(),
            "Kinematics of {} must be finite",
            name
        );
        ensure!(self.pt >= 0., "Transverse momentum of {} must be non-negative", name);
        ensure!(self.mass >= 0., "Mass of {} must be non-negative", name);
        Ok(())
    }
}

/// Driver configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Configuration {
    /// A₀ angular coefficient
    pub a0: Float,

    /// First lepton of the pair
    pub lepton1: LeptonConfig,

    /// Second lepton of the pair
    pub lepton2: LeptonConfig,
}
//
impl Configuration {
    /// Load the configuration from a file, check it, and log it
    pub fn load(file_name: &str) -> Result<Self> {
        let config_str = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("Could not read configuration file {}", file_name))?;
        let config = Self::parse(&config_str)?;
        config.print();
        Ok(config)
    }

    /// Decode and check the contents of a configuration file
    pub fn parse(config_str: &str) -> Result<Self> {
        // Configuration items are the first non-whitespace chunk of text on
        // each line, whatever follows is commentary. Blank lines are ignored.
        let mut config_iter = config_str
            .lines()
            .filter_map(|line| line.split_whitespace().next());

        // Fetch the next configuration item, tagged with the name of the
        // field it is supposed to fill for error reporting.
        let mut next_item = |name: &'static str| -> Result<ConfigItem> {
            config_iter
                .next()
                .map(|data| ConfigItem::new(name, data))
                .ok_or_else(|| eyre!("Missing configuration of {}", name))
        };

        let config = Configuration {
            a0: next_item("a0")?.parse()?,
            lepton1: LeptonConfig {
                pt: next_item("pt1")?.parse()?,
                eta: next_item("eta1")?.parse()?,
                phi: next_item("phi1")?.parse()?,
                mass: next_item("m1")?.parse()?,
            },
            lepton2: LeptonConfig {
                pt: next_item("pt2")?.parse()?,
                eta: next_item("eta2")?.parse()?,
                phi: next_item("phi2")?.parse()?,
                mass: next_item("m2")?.parse()?,
            },
        };

        ensure!(config.a0.is_finite(), "The A0 coefficient must be finite");
        config.lepton1.check("lepton 1")?;
        config.lepton2.check("lepton 2")?;
        Ok(config)
    }

    /// Angular weighting selected by this configuration
    pub fn weights(&self) -> AngularWeights {
        AngularWeights::new(self.a0)
    }

    /// 4-momenta of the configured lepton pair
    pub fn vectors(&self) -> (Momentum, Momentum) {
        (self.lepton1.vector(), self.lepton2.vector())
    }

    /// Log the configuration
    pub fn print(&self) {
        info!("A0             : {}", self.a0);
        for (idx, lepton) in [&self.lepton1, &self.lepton2].iter().enumerate() {
            info!(
                "Lepton {}       : pT={} eta={} phi={} m={}",
                idx + 1,
                lepton.pt,
                lepton.eta,
                lepton.phi,
                lepton.mass
            );
        }
    }
}

/// A value from the configuration file, tagged with the struct field which it
/// is supposed to map for error reporting purposes.
struct ConfigItem<'data> {
    name: &'static str,
    data: &'data str,
}
//
impl<'data> ConfigItem<'data> {
    /// Build a config item from a struct field tag and raw iterator data
    fn new(name: &'static str, data: &'data str) -> Self {
        Self { name, data }
    }

    /// Parse this data using Rust's standard parsing logic
    fn parse<T: FromStr>(self) -> Result<T>
    where
        <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        let name = self.name;
        self.data
            .parse::<T>()
            .wrap_err_with(|| format!("Could not parse configuration of {}", name))
    }
}
