//! Evaluate the kinematics of one lepton pair described by a configuration
//! file, and print every derived quantity.

use dilepton_kinematics::{config::Configuration, output, DileptonKinematics};

use eyre::WrapErr;
use log::{debug, info};

use std::{env, io};

/// Configuration file that is used when none is specified
const DEFAULT_CONFIG: &str = "kinematics.cfg";

/// We'll use eyre's type-erased result type throughout the application
type Result<T> = eyre::Result<T>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // ### CONFIGURATION READOUT ###

    let file_name = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_owned());
    info!("Loading configuration from {}", file_name);
    let cfg = Configuration::load(&file_name).wrap_err("Failed to load the configuration")?;

    // ### KINEMATICS EVALUATION ###

    let (p1, p2) = cfg.vectors();
    debug!("Lepton 4-momenta (px, py, pz, E): {:?} and {:?}", p1.as_slice(), p2.as_slice());
    let kin = DileptonKinematics::with_weights(p1, p2, &cfg.weights());

    // ### RESULTS DISPLAY ###

    output::dump_results(&mut io::stdout().lock(), &cfg, &kin)
        .wrap_err("Failed to output the results")?;

    Ok(())
}
