//! This module is in charge of displaying the kinematics of a lepton pair

use crate::{
    config::Configuration,
    dilepton::{DileptonKinematics, RapidityRegion},
    numeric::{reals, Float},
};

use std::io::{Result, Write};

/// Number of significant digits in the output
const SIG_DIGITS: usize = reals::DIGITS as usize;

/// Write down the configuration and the derived kinematics of a pair
pub fn dump_results(
    out: &mut impl Write,
    cfg: &Configuration,
    kin: &DileptonKinematics,
) -> Result<()> {
    writeln_kv(out, "A0 angular coefficient", cfg.a0)?;
    writeln!(out, " ---------------------------------------------")?;
    writeln_kv(out, "Invariant mass           (GeV)", kin.inv_mass)?;
    writeln_kv(out, "Rapidity", kin.rapidity)?;
    writeln_kv(out, "Longitudinal momentum    (GeV)", kin.pz)?;
    writeln_kv(out, "Transverse momentum      (GeV)", kin.system_pt)?;
    writeln!(out, " ---------------------------------------------")?;
    writeln_kv(out, "P1+                      (GeV)", kin.p1_plus)?;
    writeln_kv(out, "P2+                      (GeV)", kin.p2_plus)?;
    writeln_kv(out, "P1-                      (GeV)", kin.p1_minus)?;
    writeln_kv(out, "P2-                      (GeV)", kin.p2_minus)?;
    writeln!(out, " ---------------------------------------------")?;
    writeln_kv(out, "cos(theta) Collins-Soper", kin.cos_theta)?;
    writeln_kv(out, "h", kin.h)?;
    writeln_kv(out, "Denominator weight", kin.w_d)?;
    writeln_kv(out, "Numerator weight", kin.w_n)?;
    writeln!(out, " ---------------------------------------------")?;
    let region = match kin.rapidity_region() {
        Some(RapidityRegion::Central) => "central",
        Some(RapidityRegion::Intermediate) => "intermediate",
        Some(RapidityRegion::Forward) => "forward",
        None => "none",
    };
    writeln!(out, " {:<31}: {}", "Rapidity region", region)?;
    writeln!(out, " {:<31}: {}", "In mass window", kin.in_mass_window())
}

/// Key-value output that uses fixed-size columns for better readability
fn writeln_kv(out: &mut impl Write, key: &str, value: Float) -> Result<()> {
    write!(out, " {:<31}: ", key)?;
    write_engineering(out, value, SIG_DIGITS)?;
    writeln!(out)
}

/// Write a floating-point number using "engineering" notation
///
/// Analogous to the %g format of the C printf function, this switches
/// between naive and scientific notation when the number becomes so small
/// that leading zeroes would be longer than the scientific notation, or so
/// large that more significant digits than requested would be printed.
///
fn write_engineering(writer: &mut impl Write, x: Float, sig_digits: usize) -> Result<()> {
    let precision = sig_digits - 1;
    if x == 0. {
        // Zero is special because you can't take its log
        return write!(writer, "0");
    }
    let log_x = x.abs().log10();
    if (-3. ..(sig_digits as Float)).contains(&log_x) {
        // Rust's precision counts digits after the decimal point, so it must
        // be adjusted to keep a constant number of significant digits. Numbers
        // below 1 get one extra digit for the leading zero.
        let magnitude = log_x.floor() as isize;
        let decimals = (precision as isize - magnitude).max(0) as usize;
        let digits = format!("{:.1$}", x, decimals);
        if digits.contains('.') {
            write!(writer, "{}", digits.trim_end_matches('0').trim_end_matches('.'))
        } else {
            write!(writer, "{}", digits)
        }
    } else {
        // NaN and infinities end up here too
        write!(writer, "{:.1$e}", x, precision)
    }
}
