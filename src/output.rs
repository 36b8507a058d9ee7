//! This module is in charge of reporting the pair observables

use crate::{config::Configuration, Result};

use dijet_kinematics::{Float, PairObservables};

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use std::io::{self, Write};

// Number of significant digits in the report
const SIG_DIGITS: usize = Float::DIGITS as usize;

/// Write the observables of the configured pair to `writer`
pub fn dump_results(
    cfg: &Configuration,
    obs: &PairObservables,
    writer: &mut impl Write,
) -> Result<()> {
    let timestamp = OffsetDateTime::now_utc().format(&Rfc3339)?;
    writeln_kv(writer, timestamp.as_str())?;
    write_report(cfg, obs, writer)?;
    Ok(())
}

/// Fixed-width key-value report, without the timestamp
fn write_report(
    cfg: &Configuration,
    obs: &PairObservables,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln_kv(writer, "---------------------------------------------")?;
    writeln_kv(writer, ("pT of particle 1          (GeV)", cfg.first.pt))?;
    writeln_kv(writer, ("pT of particle 2          (GeV)", cfg.second.pt))?;
    writeln_kv(writer, "---------------------------------------------")?;
    writeln_kv(writer, ("Invariant mass            (GeV)", obs.invariant_mass))?;
    writeln_kv(writer, ("pT ratio (softer/harder)", obs.pt_ratio))?;
    writeln_kv(writer, ("Delta eta", obs.delta_eta))?;
    writeln_kv(writer, ("Delta phi                 (rad)", obs.delta_phi))?;
    writeln_kv(writer, ("Delta R", obs.delta_r))?;
    writeln_kv(writer, ("Delta pT                  (GeV)", obs.delta_pt))?;
    Ok(())
}

/// Text output facility with fixed-size key columns
fn writeln_kv(writer: &mut impl Write, data: impl WriteKv) -> io::Result<()> {
    write!(writer, " ")?;
    data.write(writer)?;
    writeln!(writer)
}

/// Trait implemented by things which can be printed in the report
trait WriteKv: Sized {
    /// Write down `self` to the output
    fn write(self, writer: &mut impl Write) -> io::Result<()>;
}

impl WriteKv for &str {
    fn write(self, writer: &mut impl Write) -> io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl WriteKv for Float {
    fn write(self, writer: &mut impl Write) -> io::Result<()> {
        write!(writer, "{}", compact(self, SIG_DIGITS))
    }
}

impl<T: WriteKv> WriteKv for (&str, T) {
    fn write(self, writer: &mut impl Write) -> io::Result<()> {
        write!(writer, "{:<31}: ", self.0)?;
        self.1.write(writer)
    }
}

/// Format a number the way C's `%g` does
///
/// Numbers whose decimal exponent lies in [-4, sig_digits) are written in
/// fixed notation, others in scientific notation. Trailing zeros of the
/// fractional part are dropped in both cases.
///
fn compact(x: Float, sig_digits: usize) -> String {
    // Zero has no exponent, NaN and infinities only have one spelling
    if x == 0. || !x.is_finite() {
        return x.to_string();
    }
    let exponent = x.abs().log10().floor() as i32;
    if (-4..sig_digits as i32).contains(&exponent) {
        let decimals = (sig_digits as i32 - 1 - exponent).max(0) as usize;
        strip_zeros(&format!("{:.*}", decimals, x)).to_owned()
    } else {
        let scientific = format!("{:.*e}", sig_digits - 1, x);
        match scientific.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{}", strip_zeros(mantissa), exp),
            None => scientific,
        }
    }
}

/// Drop the trailing zeros (and dangling point) of a decimal fraction
fn strip_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
