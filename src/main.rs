//! Command-line driver for the dijet kinematics helpers
//!
//! Reads the kinematics of one particle pair from a configuration file (by
//! default `pair.cfg` in the working directory), computes every per-pair
//! observable and prints them out. Warnings about degenerate inputs go to the
//! standard error stream.

#![warn(missing_docs)]

mod config;
mod logging;
mod output;

use crate::config::Configuration;

use dijet_kinematics::TracingDiagnostics;

use eyre::WrapErr;
use tracing::{debug, info};

use std::io;

/// We'll use eyre's type-erased result type throughout the driver
type Result<T> = eyre::Result<T>;

/// Configuration file used when none is given on the command line
const DEFAULT_CONFIG: &str = "pair.cfg";

fn main() -> Result<()> {
    // ### CONFIGURATION READOUT ###

    let file_name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_owned());
    let cfg = Configuration::load(&file_name).wrap_err("Failed to load the configuration")?;

    logging::setup_logging(cfg.verbosity).wrap_err("Failed to set up logging")?;
    info!(config = %file_name, "Configuration loaded");

    // ### COMPUTATION ###

    let pair = cfg.pair();
    debug!(?pair, "Computing pair observables");
    let observables = pair.observables(&TracingDiagnostics);

    // ### RESULTS DISPLAY ###

    let stdout = io::stdout();
    output::dump_results(&cfg, &observables, &mut stdout.lock())
        .wrap_err("Failed to output the results")?;

    Ok(())
}
