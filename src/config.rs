//! Mechanism for loading the driver's configuration

use crate::Result;

use dijet_kinematics::{Float, ParticleKinematics, ParticlePair};

use eyre::{ensure, eyre, WrapErr};

use std::{fs, str::FromStr};

/// Driver configuration
#[derive(Debug)]
pub struct Configuration {
    /// First particle of the pair (e.g. leading jet)
    pub first: ParticleKinematics,

    /// Second particle of the pair
    pub second: ParticleKinematics,

    /// Logging verbosity (0 = warnings, 1 = info, 2 = debug, 3+ = trace)
    pub verbosity: u8,
}
//
impl Configuration {
    /// Load the configuration from a file, check it, and print it out
    pub fn load(file_name: &str) -> Result<Self> {
        let config_str = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("Could not read configuration file {}", file_name))?;
        let config = Self::parse(&config_str)?;
        config.print();
        Ok(config)
    }

    /// Decode and check the contents of a configuration file
    pub fn parse(config_str: &str) -> Result<Self> {
        let mut reader = ConfigReader::new(config_str);
        let first = reader.particle(1)?;
        let second = reader.particle(2)?;
        let verbosity = reader.value::<u8>("verbosity")?;
        reader.finish()?;
        Ok(Configuration {
            first,
            second,
            verbosity,
        })
    }

    /// Particle pair described by this configuration
    pub fn pair(&self) -> ParticlePair {
        ParticlePair::new(self.first, self.second)
    }

    /// Display the configuration
    pub fn print(&self) {
        println!("PT1       : {}", self.first.pt);
        println!("ETA1      : {}", self.first.eta);
        println!("PHI1      : {}", self.first.phi);
        println!("MASS1     : {}", self.first.mass);
        println!("PT2       : {}", self.second.pt);
        println!("ETA2      : {}", self.second.eta);
        println!("PHI2      : {}", self.second.phi);
        println!("MASS2     : {}", self.second.mass);
        println!("VERBOSITY : {}", self.verbosity);
    }
}

/// Sequential reader of configuration values
///
/// Each non-blank line holds one value as its first whitespace-separated
/// token. Values come in a fixed order, and anything after the value on a
/// line is a free-form comment.
///
struct ConfigReader<'data> {
    tokens: Box<dyn Iterator<Item = &'data str> + 'data>,
}
//
impl<'data> ConfigReader<'data> {
    fn new(config_str: &'data str) -> Self {
        let tokens = config_str
            .lines()
            .filter_map(|line| line.split_whitespace().next());
        Self {
            tokens: Box::new(tokens),
        }
    }

    /// Read the next value, `name` being used in error messages
    fn value<T: FromStr>(&mut self, name: &str) -> Result<T>
    where
        <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        let token = self
            .tokens
            .next()
            .ok_or_else(|| eyre!("Missing configuration of {}", name))?;
        token
            .parse::<T>()
            .wrap_err_with(|| format!("Could not parse configuration of {}", name))
    }

    /// Read a kinematic quantity, which must be finite
    //
    // The library propagates NaNs and infinities, but in a hand-written
    // configuration they can only be typos.
    //
    fn kinematic(&mut self, name: &str) -> Result<Float> {
        let value = self.value::<Float>(name)?;
        ensure!(
            value.is_finite(),
            "Configuration of {} must be finite, got {}",
            name,
            value
        );
        Ok(value)
    }

    /// Read the (pt, eta, phi, mass) block of particle number `index`
    fn particle(&mut self, index: usize) -> Result<ParticleKinematics> {
        Ok(ParticleKinematics::new(
            self.kinematic(&format!("pt{}", index))?,
            self.kinematic(&format!("eta{}", index))?,
            self.kinematic(&format!("phi{}", index))?,
            self.kinematic(&format!("mass{}", index))?,
        ))
    }

    /// Check that every value has been consumed
    fn finish(mut self) -> Result<()> {
        ensure!(
            self.tokens.next().is_none(),
            "Unexpected trailing items in the configuration"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_CONFIG: &str = "
        45.0    pt1   (GeV)
        0.3     eta1
        0.1     phi1  (rad)
        5.2     mass1 (GeV)

        32.5    pt2   (GeV)
        -1.1    eta2
        2.9     phi2  (rad)
        4.7     mass2 (GeV)

        1       verbosity
    ";

    #[test]
    fn well_formed_configuration_is_parsed() {
        let cfg = Configuration::parse(GOOD_CONFIG).unwrap();
        assert_eq!(cfg.first, ParticleKinematics::new(45., 0.3, 0.1, 5.2));
        assert_eq!(cfg.second, ParticleKinematics::new(32.5, -1.1, 2.9, 4.7));
        assert_eq!(cfg.verbosity, 1);
        assert_eq!(cfg.pair().first, cfg.first);
    }

    #[test]
    fn missing_item_is_named() {
        let truncated: String = GOOD_CONFIG.lines().take(8).collect::<Vec<_>>().join("\n");
        let err = Configuration::parse(&truncated).unwrap_err();
        assert!(err.to_string().contains("phi2"), "{err}");
    }

    #[test]
    fn unparseable_item_is_named() {
        let broken = GOOD_CONFIG.replace("-1.1", "minus_one");
        let err = Configuration::parse(&broken).unwrap_err();
        assert!(err.to_string().contains("eta2"), "{err}");
    }

    #[test]
    fn non_finite_kinematics_are_rejected() {
        let broken = GOOD_CONFIG.replace("45.0", "inf");
        let err = Configuration::parse(&broken).unwrap_err();
        assert!(err.to_string().contains("pt1"), "{err}");
    }

    #[test]
    fn trailing_items_are_rejected() {
        let extended = format!("{}\n 7 extra", GOOD_CONFIG);
        assert!(Configuration::parse(&extended).is_err());
    }
}
