//! Configuration for the branch predictor suite.
//!
//! This module defines the configuration consumed by [`Predictor::init`](crate::Predictor::init).
//! It provides:
//! 1. **Defaults:** Baseline history widths used when a field is not supplied.
//! 2. **Scheme:** The closed set of prediction schemes and their display names.
//! 3. **Sources:** Deserialization from JSON and parsing of the compact scheme string
//!    (`static`, `gshare:<g>`, `tournament:<g>:<l>:<p>`, `custom`).
//! 4. **Validation:** Bit-width checks performed before any table is sized.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::common::{ConfigError, MAX_TABLE_BITS};

/// Default configuration constants.
///
/// These values apply whenever a field is omitted from JSON or from the
/// compact scheme string.
mod defaults {
    /// Default global history width (2^14 entry gshare/global tables).
    pub const GHISTORY_BITS: u32 = 14;

    /// Default local history width (2^10 entry local predictor table).
    pub const LHISTORY_BITS: u32 = 10;

    /// Default PC index width (2^10 entry local history table).
    pub const PC_INDEX_BITS: u32 = 10;
}

/// Branch prediction scheme.
///
/// Determines which predictor the facade builds on `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum Scheme {
    /// Always predict taken.
    #[default]
    #[serde(alias = "static", alias = "STATIC")]
    Static,
    /// Global history XOR PC indexed counter table.
    #[serde(alias = "Gshare", alias = "gshare", alias = "GSHARE")]
    GShare,
    /// Local/global hybrid with a meta-chooser.
    #[serde(alias = "tournament", alias = "TOURNAMENT")]
    Tournament,
    /// Perceptron predictor over global history.
    #[serde(alias = "custom", alias = "CUSTOM", alias = "Perceptron", alias = "perceptron")]
    Custom,
}

impl Scheme {
    /// All schemes in their stable reporting order.
    pub const ALL: [Self; 4] = [Self::Static, Self::GShare, Self::Tournament, Self::Custom];

    /// Returns the stable display name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::GShare => "Gshare",
            Self::Tournament => "Tournament",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = ConfigError;

    /// Parses a scheme name, ignoring ASCII case. `perceptron` is accepted for `custom`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "gshare" => Ok(Self::GShare),
            "tournament" => Ok(Self::Tournament),
            "custom" | "perceptron" => Ok(Self::Custom),
            _ => Err(ConfigError::UnknownScheme(s.to_owned())),
        }
    }
}

/// Root configuration structure.
///
/// Set once before the first prediction and never mutated afterwards. Only
/// the widths consumed by the selected scheme are validated: gshare uses
/// `ghistory_bits`, tournament uses all three, static and custom use none.
///
/// # Examples
///
/// ```
/// use bpred_core::config::{Config, Scheme};
///
/// let config: Config = "tournament:9:10:10".parse().unwrap();
/// assert_eq!(config.scheme, Scheme::Tournament);
/// assert_eq!(config.lhistory_bits, 10);
///
/// let json = r#"{ "scheme": "GShare", "ghistory_bits": 13 }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.ghistory_bits, 13);
/// assert_eq!(config.pc_index_bits, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Active prediction scheme.
    #[serde(default)]
    pub scheme: Scheme,

    /// Global history width; sizes the gshare, global and chooser tables.
    #[serde(default = "Config::default_ghistory_bits")]
    pub ghistory_bits: u32,

    /// Local history width; sizes the tournament local predictor table.
    #[serde(default = "Config::default_lhistory_bits")]
    pub lhistory_bits: u32,

    /// PC index width; sizes the tournament local history table.
    #[serde(default = "Config::default_pc_index_bits")]
    pub pc_index_bits: u32,

    /// Emit a trace event for every resolved branch.
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Returns the default global history width.
    fn default_ghistory_bits() -> u32 {
        defaults::GHISTORY_BITS
    }

    /// Returns the default local history width.
    fn default_lhistory_bits() -> u32 {
        defaults::LHISTORY_BITS
    }

    /// Returns the default PC index width.
    fn default_pc_index_bits() -> u32 {
        defaults::PC_INDEX_BITS
    }

    /// Creates a configuration for `scheme` with default widths.
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme,
            ..Self::default()
        }
    }

    /// Deserializes and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed documents or unknown scheme
    /// names, and a width error if [`Config::validate`] rejects the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the bit widths consumed by the selected scheme.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroBits`] or [`ConfigError::TooManyBits`] for
    /// the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.scheme {
            Scheme::Static | Scheme::Custom => Ok(()),
            Scheme::GShare => check_bits("ghistory_bits", self.ghistory_bits),
            Scheme::Tournament => {
                check_bits("ghistory_bits", self.ghistory_bits)?;
                check_bits("lhistory_bits", self.lhistory_bits)?;
                check_bits("pc_index_bits", self.pc_index_bits)
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: Scheme::default(),
            ghistory_bits: defaults::GHISTORY_BITS,
            lhistory_bits: defaults::LHISTORY_BITS,
            pc_index_bits: defaults::PC_INDEX_BITS,
            verbose: false,
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scheme {
            Scheme::Static | Scheme::Custom => write!(f, "{}", self.scheme),
            Scheme::GShare => write!(f, "{}:{}", self.scheme, self.ghistory_bits),
            Scheme::Tournament => write!(
                f,
                "{}:{}:{}:{}",
                self.scheme, self.ghistory_bits, self.lhistory_bits, self.pc_index_bits
            ),
        }
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    /// Parses the compact scheme string. Omitted parameters keep their defaults.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(':');
        let scheme: Scheme = parts.next().unwrap_or_default().parse()?;
        let params: Vec<&str> = parts.collect();
        let mut config = Self::new(scheme);

        match (scheme, params.as_slice()) {
            (_, []) => {}
            (Scheme::GShare, [g]) => {
                config.ghistory_bits = parse_bits("ghistory_bits", g)?;
            }
            (Scheme::Tournament, [g, l, p]) => {
                config.ghistory_bits = parse_bits("ghistory_bits", g)?;
                config.lhistory_bits = parse_bits("lhistory_bits", l)?;
                config.pc_index_bits = parse_bits("pc_index_bits", p)?;
            }
            _ => return Err(ConfigError::MalformedScheme(s.to_owned())),
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_bits(field: &'static str, value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            field,
            value: value.to_owned(),
        })
}

fn check_bits(field: &'static str, bits: u32) -> Result<(), ConfigError> {
    if bits == 0 {
        Err(ConfigError::ZeroBits { field })
    } else if bits > MAX_TABLE_BITS {
        Err(ConfigError::TooManyBits {
            field,
            bits,
            max: MAX_TABLE_BITS,
        })
    } else {
        Ok(())
    }
}
