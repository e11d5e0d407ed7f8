//! Signature policy configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::HashType;

/// Smallest modulus any policy may accept.
pub const MODULUS_BITS_FLOOR: u64 = 2048;

/// Key-size and hash policy enforced by the RSA engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignaturePolicyConfig {
    /// Minimum modulus size in bits (inclusive)
    #[serde(default = "default_min_modulus_bits")]
    pub min_modulus_bits: u64,

    /// Maximum modulus size in bits (inclusive)
    #[serde(default = "default_max_modulus_bits")]
    pub max_modulus_bits: u64,

    /// Hash functions accepted for signature verification
    #[serde(default = "default_allowed_hashes")]
    pub allowed_hashes: Vec<HashType>,
}

impl Default for SignaturePolicyConfig {
    fn default() -> Self {
        Self {
            min_modulus_bits: default_min_modulus_bits(),
            max_modulus_bits: default_max_modulus_bits(),
            allowed_hashes: default_allowed_hashes(),
        }
    }
}

fn default_min_modulus_bits() -> u64 {
    MODULUS_BITS_FLOOR
}

fn default_max_modulus_bits() -> u64 {
    8192
}

fn default_allowed_hashes() -> Vec<HashType> {
    vec![HashType::Sha256, HashType::Sha384, HashType::Sha512]
}

impl SignaturePolicyConfig {
    /// Load and validate a policy from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// Load and validate a policy from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_modulus_bits < MODULUS_BITS_FLOOR {
            return Err(ConfigError::ModulusBelowFloor(self.min_modulus_bits));
        }
        if self.min_modulus_bits > self.max_modulus_bits {
            return Err(ConfigError::InvalidModulusRange {
                min: self.min_modulus_bits,
                max: self.max_modulus_bits,
            });
        }
        if self.allowed_hashes.is_empty() {
            return Err(ConfigError::NoHashAllowed);
        }
        if let Some(hash) = self
            .allowed_hashes
            .iter()
            .find(|hash| matches!(hash, HashType::Sha1 | HashType::UnknownHash))
        {
            return Err(ConfigError::InsecureHash(*hash));
        }
        if let Some(hash) = self
            .allowed_hashes
            .iter()
            .find(|hash| !matches!(hash, HashType::Sha256 | HashType::Sha384 | HashType::Sha512))
        {
            return Err(ConfigError::UnsupportedHash(*hash));
        }
        Ok(())
    }

    pub fn accepts_modulus_bits(&self, bits: u64) -> bool {
        (self.min_modulus_bits..=self.max_modulus_bits).contains(&bits)
    }

    pub fn allows_hash(&self, hash: HashType) -> bool {
        self.allowed_hashes.contains(&hash)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read policy: {0}")]
    Io(String),

    #[error("failed to parse policy: {0}")]
    Parse(String),

    #[error("min_modulus_bits {0} is below the 2048-bit floor")]
    ModulusBelowFloor(u64),

    #[error("min_modulus_bits {min} is greater than max_modulus_bits {max}")]
    InvalidModulusRange { min: u64, max: u64 },

    #[error("allowed_hashes is empty")]
    NoHashAllowed,

    #[error("hash function {0} is not safe for digital signatures")]
    InsecureHash(HashType),

    #[error("hash function {0} is not supported for RSA SSA PKCS1 verification")]
    UnsupportedHash(HashType),
}
