pub mod application_service;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(test)]
pub(crate) mod test_utils;

pub use application_service::{RsaSsaPkcs1PublicKeyFactory, RsaSsaPkcs1VerifyKeyManager};
pub use config::{ConfigError, SignaturePolicyConfig};
pub use domain::*;
pub use error::{ErrorKind, KeyManagerError};
pub use infrastructure::rsa_engine::{RsaSsaPkcs1Verifier, RustCryptoRsaEngine};
pub use port::*;
