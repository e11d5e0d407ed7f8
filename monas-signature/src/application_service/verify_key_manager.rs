//! Key manager for RSA SSA PKCS#1 v1.5 public (verification) keys.

use rsa::BigUint;

use crate::application_service::public_key_factory::RsaSsaPkcs1PublicKeyFactory;
use crate::config::{ConfigError, SignaturePolicyConfig};
use crate::domain::key_type::{KEY_TYPE, VERSION};
use crate::domain::{KeyData, RsaSsaPkcs1Params, RsaSsaPkcs1PublicKey};
use crate::error::KeyManagerError;
use crate::infrastructure::rsa_engine::RustCryptoRsaEngine;
use crate::infrastructure::serialization;
use crate::port::{KeyManager, PublicKeyVerify, SignatureEngine};

/// Validates untrusted RSA public keys and turns them into verifiers.
///
/// The manager holds no per-key state. Modulus bounds and the hash
/// allow-list come from the engine `E`.
#[derive(Debug, Clone)]
pub struct RsaSsaPkcs1VerifyKeyManager<E = RustCryptoRsaEngine> {
    engine: E,
    key_factory: RsaSsaPkcs1PublicKeyFactory,
}

impl RsaSsaPkcs1VerifyKeyManager<RustCryptoRsaEngine> {
    pub fn new() -> Self {
        Self::with_engine(RustCryptoRsaEngine::default())
    }

    pub fn from_policy(policy: SignaturePolicyConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_engine(RustCryptoRsaEngine::new(policy)?))
    }
}

impl Default for RsaSsaPkcs1VerifyKeyManager<RustCryptoRsaEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: SignatureEngine> RsaSsaPkcs1VerifyKeyManager<E> {
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            key_factory: RsaSsaPkcs1PublicKeyFactory,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Checks version, modulus size and hash, stopping at the first failure.
    pub fn validate(&self, key: &RsaSsaPkcs1PublicKey) -> Result<(), KeyManagerError> {
        self.validate_and_decode_modulus(key).map(|_| ())
    }

    fn validate_and_decode_modulus(
        &self,
        key: &RsaSsaPkcs1PublicKey,
    ) -> Result<BigUint, KeyManagerError> {
        validate_version(key.version, VERSION)?;

        let n = key
            .modulus()
            .map_err(|source| KeyManagerError::MalformedInteger {
                field: "modulus",
                source,
            })?;
        let bits = n.bits() as u64;
        if !self.engine.acceptable_modulus_bit_length(bits) {
            return Err(KeyManagerError::ModulusSizeNotAllowed { bits });
        }

        self.validate_params(&key.params)?;
        Ok(n)
    }

    pub fn validate_params(&self, params: &RsaSsaPkcs1Params) -> Result<(), KeyManagerError> {
        if !self.engine.is_signature_hash_allowed(params.hash_type) {
            return Err(KeyManagerError::HashNotAllowed(params.hash_type));
        }
        Ok(())
    }
}

fn validate_version(candidate: u32, max_expected: u32) -> Result<(), KeyManagerError> {
    if candidate > max_expected {
        return Err(KeyManagerError::UnsupportedVersion {
            version: candidate,
            max_version: max_expected,
        });
    }
    Ok(())
}

impl<E: SignatureEngine> KeyManager for RsaSsaPkcs1VerifyKeyManager<E> {
    type Key = RsaSsaPkcs1PublicKey;
    type Primitive = dyn PublicKeyVerify;
    type Factory = RsaSsaPkcs1PublicKeyFactory;

    fn key_type(&self) -> &str {
        KEY_TYPE
    }

    fn version(&self) -> u32 {
        VERSION
    }

    fn key_factory(&self) -> &RsaSsaPkcs1PublicKeyFactory {
        &self.key_factory
    }

    fn primitive_from_key(
        &self,
        key: &RsaSsaPkcs1PublicKey,
    ) -> Result<Box<dyn PublicKeyVerify>, KeyManagerError> {
        let n = self
            .validate_and_decode_modulus(key)
            .inspect_err(|err| tracing::debug!("Rejected RSA SSA PKCS1 public key: {}", err))?;

        let e = key
            .public_exponent()
            .map_err(|source| KeyManagerError::MalformedInteger {
                field: "public exponent",
                source,
            })?;

        let verifier = self
            .engine
            .build_verifier(&n, &e, key.params.hash_type)
            .inspect_err(|err| {
                tracing::debug!("Engine refused RSA SSA PKCS1 public key: {}", err)
            })?;

        tracing::debug!(
            "Built RSA SSA PKCS1 verifier ({} bits, {})",
            n.bits(),
            key.params.hash_type
        );
        Ok(verifier)
    }

    fn primitive_from_key_data(
        &self,
        key_data: &KeyData,
    ) -> Result<Box<dyn PublicKeyVerify>, KeyManagerError> {
        if !self.does_support(&key_data.type_url) {
            return Err(KeyManagerError::UnsupportedKeyType(key_data.type_url.clone()));
        }
        let key = serialization::decode_public_key(&key_data.value)?;
        self.primitive_from_key(&key)
    }
}
