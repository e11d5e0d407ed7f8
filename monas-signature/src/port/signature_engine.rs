//! Cryptographic engine port

use std::fmt::Debug;

use rsa::BigUint;

use crate::domain::HashType;
use crate::error::ErrorKind;

/// A verifier bound to one public key and hash function.
pub trait PublicKeyVerify: Debug + Send + Sync {
    /// Checks `signature` over `message`.
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), VerifyError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("invalid signature")]
    InvalidSignature,
}

/// Engine that owns the RSA arithmetic and the key-size and hash policy.
///
/// The key manager never decides these bounds itself; it asks the engine,
/// so deployments can tighten the policy without touching the manager.
pub trait SignatureEngine: Send + Sync {
    /// Whether a modulus of `bits` bits is safe to verify with.
    fn acceptable_modulus_bit_length(&self, bits: u64) -> bool;

    /// Whether `hash` may be used for signature verification.
    fn is_signature_hash_allowed(&self, hash: HashType) -> bool;

    /// Builds a PKCS#1 v1.5 verifier for the key `(n, e)`.
    fn build_verifier(
        &self,
        n: &BigUint,
        e: &BigUint,
        hash: HashType,
    ) -> Result<Box<dyn PublicKeyVerify>, EngineError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid RSA public key: {0}")]
    InvalidKey(String),

    #[error("hash function {0} is not supported for RSA SSA PKCS1 signatures")]
    UnsupportedHash(HashType),

    #[error("engine failure: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidKey(_) | EngineError::UnsupportedHash(_) => {
                ErrorKind::InvalidArgument
            }
            EngineError::Internal(_) => ErrorKind::Internal,
        }
    }
}
