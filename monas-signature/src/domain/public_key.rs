use rsa::BigUint;

use crate::domain::hash_type::HashType;
use crate::domain::key_type::VERSION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaSsaPkcs1Params {
    pub hash_type: HashType,
}

/// Decoded RSA SSA PKCS#1 v1.5 public key.
///
/// - `n`: modulus, unsigned big-endian
/// - `e`: public exponent, unsigned big-endian
///
/// The byte fields are kept exactly as decoded; nothing here checks them.
/// `RsaSsaPkcs1VerifyKeyManager::validate` decides whether a key is usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaSsaPkcs1PublicKey {
    pub version: u32,
    pub n: Vec<u8>,
    pub e: Vec<u8>,
    pub params: RsaSsaPkcs1Params,
}

impl RsaSsaPkcs1PublicKey {
    pub fn new(n: Vec<u8>, e: Vec<u8>, hash_type: HashType) -> Self {
        Self {
            version: VERSION,
            n,
            e,
            params: RsaSsaPkcs1Params { hash_type },
        }
    }

    pub fn modulus(&self) -> Result<BigUint, IntegerDecodeError> {
        decode_unsigned_be(&self.n)
    }

    pub fn public_exponent(&self) -> Result<BigUint, IntegerDecodeError> {
        decode_unsigned_be(&self.e)
    }
}

/// Parameters a sign-side manager would generate a key pair from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaSsaPkcs1KeyFormat {
    pub params: RsaSsaPkcs1Params,
    pub modulus_size_in_bits: u32,
    pub public_exponent: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegerDecodeError {
    #[error("empty integer encoding")]
    Empty,
}

/// Decodes an unsigned big-endian integer. Leading zero bytes are allowed.
pub fn decode_unsigned_be(bytes: &[u8]) -> Result<BigUint, IntegerDecodeError> {
    if bytes.is_empty() {
        return Err(IntegerDecodeError::Empty);
    }
    Ok(BigUint::from_bytes_be(bytes))
}
