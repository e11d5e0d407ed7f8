//! RSA SSA PKCS#1 v1.5 verification on top of the RustCrypto `rsa` crate.

use rsa::{BigUint, Pkcs1v15Sign, RsaPublicKey};
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::config::{ConfigError, SignaturePolicyConfig};
use crate::domain::HashType;
use crate::port::{EngineError, PublicKeyVerify, SignatureEngine, VerifyError};

/// Public exponents must be odd and strictly greater than this.
const PUBLIC_EXPONENT_FLOOR: u32 = 65536;

/// Engine enforcing a `SignaturePolicyConfig`.
#[derive(Debug, Clone, Default)]
pub struct RustCryptoRsaEngine {
    policy: SignaturePolicyConfig,
}

impl RustCryptoRsaEngine {
    pub fn new(policy: SignaturePolicyConfig) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &SignaturePolicyConfig {
        &self.policy
    }
}

impl SignatureEngine for RustCryptoRsaEngine {
    fn acceptable_modulus_bit_length(&self, bits: u64) -> bool {
        self.policy.accepts_modulus_bits(bits)
    }

    fn is_signature_hash_allowed(&self, hash: HashType) -> bool {
        self.policy.allows_hash(hash) && SignatureDigest::from_hash_type(hash).is_some()
    }

    fn build_verifier(
        &self,
        n: &BigUint,
        e: &BigUint,
        hash: HashType,
    ) -> Result<Box<dyn PublicKeyVerify>, EngineError> {
        let digest = match SignatureDigest::from_hash_type(hash) {
            Some(digest) if self.is_signature_hash_allowed(hash) => digest,
            _ => {
                tracing::debug!("Refusing RSA verifier with hash {}", hash);
                return Err(EngineError::UnsupportedHash(hash));
            }
        };

        let bits = n.bits() as u64;
        if !self.acceptable_modulus_bit_length(bits) {
            tracing::debug!("Refusing RSA verifier with {}-bit modulus", bits);
            return Err(EngineError::InvalidKey(format!(
                "modulus size is {bits} bits; only {}..={} bits are supported",
                self.policy.min_modulus_bits, self.policy.max_modulus_bits
            )));
        }

        validate_public_exponent(e)?;

        let public_key = RsaPublicKey::new_with_max_size(
            n.clone(),
            e.clone(),
            self.policy.max_modulus_bits as usize,
        )
        .map_err(|err| EngineError::InvalidKey(err.to_string()))?;

        Ok(Box::new(RsaSsaPkcs1Verifier { public_key, digest }))
    }
}

fn validate_public_exponent(e: &BigUint) -> Result<(), EngineError> {
    let is_odd = e.to_bytes_le().first().is_some_and(|low| low & 1 == 1);
    if !is_odd {
        return Err(EngineError::InvalidKey(
            "public exponent must be odd".to_string(),
        ));
    }
    if *e <= BigUint::from(PUBLIC_EXPONENT_FLOOR) {
        return Err(EngineError::InvalidKey(format!(
            "public exponent must be greater than {PUBLIC_EXPONENT_FLOOR}"
        )));
    }
    Ok(())
}

/// Hash functions this engine links in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignatureDigest {
    Sha256,
    Sha384,
    Sha512,
}

impl SignatureDigest {
    fn from_hash_type(hash: HashType) -> Option<Self> {
        match hash {
            HashType::Sha256 => Some(Self::Sha256),
            HashType::Sha384 => Some(Self::Sha384),
            HashType::Sha512 => Some(Self::Sha512),
            HashType::UnknownHash | HashType::Sha1 | HashType::Sha224 => None,
        }
    }

    fn digest(self, message: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(message).to_vec(),
            Self::Sha384 => Sha384::digest(message).to_vec(),
            Self::Sha512 => Sha512::digest(message).to_vec(),
        }
    }

    fn scheme(self) -> Pkcs1v15Sign {
        match self {
            Self::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
            Self::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
            Self::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
        }
    }
}

/// Verifier bound to one RSA public key and hash function.
#[derive(Debug, Clone)]
pub struct RsaSsaPkcs1Verifier {
    public_key: RsaPublicKey,
    digest: SignatureDigest,
}

impl PublicKeyVerify for RsaSsaPkcs1Verifier {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), VerifyError> {
        let hashed = self.digest.digest(message);
        self.public_key
            .verify(self.digest.scheme(), &hashed, signature)
            .map_err(|_| VerifyError::InvalidSignature)
    }
}
