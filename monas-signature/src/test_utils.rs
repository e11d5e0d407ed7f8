//! Test utilities and mock engines for unit testing.
//!
//! Vectors were produced with OpenSSL: a 2048-bit key with public exponent
//! 65537 signing `MESSAGE` with PKCS#1 v1.5 over SHA-256 and SHA-512, plus an
//! unrelated 1024-bit modulus.

use std::sync::atomic::{AtomicUsize, Ordering};

use rsa::BigUint;

use crate::config::SignaturePolicyConfig;
use crate::domain::{HashType, RsaSsaPkcs1PublicKey};
use crate::infrastructure::rsa_engine::RustCryptoRsaEngine;
use crate::port::{EngineError, PublicKeyVerify, SignatureEngine};

pub const MESSAGE: &[u8] = b"Hello, World!";

pub const PUBLIC_EXPONENT: [u8; 3] = [0x01, 0x00, 0x01];

pub const MODULUS_2048_HEX: &str = concat!(
    "9ddf53e2c7a38b3047d8bd0bbceece077c0d0becb2a1fba54c9a21b541f808ce",
    "fdeaf55e3e5db447cf2319081438c1ac6c62ca712c17f38d58bc7dbdbfa37b10",
    "dfbf029bd38cf4d8c87b2d149e240a20d88806a0ede658eb9d2145cf2ce6fbe8",
    "27c2e5916e97bc4b12005509fe0ccf8769ae85f7a1059cd48075a9b98158ee28",
    "c5e340eb35d4f4997d0a0861ba3e106801e9c9fb252769931151826b5af10fe6",
    "1c7ce2b4c85cd4f272376540b288a70064e4e0f83bae09bb198205c046ccb349",
    "005f17a83371742b37aca7bd5ec51206890a045d96e159a16730b1c40053756f",
    "6cc343444c4ee23603e0144268dc9f122ae867cb9cd071b81dcd88175dd34557",
);

pub const MODULUS_1024_HEX: &str = concat!(
    "eaf757efcfb3b9643f1662655deafcee406f97b6e8770a0b65afc0ecbf9c3ee9",
    "078ecd8db1b9a4958808c2649d34defb45adf6c30ee37a914d42985061a54028",
    "5d0ebe889ec15ed03b2d1f4fd1bf20e9f500fc8b49a6b501000ecf58db7ab583",
    "6ebd63e53fa81c09b469c3d864836cd004bd255ce958a30e7765fd70f72e3fab",
);

pub const SIGNATURE_SHA256_HEX: &str = concat!(
    "27ad621c0b4814f43b333e3572b66097a9125bc12a6b94c1341d7cc6cd8a99a0",
    "e76c787028f6d4287ca99cae6d3a49d5e5b645975ad920fdffe08182448209cc",
    "0d43fd1fce526fab626813da41e34e505aee37d19c2e3142dc5b8225372cd129",
    "31b4eb2bd359f4743ef9a501d2ecf59f1c224469febd4370b1f73e68d4553ce9",
    "248fc50448368804e877538eb5a570426b15ddd381df1f89a976429a77396768",
    "2142485d4dc04de3d5c566157c95351e219eceabdfbd70af4d698fb2ee7787ce",
    "70d356c5cf8dd9e15b05b612362c8e839ceb72615baf90dbb3b3c15a465c036d",
    "0f39f972539b0e04a25b0c59efb37b8997c0e9140e44f3fa333125f3fe123d9e",
);

pub const SIGNATURE_SHA512_HEX: &str = concat!(
    "57a2e7caf25cdd5f76fe6eac7622a8cb0e68d27b6282b264f47cf26799f1fbd3",
    "25c479396a81195edfb2ef367b4efc4a61cff70fd6fe18dbe912d17e20ba1c82",
    "e0f0b2b627e70cb6cd5eac1aec40b6cbe57ce8c3ef602f844c457553cb59d2ed",
    "a6ad1c3d983d00b7a8dd7220a07cb6b131267023ea4420908094a68084b76098",
    "711c4ffc57012b32fe39d99bab0dc3cce6fa5f27c86fe8832a5302bdeaedc590",
    "509e4f074d89b446a7e9f50651b8f71e8a8bdd014382ea069dd077d2da4707c9",
    "408f48e6fa15b661e520e9c4fe169776c2a370a0c12de75d1c85a37dca23e45c",
    "5d29778b6ea63ca3890617c7a425f99df04294860a3548d38c621d04ebc37440",
);

pub fn modulus_2048() -> BigUint {
    BigUint::from_bytes_be(&hex::decode(MODULUS_2048_HEX).expect("valid hex"))
}

/// Version 0 record for the 2048-bit test key.
pub fn public_key_2048(hash_type: HashType) -> RsaSsaPkcs1PublicKey {
    RsaSsaPkcs1PublicKey::new(
        hex::decode(MODULUS_2048_HEX).expect("valid hex"),
        PUBLIC_EXPONENT.to_vec(),
        hash_type,
    )
}

// ============================================================================
// RecordingEngine
// ============================================================================

/// Default engine that counts `build_verifier` calls.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    inner: RustCryptoRsaEngine,
    build_calls: AtomicUsize,
}

impl RecordingEngine {
    pub fn build_calls(&self) -> usize {
        self.build_calls.load(Ordering::SeqCst)
    }
}

impl SignatureEngine for RecordingEngine {
    fn acceptable_modulus_bit_length(&self, bits: u64) -> bool {
        self.inner.acceptable_modulus_bit_length(bits)
    }

    fn is_signature_hash_allowed(&self, hash: HashType) -> bool {
        self.inner.is_signature_hash_allowed(hash)
    }

    fn build_verifier(
        &self,
        n: &BigUint,
        e: &BigUint,
        hash: HashType,
    ) -> Result<Box<dyn PublicKeyVerify>, EngineError> {
        self.build_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.build_verifier(n, e, hash)
    }
}

// ============================================================================
// FailingEngine
// ============================================================================

/// Engine with the default policy whose construction always fails.
#[derive(Debug, Default)]
pub struct FailingEngine {
    policy: SignaturePolicyConfig,
}

impl SignatureEngine for FailingEngine {
    fn acceptable_modulus_bit_length(&self, bits: u64) -> bool {
        self.policy.accepts_modulus_bits(bits)
    }

    fn is_signature_hash_allowed(&self, hash: HashType) -> bool {
        self.policy.allows_hash(hash)
    }

    fn build_verifier(
        &self,
        _n: &BigUint,
        _e: &BigUint,
        _hash: HashType,
    ) -> Result<Box<dyn PublicKeyVerify>, EngineError> {
        Err(EngineError::Internal("resource exhausted".to_string()))
    }
}
