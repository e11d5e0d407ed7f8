use crate::domain::key_type::SIGN_KEY_MANAGER;
use crate::domain::{KeyData, RsaSsaPkcs1KeyFormat, RsaSsaPkcs1PublicKey};
use crate::error::KeyManagerError;
use crate::port::KeyFactory;

/// Key factory for RSA SSA PKCS#1 public keys.
///
/// A public key only exists as the counterpart of a private key, so every
/// operation fails with `ErrorKind::Unimplemented` and points the caller at
/// the sign-side manager. Inputs are never inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct RsaSsaPkcs1PublicKeyFactory;

fn not_supported() -> KeyManagerError {
    KeyManagerError::Unimplemented {
        manager: SIGN_KEY_MANAGER,
    }
}

impl KeyFactory for RsaSsaPkcs1PublicKeyFactory {
    type KeyFormat = RsaSsaPkcs1KeyFormat;
    type Key = RsaSsaPkcs1PublicKey;

    fn new_key(
        &self,
        _key_format: &RsaSsaPkcs1KeyFormat,
    ) -> Result<RsaSsaPkcs1PublicKey, KeyManagerError> {
        Err(not_supported())
    }

    fn new_key_from_serialized_format(
        &self,
        _serialized_key_format: &[u8],
    ) -> Result<RsaSsaPkcs1PublicKey, KeyManagerError> {
        Err(not_supported())
    }

    fn new_key_data(&self, _serialized_key_format: &[u8]) -> Result<KeyData, KeyManagerError> {
        Err(not_supported())
    }
}
