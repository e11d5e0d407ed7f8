//! Identity of the RSA SSA PKCS#1 v1.5 public key type.

pub const TYPE_URL_PREFIX: &str = "type.googleapis.com/";

/// Type URL under which the verify key manager is registered.
pub const KEY_TYPE: &str = "type.googleapis.com/google.crypto.tink.RsaSsaPkcs1PublicKey";

/// Highest key version this manager accepts.
pub const VERSION: u32 = 0;

/// Manager that owns key generation for this key type.
pub const SIGN_KEY_MANAGER: &str = "RsaSsaPkcs1SignKeyManager";
