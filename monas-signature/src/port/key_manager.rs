//! Key manager and key factory contracts
//!
//! A registry keeps one `KeyManager` per type URL and dispatches on
//! `KeyData::type_url`. The registry itself lives outside this crate.

use crate::domain::KeyData;
use crate::error::KeyManagerError;

/// Produces new key material of one key type.
pub trait KeyFactory: Send + Sync {
    type KeyFormat;
    type Key;

    /// Generates a key from a decoded key format.
    fn new_key(&self, key_format: &Self::KeyFormat) -> Result<Self::Key, KeyManagerError>;

    /// Generates a key from a serialized key format.
    fn new_key_from_serialized_format(
        &self,
        serialized_key_format: &[u8],
    ) -> Result<Self::Key, KeyManagerError>;

    /// Generates a key and wraps it in a `KeyData`.
    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData, KeyManagerError>;
}

/// Maps one key type to its validation policy and primitive construction.
pub trait KeyManager: Send + Sync {
    type Key;
    type Primitive: ?Sized;
    type Factory: KeyFactory;

    fn key_type(&self) -> &str;

    fn version(&self) -> u32;

    fn key_factory(&self) -> &Self::Factory;

    fn does_support(&self, type_url: &str) -> bool {
        self.key_type() == type_url
    }

    /// Validates `key` and builds the primitive bound to it.
    fn primitive_from_key(&self, key: &Self::Key) -> Result<Box<Self::Primitive>, KeyManagerError>;

    /// Decodes `key_data.value` and builds the primitive bound to it.
    fn primitive_from_key_data(
        &self,
        key_data: &KeyData,
    ) -> Result<Box<Self::Primitive>, KeyManagerError>;
}
