use std::fmt;

use serde::{Deserialize, Serialize};

/// Hash function bound to a signature key.
///
/// Wire numbers match the Tink `HashType` enum, so records written by other
/// Tink implementations map onto the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HashType {
    UnknownHash,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashType {
    pub fn from_wire(value: i32) -> Option<Self> {
        match value {
            0 => Some(HashType::UnknownHash),
            1 => Some(HashType::Sha1),
            2 => Some(HashType::Sha384),
            3 => Some(HashType::Sha256),
            4 => Some(HashType::Sha512),
            5 => Some(HashType::Sha224),
            _ => None,
        }
    }

    pub fn wire_value(self) -> i32 {
        match self {
            HashType::UnknownHash => 0,
            HashType::Sha1 => 1,
            HashType::Sha384 => 2,
            HashType::Sha256 => 3,
            HashType::Sha512 => 4,
            HashType::Sha224 => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HashType::UnknownHash => "UNKNOWN_HASH",
            HashType::Sha1 => "SHA1",
            HashType::Sha224 => "SHA224",
            HashType::Sha256 => "SHA256",
            HashType::Sha384 => "SHA384",
            HashType::Sha512 => "SHA512",
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
