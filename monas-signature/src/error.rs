use crate::domain::{HashType, IntegerDecodeError};
use crate::infrastructure::serialization::SerializationError;
use crate::port::EngineError;

/// Coarse error category, mirroring the status codes callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied a key the policy rejects. Fix the input.
    InvalidArgument,
    /// The operation does not exist for this key type.
    Unimplemented,
    /// The cryptographic engine failed on input that passed validation.
    Internal,
}

#[derive(Debug, thiserror::Error)]
pub enum KeyManagerError {
    #[error("unsupported version: key version {version} is greater than {max_version}")]
    UnsupportedVersion { version: u32, max_version: u32 },

    #[error("malformed {field}: {source}")]
    MalformedInteger {
        field: &'static str,
        source: IntegerDecodeError,
    },

    #[error("modulus size not allowed: {bits} bits")]
    ModulusSizeNotAllowed { bits: u64 },

    #[error("hash function {0} is not allowed for digital signatures")]
    HashNotAllowed(HashType),

    #[error("key type '{0}' is not supported by this manager")]
    UnsupportedKeyType(String),

    #[error("malformed key record: {0}")]
    MalformedKey(#[from] SerializationError),

    #[error("operation not supported for public keys, please use the {manager}")]
    Unimplemented { manager: &'static str },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl KeyManagerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KeyManagerError::UnsupportedVersion { .. }
            | KeyManagerError::MalformedInteger { .. }
            | KeyManagerError::ModulusSizeNotAllowed { .. }
            | KeyManagerError::HashNotAllowed(_)
            | KeyManagerError::UnsupportedKeyType(_)
            | KeyManagerError::MalformedKey(_) => ErrorKind::InvalidArgument,
            KeyManagerError::Unimplemented { .. } => ErrorKind::Unimplemented,
            KeyManagerError::Engine(err) => err.kind(),
        }
    }
}
