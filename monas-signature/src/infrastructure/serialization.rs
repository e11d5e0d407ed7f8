//! JSON encoding of `RsaSsaPkcs1PublicKey` records
//!
//! ```json
//! {"version":0,"n":"<base64>","e":"AQAB","params":{"hash_type":"SHA256"}}
//! ```
//!
//! Integers are unsigned big-endian byte strings in standard base64. Decoding
//! only checks the document shape; key validation is the manager's job.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::domain::{HashType, RsaSsaPkcs1Params, RsaSsaPkcs1PublicKey};

#[derive(Serialize, Deserialize)]
struct PublicKeyDocument {
    #[serde(default)]
    version: u32,
    n: String,
    e: String,
    params: ParamsDocument,
}

#[derive(Serialize, Deserialize)]
struct ParamsDocument {
    hash_type: HashType,
}

#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("invalid key document: {0}")]
    Json(String),

    #[error("invalid base64 in field '{field}'")]
    Base64 { field: &'static str },
}

pub fn decode_public_key(bytes: &[u8]) -> Result<RsaSsaPkcs1PublicKey, SerializationError> {
    let document: PublicKeyDocument =
        serde_json::from_slice(bytes).map_err(|e| SerializationError::Json(e.to_string()))?;

    let n = BASE64_STANDARD
        .decode(&document.n)
        .map_err(|_| SerializationError::Base64 { field: "n" })?;
    let e = BASE64_STANDARD
        .decode(&document.e)
        .map_err(|_| SerializationError::Base64 { field: "e" })?;

    Ok(RsaSsaPkcs1PublicKey {
        version: document.version,
        n,
        e,
        params: RsaSsaPkcs1Params {
            hash_type: document.params.hash_type,
        },
    })
}

pub fn encode_public_key(key: &RsaSsaPkcs1PublicKey) -> Result<Vec<u8>, SerializationError> {
    let document = PublicKeyDocument {
        version: key.version,
        n: BASE64_STANDARD.encode(&key.n),
        e: BASE64_STANDARD.encode(&key.e),
        params: ParamsDocument {
            hash_type: key.params.hash_type,
        },
    };
    serde_json::to_vec(&document).map_err(|e| SerializationError::Json(e.to_string()))
}
