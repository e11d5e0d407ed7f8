pub mod hash_type;
pub mod key_data;
pub mod key_type;
pub mod public_key;

pub use hash_type::HashType;
pub use key_data::{KeyData, KeyMaterialType};
pub use public_key::{
    decode_unsigned_be, IntegerDecodeError, RsaSsaPkcs1KeyFormat, RsaSsaPkcs1Params,
    RsaSsaPkcs1PublicKey,
};
