pub mod public_key_factory;
pub mod verify_key_manager;

pub use public_key_factory::RsaSsaPkcs1PublicKeyFactory;
pub use verify_key_manager::RsaSsaPkcs1VerifyKeyManager;
