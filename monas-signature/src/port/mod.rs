//! Ports - seams between the key manager and its collaborators

pub mod key_manager;
pub mod signature_engine;

pub use key_manager::{KeyFactory, KeyManager};
pub use signature_engine::{EngineError, PublicKeyVerify, SignatureEngine, VerifyError};
