pub mod rsa_engine;
pub mod serialization;
