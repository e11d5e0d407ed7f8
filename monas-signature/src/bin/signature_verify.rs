//! Signature verification binary.
//!
//! Loads an RSA SSA PKCS#1 public key record, builds a verifier through the
//! key manager and checks one signature.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use clap::Parser;
use monas_signature::domain::key_type::KEY_TYPE;
use monas_signature::{
    KeyData, KeyManager, KeyMaterialType, RsaSsaPkcs1VerifyKeyManager, SignaturePolicyConfig,
};
use tracing_subscriber::EnvFilter;

/// Verify an RSA SSA PKCS#1 v1.5 signature.
#[derive(Parser, Debug)]
#[command(name = "signature-verify")]
#[command(about = "Monas Signature - RSA SSA PKCS1 signature verification")]
struct Args {
    /// JSON public key record.
    #[arg(short, long)]
    key: PathBuf,

    /// File containing the signed message.
    #[arg(short, long)]
    message: PathBuf,

    /// Signature, standard base64.
    #[arg(short, long)]
    signature_base64: String,

    /// TOML signature policy (defaults apply when omitted).
    #[arg(short, long)]
    policy: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let policy = match &args.policy {
        Some(path) => SignaturePolicyConfig::from_file(path)
            .with_context(|| format!("loading policy {}", path.display()))?,
        None => SignaturePolicyConfig::default(),
    };
    tracing::info!(
        "Policy: {}..={} bit modulus, hashes {:?}",
        policy.min_modulus_bits,
        policy.max_modulus_bits,
        policy.allowed_hashes
    );
    let manager = RsaSsaPkcs1VerifyKeyManager::from_policy(policy)?;

    let key_bytes = std::fs::read(&args.key)
        .with_context(|| format!("reading key {}", args.key.display()))?;
    let message = std::fs::read(&args.message)
        .with_context(|| format!("reading message {}", args.message.display()))?;
    let signature = BASE64_STANDARD
        .decode(args.signature_base64.trim())
        .context("invalid signature base64")?;

    let key_data = KeyData::new(KEY_TYPE, key_bytes, KeyMaterialType::AsymmetricPublic);
    let verifier = manager
        .primitive_from_key_data(&key_data)
        .with_context(|| format!("loading key {}", args.key.display()))?;

    if verifier.verify(&message, &signature).is_err() {
        tracing::warn!("Signature rejected for {}", args.message.display());
        bail!("signature verification failed");
    }

    println!("signature OK");
    Ok(())
}
