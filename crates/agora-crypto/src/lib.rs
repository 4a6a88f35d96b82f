//! # Agora Crypto
//!
//! Cryptographic operations for the Agora network registry. This crate wraps
//! the public-key material participants publish and exposes the few
//! operations the registry performs with it: signature verification, message
//! encryption towards a participant, and hashing.
//!
//! ## Design Principles
//!
//! - **Capability Checked**: A [`Cryptographer`] is tagged at construction with what its
//!   algorithm can do. Calling an operation the algorithm does not support is an explicit
//!   error, never a silent wrong-key primitive call.
//! - **Modular Architecture**: Traits are separated from implementations, one unit struct per
//!   algorithm, allowing easy algorithm addition and testing.
//! - **Unified Error Handling**: Single `CryptoError` enum for consistent error handling across
//!   all operations.
//! - **RustCrypto Only**: Uses only audited rustcrypto-family crates (ed25519-dalek, cx448,
//!   x25519-dalek, rsa, blake2) for cryptographic primitives.
//!
//! ## Security Features
//!
//! - **Public Keys Only**: The crate holds participant public keys exclusively; no private-key
//!   operation exists in its API.
//! - **Sealed Traits**: Prevents external implementations that might bypass capability checks.
//! - **Memory Protection**: Derived AEAD keys are zeroized after sealing.
//! - **Error Abstraction**: Errors don't leak key material.
//!
//! ## Usage
//!
//! ```rust
//! use agora_crypto::{digest, Cryptographer, HashingAlgorithm};
//!
//! let fingerprint = digest(HashingAlgorithm::Blake2b, "participant endpoint");
//! assert_eq!(fingerprint.len(), 88); // base64 of a 64-byte BLAKE2b digest
//!
//! let cryptographer = Cryptographer::new(
//!     "9Jdwm5vLdDxekVXz6/GSoUMrVHBfTlj4pG50FcsfKUI=",
//!     "ED25519",
//! ).unwrap();
//! let is_valid = cryptographer.verify_signature(
//!     "MqTqwKy2/ffOk7IHeR2hlA/nlvhVdN6tErWUEBRueLm4Yh+NBFwkA/uqCNPbLioavOhZ8soK+FPL8CWQQWJjBw==",
//!     "Hello narniya",
//! ).unwrap();
//! assert!(is_valid);
//! ```

pub mod algorithm;
pub mod codec;
pub mod cryptographer;
pub mod encrypt;
pub mod encrypt_trait;
pub mod error;
pub mod hash;
pub mod hash_trait;
pub mod verify;
pub mod verify_trait;

#[cfg(test)]
mod test_vectors;

// Re-export crypto types for convenience
pub use algorithm::{Capability, EncryptionAlgorithm, HashingAlgorithm, SigningAlgorithm};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
pub use codec::{decode_bytes, InputEncoding};
pub use cryptographer::{Cryptographer, PublicKey};
pub use encrypt::{EncryptionPublicKey, RsaOaepEncryptor, SealedBoxEncryptor};
pub use encrypt_trait::MessageEncryptor;
pub use error::CryptoError;
pub use hash::Blake2bHasher;
pub use hash_trait::HashFunction;
pub use verify::{Ed25519Verifier, Ed448Verifier, SigningPublicKey};
pub use verify_trait::SignatureVerifier;

/// Computes the digest of the given message using the named hash algorithm
/// and returns it as base64.
///
/// Hashing is keyless, so it lives here as a free function rather than on
/// [`Cryptographer`], which always wraps a key.
pub fn digest(algorithm: HashingAlgorithm, message: &str) -> String {
    match algorithm {
        HashingAlgorithm::Blake2b => STANDARD.encode(Blake2bHasher::digest(message.as_bytes())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // BLAKE2b-512("Pure"), produced outside this crate
    const PURE_DIGEST_B64: &str =
        "oI3FpTVbReZuDRekChIsneA4sETkG06GFkwPDTZgzvcEp8IQZKpY61awQWdEou4ndPU6YDDAsYvzD/v8dDMNyg==";

    #[test]
    fn test_digest_matches_reference_vector() {
        assert_eq!(digest(HashingAlgorithm::Blake2b, "Pure"), PURE_DIGEST_B64);
    }

    #[test]
    fn test_digest_is_deterministic_and_input_sensitive() {
        let first = digest(HashingAlgorithm::Blake2b, "Pure");
        let second = digest(HashingAlgorithm::Blake2b, "Pure");
        assert_eq!(first, second);
        assert_ne!(first, digest(HashingAlgorithm::Blake2b, "pure"));
    }

    #[test]
    fn test_digest_of_empty_message_is_64_bytes() {
        let encoded = digest(HashingAlgorithm::Blake2b, "");
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded.len(), 64);
    }
}
