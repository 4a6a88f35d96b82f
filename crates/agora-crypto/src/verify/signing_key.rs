use std::fmt;

use tracing::{debug, trace};

use crate::algorithm::SigningAlgorithm;
use crate::error::CryptoError;
use crate::verify::{Ed25519Verifier, Ed448Verifier};
use crate::verify_trait::SignatureVerifier;

/// A loaded signing public key, tagged with its catalog algorithm.
/// The variant is the capability proof: holding this type means the key was
/// decoded by a signing algorithm's own decoder, so verification can dispatch
/// exhaustively without re-checking membership.
pub enum SigningPublicKey {
    Ed25519(ed25519_dalek::VerifyingKey),
    Ed448(cx448::VerifyingKey),
}

impl SigningPublicKey {
    /// Decodes raw public key bytes under the given signing algorithm.
    ///
    /// # Errors
    /// Returns `CryptoError::InvalidKeyLength` or `CryptoError::MalformedKey`
    /// when the bytes are unusable for the algorithm.
    pub fn from_public_bytes(
        algorithm: SigningAlgorithm,
        bytes: &[u8],
    ) -> Result<Self, CryptoError> {
        trace!("Loading {} signing public key", algorithm);
        let key = match algorithm {
            SigningAlgorithm::Ed25519 => Self::Ed25519(Ed25519Verifier::decode_key(bytes)?),
            SigningAlgorithm::Ed448 => Self::Ed448(Ed448Verifier::decode_key(bytes)?),
        };
        debug!("{} signing public key loaded successfully", algorithm);
        Ok(key)
    }

    /// The catalog algorithm this key belongs to.
    pub const fn algorithm(&self) -> SigningAlgorithm {
        match self {
            Self::Ed25519(_) => SigningAlgorithm::Ed25519,
            Self::Ed448(_) => SigningAlgorithm::Ed448,
        }
    }

    /// Verifies raw signature bytes over raw message bytes.
    ///
    /// # Errors
    /// Returns `CryptoError::InvalidSignatureLength` for signature bytes of
    /// the wrong length; cryptographic rejection is `Ok(false)`.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, CryptoError> {
        match self {
            Self::Ed25519(key) => Ed25519Verifier::verify(key, message, signature),
            Self::Ed448(key) => Ed448Verifier::verify(key, message, signature),
        }
    }
}

// Key bytes stay out of Debug output
impl fmt::Debug for SigningPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningPublicKey")
            .field(&self.algorithm())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_vectors;

    #[test]
    fn test_load_dispatches_on_algorithm() {
        let ed25519 = hex::decode(test_vectors::ED25519_PUBLIC_KEY_HEX).unwrap();
        let key = SigningPublicKey::from_public_bytes(SigningAlgorithm::Ed25519, &ed25519).unwrap();
        assert_eq!(key.algorithm(), SigningAlgorithm::Ed25519);

        let ed448 = hex::decode(test_vectors::ED448_PUBLIC_KEY_HEX).unwrap();
        let key = SigningPublicKey::from_public_bytes(SigningAlgorithm::Ed448, &ed448).unwrap();
        assert_eq!(key.algorithm(), SigningAlgorithm::Ed448);
    }

    #[test]
    fn test_load_rejects_cross_algorithm_lengths() {
        // a 32-byte Ed25519 key is not a valid Ed448 key and vice versa
        let ed25519 = hex::decode(test_vectors::ED25519_PUBLIC_KEY_HEX).unwrap();
        assert!(matches!(
            SigningPublicKey::from_public_bytes(SigningAlgorithm::Ed448, &ed25519).unwrap_err(),
            CryptoError::InvalidKeyLength
        ));

        let ed448 = hex::decode(test_vectors::ED448_PUBLIC_KEY_HEX).unwrap();
        assert!(matches!(
            SigningPublicKey::from_public_bytes(SigningAlgorithm::Ed25519, &ed448).unwrap_err(),
            CryptoError::InvalidKeyLength
        ));
    }

    #[test]
    fn test_loaded_key_verifies_pinned_signature() {
        let bytes = hex::decode(test_vectors::ED25519_PUBLIC_KEY_HEX).unwrap();
        let key = SigningPublicKey::from_public_bytes(SigningAlgorithm::Ed25519, &bytes).unwrap();

        let signature = test_vectors::ed25519_signature_bytes();
        assert!(key
            .verify(test_vectors::MESSAGE.as_bytes(), &signature)
            .unwrap());
    }
}
