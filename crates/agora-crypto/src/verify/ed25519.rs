use ed25519_dalek::{Signature, VerifyingKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use signature::Verifier;

use crate::error::CryptoError;
use crate::verify_trait::SignatureVerifier;

/// Ed25519 signature verification.
/// Uses the Ed25519 elliptic curve signature scheme over raw 32-byte public
/// keys and 64-byte signatures, the dominant signing scheme on the network.
///
/// Design choice: ed25519-dalek is a rustcrypto crate, resistant to timing
/// attacks and already zeroize-integrated. Verification failure is a `false`
/// result, not an error; only structurally unusable inputs error.
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    type VerifyingKey = VerifyingKey;

    fn decode_key(bytes: &[u8]) -> Result<VerifyingKey, CryptoError> {
        let key_array: [u8; PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidKeyLength)?;
        VerifyingKey::from_bytes(&key_array).map_err(|_| CryptoError::MalformedKey)
    }

    fn verify(key: &VerifyingKey, message: &[u8], signature: &[u8]) -> Result<bool, CryptoError> {
        let sig_array: [u8; SIGNATURE_LENGTH] = signature
            .try_into()
            .map_err(|_| CryptoError::InvalidSignatureLength)?;
        let sig = Signature::from_bytes(&sig_array);
        Ok(key.verify(message, &sig).is_ok())
    }
}

impl crate::verify_trait::private::Sealed for Ed25519Verifier {}
