use cx448::{Signature, VerifyingKey};

use crate::error::CryptoError;
use crate::verify_trait::SignatureVerifier;

/// Raw Ed448 public keys are 57 bytes.
pub const ED448_PUBLIC_KEY_LENGTH: usize = 57;

/// Ed448 signatures are 114 bytes.
pub const ED448_SIGNATURE_LENGTH: usize = 114;

/// Ed448 signature verification.
/// Covers participants on the 224-bit security tier; keys are raw 57-byte
/// points and verification is plain RFC 8032 Ed448 with an empty context.
pub struct Ed448Verifier;

impl SignatureVerifier for Ed448Verifier {
    type VerifyingKey = VerifyingKey;

    fn decode_key(bytes: &[u8]) -> Result<VerifyingKey, CryptoError> {
        let key_array: [u8; ED448_PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidKeyLength)?;
        VerifyingKey::from_bytes(&key_array).map_err(|_| CryptoError::MalformedKey)
    }

    fn verify(key: &VerifyingKey, message: &[u8], signature: &[u8]) -> Result<bool, CryptoError> {
        if signature.len() != ED448_SIGNATURE_LENGTH {
            return Err(CryptoError::InvalidSignatureLength);
        }
        let sig = Signature::try_from(signature).map_err(|_| CryptoError::InvalidSignatureLength)?;
        Ok(key.verify_raw(&sig, message).is_ok())
    }
}

impl crate::verify_trait::private::Sealed for Ed448Verifier {}
