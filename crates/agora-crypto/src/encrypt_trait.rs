use crate::error::CryptoError;

/// Core trait for public-key encryption algorithms used in agora-crypto.
/// Mirrors [`crate::verify_trait::SignatureVerifier`] on the encryption side:
/// one (decoder, encryptor) strategy per catalog entry.
///
/// Design choice: encryption here is strictly public-key and one-shot, with
/// fresh randomness on every call and no session state. Decryption is
/// deliberately absent; the registry only ever encrypts towards participants,
/// so private keys never enter this crate's public surface.
pub trait MessageEncryptor: private::Sealed {
    /// The decoded public key type
    type PublicKey;

    /// Decodes a public key for this algorithm.
    ///
    /// # Errors
    /// Returns `CryptoError::InvalidKeyLength` or `CryptoError::MalformedKey`
    /// when the bytes do not describe a usable key.
    fn decode_key(bytes: &[u8]) -> Result<Self::PublicKey, CryptoError>;

    /// Encrypts the plaintext towards the given public key.
    /// Output is the raw wire bytes; string encoding happens at the facade.
    ///
    /// # Errors
    /// Returns `CryptoError::Encryption` if the primitive fails.
    fn encrypt(key: &Self::PublicKey, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

// Sealing the trait to prevent external implementations
pub(crate) mod private {
    pub trait Sealed {}
}
