use crate::error::CryptoError;

/// Core trait for signature verification algorithms used in agora-crypto.
/// Each implementor pairs the key decoder for its algorithm with the
/// verification operation, which is exactly what catalog resolution selects:
/// a signing name maps to one (decoder, verifier) strategy.
///
/// Design choice: the associated key type guarantees a verifier is only ever
/// handed a key it decoded itself. The trait is sealed because the algorithm
/// set is closed; membership is decided by the catalog, never by downstream
/// implementations.
pub trait SignatureVerifier: private::Sealed {
    /// The decoded verifying key type
    type VerifyingKey;

    /// Decodes a raw public key for this algorithm.
    ///
    /// # Arguments
    /// * `bytes` - The raw key bytes, already string-decoded
    ///
    /// # Errors
    /// Returns `CryptoError::InvalidKeyLength` when `bytes` is not the
    /// algorithm's fixed key length, and `CryptoError::MalformedKey` when the
    /// bytes do not describe a usable key.
    fn decode_key(bytes: &[u8]) -> Result<Self::VerifyingKey, CryptoError>;

    /// Verifies a signature over the given message bytes.
    ///
    /// # Returns
    /// `Ok(true)` for a valid signature, `Ok(false)` for a well-formed
    /// signature the primitive rejects.
    ///
    /// # Errors
    /// Returns `CryptoError::InvalidSignatureLength` when the signature bytes
    /// are not the algorithm's fixed signature length. Length problems are an
    /// error, never `false`.
    fn verify(
        key: &Self::VerifyingKey,
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError>;
}

// Sealing the trait to prevent external implementations
pub(crate) mod private {
    pub trait Sealed {}
}
