/// Unified error type for all agora-crypto operations.
/// This enum covers every failure the facade can report, from algorithm
/// resolution through key decoding to the cryptographic operations themselves,
/// providing a single error surface for callers. We use thiserror for
/// ergonomic error handling while keeping messages free of key material.
///
/// Design choice: a single flat enum prevents error type proliferation and
/// keeps the registry layer's error mapping trivial. The two namespace
/// refinements (`SigningAlgorithmNotSupported`, `EncryptionAlgorithmNotSupported`)
/// are produced by the per-namespace lookups only; facade construction decides
/// membership first and therefore reports unknown names uniformly as
/// `AlgorithmNotSupported`.
///
/// Security consideration: error messages identify the failure class and the
/// offending algorithm name, never the bytes of keys, signatures or messages.
#[derive(thiserror::Error, Debug)]
pub enum CryptoError {
    /// Algorithm name matched neither the signing nor the encryption namespace
    #[error("Cryptography algorithm {0} is not supported")]
    AlgorithmNotSupported(String),

    /// Algorithm name refused by the signing namespace
    #[error("{0} is not supported for signature verification")]
    SigningAlgorithmNotSupported(String),

    /// Algorithm name refused by the encryption namespace
    #[error("{0} is not supported for message encryption")]
    EncryptionAlgorithmNotSupported(String),

    /// Operation requires a capability the loaded key does not have
    #[error("Operation {operation} is not supported for {algorithm}")]
    OperationNotSupported {
        operation: &'static str,
        algorithm: &'static str,
    },

    /// Hex decoding errors
    #[error("Hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Base64 decoding errors
    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Raw public key bytes of the wrong length for the algorithm
    #[error("Invalid public key length")]
    InvalidKeyLength,

    /// Signature bytes of the wrong length for the algorithm
    #[error("Invalid signature length")]
    InvalidSignatureLength,

    /// Key bytes of the right shape but structurally unparseable
    /// (not a curve point, or a bad PEM/PKCS#1 container)
    #[error("Malformed public key")]
    MalformedKey,

    /// Errors related to encryption operations
    #[error("Encryption error")]
    Encryption,
}
