use std::fmt;

use tracing::{debug, trace};

use crate::algorithm::EncryptionAlgorithm;
use crate::encrypt::{RsaOaepEncryptor, SealedBoxEncryptor};
use crate::encrypt_trait::MessageEncryptor;
use crate::error::CryptoError;

/// A loaded encryption public key, tagged with its catalog algorithm.
/// Mirrors [`crate::verify::SigningPublicKey`] on the encryption side.
pub enum EncryptionPublicKey {
    Rsa(rsa::RsaPublicKey),
    X25519(x25519_dalek::PublicKey),
}

impl EncryptionPublicKey {
    /// Decodes public key bytes under the given encryption algorithm.
    /// For RSA the bytes are a PEM container; for X25519 a raw point.
    ///
    /// # Errors
    /// Returns `CryptoError::InvalidKeyLength` or `CryptoError::MalformedKey`
    /// when the bytes are unusable for the algorithm.
    pub fn from_public_bytes(
        algorithm: EncryptionAlgorithm,
        bytes: &[u8],
    ) -> Result<Self, CryptoError> {
        trace!("Loading {} encryption public key", algorithm);
        let key = match algorithm {
            EncryptionAlgorithm::Rsa => Self::Rsa(RsaOaepEncryptor::decode_key(bytes)?),
            EncryptionAlgorithm::X25519 => Self::X25519(SealedBoxEncryptor::decode_key(bytes)?),
        };
        debug!("{} encryption public key loaded successfully", algorithm);
        Ok(key)
    }

    /// The catalog algorithm this key belongs to.
    pub const fn algorithm(&self) -> EncryptionAlgorithm {
        match self {
            Self::Rsa(_) => EncryptionAlgorithm::Rsa,
            Self::X25519(_) => EncryptionAlgorithm::X25519,
        }
    }

    /// Encrypts plaintext bytes towards this key. Fresh randomness per call.
    ///
    /// # Errors
    /// Returns `CryptoError::Encryption` if the primitive fails.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        match self {
            Self::Rsa(key) => RsaOaepEncryptor::encrypt(key, plaintext),
            Self::X25519(key) => SealedBoxEncryptor::encrypt(key, plaintext),
        }
    }
}

// Key bytes stay out of Debug output
impl fmt::Debug for EncryptionPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EncryptionPublicKey")
            .field(&self.algorithm())
            .finish()
    }
}
