use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, trace};

use crate::algorithm::Capability;
use crate::codec;
use crate::encrypt::EncryptionPublicKey;
use crate::error::CryptoError;
use crate::verify::SigningPublicKey;

/// The public key held by a facade instance, tagged by capability.
/// The variant is the single source of truth for what an instance can do;
/// every operation matches on it exhaustively, so a capability mismatch is
/// caught as an explicit error and can never reach the wrong primitive.
pub enum PublicKey {
    Signing(SigningPublicKey),
    Encryption(EncryptionPublicKey),
}

impl PublicKey {
    /// The capability tag carried by the variant.
    pub const fn capability(&self) -> Capability {
        match self {
            Self::Signing(key) => Capability::Signing(key.algorithm()),
            Self::Encryption(key) => Capability::Encryption(key.algorithm()),
        }
    }
}

/// Capability-checked cryptography facade over one participant public key.
///
/// Construction resolves the declared algorithm name against the catalog
/// (signing namespace first), decodes the key with that algorithm's own
/// decoder, and tags the instance. Afterwards the instance exposes exactly
/// the operations its capability permits: [`Cryptographer::verify_signature`]
/// for signing keys, [`Cryptographer::encrypt`] for encryption keys. Hashing
/// is keyless and lives at [`crate::digest`].
///
/// Instances are immutable and freely shareable: every operation takes
/// `&self`, holds no interior mutability and never blocks.
pub struct Cryptographer {
    public_key: PublicKey,
}

impl Cryptographer {
    /// Builds a facade from an encoded public key and an algorithm name.
    ///
    /// The key string may be hex (optionally `0x`-prefixed) or standard
    /// base64; the algorithm name is case-insensitive. For RSA the decoded
    /// bytes must be a PEM container holding a PKCS#1 public key; the other
    /// algorithms take raw fixed-length keys.
    ///
    /// # Errors
    /// - `CryptoError::AlgorithmNotSupported` for names in neither keyed
    ///   namespace (hashing names included: there is no such thing as a
    ///   BLAKE2B key)
    /// - `CryptoError::Hex` / `CryptoError::Base64` for undecodable key text
    /// - `CryptoError::InvalidKeyLength` / `CryptoError::MalformedKey` for
    ///   bytes the algorithm's decoder refuses
    pub fn new(encoded_public_key: &str, algorithm: &str) -> Result<Self, CryptoError> {
        trace!("Initializing cryptographer for algorithm {}", algorithm);
        let capability = Capability::resolve(algorithm)?;
        let key_bytes = codec::decode_key_material(encoded_public_key)?;
        let public_key = match capability {
            Capability::Signing(algorithm) => {
                PublicKey::Signing(SigningPublicKey::from_public_bytes(algorithm, &key_bytes)?)
            }
            Capability::Encryption(algorithm) => PublicKey::Encryption(
                EncryptionPublicKey::from_public_bytes(algorithm, &key_bytes)?,
            ),
        };
        debug!("Cryptographer initialized for {} successfully", capability);
        Ok(Self { public_key })
    }

    /// The capability the instance was constructed with.
    pub const fn algorithm(&self) -> Capability {
        self.public_key.capability()
    }

    /// Verifies a base64-encoded signature over the UTF-8 bytes of `message`.
    ///
    /// `Ok(false)` is reserved for well-formed signatures the primitive
    /// rejects: wrong key, tampered message or tampered signature bytes.
    /// Undecodable signature text is an error, never `false`.
    ///
    /// # Errors
    /// - `CryptoError::OperationNotSupported` unless the instance holds a
    ///   signing key
    /// - `CryptoError::Base64` for signature text that does not decode
    /// - `CryptoError::InvalidSignatureLength` for decoded signature bytes of
    ///   the wrong length
    pub fn verify_signature(&self, signature: &str, message: &str) -> Result<bool, CryptoError> {
        let key = match &self.public_key {
            PublicKey::Signing(key) => key,
            PublicKey::Encryption(_) => {
                return Err(CryptoError::OperationNotSupported {
                    operation: "verify_signature",
                    algorithm: self.algorithm().as_str(),
                });
            }
        };
        let signature_bytes = STANDARD.decode(signature)?;
        key.verify(message.as_bytes(), &signature_bytes)
    }

    /// Encrypts the UTF-8 bytes of `message` towards the held key and returns
    /// the ciphertext as base64. Randomized: two calls with the same message
    /// never produce the same ciphertext.
    ///
    /// # Errors
    /// - `CryptoError::OperationNotSupported` unless the instance holds an
    ///   encryption key
    /// - `CryptoError::Encryption` if the primitive fails (for RSA this
    ///   includes plaintexts beyond the OAEP capacity of the key)
    pub fn encrypt(&self, message: &str) -> Result<String, CryptoError> {
        let key = match &self.public_key {
            PublicKey::Encryption(key) => key,
            PublicKey::Signing(_) => {
                return Err(CryptoError::OperationNotSupported {
                    operation: "encrypt",
                    algorithm: self.algorithm().as_str(),
                });
            }
        };
        let ciphertext = key.encrypt(message.as_bytes())?;
        Ok(STANDARD.encode(ciphertext))
    }
}

// Key bytes stay out of Debug output
impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&self.capability()).finish()
    }
}

impl fmt::Debug for Cryptographer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cryptographer")
            .field("algorithm", &self.algorithm())
            .finish()
    }
}
