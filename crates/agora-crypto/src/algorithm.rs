use std::fmt;

use crate::error::CryptoError;

/// Signing algorithms the registry accepts for participant verification keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SigningAlgorithm {
    Ed25519,
    Ed448,
}

/// Encryption algorithms the registry accepts for participant encryption keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncryptionAlgorithm {
    Rsa,
    X25519,
}

/// Hashing algorithms. Hashing is keyless, so these names are never resolved
/// to a capability; they are only reachable through [`crate::digest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashingAlgorithm {
    Blake2b,
}

/// The capability a facade instance was constructed with.
/// Resolution is a fixed-order membership test: the signing namespace is
/// consulted first, then the encryption namespace. The sets are closed and
/// disjoint, so every name maps to exactly one capability or to
/// `CryptoError::AlgorithmNotSupported`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Signing(SigningAlgorithm),
    Encryption(EncryptionAlgorithm),
}

impl SigningAlgorithm {
    /// Looks up a name in the signing namespace. Case-insensitive.
    ///
    /// # Errors
    /// Returns `CryptoError::SigningAlgorithmNotSupported` for any name
    /// outside the namespace, including valid encryption algorithm names.
    pub fn from_name(name: &str) -> Result<Self, CryptoError> {
        match name.to_ascii_uppercase().as_str() {
            "ED25519" => Ok(Self::Ed25519),
            "ED448" => Ok(Self::Ed448),
            other => Err(CryptoError::SigningAlgorithmNotSupported(other.to_owned())),
        }
    }

    /// The canonical uppercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ed25519 => "ED25519",
            Self::Ed448 => "ED448",
        }
    }
}

impl EncryptionAlgorithm {
    /// Looks up a name in the encryption namespace. Case-insensitive.
    ///
    /// # Errors
    /// Returns `CryptoError::EncryptionAlgorithmNotSupported` for any name
    /// outside the namespace.
    pub fn from_name(name: &str) -> Result<Self, CryptoError> {
        match name.to_ascii_uppercase().as_str() {
            "RSA" => Ok(Self::Rsa),
            "X25519" => Ok(Self::X25519),
            other => Err(CryptoError::EncryptionAlgorithmNotSupported(other.to_owned())),
        }
    }

    /// The canonical uppercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rsa => "RSA",
            Self::X25519 => "X25519",
        }
    }
}

impl HashingAlgorithm {
    /// Looks up a name in the hashing namespace. Case-insensitive.
    ///
    /// # Errors
    /// Returns `CryptoError::AlgorithmNotSupported` for unknown names.
    pub fn from_name(name: &str) -> Result<Self, CryptoError> {
        match name.to_ascii_uppercase().as_str() {
            "BLAKE2B" => Ok(Self::Blake2b),
            other => Err(CryptoError::AlgorithmNotSupported(other.to_owned())),
        }
    }

    /// The canonical uppercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blake2b => "BLAKE2B",
        }
    }
}

impl Capability {
    /// Resolves an algorithm name to its capability.
    /// The signing namespace is checked before the encryption namespace;
    /// hashing is keyless, so hashing names are rejected here.
    ///
    /// # Errors
    /// Returns `CryptoError::AlgorithmNotSupported` when the name is in
    /// neither namespace. The error carries the canonicalized name.
    pub fn resolve(name: &str) -> Result<Self, CryptoError> {
        if let Ok(algorithm) = SigningAlgorithm::from_name(name) {
            return Ok(Self::Signing(algorithm));
        }
        if let Ok(algorithm) = EncryptionAlgorithm::from_name(name) {
            return Ok(Self::Encryption(algorithm));
        }
        Err(CryptoError::AlgorithmNotSupported(name.to_ascii_uppercase()))
    }

    /// The canonical uppercase name of the resolved algorithm.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Signing(algorithm) => algorithm.as_str(),
            Self::Encryption(algorithm) => algorithm.as_str(),
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HashingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
