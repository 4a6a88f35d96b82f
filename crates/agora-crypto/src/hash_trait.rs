/// Core trait for hash functions used in agora-crypto.
/// Hashing is keyless and infallible over raw bytes; the 64-byte output is
/// the digest convention of the registry's catalog.
///
/// Design choice: the trait is sealed so the catalog stays the single
/// authority on which hash functions exist.
pub trait HashFunction: private::Sealed {
    /// Computes the 64-byte digest of the given message bytes.
    fn digest(message: &[u8]) -> [u8; 64];
}

// Sealing the trait to prevent external implementations
pub(crate) mod private {
    pub trait Sealed {}
}
