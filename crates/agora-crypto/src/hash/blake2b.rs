use blake2::{Blake2b512, Digest};

use crate::hash_trait::HashFunction;

/// BLAKE2b-512 hash implementation.
/// Produces the registry's 64-byte digest over raw message bytes.
///
/// Design choice: BLAKE2b was chosen because every participant stack on the
/// network already ships it and its 64-byte output is the digest length the
/// registry protocol pins. It's a rustcrypto crate (blake2), preferred for
/// consistency with the rest of the stack.
pub struct Blake2bHasher;

impl HashFunction for Blake2bHasher {
    fn digest(message: &[u8]) -> [u8; 64] {
        Blake2b512::digest(message).into()
    }
}

impl crate::hash_trait::private::Sealed for Blake2bHasher {}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 7693 appendix-style reference values, BLAKE2b-512 unkeyed
    const EMPTY_DIGEST_HEX: &str = "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce";
    const ABC_DIGEST_HEX: &str = "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d17d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923";

    #[test]
    fn test_blake2b_reference_digests() {
        assert_eq!(hex::encode(Blake2bHasher::digest(b"")), EMPTY_DIGEST_HEX);
        assert_eq!(hex::encode(Blake2bHasher::digest(b"abc")), ABC_DIGEST_HEX);
    }

    #[test]
    fn test_blake2b_is_deterministic() {
        let first = Blake2bHasher::digest(b"registry payload");
        let second = Blake2bHasher::digest(b"registry payload");
        assert_eq!(first, second);
    }

    #[test]
    fn test_blake2b_is_input_sensitive() {
        let first = Blake2bHasher::digest(b"registry payload");
        let second = Blake2bHasher::digest(b"registry payloae");
        assert_ne!(first, second);
    }
}
