use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::{Oaep, RsaPublicKey};
use sha2::Sha256;

use crate::{encrypt_trait::MessageEncryptor, error::CryptoError};

/// RSA-OAEP encryption.
/// Participant RSA keys travel as a PEM container holding a PKCS#1
/// `RSA PUBLIC KEY`, so the decoder parses the container instead of
/// length-checking bytes. Encryption is OAEP with SHA-256 as both the main
/// digest and the MGF1 digest, no label.
///
/// Design choice: the rustcrypto rsa crate keeps the stack pure-Rust and
/// pairs with sha2, which the crate already carries. OAEP randomizes every
/// ciphertext, so equal plaintexts never encrypt equal.
pub struct RsaOaepEncryptor;

impl MessageEncryptor for RsaOaepEncryptor {
    type PublicKey = RsaPublicKey;

    fn decode_key(bytes: &[u8]) -> Result<RsaPublicKey, CryptoError> {
        let pem = std::str::from_utf8(bytes).map_err(|_| CryptoError::MalformedKey)?;
        RsaPublicKey::from_pkcs1_pem(pem.trim()).map_err(|_| CryptoError::MalformedKey)
    }

    fn encrypt(key: &RsaPublicKey, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let padding = Oaep::new::<Sha256>();
        key.encrypt(&mut rand::thread_rng(), padding, plaintext)
            .map_err(|_| CryptoError::Encryption)
    }
}

impl crate::encrypt_trait::private::Sealed for RsaOaepEncryptor {}

#[cfg(test)]
mod tests {
    use rsa::pkcs1::DecodeRsaPrivateKey;
    use rsa::RsaPrivateKey;

    use super::*;
    use crate::test_vectors;

    fn decrypt(ciphertext: &[u8]) -> Vec<u8> {
        let private_key =
            RsaPrivateKey::from_pkcs1_pem(test_vectors::RSA_PRIVATE_KEY_PEM.trim()).unwrap();
        private_key
            .decrypt(Oaep::new::<Sha256>(), ciphertext)
            .unwrap()
    }

    fn fixture_key() -> RsaPublicKey {
        RsaOaepEncryptor::decode_key(test_vectors::RSA_PUBLIC_KEY_PEM.as_bytes()).unwrap()
    }

    #[test]
    fn test_rsa_oaep_round_trip() {
        let key = fixture_key();
        let ciphertext = RsaOaepEncryptor::encrypt(&key, test_vectors::MESSAGE.as_bytes()).unwrap();
        assert_eq!(decrypt(&ciphertext), test_vectors::MESSAGE.as_bytes());
    }

    #[test]
    fn test_rsa_oaep_handles_empty_and_multibyte_plaintexts() {
        let key = fixture_key();
        for plaintext in ["", "नमस्ते", "काळा घोडा 🐎"] {
            let ciphertext = RsaOaepEncryptor::encrypt(&key, plaintext.as_bytes()).unwrap();
            assert_eq!(decrypt(&ciphertext), plaintext.as_bytes());
        }
    }

    #[test]
    fn test_rsa_oaep_is_randomized() {
        let key = fixture_key();
        let first = RsaOaepEncryptor::encrypt(&key, b"same message").unwrap();
        let second = RsaOaepEncryptor::encrypt(&key, b"same message").unwrap();
        assert_ne!(first, second);
        assert_eq!(decrypt(&first), decrypt(&second));
    }

    #[test]
    fn test_rsa_reference_ciphertext_decrypts() {
        // produced by an independent OAEP-SHA256 implementation against the
        // fixture keypair; pins both digest choices and the absent label
        let ciphertext = test_vectors::rsa_reference_ciphertext();
        assert_eq!(decrypt(&ciphertext), test_vectors::MESSAGE.as_bytes());
    }

    #[test]
    fn test_rsa_rejects_malformed_containers() {
        assert!(matches!(
            RsaOaepEncryptor::decode_key(b"not a pem container").unwrap_err(),
            CryptoError::MalformedKey
        ));
        // not even UTF-8
        assert!(matches!(
            RsaOaepEncryptor::decode_key(&[0x80, 0xff, 0x00, 0x01]).unwrap_err(),
            CryptoError::MalformedKey
        ));
    }
}
