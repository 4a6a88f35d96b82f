use blake2::{Blake2b512, Digest};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    Key,
    XChaCha20Poly1305,
    XNonce,
};
use rand::RngCore;
use x25519_dalek::{EphemeralSecret, PublicKey};
use zeroize::Zeroize;

use crate::{encrypt_trait::MessageEncryptor, error::CryptoError};

/// X25519 public keys are 32 bytes.
pub const X25519_PUBLIC_KEY_LENGTH: usize = 32;

/// Sealed-box encryption towards an X25519 public key.
/// Anyone holding a participant's public key can seal a message; only the
/// participant's secret key opens it. Every call generates a fresh ephemeral
/// X25519 keypair, runs Diffie-Hellman against the recipient key, derives the
/// AEAD key by hashing the shared secret together with both public keys (which
/// binds the ciphertext to the recipient), and seals with XChaCha20-Poly1305
/// under a random 24-byte nonce.
///
/// Wire format: `ephemeral_pk(32) ‖ nonce(24) ‖ ciphertext`.
///
/// Design choice: XChaCha20-Poly1305 over the alternatives for its 192-bit
/// nonce, which makes random nonces safe at any volume. All primitives are
/// rustcrypto crates already in the stack.
pub struct SealedBoxEncryptor;

impl MessageEncryptor for SealedBoxEncryptor {
    type PublicKey = PublicKey;

    fn decode_key(bytes: &[u8]) -> Result<PublicKey, CryptoError> {
        let key_array: [u8; X25519_PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidKeyLength)?;
        Ok(PublicKey::from(key_array))
    }

    fn encrypt(key: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let ephemeral = EphemeralSecret::random_from_rng(rand::thread_rng());
        let ephemeral_public = PublicKey::from(&ephemeral);
        let shared = ephemeral.diffie_hellman(key);

        let mut aead_key =
            derive_aead_key(shared.as_bytes(), ephemeral_public.as_bytes(), key.as_bytes());
        let cipher = XChaCha20Poly1305::new(Key::from_slice(&aead_key));
        let mut nonce_bytes = [0u8; 24]; // XChaCha20 uses 24-byte nonce
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = XNonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext)
            .map_err(|_| CryptoError::Encryption)?;
        aead_key.zeroize();

        let mut result = ephemeral_public.as_bytes().to_vec();
        result.extend_from_slice(&nonce_bytes);
        result.extend_from_slice(&ciphertext);
        Ok(result)
    }
}

/// Derives the 32-byte AEAD key from the exchange transcript.
/// Hashing both public keys alongside the shared secret ties the sealed box
/// to this exact recipient and ephemeral pair.
pub(crate) fn derive_aead_key(
    shared: &[u8; 32],
    ephemeral_public: &[u8; 32],
    recipient_public: &[u8; 32],
) -> [u8; 32] {
    let mut hasher = Blake2b512::new();
    hasher.update(shared);
    hasher.update(ephemeral_public);
    hasher.update(recipient_public);
    let digest = hasher.finalize();
    let mut key = [0u8; 32];
    key.copy_from_slice(&digest[..32]);
    key
}

impl crate::encrypt_trait::private::Sealed for SealedBoxEncryptor {}
