pub mod encryption_key;
pub mod rsa_oaep;
pub mod sealed_box;

pub use encryption_key::EncryptionPublicKey;
pub use rsa_oaep::RsaOaepEncryptor;
pub use sealed_box::SealedBoxEncryptor;
