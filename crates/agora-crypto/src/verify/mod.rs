pub mod ed25519;
pub mod ed448;
pub mod signing_key;

pub use ed25519::Ed25519Verifier;
pub use ed448::Ed448Verifier;
pub use signing_key::SigningPublicKey;
