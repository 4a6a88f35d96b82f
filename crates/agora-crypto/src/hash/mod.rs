pub mod blake2b;

pub use blake2b::Blake2bHasher;
