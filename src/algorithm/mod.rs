/// Fixed-length XOR folding of SHA-512 digests
pub mod fold;
/// Key to identicon pipeline
pub mod generator;
/// Seed search for samples inside the fill bounds
pub mod search;
