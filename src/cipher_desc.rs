use alloc::vec::Vec;

/// A single input to a padding oracle: an IV paired with a ciphertext.
///
/// Immutable once constructed; the decryptor never mutates a `CipherDesc` in
/// place, it always clones and rewrites the clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CipherDesc {
    pub iv: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

impl CipherDesc {
    pub fn new(iv: Vec<u8>, ciphertext: Vec<u8>) -> Self {
        Self { iv, ciphertext }
    }
}
