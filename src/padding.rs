//! Padding schemes.
//!
//! A padding scheme is any `Fn(position, length) -> byte` that tells the
//! decryptor what byte value the padding scheme demands at a given position,
//! given the intended padding length. The decryptor calls it repeatedly and
//! assumes identical answers for identical arguments.

/// PKCS#7: every padding byte, regardless of position, equals the padding
/// length.
pub fn pkcs7_get_byte(_pad_pos: usize, pad_len: usize) -> u8 {
    pad_len as u8
}
