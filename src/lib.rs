//! A CBC-PKCS7 padding oracle decryption engine.
//!
//! This crate implements the algorithmic core of a padding-oracle attack: a
//! passive state machine ([`decryptor::Decryptor`]) that manufactures the
//! 256 candidate ciphertext manipulations for the byte currently under
//! attack and, once told which one an oracle judged well-padded, recovers
//! that byte and rewrites its internal "playground" so the next byte can be
//! attacked. The crate never performs decryption itself, never talks to a
//! network, and never implements a block cipher; an oracle of your own
//! (wrapping a real decryption, or a timing side channel) drives it.
//!
//! ```
//! use porc::decryptor::{DecStatus, Decryptor};
//! use porc::padding::pkcs7_get_byte;
//! use porc::option::check_opt;
//!
//! fn decrypt(iv: Vec<u8>, ciphertext: Vec<u8>, oracle: impl Fn(&[u8], &[u8]) -> bool) -> Vec<u8> {
//!     let mut dec = Decryptor::new(iv, ciphertext, pkcs7_get_byte).unwrap();
//!
//!     while dec.status() != DecStatus::Done {
//!         let good = dec
//!             .begin()
//!             .find(|opt| check_opt(|d| oracle(&d.iv, &d.ciphertext), opt))
//!             .expect("oracle found no valid candidate for this byte");
//!         dec.step(good.index);
//!     }
//!
//!     dec.plaintext().iter().copied().collect()
//! }
//! # let _ = decrypt;
//! ```

#![no_std]
#![cfg_attr(not(feature = "std"), feature(error_in_core))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod cipher_desc;
pub mod decryptor;
pub mod error;
pub mod option;
pub mod padding;

#[cfg(feature = "std")]
pub mod stats;

pub use cipher_desc::CipherDesc;
pub use decryptor::{DecStatus, Decryptor};
pub use error::{Error, Result};
pub use option::{check_opt, measure_opt, DecOption};
pub use padding::pkcs7_get_byte;
