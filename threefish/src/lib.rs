#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point: public API surface and module wiring.
//======================================================================

// --- Module declarations ---

mod backends;
mod block;
pub mod consts;
pub mod error;
mod threefish;
pub mod variant;


// --- Re-exports ---

pub use cipher;

pub use crate::block::ThreefishBlockCipher;
pub use crate::threefish::Threefish;

// --- Top-level Type Aliases ---

use crate::variant::{Threefish1024, Threefish256, Threefish512};

/// Threefish with a 256-bit key and block (4 words, 72 rounds).
pub type Threefish256Cipher = ThreefishBlockCipher<Threefish256>;

/// Threefish with a 512-bit key and block (8 words, 72 rounds).
pub type Threefish512Cipher = ThreefishBlockCipher<Threefish512>;

/// Threefish with a 1024-bit key and block (16 words, 80 rounds).
pub type Threefish1024Cipher = ThreefishBlockCipher<Threefish1024>;
