//======================================================================
// src/variant.rs
// Defines the three fixed block-size variants of Threefish.
//======================================================================

use cipher::consts::{U128, U16, U17, U32, U4, U5, U64, U8, U9};
use cipher::ArrayLength;

use crate::consts::*;

/// Parameters of one Threefish variant.
///
/// A variant is selected once at construction and never changes for the
/// life of a cipher instance; everything here is compile-time data.
pub trait ThreefishVariant: Sized + Clone {
    /// Block size in bytes. The key is always exactly one block long.
    type BlockSize: ArrayLength<u8> + 'static;
    /// Number of 64-bit words in a block (and in the key).
    type BlockWords: ArrayLength<u64> + 'static;
    /// Number of expanded-key words: `BlockWords` plus the parity word.
    type SubkeyWords: ArrayLength<u64> + 'static;

    /// State width in 64-bit words.
    const WORDS: usize;
    /// Total MIX/permute rounds.
    const ROUNDS: usize;
    /// Rotation amounts: eight rows of `WORDS / 2` entries, flattened
    /// row-major.
    const ROTATIONS: &'static [u32];
    /// Word permutation applied after every MIX layer.
    const PERMUTATION: &'static [usize];
    /// Inverse of [`Self::PERMUTATION`], used on the decrypt path.
    const INV_PERMUTATION: &'static [usize];
}

/// Threefish variant with a 256-bit key and block.
#[derive(Clone)]
pub struct Threefish256;
impl ThreefishVariant for Threefish256 {
    type BlockSize = U32;
    type BlockWords = U4;
    type SubkeyWords = U5;

    const WORDS: usize = 4;
    const ROUNDS: usize = 72;
    const ROTATIONS: &'static [u32] = &ROT_256;
    const PERMUTATION: &'static [usize] = &PERM_256;
    const INV_PERMUTATION: &'static [usize] = &INV_PERM_256;
}

/// Threefish variant with a 512-bit key and block.
#[derive(Clone)]
pub struct Threefish512;
impl ThreefishVariant for Threefish512 {
    type BlockSize = U64;
    type BlockWords = U8;
    type SubkeyWords = U9;

    const WORDS: usize = 8;
    const ROUNDS: usize = 72;
    const ROTATIONS: &'static [u32] = &ROT_512;
    const PERMUTATION: &'static [usize] = &PERM_512;
    const INV_PERMUTATION: &'static [usize] = &INV_PERM_512;
}

/// Threefish variant with a 1024-bit key and block.
#[derive(Clone)]
pub struct Threefish1024;
impl ThreefishVariant for Threefish1024 {
    type BlockSize = U128;
    type BlockWords = U16;
    type SubkeyWords = U17;

    const WORDS: usize = 16;
    const ROUNDS: usize = 80;
    const ROTATIONS: &'static [u32] = &ROT_1024;
    const PERMUTATION: &'static [usize] = &PERM_1024;
    const INV_PERMUTATION: &'static [usize] = &INV_PERM_1024;
}
