//======================================================================
// src/backends/soft.rs
// Software (scalar) round engine for all Threefish variants.
//======================================================================

use cipher::generic_array::GenericArray;
use cipher::inout::InOut;
use cipher::{Block, BlockBackend, BlockSizeUser, ParBlocksSizeUser};

use crate::block::ThreefishBlockCipher;
use crate::consts::{EXPANDED_TWEAK_WORDS, MAX_STATE_WORDS};
use crate::variant::ThreefishVariant;

/// Encrypting backend borrowing a keyed cipher instance.
pub(crate) struct EncBackend<'a, V: ThreefishVariant>(pub(crate) &'a ThreefishBlockCipher<V>);

impl<'a, V: ThreefishVariant> BlockSizeUser for EncBackend<'a, V> {
    type BlockSize = V::BlockSize;
}

impl<'a, V: ThreefishVariant> ParBlocksSizeUser for EncBackend<'a, V> {
    type ParBlocksSize = cipher::consts::U1;
}

impl<'a, V: ThreefishVariant> BlockBackend for EncBackend<'a, V> {
    #[inline]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let mut state = GenericArray::<u64, V::BlockWords>::default();
        load_words(block.get_in(), &mut state);
        encrypt_words::<V>(&self.0.subkeys, &self.0.tweak, &mut state);
        store_words(&state, block.get_out());
    }
}

/// Decrypting backend borrowing a keyed cipher instance.
pub(crate) struct DecBackend<'a, V: ThreefishVariant>(pub(crate) &'a ThreefishBlockCipher<V>);

impl<'a, V: ThreefishVariant> BlockSizeUser for DecBackend<'a, V> {
    type BlockSize = V::BlockSize;
}

impl<'a, V: ThreefishVariant> ParBlocksSizeUser for DecBackend<'a, V> {
    type ParBlocksSize = cipher::consts::U1;
}

impl<'a, V: ThreefishVariant> BlockBackend for DecBackend<'a, V> {
    #[inline]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let mut state = GenericArray::<u64, V::BlockWords>::default();
        load_words(block.get_in(), &mut state);
        decrypt_words::<V>(&self.0.subkeys, &self.0.tweak, &mut state);
        store_words(&state, block.get_out());
    }
}

#[inline(always)]
fn load_words(bytes: &[u8], words: &mut [u64]) {
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        *word = u64::from_le_bytes(chunk.try_into().unwrap());
    }
}

#[inline(always)]
fn store_words(words: &[u64], bytes: &mut [u8]) {
    for (word, chunk) in words.iter().zip(bytes.chunks_exact_mut(8)) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

/// Adds subkey row `s` into the state.
///
/// Every word takes one expanded-key word (rotating window over the
/// N + 1 subkey words); word N-3 additionally takes a tweak word, word
/// N-2 the next tweak word, and word N-1 the row counter itself.
#[inline(always)]
fn add_subkey(state: &mut [u64], subkeys: &[u64], tweak: &[u64; EXPANDED_TWEAK_WORDS], s: usize) {
    let n = state.len();
    for (i, word) in state.iter_mut().enumerate() {
        *word = word.wrapping_add(subkeys[(s + i) % (n + 1)]);
    }
    state[n - 3] = state[n - 3].wrapping_add(tweak[s % 3]);
    state[n - 2] = state[n - 2].wrapping_add(tweak[(s + 1) % 3]);
    state[n - 1] = state[n - 1].wrapping_add(s as u64);
}

/// Exact inverse of [`add_subkey`].
#[inline(always)]
fn sub_subkey(state: &mut [u64], subkeys: &[u64], tweak: &[u64; EXPANDED_TWEAK_WORDS], s: usize) {
    let n = state.len();
    for (i, word) in state.iter_mut().enumerate() {
        *word = word.wrapping_sub(subkeys[(s + i) % (n + 1)]);
    }
    state[n - 3] = state[n - 3].wrapping_sub(tweak[s % 3]);
    state[n - 2] = state[n - 2].wrapping_sub(tweak[(s + 1) % 3]);
    state[n - 1] = state[n - 1].wrapping_sub(s as u64);
}

/// Runs the full forward permutation over one block of state words.
///
/// All arithmetic wraps modulo 2^64 and every index is data-independent,
/// so the running time depends only on the variant.
#[inline(always)]
pub(crate) fn encrypt_words<V: ThreefishVariant>(
    subkeys: &[u64],
    tweak: &[u64; EXPANDED_TWEAK_WORDS],
    state: &mut [u64],
) {
    let pairs = V::WORDS / 2;
    for round in 0..V::ROUNDS {
        // Subkey injection opens every 4-round cycle.
        if round % 4 == 0 {
            add_subkey(state, subkeys, tweak, round / 4);
        }

        // MIX layer: add, rotate, xor on each adjacent word pair.
        let rot = &V::ROTATIONS[(round % 8) * pairs..(round % 8 + 1) * pairs];
        for j in 0..pairs {
            let even = state[2 * j].wrapping_add(state[2 * j + 1]);
            state[2 * j + 1] = state[2 * j + 1].rotate_left(rot[j]) ^ even;
            state[2 * j] = even;
        }

        // Word permutation.
        let mut prev = [0u64; MAX_STATE_WORDS];
        prev[..V::WORDS].copy_from_slice(state);
        for i in 0..V::WORDS {
            state[i] = prev[V::PERMUTATION[i]];
        }
    }
    // Closing subkey injection after the final round.
    add_subkey(state, subkeys, tweak, V::ROUNDS / 4);
}

/// Runs the inverse permutation; `decrypt_words` of `encrypt_words` is
/// the identity for every key and tweak.
#[inline(always)]
pub(crate) fn decrypt_words<V: ThreefishVariant>(
    subkeys: &[u64],
    tweak: &[u64; EXPANDED_TWEAK_WORDS],
    state: &mut [u64],
) {
    let pairs = V::WORDS / 2;
    sub_subkey(state, subkeys, tweak, V::ROUNDS / 4);
    for round in (0..V::ROUNDS).rev() {
        // Undo the word permutation.
        let mut prev = [0u64; MAX_STATE_WORDS];
        prev[..V::WORDS].copy_from_slice(state);
        for i in 0..V::WORDS {
            state[i] = prev[V::INV_PERMUTATION[i]];
        }

        // Undo the MIX layer.
        let rot = &V::ROTATIONS[(round % 8) * pairs..(round % 8 + 1) * pairs];
        for j in 0..pairs {
            let odd = (state[2 * j + 1] ^ state[2 * j]).rotate_right(rot[j]);
            state[2 * j] = state[2 * j].wrapping_sub(odd);
            state[2 * j + 1] = odd;
        }

        if round % 4 == 0 {
            sub_subkey(state, subkeys, tweak, round / 4);
        }
    }
}
