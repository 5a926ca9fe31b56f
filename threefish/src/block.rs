//======================================================================
// src/block.rs
// Keyed cipher core: owns the expanded key and tweak schedules.
//======================================================================

use cipher::generic_array::GenericArray;
use cipher::{
    AlgorithmName, BlockCipher, BlockClosure, BlockDecrypt, BlockEncrypt, BlockSizeUser, Key,
    KeyInit, KeySizeUser,
};
use core::fmt;

use crate::backends;
use crate::consts::{EXPANDED_TWEAK_WORDS, KEY_SCHEDULE_CONST};
use crate::variant::ThreefishVariant;

/// One Threefish instance of a fixed variant `V`.
///
/// Owns the expanded key (key words plus the trailing parity word) and
/// the expanded tweak (both tweak words plus their XOR). Both schedules
/// are recomputed in full whenever the key or tweak is replaced; nothing
/// is updated incrementally. Encryption and decryption take `&self` and
/// allocate nothing, so shared read-only use across threads is fine as
/// long as no rekey runs concurrently.
#[derive(Clone)]
pub struct ThreefishBlockCipher<V: ThreefishVariant> {
    /// Expanded key: `V::WORDS` key words followed by the parity word.
    pub(crate) subkeys: GenericArray<u64, V::SubkeyWords>,
    /// Expanded tweak: `[t0, t1, t0 ^ t1]`.
    pub(crate) tweak: [u64; EXPANDED_TWEAK_WORDS],
}

impl<V: ThreefishVariant> ThreefishBlockCipher<V> {
    /// Creates a cipher from a byte key and an explicit tweak.
    pub fn new_with_tweak(key: &Key<Self>, tweak: [u64; 2]) -> Self {
        let mut cipher = Self::new(key);
        cipher.set_tweak(Some(tweak));
        cipher
    }

    /// Replaces the key from its little-endian byte encoding and
    /// recomputes the expanded key.
    pub fn set_key(&mut self, key: &Key<Self>) {
        let mut words = GenericArray::<u64, V::BlockWords>::default();
        for (word, chunk) in words.iter_mut().zip(key.chunks_exact(8)) {
            *word = u64::from_le_bytes(chunk.try_into().unwrap());
        }
        self.set_key_words(&words);
    }

    /// Replaces the key from `V::WORDS` words and recomputes the
    /// expanded key, including the parity word.
    pub fn set_key_words(&mut self, key: &GenericArray<u64, V::BlockWords>) {
        let mut parity = KEY_SCHEDULE_CONST;
        for (slot, &word) in self.subkeys.iter_mut().zip(key.iter()) {
            *slot = word;
            parity ^= word;
        }
        self.subkeys[V::WORDS] = parity;
    }

    /// Replaces the tweak; `None` clears it to the all-zero tweak. The
    /// key schedule is left untouched.
    pub fn set_tweak(&mut self, tweak: Option<[u64; 2]>) {
        self.tweak = match tweak {
            Some([t0, t1]) => [t0, t1, t0 ^ t1],
            None => [0u64; 3],
        };
    }

    /// Replaces the tweak from its 16-byte little-endian encoding.
    pub fn set_tweak_bytes(&mut self, tweak: &[u8; 16]) {
        let t0 = u64::from_le_bytes(tweak[..8].try_into().unwrap());
        let t1 = u64::from_le_bytes(tweak[8..].try_into().unwrap());
        self.set_tweak(Some([t0, t1]));
    }

    /// Encrypts one block given as `V::WORDS` words, in place.
    pub fn encrypt_block_words(&self, block: &mut GenericArray<u64, V::BlockWords>) {
        backends::encrypt_words::<V>(&self.subkeys, &self.tweak, block);
    }

    /// Decrypts one block given as `V::WORDS` words, in place.
    pub fn decrypt_block_words(&self, block: &mut GenericArray<u64, V::BlockWords>) {
        backends::decrypt_words::<V>(&self.subkeys, &self.tweak, block);
    }
}

impl<V: ThreefishVariant> Default for ThreefishBlockCipher<V> {
    /// A cipher keyed with the all-zero key and no tweak, pending a
    /// later [`set_key`](Self::set_key).
    fn default() -> Self {
        let mut subkeys = GenericArray::<u64, V::SubkeyWords>::default();
        subkeys[V::WORDS] = KEY_SCHEDULE_CONST;
        Self {
            subkeys,
            tweak: [0u64; 3],
        }
    }
}

impl<V: ThreefishVariant> KeySizeUser for ThreefishBlockCipher<V> {
    type KeySize = V::BlockSize;
}

impl<V: ThreefishVariant> KeyInit for ThreefishBlockCipher<V> {
    fn new(key: &Key<Self>) -> Self {
        let mut cipher = Self::default();
        cipher.set_key(key);
        cipher
    }
}

impl<V: ThreefishVariant> BlockSizeUser for ThreefishBlockCipher<V> {
    type BlockSize = V::BlockSize;
}

impl<V: ThreefishVariant> BlockCipher for ThreefishBlockCipher<V> {}

impl<V: ThreefishVariant> BlockEncrypt for ThreefishBlockCipher<V> {
    fn encrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut backends::EncBackend(self));
    }
}

impl<V: ThreefishVariant> BlockDecrypt for ThreefishBlockCipher<V> {
    fn decrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut backends::DecBackend(self));
    }
}

impl<V: ThreefishVariant> AlgorithmName for ThreefishBlockCipher<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Threefish-{}", V::WORDS * 64)
    }
}

#[cfg(feature = "zeroize")]
impl<V: ThreefishVariant> Drop for ThreefishBlockCipher<V> {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.subkeys.as_mut_slice().zeroize();
        self.tweak.zeroize();
    }
}
