//======================================================================
// src/threefish.rs
// Runtime dispatch facade: selects the cipher variant by key size.
//======================================================================

use cipher::generic_array::GenericArray;
use cipher::{Block, BlockDecrypt, BlockEncrypt, BlockSizeUser, KeyInit};

use crate::error::KeySizeError;
use crate::{Threefish1024Cipher, Threefish256Cipher, Threefish512Cipher};

/// A Threefish cipher whose variant is chosen at runtime.
///
/// The variant is fixed by the key (or state) size passed at
/// construction and never changes afterwards; rekeying with a key of a
/// different size is rejected. For compile-time-sized use, work with
/// [`Threefish256Cipher`], [`Threefish512Cipher`] or
/// [`Threefish1024Cipher`] and the `cipher` traits directly.
#[derive(Clone)]
pub enum Threefish {
    /// 256-bit state: 32-byte key and block.
    Threefish256(Threefish256Cipher),
    /// 512-bit state: 64-byte key and block.
    Threefish512(Threefish512Cipher),
    /// 1024-bit state: 128-byte key and block.
    Threefish1024(Threefish1024Cipher),
}

impl Threefish {
    /// Creates a cipher from a little-endian byte key; the key length
    /// (32, 64 or 128 bytes) selects the variant. `None` for the tweak
    /// is the all-zero tweak.
    pub fn new(key: &[u8], tweak: Option<[u64; 2]>) -> Result<Self, KeySizeError> {
        let mut cipher = match key.len() {
            32 => Threefish::Threefish256(Threefish256Cipher::new(GenericArray::from_slice(key))),
            64 => Threefish::Threefish512(Threefish512Cipher::new(GenericArray::from_slice(key))),
            128 => {
                Threefish::Threefish1024(Threefish1024Cipher::new(GenericArray::from_slice(key)))
            }
            other => return Err(KeySizeError(other)),
        };
        cipher.set_tweak(tweak);
        Ok(cipher)
    }

    /// Creates a cipher from a word key; the key length (4, 8 or 16
    /// words) selects the variant.
    pub fn new_from_words(key: &[u64], tweak: Option<[u64; 2]>) -> Result<Self, KeySizeError> {
        let mut cipher = match key.len() {
            4 => {
                let mut inner = Threefish256Cipher::default();
                inner.set_key_words(GenericArray::from_slice(key));
                Threefish::Threefish256(inner)
            }
            8 => {
                let mut inner = Threefish512Cipher::default();
                inner.set_key_words(GenericArray::from_slice(key));
                Threefish::Threefish512(inner)
            }
            16 => {
                let mut inner = Threefish1024Cipher::default();
                inner.set_key_words(GenericArray::from_slice(key));
                Threefish::Threefish1024(inner)
            }
            other => return Err(KeySizeError(other * 8)),
        };
        cipher.set_tweak(tweak);
        Ok(cipher)
    }

    /// Creates a cipher of the given state size (256, 512 or 1024 bits)
    /// keyed with the all-zero key, pending a later [`set_key`](Self::set_key).
    pub fn new_with_size(bits: usize) -> Result<Self, KeySizeError> {
        match bits {
            256 => Ok(Threefish::Threefish256(Threefish256Cipher::default())),
            512 => Ok(Threefish::Threefish512(Threefish512Cipher::default())),
            1024 => Ok(Threefish::Threefish1024(Threefish1024Cipher::default())),
            other => Err(KeySizeError(other)),
        }
    }

    /// Block size in bytes (32, 64 or 128). The key size is identical.
    pub fn block_size(&self) -> usize {
        match self {
            Threefish::Threefish256(_) => Threefish256Cipher::block_size(),
            Threefish::Threefish512(_) => Threefish512Cipher::block_size(),
            Threefish::Threefish1024(_) => Threefish1024Cipher::block_size(),
        }
    }

    /// Encrypts exactly one block in place.
    ///
    /// # Panics
    ///
    /// Panics if `block.len()` differs from [`block_size`](Self::block_size).
    pub fn encrypt_block(&self, block: &mut [u8]) {
        assert_eq!(block.len(), self.block_size(), "plaintext is not exactly one block");
        match self {
            Threefish::Threefish256(c) => c.encrypt_block(Block::<Threefish256Cipher>::from_mut_slice(block)),
            Threefish::Threefish512(c) => c.encrypt_block(Block::<Threefish512Cipher>::from_mut_slice(block)),
            Threefish::Threefish1024(c) => c.encrypt_block(Block::<Threefish1024Cipher>::from_mut_slice(block)),
        }
    }

    /// Decrypts exactly one block in place.
    ///
    /// # Panics
    ///
    /// Panics if `block.len()` differs from [`block_size`](Self::block_size).
    pub fn decrypt_block(&self, block: &mut [u8]) {
        assert_eq!(block.len(), self.block_size(), "ciphertext is not exactly one block");
        match self {
            Threefish::Threefish256(c) => c.decrypt_block(Block::<Threefish256Cipher>::from_mut_slice(block)),
            Threefish::Threefish512(c) => c.decrypt_block(Block::<Threefish512Cipher>::from_mut_slice(block)),
            Threefish::Threefish1024(c) => c.decrypt_block(Block::<Threefish1024Cipher>::from_mut_slice(block)),
        }
    }

    /// Encrypts one block from `src` into `dst`.
    ///
    /// # Panics
    ///
    /// Panics if either buffer is not exactly one block long.
    pub fn encrypt_block_b2b(&self, src: &[u8], dst: &mut [u8]) {
        assert_eq!(src.len(), self.block_size(), "plaintext is not exactly one block");
        assert_eq!(dst.len(), self.block_size(), "output buffer is not exactly one block");
        match self {
            Threefish::Threefish256(c) => c.encrypt_block_b2b(
                Block::<Threefish256Cipher>::from_slice(src),
                Block::<Threefish256Cipher>::from_mut_slice(dst),
            ),
            Threefish::Threefish512(c) => c.encrypt_block_b2b(
                Block::<Threefish512Cipher>::from_slice(src),
                Block::<Threefish512Cipher>::from_mut_slice(dst),
            ),
            Threefish::Threefish1024(c) => c.encrypt_block_b2b(
                Block::<Threefish1024Cipher>::from_slice(src),
                Block::<Threefish1024Cipher>::from_mut_slice(dst),
            ),
        }
    }

    /// Decrypts one block from `src` into `dst`.
    ///
    /// # Panics
    ///
    /// Panics if either buffer is not exactly one block long.
    pub fn decrypt_block_b2b(&self, src: &[u8], dst: &mut [u8]) {
        assert_eq!(src.len(), self.block_size(), "ciphertext is not exactly one block");
        assert_eq!(dst.len(), self.block_size(), "output buffer is not exactly one block");
        match self {
            Threefish::Threefish256(c) => c.decrypt_block_b2b(
                Block::<Threefish256Cipher>::from_slice(src),
                Block::<Threefish256Cipher>::from_mut_slice(dst),
            ),
            Threefish::Threefish512(c) => c.decrypt_block_b2b(
                Block::<Threefish512Cipher>::from_slice(src),
                Block::<Threefish512Cipher>::from_mut_slice(dst),
            ),
            Threefish::Threefish1024(c) => c.decrypt_block_b2b(
                Block::<Threefish1024Cipher>::from_slice(src),
                Block::<Threefish1024Cipher>::from_mut_slice(dst),
            ),
        }
    }

    /// Encrypts one block given as words, in place.
    ///
    /// # Panics
    ///
    /// Panics if `block.len()` differs from the variant's word count.
    pub fn encrypt_words(&self, block: &mut [u64]) {
        assert_eq!(block.len() * 8, self.block_size(), "plaintext is not exactly one block");
        match self {
            Threefish::Threefish256(c) => c.encrypt_block_words(GenericArray::from_mut_slice(block)),
            Threefish::Threefish512(c) => c.encrypt_block_words(GenericArray::from_mut_slice(block)),
            Threefish::Threefish1024(c) => c.encrypt_block_words(GenericArray::from_mut_slice(block)),
        }
    }

    /// Decrypts one block given as words, in place.
    ///
    /// # Panics
    ///
    /// Panics if `block.len()` differs from the variant's word count.
    pub fn decrypt_words(&self, block: &mut [u64]) {
        assert_eq!(block.len() * 8, self.block_size(), "ciphertext is not exactly one block");
        match self {
            Threefish::Threefish256(c) => c.decrypt_block_words(GenericArray::from_mut_slice(block)),
            Threefish::Threefish512(c) => c.decrypt_block_words(GenericArray::from_mut_slice(block)),
            Threefish::Threefish1024(c) => c.decrypt_block_words(GenericArray::from_mut_slice(block)),
        }
    }

    /// Replaces the key from its byte encoding. The length must match
    /// the variant this cipher was constructed with.
    pub fn set_key(&mut self, key: &[u8]) -> Result<(), KeySizeError> {
        if key.len() != self.block_size() {
            return Err(KeySizeError(key.len()));
        }
        match self {
            Threefish::Threefish256(c) => c.set_key(GenericArray::from_slice(key)),
            Threefish::Threefish512(c) => c.set_key(GenericArray::from_slice(key)),
            Threefish::Threefish1024(c) => c.set_key(GenericArray::from_slice(key)),
        }
        Ok(())
    }

    /// Replaces the key from words. The length must match the variant
    /// this cipher was constructed with.
    pub fn set_key_words(&mut self, key: &[u64]) -> Result<(), KeySizeError> {
        if key.len() * 8 != self.block_size() {
            return Err(KeySizeError(key.len() * 8));
        }
        match self {
            Threefish::Threefish256(c) => c.set_key_words(GenericArray::from_slice(key)),
            Threefish::Threefish512(c) => c.set_key_words(GenericArray::from_slice(key)),
            Threefish::Threefish1024(c) => c.set_key_words(GenericArray::from_slice(key)),
        }
        Ok(())
    }

    /// Replaces the tweak; `None` clears it to the all-zero tweak.
    pub fn set_tweak(&mut self, tweak: Option<[u64; 2]>) {
        match self {
            Threefish::Threefish256(c) => c.set_tweak(tweak),
            Threefish::Threefish512(c) => c.set_tweak(tweak),
            Threefish::Threefish1024(c) => c.set_tweak(tweak),
        }
    }

    /// Replaces the tweak from its 16-byte little-endian encoding.
    pub fn set_tweak_bytes(&mut self, tweak: &[u8; 16]) {
        match self {
            Threefish::Threefish256(c) => c.set_tweak_bytes(tweak),
            Threefish::Threefish512(c) => c.set_tweak_bytes(tweak),
            Threefish::Threefish1024(c) => c.set_tweak_bytes(tweak),
        }
    }
}

impl core::fmt::Debug for Threefish {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Threefish::Threefish256(_) => f.write_str("Threefish256"),
            Threefish::Threefish512(_) => f.write_str("Threefish512"),
            Threefish::Threefish1024(_) => f.write_str("Threefish1024"),
        }
    }
}
