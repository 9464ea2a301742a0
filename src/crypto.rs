//! Confidentiality codec for note content.
//!
//! Content is sealed with AES-256-GCM through tindercrypt's `RingCryptor`,
//! which prefixes its own metadata (algorithm and nonce) to the ciphertext.
//! The resulting bytes are base64 encoded so they fit a text column.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use derive_more::Display;
use tindercrypt::cryptors::RingCryptor;

/// Key size required by AES-256-GCM.
pub const KEY_LEN: usize = 32;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum CodecError {
    #[display(fmt = "encryption key must be {} bytes, got {}", KEY_LEN, _0)]
    InvalidKeyLength(usize),
    #[display(fmt = "failed to seal note content: {}", _0)]
    Seal(String),
    #[display(fmt = "stored content is not valid base64: {}", _0)]
    Encoding(String),
    #[display(fmt = "failed to open note content: {}", _0)]
    Open(String),
    #[display(fmt = "decrypted content is not valid utf-8")]
    Utf8,
}

/// Holds the process-wide key. Carries no other state, so one instance can
/// be shared by every worker.
#[derive(Clone)]
pub struct NoteCipher {
    key: [u8; KEY_LEN],
}

impl std::fmt::Debug for NoteCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteCipher").finish_non_exhaustive()
    }
}

impl NoteCipher {
    pub fn new(key: &[u8]) -> Result<Self, CodecError> {
        let key: [u8; KEY_LEN] = key
            .try_into()
            .map_err(|_| CodecError::InvalidKeyLength(key.len()))?;
        Ok(Self { key })
    }

    pub fn seal(&self, plaintext: &str) -> Result<String, CodecError> {
        let cryptor = RingCryptor::new();
        let sealed = cryptor
            .seal_with_key(&self.key, plaintext.as_bytes())
            .map_err(|e| CodecError::Seal(format!("{:?}", e)))?;

        Ok(STANDARD.encode(sealed))
    }

    pub fn open(&self, ciphertext: &str) -> Result<String, CodecError> {
        let sealed = STANDARD
            .decode(ciphertext)
            .map_err(|e| CodecError::Encoding(e.to_string()))?;

        let cryptor = RingCryptor::new();
        let plaintext = cryptor
            .open(&self.key, &sealed)
            .map_err(|e| CodecError::Open(format!("{:?}", e)))?;

        String::from_utf8(plaintext).map_err(|_| CodecError::Utf8)
    }
}
