use crate::cipher;
use crate::encoding::ByteArray;
use crate::error::{Error, Result};
use crate::frequency::FrequencyModel;
use crate::keylen;
use crate::keysearch::{self, Key};
use log::{info, warn};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Outcome of breaking one ciphertext. `key` has `estimated_length` bytes;
/// `period` is its shortest repeating unit and decrypts the same.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub estimated_length: usize,
    pub key: Key,
    pub period: Key,
    pub plaintext: ByteArray,
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let key = ByteArray::from_bytes(self.key.bytes().to_vec());
        write!(f, "KEY: {} | {:?}", key.spaced_hex(), key.string())?;
        if self.period.len() < self.key.len() {
            write!(f, " (repeats every {} bytes)", self.period.len())?;
        }
        writeln!(f)?;
        write!(f, "{}", self.plaintext.string())
    }
}

pub fn decode_ciphertext(
    ciphertext: &[u8],
    min: usize,
    max: usize,
    reference: &FrequencyModel,
) -> Result<Decoded> {
    let estimated_length = keylen::estimate(ciphertext, min, max)?;
    let key = keysearch::recover_key(ciphertext, estimated_length, reference)?;
    let period = key.shortest_period();
    if period.len() < key.len() {
        info!("recovered key repeats every {} bytes", period.len());
    }
    if key.is_degenerate() {
        warn!("recovered key is all fallback bytes, the plaintext is likely wrong");
    }

    let plaintext = cipher::decrypt_filtered(ciphertext, key.bytes());
    Ok(Decoded {
        estimated_length,
        key,
        period,
        plaintext: ByteArray::from_bytes(plaintext),
    })
}

pub fn read_ciphertext<P: AsRef<Path>>(path: P) -> Result<ByteArray> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;

    let mut line = Vec::new();
    BufReader::new(file)
        .read_until(b'\n', &mut line)
        .map_err(|e| Error::io(path, e))?;

    let line = String::from_utf8(line).map_err(|e| Error::Decode(e.to_string()))?;
    ByteArray::from_hex(line.trim())
}

pub fn decode_file<P: AsRef<Path>>(
    path: P,
    min: usize,
    max: usize,
    reference: &FrequencyModel,
) -> Result<Decoded> {
    let ciphertext = read_ciphertext(&path)?;
    info!("read {} ciphertext bytes from {}", ciphertext.len(), path.as_ref().display());

    decode_ciphertext(ciphertext.bytes(), min, max, reference)
}
