use crate::cipher;
use crate::error::{Error, Result};
use crate::frequency::{self, FrequencyModel};
use log::{debug, warn};
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    bytes: Vec<u8>,
    fallbacks: Vec<usize>,
}

impl Key {
    pub fn new(bytes: Vec<u8>, fallbacks: Vec<usize>) -> Key {
        Key { bytes, fallbacks }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn fallback_positions(&self) -> &[usize] {
        &self.fallbacks
    }

    pub fn is_degenerate(&self) -> bool {
        !self.bytes.is_empty() && self.fallbacks.len() == self.bytes.len()
    }

    // a position of the shorter key is a fallback if any position it stands for was
    pub fn shortest_period(&self) -> Key {
        let len = self.bytes.len();
        let period = (1..len)
            .filter(|p| len % p == 0)
            .find(|&p| (p..len).all(|i| self.bytes[i] == self.bytes[i % p]))
            .unwrap_or(len);

        let mut fallbacks: Vec<usize> = self.fallbacks.iter().map(|i| i % period).collect();
        fallbacks.sort_unstable();
        fallbacks.dedup();

        Key::new(self.bytes[..period].to_vec(), fallbacks)
    }
}

pub fn recover_key(ciphertext: &[u8], key_length: usize, reference: &FrequencyModel) -> Result<Key> {
    if key_length == 0 {
        return Err(Error::InvalidRange { min: 0, max: 0 });
    }

    let best: Vec<(u8, f64)> = (0..key_length)
        .into_par_iter()
        .map(|position| {
            let sample = cipher::stride_sample(ciphertext, key_length, position);
            best_byte(&sample, reference)
        })
        .collect();

    let mut fallbacks = Vec::new();
    for (position, (byte, score)) in best.iter().enumerate() {
        if *score > 0.0 {
            debug!("key position {}: {:#04x} scored {:.6}", position, byte, score);
        } else {
            warn!("key position {}: no printable candidate, using 0x00", position);
            fallbacks.push(position);
        }
    }

    let key = Key::new(best.into_iter().map(|(b, _)| b).collect(), fallbacks);
    if key.is_degenerate() {
        warn!("every key position fell back to zero, check the reference corpus");
    }

    Ok(key)
}

// starts from byte zero at score zero, so no printable candidate means 0x00
fn best_byte(sample: &[u8], reference: &FrequencyModel) -> (u8, f64) {
    (0..=255u8)
        .filter_map(|candidate| {
            let decoded = cipher::transform(sample, &[candidate]);
            let model = FrequencyModel::build(&decoded).ok()?;
            if !model.is_valid() {
                return None;
            }
            Some((candidate, frequency::cross_similarity(reference, &model)))
        })
        .fold((0, 0.0), |best, (candidate, score)| {
            if score > best.1 {
                (candidate, score)
            } else {
                best
            }
        })
}
