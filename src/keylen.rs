use crate::cipher;
use crate::error::{Error, Result};
use crate::frequency::{self, FrequencyModel};
use log::{debug, info};
use rayon::prelude::*;

// Samples under one key byte agree above 0.66 on English text, samples under
// two different key bytes stay below 0.3.
const SAME_KEY_BYTE_AGREEMENT: f64 = 0.5;

pub fn score_lengths(ciphertext: &[u8], min: usize, max: usize) -> Result<Vec<(usize, f64)>> {
    check_range(min, max)?;

    let scores = (min..=max)
        .into_par_iter()
        .map(|n| {
            let sample = cipher::stride_sample(ciphertext, n, n);
            let score = FrequencyModel::build(&sample)
                .map(|model| model.self_similarity())
                .unwrap_or(0.0);
            (n, score)
        })
        .collect();

    Ok(scores)
}

pub fn estimate(ciphertext: &[u8], min: usize, max: usize) -> Result<usize> {
    check_range(min, max)?;
    if ciphertext.is_empty() {
        return Err(Error::DegenerateInput);
    }

    let scores = score_lengths(ciphertext, min, max)?;
    for (n, score) in &scores {
        debug!("key length {:>3}: self-similarity {:.6}", n, score);
    }

    let best = best_candidate(&scores);
    let length = match collapse_to_divisor(ciphertext, min, best) {
        Some(period) => {
            info!("key length {} repeats every {} bytes, using {}", best, period, period);
            period
        }
        None => best,
    };

    info!("estimated key length {} (searched {}..={})", length, min, max);
    Ok(length)
}

fn check_range(min: usize, max: usize) -> Result<()> {
    if min == 0 || min > max {
        return Err(Error::InvalidRange { min, max });
    }
    Ok(())
}

// first strict maximum wins ties
fn best_candidate(scores: &[(usize, f64)]) -> usize {
    scores
        .iter()
        .skip(1)
        .fold(scores[0], |best, &(n, score)| if score > best.1 { (n, score) } else { best })
        .0
}

fn collapse_to_divisor(ciphertext: &[u8], min: usize, best: usize) -> Option<usize> {
    (min..best)
        .filter(|d| best % d == 0)
        .find(|&d| repeats_every(ciphertext, best, d))
}

/// Whether key position `p` and `p + period` of a `stride`-byte key hold the
/// same byte for every `p`, judged by how closely their samples agree.
fn repeats_every(ciphertext: &[u8], stride: usize, period: usize) -> bool {
    (0..period).all(|p| {
        let a = FrequencyModel::build(&cipher::stride_sample(ciphertext, stride, p));
        let b = FrequencyModel::build(&cipher::stride_sample(ciphertext, stride, p + period));
        match (a, b) {
            (Ok(a), Ok(b)) => agreement(&a, &b) >= SAME_KEY_BYTE_AGREEMENT,
            _ => true,
        }
    })
}

// cosine of the two distributions
fn agreement(a: &FrequencyModel, b: &FrequencyModel) -> f64 {
    frequency::cross_similarity(a, b) / (a.self_similarity() * b.self_similarity()).sqrt()
}
