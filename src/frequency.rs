use crate::charset;
use crate::error::{Error, Result};
use std::fmt;

const ALPHABET_SIZE: usize = 256;

#[derive(Debug, Clone)]
pub struct FrequencyModel {
    freq: [f64; ALPHABET_SIZE],
    self_similarity: f64,
    len: usize,
    valid: bool,
}

impl Default for FrequencyModel {
    fn default() -> Self {
        FrequencyModel {
            freq: [0.0; ALPHABET_SIZE],
            self_similarity: 0.0,
            len: 0,
            valid: true,
        }
    }
}

impl FrequencyModel {
    pub fn build(bytes: &[u8]) -> Result<FrequencyModel> {
        if bytes.is_empty() {
            return Err(Error::DegenerateInput);
        }

        let step = 1.0 / bytes.len() as f64;
        let mut freq = [0.0; ALPHABET_SIZE];
        let mut valid = true;

        for &b in bytes {
            freq[b as usize] += step;
            if !charset::is_allowed(b) {
                valid = false;
            }
        }

        let self_similarity = freq.iter().map(|f| f * f).sum();

        Ok(FrequencyModel {
            freq,
            self_similarity,
            len: bytes.len(),
            valid,
        })
    }

    pub fn frequency(&self, b: u8) -> f64 {
        self.freq[b as usize]
    }

    pub fn self_similarity(&self) -> f64 {
        self.self_similarity
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

pub fn cross_similarity(a: &FrequencyModel, b: &FrequencyModel) -> f64 {
    a.freq.iter().zip(b.freq.iter()).map(|(x, y)| x * y).sum()
}

impl fmt::Display for FrequencyModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (b, freq) in self.freq.iter().enumerate().filter(|(_, freq)| **freq > 0.0) {
            let b = b as u8;
            let shown = if charset::is_allowed(b) { b as char } else { '.' };
            writeln!(f, "{} ({:#04x}): {:.6}", shown, b, freq)?;
        }
        write!(f, "self-similarity: {:.6}", self.self_similarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_build_empty() {
        match FrequencyModel::build(&[]) {
            Err(Error::DegenerateInput) => {}
            other => panic!("expected DegenerateInput, got {:?}", other),
        }
    }

    #[test]
    fn test_frequencies_sum_to_one() {
        let samples: Vec<&[u8]> = vec![
            b"a",
            b"hello world",
            b"\x00\x01\x02\xff\xfe",
            b"It was late in the autumn when the letter finally arrived.",
        ];

        for sample in samples {
            let model = FrequencyModel::build(sample).unwrap();
            let total: f64 = (0..=255u8).map(|b| model.frequency(b)).sum();
            assert!((total - 1.0).abs() < EPSILON, "sum was {}", total);
            assert_eq!(model.len(), sample.len());
        }
    }

    #[test]
    fn test_frequency_values() {
        let model = FrequencyModel::build(b"abca").unwrap();
        assert!((model.frequency(b'a') - 0.5).abs() < EPSILON);
        assert!((model.frequency(b'b') - 0.25).abs() < EPSILON);
        assert!((model.frequency(b'c') - 0.25).abs() < EPSILON);
        assert_eq!(model.frequency(b'd'), 0.0);
    }

    #[test]
    fn test_self_similarity_bounds() {
        let single = FrequencyModel::build(b"zzzzzzzz").unwrap();
        assert!((single.self_similarity() - 1.0).abs() < EPSILON);

        let pair = FrequencyModel::build(b"abab").unwrap();
        assert!((pair.self_similarity() - 0.5).abs() < EPSILON);

        let all: Vec<u8> = (0..=255).collect();
        let flat = FrequencyModel::build(&all).unwrap();
        assert!((flat.self_similarity() - 1.0 / 256.0).abs() < EPSILON);

        for model in &[pair, flat] {
            assert!(model.self_similarity() > 0.0);
            assert!(model.self_similarity() < 1.0);
        }
    }

    #[test]
    fn test_validity_flag() {
        let printable = FrequencyModel::build(b"The quick brown fox ~ 123 {}").unwrap();
        assert!(printable.is_valid());

        let with_nul = FrequencyModel::build(b"abc\x00def").unwrap();
        assert!(!with_nul.is_valid());

        let with_del = FrequencyModel::build(b"abc\x7fdef").unwrap();
        assert!(!with_del.is_valid());

        let with_newline = FrequencyModel::build(b"abc\ndef").unwrap();
        assert!(!with_newline.is_valid());
    }

    #[test]
    fn test_cross_similarity() {
        let a = FrequencyModel::build(b"aabb").unwrap();
        let b = FrequencyModel::build(b"ab").unwrap();
        let c = FrequencyModel::build(b"xyz").unwrap();

        assert!((cross_similarity(&a, &b) - 0.5).abs() < EPSILON);
        assert_eq!(cross_similarity(&a, &c), 0.0);
        assert!((cross_similarity(&a, &b) - cross_similarity(&b, &a)).abs() < EPSILON);
        assert!((cross_similarity(&a, &a) - a.self_similarity()).abs() < EPSILON);
    }

    #[test]
    fn test_zero_model() {
        let zero = FrequencyModel::default();
        let text = FrequencyModel::build(b"some text").unwrap();

        assert!(zero.is_empty());
        assert_eq!(zero.self_similarity(), 0.0);
        assert!((0..=255u8).all(|b| zero.frequency(b) == 0.0));
        assert_eq!(cross_similarity(&zero, &text), 0.0);
    }

    #[test]
    fn test_display() {
        let model = FrequencyModel::build(b"ab\x00b").unwrap();
        let dump = model.to_string();
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines[0], ". (0x00): 0.250000");
        assert_eq!(lines[1], "a (0x61): 0.250000");
        assert_eq!(lines[2], "b (0x62): 0.500000");
        assert_eq!(lines[3], "self-similarity: 0.375000");
    }
}
