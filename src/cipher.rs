use crate::charset;
use crate::encoding::ByteArray;

// empty key: identity
pub fn transform(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }

    data.iter()
        .zip(key.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect()
}

pub fn decrypt_filtered(data: &[u8], key: &[u8]) -> Vec<u8> {
    transform(data, key)
        .into_iter()
        .filter(|b| charset::is_allowed(*b))
        .collect()
}

/// Bytes whose index `i` satisfies `(i - offset) mod stride == 0` on signed
/// indices, so `offset == stride` picks the same positions as offset zero.
pub fn stride_sample(data: &[u8], stride: usize, offset: usize) -> Vec<u8> {
    if stride == 0 {
        return Vec::new();
    }

    let stride = stride as i64;
    let offset = offset as i64;

    data.iter()
        .enumerate()
        .filter(|(i, _)| (*i as i64 - offset) % stride == 0)
        .map(|(_, b)| *b)
        .collect()
}

pub fn encrypt(decrypted: &str, key: &[u8]) -> String {
    let plaintext = ByteArray::from_string(decrypted);
    let key = ByteArray::from_bytes(key.to_vec());

    plaintext.xor(&key).hex()
}
