use crate::cipher;
use crate::error::{Error, Result};
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteArray {
    bytes: Vec<u8>,
}

impl ByteArray {
    pub fn from_bytes(bytes: Vec<u8>) -> ByteArray {
        ByteArray { bytes }
    }

    pub fn from_hex(hex: &str) -> Result<ByteArray> {
        hex::decode(hex)
            .map(ByteArray::from_bytes)
            .map_err(|e| Error::Decode(e.to_string()))
    }

    pub fn from_string(s: &str) -> ByteArray {
        ByteArray::from_bytes(s.as_bytes().to_vec())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn string(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    pub fn hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    pub fn spaced_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02x}", b)).join(" ")
    }

    pub fn xor(&self, key: &ByteArray) -> ByteArray {
        ByteArray::from_bytes(cipher::transform(&self.bytes, &key.bytes))
    }
}
