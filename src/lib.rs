pub mod charset;
pub mod cipher;
pub mod corpus;
pub mod encoding;
pub mod error;
pub mod frequency;
pub mod job;
pub mod keylen;
pub mod keysearch;
pub mod pipeline;

pub use crate::error::{Error, Result};
pub use crate::frequency::FrequencyModel;
pub use crate::keysearch::Key;
pub use crate::pipeline::{decode_ciphertext, decode_file, Decoded};
