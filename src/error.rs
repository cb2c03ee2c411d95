use failure::Fail;
use std::io;
use std::path::Path;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "unable to read {}: {}", path, cause)]
    Io {
        path: String,
        #[cause]
        cause: io::Error,
    },

    #[fail(display = "malformed ciphertext: {}", _0)]
    Decode(String),

    #[fail(display = "cannot build a frequency model from an empty sequence")]
    DegenerateInput,

    #[fail(display = "invalid key length range {}..={}", min, max)]
    InvalidRange { min: usize, max: usize },
}

impl Error {
    pub fn io(path: &Path, cause: io::Error) -> Self {
        Error::Io {
            path: path.display().to_string(),
            cause,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
