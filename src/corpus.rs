use crate::error::{Error, Result};
use crate::frequency::FrequencyModel;
use log::{info, warn};
use std::fs;
use std::path::Path;

pub fn load<P: AsRef<Path>>(path: P) -> Result<FrequencyModel> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    info!("loaded corpus {} ({} bytes)", path.display(), bytes.len());

    Ok(from_bytes(&bytes))
}

// empty corpus: zero model, not an error
pub fn from_bytes(bytes: &[u8]) -> FrequencyModel {
    match FrequencyModel::build(bytes) {
        Ok(model) => model,
        Err(_) => {
            warn!("reference corpus is empty, key recovery will only produce zero bytes");
            FrequencyModel::default()
        }
    }
}
