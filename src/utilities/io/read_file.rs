use crate::api::errors::GraphError;
use bytesize::ByteSize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads the whole file at `path` into memory.
///
/// The handle is dropped before returning, on success and on every error path.
pub fn read_sample_file(path: &Path) -> Result<Vec<u8>, GraphError> {
    let io_error = |source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_error)?;
    let expected_len = file.metadata().map_err(io_error)?.len();

    let mut bytes = Vec::with_capacity(expected_len as usize);
    file.read_to_end(&mut bytes).map_err(io_error)?;

    debug!(
        path = %path.display(),
        size = %ByteSize::b(bytes.len() as u64),
        "read sample file"
    );
    Ok(bytes)
}
