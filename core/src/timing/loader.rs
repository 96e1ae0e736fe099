use std::fs;
use std::io::Read;
use std::path::Path;

use super::{LoadError, Timing};

/// Path that selects stdin instead of a file
pub const STDIN_PATH: &str = "-";

/// Read and decode a timing description from `path`, or from stdin when the
/// path is [`STDIN_PATH`].
pub fn load_timing(path: &Path) -> Result<Timing, LoadError> {
    let (contents, origin) = if path == Path::new(STDIN_PATH) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::ReadStdin)?;
        (buf, "stdin".to_string())
    } else {
        let buf = fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        (buf, path.display().to_string())
    };

    tracing::debug!(origin = %origin, bytes = contents.len(), "read timing description");
    parse_timing(&contents, &origin)
}

/// Decode a timing description. `origin` names the source in errors.
pub fn parse_timing(json: &str, origin: &str) -> Result<Timing, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::ParseJson {
        origin: origin.to_string(),
        source,
    })
}
