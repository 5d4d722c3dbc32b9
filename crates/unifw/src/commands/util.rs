//! Shared input helpers for command handlers.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::CliError;

/// Read a file, or stdin when the path is `-`.
pub fn read_source(path: &Path) -> Result<String, CliError> {
    let input_err = |source| CliError::Input {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(input_err)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(input_err)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// Load local state: YAML for `.yaml`/`.yml`, JSON otherwise.
pub fn load_local<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let body = read_source(path)?;
    let origin = path.display().to_string();
    if is_yaml(path) {
        serde_yaml::from_str(&body).map_err(|source| CliError::Yaml { origin, source })
    } else {
        serde_json::from_str(&body).map_err(|source| CliError::Json { origin, source })
    }
}

/// Load a wire payload. Always JSON.
pub fn load_wire<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let body = read_source(path)?;
    parse_json(&body, &path.display().to_string())
}

pub fn parse_json<T: DeserializeOwned>(body: &str, origin: &str) -> Result<T, CliError> {
    serde_json::from_str(body).map_err(|source| CliError::Json {
        origin: origin.to_owned(),
        source,
    })
}
