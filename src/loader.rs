//! YAML file and section loading
//!
//! Two ways to load a document: [`load_file`] decodes the whole file into a
//! typed destination, [`load_section`] isolates one named top-level key and
//! decodes only that subtree. [`SectionLoader`] wraps both for callers that
//! keep their configuration files under a single directory.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::{Result, YamlError};

/// Decode an entire YAML file into `T`.
///
/// The file handle is scoped to this call and released before it returns,
/// on both success and failure paths.
pub fn load_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    ensure_path(path)?;
    debug!("loading yaml file: {}", path.display());

    let file = File::open(path).map_err(|source| YamlError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_reader(file).map_err(|source| YamlError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode one named top-level section of a YAML file into `T`.
///
/// The document's top level must be a mapping. The located subtree is
/// re-serialized to YAML text and decoded from there; the round trip through
/// the generic representation is how an untyped value becomes a typed one
/// without a dedicated conversion routine, and it is lossless for any
/// YAML-representable value.
pub fn load_section<T: DeserializeOwned>(path: impl AsRef<Path>, section: &str) -> Result<T> {
    let path = path.as_ref();
    let value = extract_section(path, section)?;
    debug!("decoding section '{}' from {}", section, path.display());

    let text = serde_yaml::to_string(&value).map_err(|source| YamlError::Serialize {
        section: section.to_string(),
        source,
    })?;

    serde_yaml::from_str(&text).map_err(|source| YamlError::DecodeSection {
        section: section.to_string(),
        source,
    })
}

/// Extract one named top-level section as an untyped [`Value`].
///
/// For callers that do not know the section's shape until runtime. Same
/// read, parse, and lookup sequence as [`load_section`], without the final
/// typed decode.
pub fn load_section_value(path: impl AsRef<Path>, section: &str) -> Result<Value> {
    extract_section(path.as_ref(), section)
}

/// Loader rooted at a configuration directory
///
/// Holds no parsed state; each call reads its file independently.
pub struct SectionLoader {
    config_dir: PathBuf,
}

impl SectionLoader {
    /// Create a loader that resolves filenames against `config_dir`.
    pub fn new<P: AsRef<Path>>(config_dir: P) -> Self {
        Self {
            config_dir: config_dir.as_ref().to_path_buf(),
        }
    }

    /// Decode an entire file under the configuration directory into `T`.
    pub fn load<T: DeserializeOwned>(&self, filename: impl AsRef<Path>) -> Result<T> {
        load_file(self.config_dir.join(filename))
    }

    /// Decode one named section of a file under the configuration
    /// directory into `T`.
    pub fn load_section<T: DeserializeOwned>(
        &self,
        filename: impl AsRef<Path>,
        section: &str,
    ) -> Result<T> {
        load_section(self.config_dir.join(filename), section)
    }
}

fn ensure_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(YamlError::EmptyPath);
    }
    Ok(())
}

/// Parse the whole document into a top-level mapping.
fn top_level_mapping(path: &Path) -> Result<Mapping> {
    ensure_path(path)?;
    debug!("reading yaml file: {}", path.display());

    let data = std::fs::read_to_string(path).map_err(|source| YamlError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&data).map_err(|source| YamlError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn extract_section(path: &Path, section: &str) -> Result<Value> {
    let mut mapping = top_level_mapping(path)?;
    let key = Value::from(section);
    mapping
        .remove(&key)
        .ok_or_else(|| YamlError::SectionNotFound {
            path: path.to_path_buf(),
            section: section.to_string(),
        })
}
