use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading YAML files or sections
#[derive(Error, Debug)]
pub enum YamlError {
    /// An empty path was passed; caught before any file I/O is attempted.
    #[error("no yaml file path was provided")]
    EmptyPath,

    /// The file could not be opened or read.
    #[error("failed to read yaml file {}: {source}", path.display())]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The whole-file parse into a top-level mapping failed. This also
    /// covers documents whose top level is not a mapping.
    #[error("failed to parse {} as a yaml mapping: {source}", path.display())]
    Parse {
        /// Path of the document that failed to parse.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_yaml::Error,
    },

    /// The requested key is absent from the top-level mapping.
    #[error("section '{section}' not found in {}", path.display())]
    SectionNotFound {
        /// Path of the document that was searched.
        path: PathBuf,
        /// Key that was looked up.
        section: String,
    },

    /// Re-encoding the extracted section failed. Only expected on
    /// library defects.
    #[error("failed to serialize section '{section}': {source}")]
    Serialize {
        /// Section being re-encoded.
        section: String,
        /// Underlying serialization failure.
        #[source]
        source: serde_yaml::Error,
    },

    /// The whole-file decode into the destination type failed.
    #[error("failed to decode yaml file {}: {source}", path.display())]
    Decode {
        /// Path of the document being decoded.
        path: PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_yaml::Error,
    },

    /// The extracted section could not be decoded into the destination
    /// type, e.g. on a shape mismatch.
    #[error("failed to decode section '{section}': {source}")]
    DecodeSection {
        /// Section being decoded.
        section: String,
        /// Underlying decode failure.
        #[source]
        source: serde_yaml::Error,
    },
}

/// Result type alias for YAML loading operations
pub type Result<T> = std::result::Result<T, YamlError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_messages_name_the_section() {
        let err = YamlError::SectionNotFound {
            path: Path::new("config.yaml").to_path_buf(),
            section: "db".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'db'"));
        assert!(msg.contains("config.yaml"));
    }

    #[test]
    fn test_io_error_preserves_cause() {
        let err = YamlError::Io {
            path: Path::new("missing.yaml").to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let source = std::error::Error::source(&err).expect("cause should be preserved");
        assert!(source.to_string().contains("gone"));
    }
}
