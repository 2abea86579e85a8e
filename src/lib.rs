//! Yaml Tools - YAML section loading
//!
//! A thin layer over `serde_yaml` for loading configuration files into typed
//! values. A whole file can be decoded at once, or one named top-level
//! section can be isolated and decoded on its own, so that several
//! components can share a single configuration file.
//!
//! # Example
//!
//! ```no_run
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct DbConfig {
//!     host: String,
//!     port: u16,
//! }
//!
//! fn main() -> yaml_tools::Result<()> {
//!     let db: DbConfig = yaml_tools::load_section("config.yaml", "db")?;
//!     println!("{}:{}", db.host, db.port);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{Result, YamlError};
pub use loader::{load_file, load_section, load_section_value, SectionLoader};
