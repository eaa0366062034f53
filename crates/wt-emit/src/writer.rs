//! Descriptor file output.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use wt_config::{LibraryConfig, OutputConfig};
use wt_core::ComponentRecord;

use crate::error::EmitError;
use crate::vetur::{attributes_table, tags_table};
use crate::web_types::{WebTypes, build_web_types};

/// The three generated documents.
#[derive(Debug, Clone)]
pub struct Descriptors {
    pub web_types: WebTypes,
    pub tags: Map<String, Value>,
    pub attributes: Map<String, Value>,
}

impl Descriptors {
    /// Build every document in memory.
    ///
    /// # Errors
    /// Returns `EmitError::Json` if a table entry cannot be converted.
    pub fn build(
        components: &[ComponentRecord],
        library: &LibraryConfig,
    ) -> Result<Self, EmitError> {
        Ok(Self {
            web_types: build_web_types(components, library),
            tags: tags_table(components, library)?,
            attributes: attributes_table(components, library)?,
        })
    }
}

/// Paths written by [`write_descriptors`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFiles {
    pub web_types: PathBuf,
    pub tags: PathBuf,
    pub attributes: PathBuf,
}

/// Serialize `value` with 2-space indentation and write it to `path`,
/// creating missing parent directories.
///
/// # Errors
/// Returns `EmitError::Json` on serialization failure or `EmitError::Io`
/// if the file cannot be written.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), EmitError> {
    let text = serde_json::to_string_pretty(value)?;
    let io_err = |source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, text).map_err(io_err)?;
    tracing::info!(path = %path.display(), "wrote descriptor");
    Ok(())
}

/// Build all documents, then write them to the configured locations.
///
/// Nothing is written if building fails.
///
/// # Errors
/// See [`Descriptors::build`] and [`write_json`].
pub fn write_descriptors(
    components: &[ComponentRecord],
    library: &LibraryConfig,
    output: &OutputConfig,
) -> Result<WrittenFiles, EmitError> {
    let descriptors = Descriptors::build(components, library)?;
    let written = WrittenFiles {
        web_types: output.web_types_path(),
        tags: output.tags_path(),
        attributes: output.attributes_path(),
    };
    write_json(&written.web_types, &descriptors.web_types)?;
    write_json(&written.tags, &descriptors.tags)?;
    write_json(&written.attributes, &descriptors.attributes)?;
    Ok(written)
}
