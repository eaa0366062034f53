//! # wt-emit
//!
//! Turns extracted [`ComponentRecord`](wt_core::ComponentRecord)s into the
//! editor descriptor files:
//! - [`web_types`]: JetBrains `web-types.json`
//! - [`vetur`]: `vetur-tags.json` and `vetur-attributes.json`
//! - [`writer`]: builds all three documents, then writes them pretty-printed

pub mod casing;
pub mod error;
pub mod vetur;
pub mod web_types;
pub mod writer;

pub use casing::to_pascal_case;
pub use error::EmitError;
pub use vetur::{attributes_table, tags_table};
pub use web_types::{WebTypes, build_web_types};
pub use writer::{Descriptors, WrittenFiles, write_descriptors, write_json};
