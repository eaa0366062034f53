//! # wt-parser
//!
//! ast-grep-based extraction of component API declarations from JavaScript
//! demo modules.
//!
//! Pipeline, leaves first:
//! - [`literal`]: literal expression nodes → `PlainValue`
//! - [`members`]: `props` / `events` / `slots` / `methods` lists → member records
//! - [`component`]: one `apis` element → `ComponentRecord`
//! - [`scanner`]: files and directories → component records

pub mod component;
pub mod error;
pub mod literal;
pub mod members;
pub mod parser;
pub mod properties;
pub mod scanner;

pub use component::extract_component;
pub use error::{ExtractError, ParserError};
pub use literal::{LiteralKind, reconstruct};
pub use members::{extract_attributes, extract_events, extract_methods, extract_slots};
pub use parser::{AstTree, parse_module};
pub use properties::{PropertyKey, PropertyMap, locale_entry, named_properties};
pub use scanner::{
    ScanOptions, ScanReport, SkippedFile, list_source_files, scan_all, scan_dir, scan_file,
    scan_module,
};

#[cfg(test)]
pub(crate) mod test_support {
    use ast_grep_core::Node;
    use ast_grep_core::tree_sitter::StrDoc;
    use ast_grep_language::SupportLang;

    pub(crate) type JsNode<'r> = Node<'r, StrDoc<SupportLang>>;

    /// Parse `source` and hand the value of its `export default` to `f`.
    pub(crate) fn with_default_export<R>(source: &str, f: impl FnOnce(&JsNode<'_>) -> R) -> R {
        let tree = crate::parser::parse_module(source);
        let export = tree
            .root()
            .children()
            .find(|c| c.kind().as_ref() == "export_statement")
            .expect("source should contain an export statement");
        let value = export
            .field("value")
            .expect("export statement should have a default value");
        f(&value)
    }

    /// Parse `source` and hand the first element of `export default [...]` to `f`.
    pub(crate) fn with_first_element<R>(source: &str, f: impl FnOnce(&JsNode<'_>) -> R) -> R {
        with_default_export(source, |array| {
            let first = crate::literal::array_elements(array)
                .into_iter()
                .flatten()
                .next()
                .expect("array should have an element");
            f(&first)
        })
    }
}
