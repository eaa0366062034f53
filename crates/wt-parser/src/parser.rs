//! ast-grep wrapper for JavaScript modules.

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by `parse_module`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Parse module source into an ast-grep tree.
///
/// The tree-sitter JavaScript grammar accepts JSX, so demo files carrying
/// JSX-valued fields parse without extra configuration.
#[must_use]
pub fn parse_module(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::JavaScript.ast_grep(source)
}

/// Returns `true` if `file_name` ends with the recognized source suffix.
#[must_use]
pub fn is_source_file(file_name: &str, suffix: &str) -> bool {
    file_name.ends_with(suffix)
}

/// One-based line of the first syntax error in the tree, if any.
///
/// tree-sitter recovers from bad input by inserting `ERROR` and missing
/// nodes; either one means the text is not a valid module.
pub fn first_syntax_error<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<usize> {
    if node.kind().as_ref() == "ERROR" || node.is_missing() {
        return Some(node.start_pos().line() + 1);
    }
    node.children().find_map(|child| first_syntax_error(&child))
}
