//! Outline scanners: turn document text into a [`Symbol`] tree without a
//! full parser. Python is scoped by indentation, C++ and Java by braces.

mod c_family;
mod mask;
mod python;

use crate::language::Language;

use super::types::Symbol;

pub(crate) fn scan(
    language: Language,
    text: &str,
) -> Vec<Symbol> {
    match language {
        Language::Python => python::scan_python(text),
        Language::Cpp | Language::Java => c_family::scan_c_family(text),
    }
}
