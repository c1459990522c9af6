use super::*;

#[test]
fn functions_and_methods_share_a_category() {
    assert_eq!(SymbolKind::Function.category(), Some(SymbolCategory::Function));
    assert_eq!(SymbolKind::Method.category(), Some(SymbolCategory::Function));
}

#[test]
fn classes_and_structs_share_a_category() {
    assert_eq!(SymbolKind::Class.category(), Some(SymbolCategory::Class));
    assert_eq!(SymbolKind::Struct.category(), Some(SymbolCategory::Class));
}

#[test]
fn other_kinds_are_untracked() {
    for kind in [SymbolKind::Namespace, SymbolKind::Variable, SymbolKind::Enum, SymbolKind::Constructor] {
        assert_eq!(kind.category(), None, "{kind:?}");
    }
}

#[test]
fn generic_kind_labels() {
    assert_eq!(generic_kind(SymbolKind::Method), "function");
    assert_eq!(generic_kind(SymbolKind::Function), "function");
    assert_eq!(generic_kind(SymbolKind::Struct), "class");
    assert_eq!(generic_kind(SymbolKind::Class), "class");
    assert_eq!(generic_kind(SymbolKind::Variable), "variable");
    assert_eq!(generic_kind(SymbolKind::EnumMember), "enummember");
    assert_eq!(generic_kind(SymbolKind::TypeParameter), "typeparameter");
}
