use super::*;

#[test]
fn python_comments_and_string_bodies_are_blanked() {
    let masked = mask_source("x = \"a#b\"  # comment", MaskStyle::Python);
    assert_eq!(masked.text, format!("x = \"{}\"{}", " ".repeat(3), " ".repeat(11)));
    assert_eq!(masked.starts_in_literal, vec![false]);
}

#[test]
fn python_triple_quotes_span_lines() {
    let masked = mask_source("a = '''\ndef f():\n'''\nb = 1\n", MaskStyle::Python);
    assert_eq!(masked.text, "a = '''\n        \n'''\nb = 1\n");
    assert_eq!(masked.starts_in_literal, vec![false, true, true, false, false]);
}

#[test]
fn python_escaped_quote_stays_inside_string() {
    let masked = mask_source("s = 'it\\'s' # x\ny = 2", MaskStyle::Python);
    assert!(masked.text.ends_with("\ny = 2"));
    assert!(!masked.text.contains('#'));
}

#[test]
fn c_family_comments_are_blanked() {
    let source = "int a = 1; // {\n/* {\n} */ int b;\n";
    let masked = mask_source(source, MaskStyle::CFamily);
    assert_eq!(masked.text.len(), source.len());
    assert!(!masked.text.contains('{'));
    assert!(!masked.text.contains('}'));
    assert!(masked.text.contains("int a = 1;"));
    assert!(masked.text.contains(" int b;"));
    assert_eq!(masked.starts_in_literal, vec![false, false, true, false]);
}

#[test]
fn c_family_preprocessor_lines_continue() {
    let source = "#define F(x) \\\n  { x }\nint y;\n";
    let masked = mask_source(source, MaskStyle::CFamily);
    assert!(!masked.text.contains('{'));
    assert!(masked.text.contains("int y;"));
    assert_eq!(masked.starts_in_literal, vec![false, true, false, false]);
}

#[test]
fn c_family_hash_inside_line_is_code() {
    let masked = mask_source("  #include <map>\nx # y;", MaskStyle::CFamily);
    assert!(!masked.text.contains("include"));
    assert!(masked.text.contains("x # y;"));
}

#[test]
fn c_family_raw_strings() {
    let source = "auto s = R\"x({ \")x\";\nint z;";
    let masked = mask_source(source, MaskStyle::CFamily);
    assert_eq!(masked.text.len(), source.len());
    assert!(!masked.text.contains('{'));
    assert!(masked.text.starts_with("auto s = R\""));
    assert!(masked.text.ends_with("\";\nint z;"));
}

#[test]
fn c_family_char_literals_and_digit_separators() {
    let masked = mask_source("int big = 1'000'000; char c = '{';", MaskStyle::CFamily);
    assert!(masked.text.contains("1'000'000"));
    assert!(masked.text.ends_with("char c = ' ';"));
}

#[test]
fn java_text_blocks() {
    let source = "String s = \"\"\"\n  {\n  \"\"\";\nint w;";
    let masked = mask_source(source, MaskStyle::CFamily);
    assert!(!masked.text.contains('{'));
    assert!(masked.text.ends_with("\"\"\";\nint w;"));
    assert_eq!(masked.starts_in_literal, vec![false, true, true, false]);
}

#[test]
fn multibyte_text_keeps_offsets() {
    let source = "name = \"héllo\"  # ünïcode\n";
    let masked = mask_source(source, MaskStyle::Python);
    assert_eq!(masked.text.len(), source.len());
    assert!(masked.text.is_ascii());
}
