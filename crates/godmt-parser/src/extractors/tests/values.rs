use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::types::MapEntry;

fn single_value(decl: &str) -> Option<ScannedType> {
    let file = parse_and_extract(&format!("package app\n\n{decl}\n"));
    file.types.first().cloned()
}

#[test]
fn const_group_keeps_order() {
    let file = parse_and_extract("package app\n\nconst (\n\tA = 1\n\tB = 2\n)\n");

    assert_eq!(
        file.types,
        vec![
            ScannedType {
                name: "A".to_string(),
                kind: "int".to_string(),
                value: literal("1"),
                doc: None,
                is_pointer: false,
                internal_type: InternalType::Var,
            },
            ScannedType {
                name: "B".to_string(),
                kind: "int".to_string(),
                value: literal("2"),
                doc: None,
                is_pointer: false,
                internal_type: InternalType::Var,
            },
        ]
    );
}

#[rstest]
#[case::int("const N = 42", "int", "42")]
#[case::float("const F = 1.5", "float64", "1.5")]
#[case::imaginary("const I = 2i", "complex128", "2i")]
#[case::rune("const R = 'x'", "rune", "'x'")]
#[case::string("const S = \"hi\"", "string", "\"hi\"")]
#[case::raw_string("const Raw = `a\\b`", "string", "`a\\b`")]
#[case::bool_true("var On = true", "bool", "true")]
#[case::bool_false("var Off = false", "bool", "false")]
#[case::declared_type("const Timeout Seconds = 30", "Seconds", "30")]
fn literal_kind_and_text(#[case] decl: &str, #[case] kind: &str, #[case] text: &str) {
    let entry = single_value(decl).expect("literal should be extracted");
    assert_eq!(entry.kind, kind);
    assert_eq!(entry.value, literal(text));
    assert_eq!(entry.internal_type, InternalType::Var);
}

#[test]
fn group_doc_falls_back_to_specs() {
    let file = parse_and_extract(FIXTURE);
    let retries = find_type(&file, "MaxRetries");
    assert!(
        retries.doc.as_deref().is_some_and(|d| d.contains("Retry limits")),
        "doc: {:?}",
        retries.doc
    );
    assert_eq!(find_type(&file, "Backoff").kind, "float64");
}

#[test]
fn names_pair_positionally() {
    let file = parse_and_extract("package app\n\nvar a, b = 1, \"two\"\n");
    let names: Vec<(&str, &str)> = file
        .types
        .iter()
        .map(|t| (t.name.as_str(), t.kind.as_str()))
        .collect();
    assert_eq!(names, vec![("a", "int"), ("b", "string")]);
}

#[test]
fn identifier_resolves_to_its_initializer() {
    let file = parse_and_extract(FIXTURE);
    let alias = find_type(&file, "Alias");

    assert_eq!(alias.kind, "string");
    assert_eq!(alias.value, literal("\"hello\""));
}

#[test]
fn identifier_chain_keeps_declared_type() {
    let source = "package app\n\nconst Base Seconds = 10\n\nconst Derived = Base\n";
    let file = parse_and_extract(source);
    assert_eq!(find_type(&file, "Derived").kind, "Seconds");
}

#[rstest]
#[case::undeclared("var Missing = Unknown")]
#[case::nil("var Nothing = nil")]
#[case::iota("const First = iota")]
#[case::call("var Now = time.Now()")]
#[case::binary("const Sum = 1 + 2")]
#[case::struct_literal("type P struct{ X int }\n\nvar Origin = P{X: 0}")]
#[case::function_literal("var F = func() {}")]
fn unsupported_initializer_is_dropped(#[case] decl: &str) {
    assert_eq!(single_value(decl), None);
}

#[test]
fn unresolved_identifier_reduces_count_without_reordering() {
    let file = parse_and_extract("package app\n\nvar (\n\tA = 1\n\tB = Unknown\n\tC = 3\n)\n");
    let names: Vec<&str> = file.types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn map_composite_keeps_entries_in_order() {
    let file = parse_and_extract(FIXTURE);
    let limits = find_type(&file, "Limits");

    assert_eq!(limits.kind, "int");
    assert_eq!(limits.internal_type, InternalType::Map);
    assert_eq!(
        limits.value,
        ScannedValue::Map(vec![
            MapEntry {
                key: "\"low\"".to_string(),
                value: literal("1"),
            },
            MapEntry {
                key: "\"high\"".to_string(),
                value: literal("10"),
            },
        ])
    );
}

#[test]
fn duplicate_map_keys_keep_the_first() {
    let entry = single_value("var M = map[string]int{\"a\": 1, \"b\": 2, \"a\": 3}")
        .expect("map should be extracted");
    assert_eq!(entry.value.entry_count(), Some(2));
    assert_eq!(entry.value.summary(), "{\"a\": 1, \"b\": 2}");
}

#[test]
fn slice_composite_keeps_elements() {
    let file = parse_and_extract(FIXTURE);
    let primes = find_type(&file, "Primes");

    assert_eq!(primes.kind, "int");
    assert_eq!(primes.internal_type, InternalType::Slice);
    assert_eq!(
        primes.value,
        ScannedValue::List(vec![literal("2"), literal("3"), literal("5"), literal("7")])
    );
}

#[test]
fn named_slice_composite_resolves_element_kind() {
    let file = parse_and_extract(FIXTURE);
    let temps = find_type(&file, "Temperatures");

    assert_eq!(temps.kind, "float64");
    assert_eq!(temps.internal_type, InternalType::Slice);
    assert_eq!(temps.value.entry_count(), Some(2));
}

#[test]
fn nested_composites_keep_structure() {
    let entry = single_value("var M = map[string][]int{\"odd\": {1, 3}, \"even\": {2}}")
        .expect("map should be extracted");
    assert_eq!(entry.kind, "int");
    assert_eq!(
        entry.value,
        ScannedValue::Map(vec![
            MapEntry {
                key: "\"odd\"".to_string(),
                value: ScannedValue::List(vec![literal("1"), literal("3")]),
            },
            MapEntry {
                key: "\"even\"".to_string(),
                value: ScannedValue::List(vec![literal("2")]),
            },
        ])
    );
}

#[test]
fn typed_pointer_without_initializer() {
    let file = parse_and_extract(FIXTURE);
    let p = find_type(&file, "P");

    assert!(p.is_pointer);
    assert_eq!(p.kind, "int");
    assert_eq!(p.value, ScannedValue::None);
    assert_eq!(p.internal_type, InternalType::Var);
}

#[test]
fn typed_map_without_initializer() {
    let file = parse_and_extract(FIXTURE);
    let m = find_type(&file, "M");

    assert!(!m.is_pointer);
    assert_eq!(m.kind, "int");
    assert_eq!(m.value, ScannedValue::None);
    assert_eq!(m.internal_type, InternalType::Map);
}

#[rstest]
#[case::pointer_to_map("var PM *map[string]int")]
#[case::pointer_to_slice("var PS *[]int")]
#[case::channel("var C chan int")]
fn typed_unsupported_without_initializer(#[case] decl: &str) {
    assert_eq!(single_value(decl), None);
}

#[test]
fn typed_multi_name_without_initializer() {
    let file = parse_and_extract("package app\n\nvar x, y float64\n");
    let names: Vec<&str> = file.types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["x", "y"]);
    assert!(file.types.iter().all(|t| t.kind == "float64"));
}

#[test]
fn blank_identifier_yields_no_entry() {
    let file = parse_and_extract("package app\n\nconst _, B = 1, 2\n");
    let entries: Vec<(&str, &str, ScannedValue)> = file
        .types
        .iter()
        .map(|t| (t.name.as_str(), t.kind.as_str(), t.value.clone()))
        .collect();
    assert_eq!(entries, vec![("B", "int", literal("2"))]);
}

#[test]
fn blank_identifier_without_initializer_yields_no_entry() {
    let file = parse_and_extract("package app\n\nvar _, y float64\n");
    let names: Vec<&str> = file.types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["y"]);
}

#[test]
fn identifier_to_typed_declaration_takes_its_type() {
    let file = parse_with_diagnostics("package app\n\nvar A int\n\nvar B = A\n");
    let b = find_type(&file, "B");

    assert_eq!(b.kind, "int");
    assert_eq!(b.value, ScannedValue::None);
    assert_eq!(b.internal_type, InternalType::Var);
    assert!(file.omissions.is_empty(), "omissions: {:?}", file.omissions);
}

#[test]
fn identifier_to_typed_pointer_declaration_keeps_pointer() {
    let file = parse_and_extract("package app\n\nvar A *int\n\nvar B = A\n");
    let b = find_type(&file, "B");

    assert!(b.is_pointer);
    assert_eq!(b.kind, "int");
}
