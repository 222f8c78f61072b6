use pretty_assertions::assert_eq;

use super::*;

fn decl<'a>(file: &'a GoFile, name: &str) -> &'a Decl {
    file.decls
        .iter()
        .find(|d| d.name() == name)
        .unwrap_or_else(|| panic!("should find declaration '{name}'"))
}

#[test]
fn struct_spec_routes_to_struct() {
    let file = lower(FIXTURE);
    let routed = route_declaration(&file, decl(&file, "Point"));
    assert!(matches!(&routed, Routed::Struct(s) if s.name == "Point"), "{routed:?}");
}

#[test]
fn value_spec_routes_to_values() {
    let file = lower(FIXTURE);
    let Routed::Values(items) = route_declaration(&file, decl(&file, "Limits")) else {
        panic!("Limits should route to values");
    };
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].internal_type, InternalType::Map);
}

#[test]
fn non_struct_type_spec_is_empty() {
    let file = lower(FIXTURE);
    for name in ["Celsius", "Readings", "Grid", "Handler"] {
        let routed = route_declaration(&file, decl(&file, name));
        assert_eq!(routed, Routed::Empty, "{name}");
        assert!(routed.is_empty());
    }
}

#[test]
fn unsupported_initializer_routes_to_empty_values() {
    let file = lower(FIXTURE);
    let routed = route_declaration(&file, decl(&file, "Origin"));
    assert_eq!(routed, Routed::Values(vec![]));
    assert!(routed.is_empty());
}

#[test]
fn extract_file_keeps_package_and_skips_functions() {
    let source = r#"package app

func helper() {
	const inner = 1
	type local struct{ A int }
}

const Outer = "x"
"#;
    let file = parse_and_extract(source);
    assert_eq!(file.package, "app");
    assert!(file.structs.is_empty());
    let names: Vec<&str> = file.types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Outer"]);
}

#[test]
fn extractor_is_reusable_across_declarations() {
    let file = lower(FIXTURE);
    let mut extractor = Extractor::new(&file, ExtractOptions::default());
    let structs = file
        .decls
        .iter()
        .filter(|d| matches!(extractor.route(d), Routed::Struct(_)))
        .count();
    assert_eq!(structs, 6);
}
