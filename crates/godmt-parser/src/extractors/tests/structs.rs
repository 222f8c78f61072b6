use pretty_assertions::assert_eq;

use super::*;

#[test]
fn point_keeps_every_field_in_order() {
    let file = parse_and_extract("package geo\n\ntype Point struct {\n\tX int\n\tY int\n}\n");
    let point = find_struct(&file, "Point");

    assert_eq!(point.internal_type, InternalType::Struct);
    assert_eq!(field_names(point), vec!["X", "Y"]);
    for field in &point.fields {
        assert_eq!(field.kind, "int");
        assert_eq!(field.internal_type, InternalType::Var);
        assert!(!field.is_pointer);
    }
}

#[test]
fn struct_doc_is_attached() {
    let file = parse_and_extract(FIXTURE);
    let point = find_struct(&file, "Point");
    assert!(
        point.doc.as_deref().is_some_and(|d| d.contains("position on the grid")),
        "doc: {:?}",
        point.doc
    );
}

#[test]
fn unsupported_fields_are_dropped_without_reordering() {
    let file = parse_and_extract(FIXTURE);
    let user = find_struct(&file, "User");

    assert_eq!(
        field_names(user),
        vec![
            "ID",
            "Name",
            "Email",
            "Tags",
            "Labels",
            "CreatedAt",
            "Counter",
            "Address"
        ]
    );
}

#[test]
fn nested_anonymous_struct_recurses() {
    let file = parse_and_extract(FIXTURE);
    let address = find_field(find_struct(&file, "User"), "Address");

    assert_eq!(address.kind, "struct");
    assert_eq!(address.internal_type, InternalType::Struct);
    assert_eq!(address.tag, "`json:\"address\"`");

    let sub_fields = address.sub_fields.as_ref().expect("nested fields");
    let names: Vec<&str> = sub_fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Street", "City"]);
    assert_eq!(sub_fields[0].tag, "`json:\"street\"`");
}

#[test]
fn nested_struct_inside_nested_struct() {
    let source = r"package cfg

type Config struct {
	Server struct {
		TLS struct {
			Cert string
		}
		Port int
	}
}
";
    let file = parse_and_extract(source);
    let server = find_field(find_struct(&file, "Config"), "Server");
    let server_fields = server.sub_fields.as_ref().expect("server fields");
    assert_eq!(server_fields.len(), 2);

    let tls = &server_fields[0];
    assert_eq!(tls.kind, "struct");
    let tls_fields = tls.sub_fields.as_ref().expect("tls fields");
    assert_eq!(tls_fields[0].name, "Cert");
}

#[test]
fn multi_name_field_expands_per_name() {
    let file = parse_and_extract("package geo\n\ntype Vec3 struct {\n\tX, Y, Z float64 `json:\"c\"`\n}\n");
    let vec3 = find_struct(&file, "Vec3");

    assert_eq!(field_names(vec3), vec!["X", "Y", "Z"]);
    assert!(vec3.fields.iter().all(|f| f.kind == "float64" && f.tag == "`json:\"c\"`"));
}

#[test]
fn embedded_fields_are_named_after_their_type() {
    let source = r"package app

type Base struct{}

type Logger struct{}

type Server struct {
	Base
	*Logger
	Port int
}
";
    let file = parse_and_extract(source);
    let server = find_struct(&file, "Server");

    assert_eq!(field_names(server), vec!["Base", "Logger", "Port"]);
    assert!(find_field(server, "Logger").is_pointer);
    assert!(!find_field(server, "Base").is_pointer);
}

#[test]
fn empty_struct_has_no_fields() {
    let file = parse_and_extract("package app\n\ntype Marker struct{}\n");
    assert!(find_struct(&file, "Marker").fields.is_empty());
}

#[test]
fn structs_follow_source_order() {
    let file = parse_and_extract(FIXTURE);
    let names: Vec<&str> = file.structs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Point", "User", "Board", "Node", "Wrapper", "Inner"]);
}
