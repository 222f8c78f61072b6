use super::*;
pub(super) use crate::ast::{Decl, GoFile};
pub(super) use crate::lower::lower_source;
pub(super) use crate::types::{
    InternalType, OmissionReason, ScannedFile, ScannedStruct, ScannedStructField, ScannedType,
    ScannedValue,
};

mod router;
mod structs;
mod values;

const FIXTURE: &str = include_str!("../../../tests/fixtures/models.go");

fn lower(source: &str) -> GoFile {
    lower_source(source).expect("lowering should succeed")
}

fn parse_and_extract(source: &str) -> ScannedFile {
    extract_file(&lower(source), ExtractOptions::default())
}

fn parse_with_diagnostics(source: &str) -> ScannedFile {
    extract_file(&lower(source), ExtractOptions { diagnostics: true })
}

fn find_struct<'a>(file: &'a ScannedFile, name: &str) -> &'a ScannedStruct {
    file.find_struct(name)
        .unwrap_or_else(|| panic!("should find struct named '{name}'"))
}

fn find_field<'a>(item: &'a ScannedStruct, name: &str) -> &'a ScannedStructField {
    item.fields
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("should find field '{name}' in {}", item.name))
}

fn find_type<'a>(file: &'a ScannedFile, name: &str) -> &'a ScannedType {
    file.types
        .iter()
        .find(|t| t.name == name)
        .unwrap_or_else(|| panic!("should find type entry named '{name}'"))
}

fn field_names(item: &ScannedStruct) -> Vec<&str> {
    item.fields.iter().map(|f| f.name.as_str()).collect()
}

fn literal(text: &str) -> ScannedValue {
    ScannedValue::Literal(text.to_string())
}
