//! Type name resolution against table-built types.

use classmap::extract::resolve_type_name;
use classmap::table::TableBuilder;
use classmap::{MemoryTable, TypeId};
use rstest::rstest;

fn primitive(b: &mut TableBuilder) -> TypeId {
    b.text_type("number")
}

fn named(b: &mut TableBuilder) -> TypeId {
    b.named_type("Shape")
}

fn generic(b: &mut TableBuilder) -> TypeId {
    let string = b.text_type("string");
    let number = b.text_type("number");
    b.generic_type("Map", &[string, number])
}

fn array_of_primitive(b: &mut TableBuilder) -> TypeId {
    let string = b.text_type("string");
    b.array_of(string)
}

fn array_of_named(b: &mut TableBuilder) -> TypeId {
    let shape = b.named_type("Shape");
    b.array_of(shape)
}

fn array_of_generic(b: &mut TableBuilder) -> TypeId {
    let t = b.text_type("T");
    let list = b.generic_type("List", &[t]);
    b.array_of(list)
}

fn array_of_array(b: &mut TableBuilder) -> TypeId {
    let number = b.text_type("number");
    let inner = b.array_of(number);
    b.array_of(inner)
}

fn untyped_array(b: &mut TableBuilder) -> TypeId {
    b.untyped_array()
}

fn array_of_unresolved(b: &mut TableBuilder) -> TypeId {
    let unknown = b.unresolved_type();
    b.array_of(unknown)
}

fn unresolved(b: &mut TableBuilder) -> TypeId {
    b.unresolved_type()
}

#[rstest]
#[case::primitive(primitive, Some("number"))]
#[case::named(named, Some("Shape"))]
#[case::generic_uses_symbol(generic, Some("Map"))]
#[case::array_of_primitive(array_of_primitive, Some("string[]"))]
#[case::array_of_named(array_of_named, Some("Shape[]"))]
#[case::array_of_generic(array_of_generic, Some("List[]"))]
#[case::array_of_array(array_of_array, Some("number[][]"))]
#[case::untyped_array(untyped_array, Some("[]"))]
#[case::array_of_unresolved(array_of_unresolved, Some("[]"))]
#[case::unresolved(unresolved, None)]
fn test_resolve_type_name(
    #[case] build: fn(&mut TableBuilder) -> TypeId,
    #[case] expected: Option<&str>,
) {
    let mut builder = TableBuilder::new();
    let ty = build(&mut builder);
    let table = builder.finish();
    assert_eq!(resolve_type_name(&table, Some(ty)).as_deref(), expected);
}

#[test]
fn test_absent_type_is_none() {
    let table = MemoryTable::default();
    assert_eq!(resolve_type_name(&table, None), None);
}

#[test]
fn test_resolves_through_trait_object() {
    let mut builder = TableBuilder::new();
    let ty = array_of_named(&mut builder);
    let table = builder.finish();
    let dynamic: &dyn classmap::DeclarationTable = &table;
    assert_eq!(resolve_type_name(dynamic, Some(ty)).as_deref(), Some("Shape[]"));
}
