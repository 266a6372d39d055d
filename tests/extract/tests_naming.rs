//! Declaration naming.

use classmap::extract::{ExtractError, declaration_name};
use classmap::table::TableBuilder;
use rstest::rstest;

use crate::helpers::table_fixtures::ZOO;

#[rstest]
#[case::plain(&[], "Box")]
#[case::one_param(&["T"], "Box<T>")]
#[case::two_params_no_space(&["K", "V"], "Box<K,V>")]
fn test_class_name_with_generics(#[case] params: &[&str], #[case] expected: &str) {
    let mut builder = TableBuilder::new();
    let file = builder.add_file("box.ts");
    let mut decl = builder.class(file, "Box");
    for param in params {
        decl = decl.type_param(param);
    }
    let id = decl.id();
    let table = builder.finish();

    assert_eq!(declaration_name(&table, id).unwrap(), expected);
}

#[test]
fn test_interface_and_alias_names() {
    let mut builder = TableBuilder::new();
    let file = builder.add_file("types.ts");
    let iface = builder.interface(file, "Comparable").type_param("T").id();
    let alias = builder.type_alias(file, "Pair").type_param("A").type_param("B").id();
    let table = builder.finish();

    assert_eq!(declaration_name(&table, iface).unwrap(), "Comparable<T>");
    assert_eq!(declaration_name(&table, alias).unwrap(), "Pair<A,B>");
}

#[test]
fn test_zoo_names() {
    let (table, ids) = &*ZOO;
    assert_eq!(declaration_name(table, ids.animal).unwrap(), "Animal<T>");
    assert_eq!(declaration_name(table, ids.named).unwrap(), "Named");
    assert_eq!(declaration_name(table, ids.keeper).unwrap(), "Keeper");
}

#[test]
fn test_type_argument_expression_uses_text_verbatim() {
    let mut builder = TableBuilder::new();
    let file = builder.add_file("repo.ts");
    let expr = builder.type_argument_expression(file, "Repository<User, number>");
    let table = builder.finish();

    assert_eq!(
        declaration_name(&table, expr).unwrap(),
        "Repository<User, number>"
    );
}

#[test]
fn test_missing_symbol_is_an_error() {
    let mut builder = TableBuilder::new();
    let file = builder.add_file("anon.ts");
    let anon = builder.class(file, "Anon").without_symbol().id();
    let table = builder.finish();

    let err = declaration_name(&table, anon).unwrap_err();
    assert_eq!(err, ExtractError::missing_symbol(anon, Some(file)));
    assert_eq!(err.decl(), anon);
    assert_eq!(err.file(), Some(file));
}
