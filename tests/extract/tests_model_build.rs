//! End-to-end model assembly.

use classmap::extract::{InterfaceExtendsTag, MissingSymbolPolicy};
use classmap::table::{DeclKind, TableBuilder};
use classmap::{
    DeclarationKind, ExtractError, ExtractOptions, HeritageEdge, HeritageKind, ModelBuilder,
    build_model,
};

use crate::helpers::model_assertions::*;
use crate::helpers::table_fixtures::{ZOO, shapes_table};

#[test]
fn test_shape_circle_end_to_end() {
    let model = build_model(&shapes_table()).unwrap();

    get_declaration(&model, "Shape", DeclarationKind::Interface);
    let circle = get_declaration(&model, "Circle", DeclarationKind::Class);
    assert_property(circle, "radius", Some("number"));
    assert_method(circle, "area", Some("number"));
    assert_edge(&model, "Circle", "Shape", HeritageKind::Implements);
    assert_eq!(model.edges.len(), 1);
    assert!(model.dangling_edges().is_empty());
}

#[test]
fn test_zoo_declarations_in_file_order() {
    let (table, _) = &*ZOO;
    let model = build_model(table).unwrap();

    let classes: Vec<_> = model.classes.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(classes, ["Dog", "Cat", "Keeper", "Parrot"]);
    let interfaces: Vec<_> = model.interfaces.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(interfaces, ["Named", "Animal<T>"]);

    assert_no_declaration(&model, "Intern");
    assert_no_declaration(&model, "Temp");
    assert_no_declaration(&model, "Zoo");
    assert_no_declaration(&model, "hire");
}

#[test]
fn test_zoo_declarations_record_their_file() {
    let (table, ids) = &*ZOO;
    let model = build_model(table).unwrap();

    assert_eq!(model.find("Dog").map(|d| d.file), Some(ids.animals));
    assert_eq!(model.find("Keeper").map(|d| d.file), Some(ids.zoo));
    assert_eq!(model.find("Parrot").map(|d| d.file), Some(ids.zoo));
}

#[test]
fn test_zoo_edges() {
    let (table, _) = &*ZOO;
    let model = build_model(table).unwrap();

    assert_eq!(
        model.edges,
        vec![
            HeritageEdge::new("Animal<T>", "Named", HeritageKind::Implements),
            HeritageEdge::new("Dog", "Animal<T>", HeritageKind::Implements),
            HeritageEdge::new("Cat", "Animal<T>", HeritageKind::Implements),
            HeritageEdge::new("Parrot", "Animal<T>", HeritageKind::Implements),
            HeritageEdge::new("Dog", "Base<Dog>", HeritageKind::Extends),
            HeritageEdge::new("Parrot", "Bird", HeritageKind::Extends),
        ]
    );
    assert_no_edges_for(&model, "Robot");
}

#[test]
fn test_external_bases_dangle() {
    let (table, _) = &*ZOO;
    let model = build_model(table).unwrap();

    let targets: Vec<_> = model
        .dangling_edges()
        .into_iter()
        .map(|e| e.target.as_str())
        .collect();
    assert_eq!(targets, ["Base<Dog>", "Bird"]);
}

#[test]
fn test_build_is_idempotent() {
    let (table, _) = &*ZOO;
    let builder = ModelBuilder::new(table);
    assert_eq!(builder.build().unwrap(), builder.build().unwrap());
}

#[test]
fn test_parallel_build_matches_sequential() {
    let (table, _) = &*ZOO;
    let builder = ModelBuilder::new(table);
    assert_eq!(builder.build_parallel().unwrap(), builder.build().unwrap());
}

#[test]
fn test_interface_extends_option() {
    let (table, _) = &*ZOO;
    let options =
        ExtractOptions::default().with_interface_extends(InterfaceExtendsTag::InterfaceExtends);
    let model = ModelBuilder::new(table).with_options(options).build().unwrap();

    assert_edge(&model, "Animal<T>", "Named", HeritageKind::InterfaceExtends);
    assert_eq!(
        count_edges(&model, "Animal<T>", "Named", HeritageKind::Implements),
        0
    );
}

#[test]
fn test_duplicate_edges_kept_unless_deduped() {
    let mut builder = TableBuilder::new();
    let file = builder.add_file("dup.ts");
    let iface = builder.interface(file, "Listener").id();
    builder.class(file, "Button").implements(iface);
    // The front end reports the same implementor a second time.
    builder.external_implementation(iface, file, "Button");
    let table = builder.finish();

    let model = build_model(&table).unwrap();
    assert_eq!(
        count_edges(&model, "Button", "Listener", HeritageKind::Implements),
        2
    );

    let options = ExtractOptions::default().with_dedupe_edges(true);
    let builder = ModelBuilder::new(&table).with_options(options);
    assert!(builder.options().dedupe_edges);
    let model = builder.build().unwrap();
    assert_edge(&model, "Button", "Listener", HeritageKind::Implements);
}

#[test]
fn test_missing_symbol_aborts_by_default() {
    let mut builder = TableBuilder::new();
    let file = builder.add_file("broken.ts");
    builder.class(file, "Fine");
    let ns = builder.namespace(file, "Api").id();
    let nameless = builder
        .nested(ns, DeclKind::Interface, "Lost")
        .exported()
        .without_symbol()
        .id();
    let table = builder.finish();

    let err = build_model(&table).unwrap_err();
    assert_eq!(err, ExtractError::missing_symbol(nameless, Some(file)));
}

#[test]
fn test_skip_policy_records_and_continues() {
    let mut builder = TableBuilder::new();
    let file = builder.add_file("broken.ts");
    let ghost = builder.class(file, "Ghost").without_symbol().id();
    builder.class(file, "Child").extends(ghost);
    builder.class(file, "Fine");
    let table = builder.finish();

    let options = ExtractOptions::default().with_missing_symbol_policy(MissingSymbolPolicy::Skip);
    let model = ModelBuilder::new(&table).with_options(options).build().unwrap();

    let names: Vec<_> = model.classes.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Fine"]);
    assert!(model.edges.is_empty());
    assert_eq!(model.skipped.len(), 2);
    assert!(model.skipped.iter().all(|s| s.file == file));
    assert!(model.skipped[0].reason.contains("has no defining symbol"));
}

#[test]
fn test_empty_table_gives_empty_model() {
    let table = TableBuilder::new().finish();
    let model = build_model(&table).unwrap();
    assert!(model.is_empty());
    assert!(model.skipped.is_empty());
}
