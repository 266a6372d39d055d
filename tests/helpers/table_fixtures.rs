//! Common declaration table fixtures for tests.

use classmap::table::DeclKind;
use classmap::{DeclId, FileId, MemoryTable, TableBuilder};
use once_cell::sync::Lazy;

/// `interface Shape {}` and `class Circle implements Shape { radius: number; area(): number }`
pub fn shapes_table() -> MemoryTable {
    let mut builder = TableBuilder::new();
    let file = builder.add_file("shapes.ts");
    let number = builder.text_type("number");
    let shape = builder.interface(file, "Shape").exported().id();
    builder
        .class(file, "Circle")
        .exported()
        .implements(shape)
        .property("radius", Some(number))
        .method("area", Some(number));
    builder.finish()
}

/// Ids of the interesting declarations in [`ZOO`].
pub struct ZooIds {
    pub animals: FileId,
    pub zoo: FileId,
    pub named: DeclId,
    pub animal: DeclId,
    pub dog: DeclId,
    pub cat: DeclId,
    pub keeper: DeclId,
    pub parrot: DeclId,
}

/// Two files with generics, arrays, a namespace, an external base class and
/// an implementor that has no declaration in the table.
///
/// ```text
/// // animals.ts
/// export interface Named { name: string }
/// export interface Animal<T> extends Named { food: T[]; speak(): string }
/// export class Dog extends Base<Dog> implements Animal { bark(times: number): void }
/// class Cat implements Animal { lives: number; toys: Toy[] }
///
/// // zoo.ts
/// namespace Zoo {
///     export class Keeper {
///         animals: Map<string, Animal>;
///         feed(animal: Animal, amount: number): void
///     }
///     class Intern {}
/// }
/// export class Parrot extends Bird implements Animal {}
/// function hire() { class Temp {} }
/// ```
pub fn zoo_table() -> (MemoryTable, ZooIds) {
    let mut builder = TableBuilder::new();
    let animals = builder.add_file("animals.ts");
    let zoo = builder.add_file("zoo.ts");

    let string = builder.text_type("string");
    let number = builder.text_type("number");
    let void = builder.text_type("void");
    let t = builder.text_type("T");
    let food = builder.array_of(t);
    let toy = builder.named_type("Toy");
    let toys = builder.array_of(toy);
    let animal_ref = builder.named_type("Animal");
    let map = builder.generic_type("Map", &[string, animal_ref]);

    let named = builder
        .interface(animals, "Named")
        .exported()
        .property("name", Some(string))
        .id();
    let animal = builder
        .interface(animals, "Animal")
        .exported()
        .type_param("T")
        .extends(named)
        .property("food", Some(food))
        .method("speak", Some(string))
        .id();
    let base_dog = builder.type_argument_expression(animals, "Base<Dog>");
    let dog = builder
        .class(animals, "Dog")
        .exported()
        .extends(base_dog)
        .implements(animal)
        .method_with_params("bark", Some(void), &[("times", Some(number))])
        .id();
    let cat = builder
        .class(animals, "Cat")
        .implements(animal)
        .property("lives", Some(number))
        .property("toys", Some(toys))
        .id();

    let ns = builder.namespace(zoo, "Zoo").id();
    let keeper = builder
        .nested(ns, DeclKind::Class, "Keeper")
        .exported()
        .property("animals", Some(map))
        .method_with_params(
            "feed",
            Some(void),
            &[("animal", Some(animal_ref)), ("amount", Some(number))],
        )
        .id();
    builder.nested(ns, DeclKind::Class, "Intern");
    let bird = builder.type_argument_expression(zoo, "Bird");
    let parrot = builder
        .class(zoo, "Parrot")
        .exported()
        .extends(bird)
        .implements(animal)
        .id();
    builder.other(zoo, "hire");
    builder.local_class(zoo, "Temp");
    builder.external_implementation(animal, zoo, "Robot");

    let ids = ZooIds {
        animals,
        zoo,
        named,
        animal,
        dog,
        cat,
        keeper,
        parrot,
    };
    (builder.finish(), ids)
}

/// Shared zoo table for read-only tests.
pub static ZOO: Lazy<(MemoryTable, ZooIds)> = Lazy::new(zoo_table);
