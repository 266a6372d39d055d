//! Type reference → display string.

use crate::base::TypeId;
use crate::table::DeclarationTable;

/// Canonical display name of a resolved type reference.
///
/// - absent type → `None`
/// - array with element `N` → `"N[]"`, array without a resolvable element → `"[]"`
/// - anything else → the type's symbol name, falling back to its text
///
/// Never fails: missing information degrades to a fallback or `None`.
pub fn resolve_type_name<T>(table: &T, ty: Option<TypeId>) -> Option<String>
where
    T: DeclarationTable + ?Sized,
{
    let ty = ty?;

    if table.is_array(ty) {
        let element = table
            .type_arguments(ty)
            .first()
            .and_then(|arg| symbol_or_text(table, *arg));
        return Some(match element {
            Some(element) => format!("{element}[]"),
            None => "[]".to_string(),
        });
    }

    symbol_or_text(table, ty)
}

fn symbol_or_text<T>(table: &T, ty: TypeId) -> Option<String>
where
    T: DeclarationTable + ?Sized,
{
    table
        .type_symbol(ty)
        .and_then(|symbol| table.symbol_name(symbol))
        .filter(|name| !name.is_empty())
        .or_else(|| table.type_text(ty).filter(|text| !text.is_empty()))
        .map(|name| name.to_string())
}
