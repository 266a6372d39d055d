//! Canonical declaration names.

use crate::base::DeclId;
use crate::table::{DeclKind, DeclarationTable};

use super::error::{ExtractError, Result};

/// Name of a class, interface or type alias, with generic parameters.
///
/// `class Box<T, U>` is named `"Box<T,U>"`; without type parameters the
/// plain symbol name is returned. A heritage target written as a
/// type-argument expression (`Base<string>`) is named by its source text
/// verbatim, since it may reference an instantiation rather than a
/// declaration.
///
/// Fails with [`ExtractError::MissingSymbol`] if the declaration has no
/// named defining symbol.
pub fn declaration_name<T>(table: &T, decl: DeclId) -> Result<String>
where
    T: DeclarationTable + ?Sized,
{
    if table.decl_kind(decl) == DeclKind::TypeArgumentExpression {
        return table
            .decl_text(decl)
            .map(|text| text.to_string())
            .ok_or_else(|| ExtractError::missing_source_text(decl, table.decl_file(decl)));
    }

    let name = table
        .decl_symbol(decl)
        .and_then(|symbol| table.symbol_name(symbol))
        .ok_or_else(|| ExtractError::missing_symbol(decl, table.decl_file(decl)))?;

    let generics = table.type_parameters(decl);
    if generics.is_empty() {
        return Ok(name.to_string());
    }

    let generics: Vec<&str> = generics.iter().map(|g| g.as_str()).collect();
    Ok(format!("{name}<{}>", generics.join(",")))
}

/// Simple symbol name without generic parameters.
///
/// Used to key the class index, which is searched by the identifier text
/// the table reports for implementors.
pub(crate) fn simple_name<T>(table: &T, decl: DeclId) -> Option<String>
where
    T: DeclarationTable + ?Sized,
{
    table
        .decl_symbol(decl)
        .and_then(|symbol| table.symbol_name(symbol))
        .map(|name| name.to_string())
}
