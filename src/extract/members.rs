//! Own properties and methods of a class or interface.

use tracing::trace;

use crate::base::{DeclId, MemberId, SymbolId};
use crate::model::{MethodDetail, ParameterDetail, PropertyDetail};
use crate::table::DeclarationTable;

use super::options::ExtractOptions;
use super::type_name::resolve_type_name;

/// Properties and methods extracted from one declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Members {
    pub properties: Vec<PropertyDetail>,
    pub methods: Vec<MethodDetail>,
}

/// Extract the declaration's own (not inherited) members, in declaration order.
///
/// Slots whose symbol does not resolve to a name are dropped.
pub fn extract_members<T>(table: &T, decl: DeclId, options: &ExtractOptions) -> Members
where
    T: DeclarationTable + ?Sized,
{
    let properties = table
        .properties(decl)
        .into_iter()
        .filter_map(|member| extract_property(table, decl, member))
        .collect();

    let methods = table
        .methods(decl)
        .into_iter()
        .filter_map(|member| extract_method(table, decl, member, options))
        .collect();

    Members {
        properties,
        methods,
    }
}

fn extract_property<T>(table: &T, decl: DeclId, member: MemberId) -> Option<PropertyDetail>
where
    T: DeclarationTable + ?Sized,
{
    let Some((symbol, name)) = member_name(table, member) else {
        trace!("dropping unresolved property {member} of {decl}");
        return None;
    };
    let ty = resolve_type_name(table, table.symbol_type(symbol));
    Some(PropertyDetail::new(name, ty))
}

fn extract_method<T>(
    table: &T,
    decl: DeclId,
    member: MemberId,
    options: &ExtractOptions,
) -> Option<MethodDetail>
where
    T: DeclarationTable + ?Sized,
{
    let Some((_, name)) = member_name(table, member) else {
        trace!("dropping unresolved method {member} of {decl}");
        return None;
    };
    let return_type = resolve_type_name(table, table.return_type(member));

    let parameters = if options.include_parameters {
        table
            .parameters(member)
            .into_iter()
            .filter_map(|param| {
                let name = table.symbol_name(param)?;
                let ty = resolve_type_name(table, table.symbol_type(param));
                Some(ParameterDetail::new(name.as_str(), ty))
            })
            .collect()
    } else {
        Vec::new()
    };

    Some(MethodDetail::new(name, return_type).with_parameters(parameters))
}

fn member_name<T>(table: &T, member: MemberId) -> Option<(SymbolId, String)>
where
    T: DeclarationTable + ?Sized,
{
    let symbol = table.member_symbol(member)?;
    let name = table.symbol_name(symbol)?;
    Some((symbol, name.to_string()))
}
