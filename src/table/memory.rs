use smol_str::SmolStr;

use crate::base::{DeclId, FileId, MemberId, SymbolId, TypeId};

use super::{DeclKind, DeclScope, DeclarationTable, Implementation};

#[derive(Debug, Clone)]
struct FileEntry {
    path: SmolStr,
    decls: Vec<DeclId>,
}

#[derive(Debug, Clone)]
struct DeclEntry {
    kind: DeclKind,
    scope: DeclScope,
    file: FileId,
    exported: bool,
    /// Identifier as written, kept even when the symbol is missing
    ident: Option<SmolStr>,
    symbol: Option<SymbolId>,
    type_params: Vec<SmolStr>,
    text: Option<SmolStr>,
    children: Vec<DeclId>,
    properties: Vec<MemberId>,
    methods: Vec<MemberId>,
    base_class: Option<DeclId>,
    bases: Vec<DeclId>,
    implements: Vec<DeclId>,
}

#[derive(Debug, Clone)]
struct MemberEntry {
    symbol: Option<SymbolId>,
    return_type: Option<TypeId>,
    parameters: Vec<SymbolId>,
}

#[derive(Debug, Clone)]
struct SymbolEntry {
    name: Option<SmolStr>,
    ty: Option<TypeId>,
}

#[derive(Debug, Clone)]
struct TypeEntry {
    symbol: Option<SymbolId>,
    text: Option<SmolStr>,
    array: bool,
    args: Vec<TypeId>,
}

/// Owned, fully resolved declaration table.
///
/// All storage is arena-based: ids are indices into the vectors below and
/// are only meaningful for the table that issued them.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    files: Vec<FileEntry>,
    decls: Vec<DeclEntry>,
    members: Vec<MemberEntry>,
    symbols: Vec<SymbolEntry>,
    types: Vec<TypeEntry>,
    /// Implementations reported for classes that have no declaration here
    external_implementations: Vec<(DeclId, Implementation)>,
}

impl MemoryTable {
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    fn decl(&self, id: DeclId) -> Option<&DeclEntry> {
        self.decls.get(id.index())
    }

    /// Classes implementing `interface`, in file and declaration order,
    /// descending into namespace bodies.
    fn collect_implementors(
        &self,
        id: DeclId,
        interface: DeclId,
        found: &mut Vec<Implementation>,
    ) {
        let Some(entry) = self.decl(id) else {
            return;
        };
        let implements = entry.kind == DeclKind::Class && entry.implements.contains(&interface);
        if let Some(text) = entry.ident.clone().filter(|_| implements) {
            found.push(Implementation::new(entry.file, text));
        }
        for &child in &entry.children {
            self.collect_implementors(child, interface, found);
        }
    }
}

impl DeclarationTable for MemoryTable {
    fn files(&self) -> Vec<FileId> {
        (0..self.files.len()).map(FileId::new).collect()
    }

    fn file_path(&self, file: FileId) -> Option<SmolStr> {
        self.files.get(file.index()).map(|f| f.path.clone())
    }

    fn file_declarations(&self, file: FileId) -> Vec<DeclId> {
        self.files
            .get(file.index())
            .map(|f| f.decls.clone())
            .unwrap_or_default()
    }

    fn decl_kind(&self, decl: DeclId) -> DeclKind {
        self.decl(decl).map_or(DeclKind::Other, |d| d.kind)
    }

    fn decl_scope(&self, decl: DeclId) -> DeclScope {
        self.decl(decl).map_or(DeclScope::Block, |d| d.scope)
    }

    fn decl_file(&self, decl: DeclId) -> Option<FileId> {
        self.decl(decl).map(|d| d.file)
    }

    fn is_exported(&self, decl: DeclId) -> bool {
        self.decl(decl).is_some_and(|d| d.exported)
    }

    fn namespace_members(&self, decl: DeclId) -> Vec<DeclId> {
        self.decl(decl)
            .map(|d| d.children.clone())
            .unwrap_or_default()
    }

    fn decl_symbol(&self, decl: DeclId) -> Option<SymbolId> {
        self.decl(decl)?.symbol
    }

    fn type_parameters(&self, decl: DeclId) -> Vec<SmolStr> {
        self.decl(decl)
            .map(|d| d.type_params.clone())
            .unwrap_or_default()
    }

    fn decl_text(&self, decl: DeclId) -> Option<SmolStr> {
        self.decl(decl)?.text.clone()
    }

    fn properties(&self, decl: DeclId) -> Vec<MemberId> {
        self.decl(decl)
            .map(|d| d.properties.clone())
            .unwrap_or_default()
    }

    fn methods(&self, decl: DeclId) -> Vec<MemberId> {
        self.decl(decl)
            .map(|d| d.methods.clone())
            .unwrap_or_default()
    }

    fn base_class(&self, decl: DeclId) -> Option<DeclId> {
        self.decl(decl)?.base_class
    }

    fn base_declarations(&self, decl: DeclId) -> Vec<DeclId> {
        self.decl(decl)
            .map(|d| d.bases.clone())
            .unwrap_or_default()
    }

    fn implementations(&self, decl: DeclId) -> Vec<Implementation> {
        let mut found = Vec::new();
        for file in &self.files {
            for &child in &file.decls {
                self.collect_implementors(child, decl, &mut found);
            }
        }

        found.extend(
            self.external_implementations
                .iter()
                .filter(|(iface, _)| *iface == decl)
                .map(|(_, implementation)| implementation.clone()),
        );
        found
    }

    fn member_symbol(&self, member: MemberId) -> Option<SymbolId> {
        self.members.get(member.index())?.symbol
    }

    fn return_type(&self, member: MemberId) -> Option<TypeId> {
        self.members.get(member.index())?.return_type
    }

    fn parameters(&self, member: MemberId) -> Vec<SymbolId> {
        self.members
            .get(member.index())
            .map(|m| m.parameters.clone())
            .unwrap_or_default()
    }

    fn symbol_name(&self, symbol: SymbolId) -> Option<SmolStr> {
        self.symbols.get(symbol.index())?.name.clone()
    }

    fn symbol_type(&self, symbol: SymbolId) -> Option<TypeId> {
        self.symbols.get(symbol.index())?.ty
    }

    fn type_symbol(&self, ty: TypeId) -> Option<SymbolId> {
        self.types.get(ty.index())?.symbol
    }

    fn type_text(&self, ty: TypeId) -> Option<SmolStr> {
        self.types.get(ty.index())?.text.clone()
    }

    fn is_array(&self, ty: TypeId) -> bool {
        self.types.get(ty.index()).is_some_and(|t| t.array)
    }

    fn type_arguments(&self, ty: TypeId) -> Vec<TypeId> {
        self.types
            .get(ty.index())
            .map(|t| t.args.clone())
            .unwrap_or_default()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Populates a [`MemoryTable`].
///
/// ```
/// use classmap::table::TableBuilder;
///
/// let mut builder = TableBuilder::new();
/// let file = builder.add_file("shapes.ts");
/// let number = builder.text_type("number");
/// let shape = builder.interface(file, "Shape").exported().id();
/// builder
///     .class(file, "Circle")
///     .implements(shape)
///     .property("radius", Some(number))
///     .method("area", Some(number));
/// let table = builder.finish();
/// assert_eq!(table.file_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TableBuilder {
    table: MemoryTable,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: impl Into<SmolStr>) -> FileId {
        let id = FileId::new(self.table.files.len());
        self.table.files.push(FileEntry {
            path: path.into(),
            decls: Vec::new(),
        });
        id
    }

    // ============================================================
    // Declarations
    // ============================================================

    pub fn class(&mut self, file: FileId, name: &str) -> DeclBuilder<'_> {
        self.top_level(file, DeclKind::Class, name)
    }

    pub fn interface(&mut self, file: FileId, name: &str) -> DeclBuilder<'_> {
        self.top_level(file, DeclKind::Interface, name)
    }

    pub fn type_alias(&mut self, file: FileId, name: &str) -> DeclBuilder<'_> {
        self.top_level(file, DeclKind::TypeAlias, name)
    }

    pub fn namespace(&mut self, file: FileId, name: &str) -> DeclBuilder<'_> {
        self.top_level(file, DeclKind::Namespace, name)
    }

    /// A non-class, non-interface statement (function, variable, enum).
    pub fn other(&mut self, file: FileId, name: &str) -> DeclBuilder<'_> {
        self.top_level(file, DeclKind::Other, name)
    }

    /// A class declared inside a function body.
    pub fn local_class(&mut self, file: FileId, name: &str) -> DeclBuilder<'_> {
        let id = self.push_decl(DeclKind::Class, DeclScope::Block, file, Some(name));
        self.attach_to_file(file, id);
        DeclBuilder { builder: self, id }
    }

    /// A declaration inside a namespace body.
    pub fn nested(&mut self, namespace: DeclId, kind: DeclKind, name: &str) -> DeclBuilder<'_> {
        let file = self
            .table
            .decl(namespace)
            .map_or(FileId::new(0), |d| d.file);
        let id = self.push_decl(kind, DeclScope::Namespace, file, Some(name));
        if let Some(parent) = self.table.decls.get_mut(namespace.index()) {
            parent.children.push(id);
        } else {
            tracing::warn!("declaration {id} nested in unknown namespace {namespace}");
        }
        DeclBuilder { builder: self, id }
    }

    /// A heritage target written as an expression, e.g. `Base<string>`.
    ///
    /// The node is not listed among the file's declarations.
    pub fn type_argument_expression(&mut self, file: FileId, text: &str) -> DeclId {
        let id = self.push_decl(DeclKind::TypeArgumentExpression, DeclScope::File, file, None);
        self.table.decls[id.index()].text = Some(SmolStr::new(text));
        id
    }

    /// Report an implementor that has no class declaration in this table.
    pub fn external_implementation(&mut self, interface: DeclId, file: FileId, text: &str) {
        self.table
            .external_implementations
            .push((interface, Implementation::new(file, text)));
    }

    // ============================================================
    // Symbols and types
    // ============================================================

    pub fn add_symbol(&mut self, name: Option<&str>, ty: Option<TypeId>) -> SymbolId {
        let id = SymbolId::new(self.table.symbols.len());
        self.table.symbols.push(SymbolEntry {
            name: name.map(SmolStr::new),
            ty,
        });
        id
    }

    /// A type known only by its text, e.g. the primitive `number`.
    pub fn text_type(&mut self, text: &str) -> TypeId {
        self.push_type(None, Some(SmolStr::new(text)), false, Vec::new())
    }

    /// A type with a named symbol, e.g. a class or interface reference.
    pub fn named_type(&mut self, name: &str) -> TypeId {
        let symbol = self.add_symbol(Some(name), None);
        self.push_type(Some(symbol), Some(SmolStr::new(name)), false, Vec::new())
    }

    /// A generic instantiation such as `Map<string, number>`.
    pub fn generic_type(&mut self, name: &str, args: &[TypeId]) -> TypeId {
        let symbol = self.add_symbol(Some(name), None);
        let rendered: Vec<String> = args
            .iter()
            .map(|arg| self.rendered_text(*arg))
            .collect();
        let text = format!("{name}<{}>", rendered.join(", "));
        self.push_type(Some(symbol), Some(SmolStr::new(text)), false, args.to_vec())
    }

    /// An array whose element type is `element`.
    pub fn array_of(&mut self, element: TypeId) -> TypeId {
        let text = format!("{}[]", self.rendered_text(element));
        self.push_type(None, Some(SmolStr::new(text)), true, vec![element])
    }

    /// An array type whose element type the front end did not resolve.
    pub fn untyped_array(&mut self) -> TypeId {
        self.push_type(None, None, true, Vec::new())
    }

    /// A type with neither symbol nor text.
    pub fn unresolved_type(&mut self) -> TypeId {
        self.push_type(None, None, false, Vec::new())
    }

    pub fn finish(self) -> MemoryTable {
        self.table
    }

    // ============================================================
    // Internals
    // ============================================================

    fn top_level(&mut self, file: FileId, kind: DeclKind, name: &str) -> DeclBuilder<'_> {
        let id = self.push_decl(kind, DeclScope::File, file, Some(name));
        self.attach_to_file(file, id);
        DeclBuilder { builder: self, id }
    }

    fn attach_to_file(&mut self, file: FileId, id: DeclId) {
        if let Some(entry) = self.table.files.get_mut(file.index()) {
            entry.decls.push(id);
        } else {
            tracing::warn!("declaration {id} attached to unknown file {file}");
        }
    }

    fn push_decl(
        &mut self,
        kind: DeclKind,
        scope: DeclScope,
        file: FileId,
        name: Option<&str>,
    ) -> DeclId {
        let symbol = name.map(|n| self.add_symbol(Some(n), None));
        let id = DeclId::new(self.table.decls.len());
        self.table.decls.push(DeclEntry {
            kind,
            scope,
            file,
            exported: false,
            ident: name.map(SmolStr::new),
            symbol,
            type_params: Vec::new(),
            text: None,
            children: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            base_class: None,
            bases: Vec::new(),
            implements: Vec::new(),
        });
        id
    }

    fn push_type(
        &mut self,
        symbol: Option<SymbolId>,
        text: Option<SmolStr>,
        array: bool,
        args: Vec<TypeId>,
    ) -> TypeId {
        let id = TypeId::new(self.table.types.len());
        self.table.types.push(TypeEntry {
            symbol,
            text,
            array,
            args,
        });
        id
    }

    fn push_member(
        &mut self,
        symbol: Option<SymbolId>,
        return_type: Option<TypeId>,
        parameters: Vec<SymbolId>,
    ) -> MemberId {
        let id = MemberId::new(self.table.members.len());
        self.table.members.push(MemberEntry {
            symbol,
            return_type,
            parameters,
        });
        id
    }

    fn rendered_text(&self, ty: TypeId) -> String {
        self.table
            .type_text(ty)
            .map(|t| t.to_string())
            .unwrap_or_else(|| "any".to_string())
    }
}

/// Chained setters for one declaration created by [`TableBuilder`].
pub struct DeclBuilder<'a> {
    builder: &'a mut TableBuilder,
    id: DeclId,
}

impl DeclBuilder<'_> {
    pub fn exported(mut self) -> Self {
        self.entry().exported = true;
        self
    }

    pub fn type_param(mut self, name: &str) -> Self {
        self.entry().type_params.push(SmolStr::new(name));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.entry().text = Some(SmolStr::new(text));
        self
    }

    /// Drop the defining symbol, keeping the identifier text.
    pub fn without_symbol(mut self) -> Self {
        self.entry().symbol = None;
        self
    }

    /// For a class, set its base class (replacing any previous one).
    /// For anything else, add a base declaration.
    pub fn extends(mut self, base: DeclId) -> Self {
        let entry = self.entry();
        if entry.kind == DeclKind::Class {
            entry.base_class = Some(base);
        } else {
            entry.bases.push(base);
        }
        self
    }

    pub fn implements(mut self, interface: DeclId) -> Self {
        self.entry().implements.push(interface);
        self
    }

    pub fn property(mut self, name: &str, ty: Option<TypeId>) -> Self {
        let symbol = self.builder.add_symbol(Some(name), ty);
        let member = self.builder.push_member(Some(symbol), None, Vec::new());
        self.entry().properties.push(member);
        self
    }

    pub fn method(self, name: &str, return_type: Option<TypeId>) -> Self {
        self.method_with_params(name, return_type, &[])
    }

    pub fn method_with_params(
        mut self,
        name: &str,
        return_type: Option<TypeId>,
        params: &[(&str, Option<TypeId>)],
    ) -> Self {
        let symbol = self.builder.add_symbol(Some(name), None);
        let parameters = params
            .iter()
            .map(|&(param, ty)| self.builder.add_symbol(Some(param), ty))
            .collect();
        let member = self
            .builder
            .push_member(Some(symbol), return_type, parameters);
        self.entry().methods.push(member);
        self
    }

    /// A property slot whose symbol the front end could not resolve.
    pub fn opaque_property(mut self) -> Self {
        let member = self.builder.push_member(None, None, Vec::new());
        self.entry().properties.push(member);
        self
    }

    /// A method slot whose symbol the front end could not resolve.
    pub fn opaque_method(mut self) -> Self {
        let member = self.builder.push_member(None, None, Vec::new());
        self.entry().methods.push(member);
        self
    }

    pub fn id(self) -> DeclId {
        self.id
    }

    fn entry(&mut self) -> &mut DeclEntry {
        &mut self.builder.table.decls[self.id.index()]
    }
}
