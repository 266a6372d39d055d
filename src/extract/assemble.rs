//! Model assembly across all files of a declaration table.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::base::{DeclId, FileId};
use crate::model::{Declaration, DeclarationKind, HeritageEdge, SkippedDeclaration, StructuralModel};
use crate::table::{DeclKind, DeclScope, DeclarationTable};

use super::error::{ExtractError, Result};
use super::heritage::{ClassIndex, HeritageResolver};
use super::members::extract_members;
use super::naming::declaration_name;
use super::options::{ExtractOptions, MissingSymbolPolicy};

/// Build a model with default options.
pub fn build_model<T>(table: &T) -> Result<StructuralModel>
where
    T: DeclarationTable + ?Sized,
{
    ModelBuilder::new(table).build()
}

/// Orchestrates naming, member extraction and heritage resolution over
/// every included declaration of a table.
///
/// A declaration is included when it is exported or sits directly at file
/// scope. Included namespaces are descended into; block-scoped declarations
/// never are. Declarations and edges are not deduplicated unless
/// [`ExtractOptions::dedupe_edges`] is set, and only edges are then.
pub struct ModelBuilder<'a, T: ?Sized> {
    table: &'a T,
    options: ExtractOptions,
}

impl<'a, T> ModelBuilder<'a, T>
where
    T: DeclarationTable + ?Sized,
{
    pub fn new(table: &'a T) -> Self {
        Self {
            table,
            options: ExtractOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract the model, visiting files in table order.
    pub fn build(&self) -> Result<StructuralModel> {
        let index = ClassIndex::build(self.table);
        let mut model = StructuralModel::new();
        for file in self.table.files() {
            model.extend(self.build_file(file, &index)?);
        }
        Ok(self.finish(model))
    }

    /// Same output as [`build`](Self::build), with files extracted on the
    /// rayon pool.
    ///
    /// The class index is built from the complete table before any file is
    /// visited, and per-file results are merged in table order.
    pub fn build_parallel(&self) -> Result<StructuralModel>
    where
        T: Sync,
    {
        let index = ClassIndex::build(self.table);
        let parts: Vec<Result<StructuralModel>> = self
            .table
            .files()
            .into_par_iter()
            .map(|file| self.build_file(file, &index))
            .collect();

        let mut model = StructuralModel::new();
        for part in parts {
            model.extend(part?);
        }
        Ok(self.finish(model))
    }

    fn finish(&self, mut model: StructuralModel) -> StructuralModel {
        if self.options.dedupe_edges {
            let removed = model.dedup_edges();
            debug!("removed {removed} duplicate heritage edges");
        }
        info!(
            "extracted {} classes, {} interfaces, {} edges ({} skipped)",
            model.classes.len(),
            model.interfaces.len(),
            model.edges.len(),
            model.skipped.len()
        );
        model
    }

    fn build_file(&self, file: FileId, index: &ClassIndex) -> Result<StructuralModel> {
        debug!(
            "extracting {}",
            self.table
                .file_path(file)
                .as_deref()
                .unwrap_or("<unknown file>")
        );
        let resolver = HeritageResolver::new(self.table, index)
            .with_interface_extends(self.options.interface_extends);

        let mut model = StructuralModel::new();
        for decl in self.table.file_declarations(file) {
            self.visit(file, decl, &resolver, &mut model)?;
        }
        Ok(model)
    }

    fn visit(
        &self,
        file: FileId,
        decl: DeclId,
        resolver: &HeritageResolver<'_, T>,
        model: &mut StructuralModel,
    ) -> Result<()> {
        if !self.is_included(decl) {
            return Ok(());
        }
        match self.table.decl_kind(decl) {
            DeclKind::Class => {
                self.add_declaration(file, decl, DeclarationKind::Class, resolver, model)
            }
            DeclKind::Interface => {
                self.add_declaration(file, decl, DeclarationKind::Interface, resolver, model)
            }
            DeclKind::Namespace => {
                for member in self.table.namespace_members(decl) {
                    self.visit(file, member, resolver, model)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn is_included(&self, decl: DeclId) -> bool {
        match self.table.decl_scope(decl) {
            DeclScope::File => true,
            DeclScope::Namespace => self.table.is_exported(decl),
            DeclScope::Block => false,
        }
    }

    fn add_declaration(
        &self,
        file: FileId,
        decl: DeclId,
        kind: DeclarationKind,
        resolver: &HeritageResolver<'_, T>,
        model: &mut StructuralModel,
    ) -> Result<()> {
        match self.extract_declaration(file, decl, kind, resolver) {
            Ok((declaration, edges)) => {
                match kind {
                    DeclarationKind::Class => model.classes.push(declaration),
                    DeclarationKind::Interface => model.interfaces.push(declaration),
                }
                model.edges.extend(edges);
                Ok(())
            }
            Err(err) => self.on_error(file, decl, err, model),
        }
    }

    fn extract_declaration(
        &self,
        file: FileId,
        decl: DeclId,
        kind: DeclarationKind,
        resolver: &HeritageResolver<'_, T>,
    ) -> Result<(Declaration, Vec<HeritageEdge>)> {
        let name = declaration_name(self.table, decl)?;
        let members = extract_members(self.table, decl, &self.options);
        let edges = match kind {
            DeclarationKind::Class => resolver.resolve_class_heritage(decl)?,
            DeclarationKind::Interface => resolver.resolve_interface_heritage(decl)?,
        };

        let mut declaration = Declaration::new(kind, name, file);
        declaration.properties = members.properties;
        declaration.methods = members.methods;
        Ok((declaration, edges))
    }

    fn on_error(
        &self,
        file: FileId,
        decl: DeclId,
        err: ExtractError,
        model: &mut StructuralModel,
    ) -> Result<()> {
        match self.options.on_missing_symbol {
            MissingSymbolPolicy::Abort => Err(err),
            MissingSymbolPolicy::Skip => {
                warn!("skipping {decl}: {err}");
                model.skipped.push(SkippedDeclaration {
                    file,
                    reason: err.to_string(),
                });
                Ok(())
            }
        }
    }
}
