//! Extraction options

use crate::model::HeritageKind;

/// What the model builder does when a declaration cannot be named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingSymbolPolicy {
    /// Fail the whole build with the error
    #[default]
    Abort,
    /// Drop the declaration and its edges, record it in the model, continue
    Skip,
}

/// How an interface extending another interface is tagged.
///
/// Existing consumers expect `Implements`; `InterfaceExtends` gives the
/// relationship its own kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterfaceExtendsTag {
    #[default]
    Implements,
    InterfaceExtends,
}

impl InterfaceExtendsTag {
    pub fn kind(self) -> HeritageKind {
        match self {
            InterfaceExtendsTag::Implements => HeritageKind::Implements,
            InterfaceExtendsTag::InterfaceExtends => HeritageKind::InterfaceExtends,
        }
    }
}

/// Options for one extraction run
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub on_missing_symbol: MissingSymbolPolicy,
    pub interface_extends: InterfaceExtendsTag,
    /// Remove exact duplicate edges from the assembled model
    pub dedupe_edges: bool,
    /// Extract method parameters
    pub include_parameters: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            on_missing_symbol: MissingSymbolPolicy::Abort,
            interface_extends: InterfaceExtendsTag::Implements,
            dedupe_edges: false,
            include_parameters: true,
        }
    }
}

impl ExtractOptions {
    pub fn with_missing_symbol_policy(mut self, policy: MissingSymbolPolicy) -> Self {
        self.on_missing_symbol = policy;
        self
    }

    pub fn with_interface_extends(mut self, tag: InterfaceExtendsTag) -> Self {
        self.interface_extends = tag;
        self
    }

    pub fn with_dedupe_edges(mut self, dedupe: bool) -> Self {
        self.dedupe_edges = dedupe;
        self
    }

    pub fn with_parameters(mut self, include: bool) -> Self {
        self.include_parameters = include;
        self
    }
}
