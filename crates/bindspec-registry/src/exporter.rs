//! The exporter seam.
//!
//! Every declaration constructs exactly one exporter through an
//! [`ExporterFactory`], handing it a proxy over the declaration node and the
//! optional tail fragment. How an exporter turns attributes into wrapper
//! source belongs to the generation pass; the model only needs to build
//! exporters and keep them in order.

use std::fmt;

use bindspec_core::{AttributeValue, DeclKind, ExportError, InfoProxy};

/// An exporter bound to one declaration.
pub trait Exporter: fmt::Debug {
    /// The declaration kind this exporter handles.
    fn kind(&self) -> DeclKind;

    /// Proxy over the declaration node.
    fn info(&self) -> &InfoProxy;

    /// Source text spliced verbatim into the generated output.
    fn tail(&self) -> Option<&str>;

    /// Current `name` attribute of the declaration, if it has one.
    fn name(&self) -> Option<String> {
        self.info().get("name").and_then(AttributeValue::into_string)
    }

    /// Current `include` attribute of the declaration.
    fn include(&self) -> Option<String> {
        self.info()
            .get("include")
            .and_then(AttributeValue::into_string)
    }
}

/// Builds the exporter for a newly constructed declaration.
pub trait ExporterFactory {
    fn create(
        &self,
        kind: DeclKind,
        info: InfoProxy,
        tail: Option<String>,
    ) -> Result<Box<dyn Exporter>, ExportError>;
}

impl<F> ExporterFactory for F
where
    F: Fn(DeclKind, InfoProxy, Option<String>) -> Result<Box<dyn Exporter>, ExportError>,
{
    fn create(
        &self,
        kind: DeclKind,
        info: InfoProxy,
        tail: Option<String>,
    ) -> Result<Box<dyn Exporter>, ExportError> {
        self(kind, info, tail)
    }
}

/// Exporter that records its declaration for a later generation pass.
///
/// It reads attributes lazily through its proxy, so mutations made after
/// registration are visible when the registry is finally walked.
#[derive(Debug, Clone)]
pub struct DeferredExporter {
    kind: DeclKind,
    info: InfoProxy,
    tail: Option<String>,
}

impl DeferredExporter {
    pub fn new(kind: DeclKind, info: InfoProxy, tail: Option<String>) -> Self {
        Self { kind, info, tail }
    }
}

impl Exporter for DeferredExporter {
    fn kind(&self) -> DeclKind {
        self.kind
    }

    fn info(&self) -> &InfoProxy {
        &self.info
    }

    fn tail(&self) -> Option<&str> {
        self.tail.as_deref()
    }
}

/// Factory producing a [`DeferredExporter`] for every kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredExporterFactory;

impl ExporterFactory for DeferredExporterFactory {
    fn create(
        &self,
        kind: DeclKind,
        info: InfoProxy,
        tail: Option<String>,
    ) -> Result<Box<dyn Exporter>, ExportError> {
        Ok(Box::new(DeferredExporter::new(kind, info, tail)))
    }
}
