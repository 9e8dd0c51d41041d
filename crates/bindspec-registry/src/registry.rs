//! ExporterRegistry - ordered storage for every constructed exporter.
//!
//! # Storage Model
//!
//! Exporters are kept in a single `Vec` in construction order. The model only
//! ever appends; the generation pass reads the registry in full, or takes it
//! over with [`ExporterRegistry::take_all`].
//!
//! # Thread Safety
//!
//! `ExporterRegistry` is **not thread-safe**. Declarations are built by one
//! script-evaluation pass, which is the only writer; the generation pass
//! reads the registry after that pass has finished.

use bindspec_core::DeclKind;
use log::debug;

use crate::Exporter;

/// Append-only, ordered list of exporters.
#[derive(Debug, Default)]
pub struct ExporterRegistry {
    exporters: Vec<Box<dyn Exporter>>,
}

impl ExporterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an exporter. Registration order is preserved.
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        debug!(
            "registering {} exporter #{} (name: {:?}, include: {:?})",
            exporter.kind(),
            self.exporters.len() + 1,
            exporter.name(),
            exporter.include(),
        );
        self.exporters.push(exporter);
    }

    /// Number of registered exporters.
    pub fn len(&self) -> usize {
        self.exporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exporters.is_empty()
    }

    /// Get the exporter registered at `index`.
    pub fn get(&self, index: usize) -> Option<&dyn Exporter> {
        self.exporters.get(index).map(|e| -> &dyn Exporter { &**e })
    }

    /// The most recently registered exporter.
    pub fn last(&self) -> Option<&dyn Exporter> {
        self.exporters.last().map(|e| -> &dyn Exporter { &**e })
    }

    /// Iterate over exporters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Exporter> {
        self.exporters.iter().map(|e| -> &dyn Exporter { &**e })
    }

    /// Iterate over the exporters of one kind, in registration order.
    pub fn of_kind(&self, kind: DeclKind) -> impl Iterator<Item = &dyn Exporter> {
        self.iter().filter(move |e| e.kind() == kind)
    }

    /// Hand every exporter over to the caller, leaving the registry empty.
    pub fn take_all(&mut self) -> Vec<Box<dyn Exporter>> {
        std::mem::take(&mut self.exporters)
    }
}
