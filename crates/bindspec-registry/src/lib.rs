//! Exporter registry.
//!
//! This crate provides the seam between the declaration model and the
//! generation pass:
//!
//! - [`Exporter`] / [`ExporterFactory`] - one exporter per declaration
//! - [`DeferredExporter`] - the default exporter, read back by the generator
//! - [`ExporterRegistry`] - ordered, append-only list of exporters

mod exporter;
mod registry;

pub use exporter::{DeferredExporter, DeferredExporterFactory, Exporter, ExporterFactory};
pub use registry::ExporterRegistry;
