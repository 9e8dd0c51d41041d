//! Generation sessions.
//!
//! A [`Session`] owns the exporter registry for one generation run. Every
//! declaration constructor takes the session explicitly, builds its exporter
//! through the session's factory and appends it to the registry. The
//! generation pass then reads the registry, or takes it over, once the
//! script has finished. Hosts that embed several independent runs call
//! [`Session::reset`] (or build a fresh session) between them.

use std::fmt;

use bindspec_core::{DeclKind, DeclarationInfo, InfoProxy, RegistrationError};
use bindspec_registry::{DeferredExporterFactory, Exporter, ExporterFactory, ExporterRegistry};

use crate::SessionConfig;

/// State of one generation run.
pub struct Session {
    config: SessionConfig,
    factory: Box<dyn ExporterFactory>,
    registry: ExporterRegistry,
}

impl Session {
    /// Create a session that builds [`DeferredExporter`]s.
    ///
    /// [`DeferredExporter`]: bindspec_registry::DeferredExporter
    pub fn new(config: SessionConfig) -> Self {
        Self::with_factory(config, DeferredExporterFactory)
    }

    /// Create a session that builds exporters with `factory`.
    pub fn with_factory(config: SessionConfig, factory: impl ExporterFactory + 'static) -> Self {
        Self {
            config,
            factory: Box::new(factory),
            registry: ExporterRegistry::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The exporters registered so far.
    pub fn registry(&self) -> &ExporterRegistry {
        &self.registry
    }

    /// Iterate over the registered exporters in construction order.
    pub fn exporters(&self) -> impl Iterator<Item = &dyn Exporter> {
        self.registry.iter()
    }

    /// Hand the registered exporters to the generation pass.
    pub fn take_exporters(&mut self) -> Vec<Box<dyn Exporter>> {
        self.registry.take_all()
    }

    /// Drop every registered exporter, keeping configuration and factory.
    pub fn reset(&mut self) {
        self.registry = ExporterRegistry::new();
    }

    /// Build the exporter for `info` and append it to the registry.
    ///
    /// Nothing is registered if the factory fails.
    pub(crate) fn register(
        &mut self,
        kind: DeclKind,
        info: &DeclarationInfo,
        tail: Option<String>,
    ) -> Result<(), RegistrationError> {
        let exporter = self
            .factory
            .create(kind, InfoProxy::new(info.clone()), tail)?;
        self.registry.register(exporter);
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
