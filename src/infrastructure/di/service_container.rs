//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{CalculatorService, NavigationService};
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    pub navigation: NavigationService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);
        let navigation = NavigationService::new(Arc::clone(&fs));

        Self {
            settings,
            fs,
            navigation,
        }
    }

    /// Calculator over `Z_P` honoring the configured search limit.
    pub fn calculator<const P: u32>(&self) -> CalculatorService<P> {
        CalculatorService::new(self.settings.irreducibility_limit)
    }
}
