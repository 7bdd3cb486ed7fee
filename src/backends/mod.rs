//! Backend import contract: file path + backend tag → owned model
//!
//! Each backend is an external reader for one foreign model format. The
//! [`Importer`] validates the path against the backend's configured file
//! extensions before handing it over, so readers only see existing files.

pub mod error;
pub mod simmetrix;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info, instrument};

use crate::config::Settings;
use crate::domain::ModelTraits;
use crate::util::path::{ensure_file_exists, has_extension};

pub use error::{ImportError, ImportResult};
pub use simmetrix::Simmetrix;

/// A reader turning one foreign file format into a [`ModelTraits`].
pub trait Backend {
    fn name(&self) -> &'static str;

    /// Reads `path`, which is known to exist and to carry an accepted extension.
    fn read(&self, path: &Path) -> ImportResult<ModelTraits>;
}

/// Backend selector tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BackendKind {
    Simmetrix,
}

impl BackendKind {
    pub const ALL: [BackendKind; 1] = [BackendKind::Simmetrix];

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Simmetrix => "simmetrix",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BackendKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ImportError::UnknownBackend(s.to_string()))
    }
}

/// Registry of readers, keyed by backend tag.
pub struct Importer {
    backends: HashMap<BackendKind, Box<dyn Backend>>,
    settings: Settings,
}

impl fmt::Debug for Importer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<_> = self.backends.keys().collect();
        registered.sort();
        f.debug_struct("Importer")
            .field("backends", &registered)
            .field("settings", &self.settings)
            .finish()
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Importer {
    /// Creates an importer with the built-in readers registered.
    pub fn new(settings: Settings) -> Self {
        let mut importer = Self {
            backends: HashMap::new(),
            settings,
        };
        importer.register(BackendKind::Simmetrix, Box::new(Simmetrix));
        importer
    }

    /// Installs `backend` for `kind`, returning the reader it replaces.
    pub fn register(
        &mut self,
        kind: BackendKind,
        backend: Box<dyn Backend>,
    ) -> Option<Box<dyn Backend>> {
        debug!(%kind, reader = backend.name(), "registering backend");
        self.backends.insert(kind, backend)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn default_backend(&self) -> ImportResult<BackendKind> {
        self.settings.default_backend.parse()
    }

    /// Builds a model from `path` with the reader registered for `kind`.
    #[instrument(level = "debug", skip(self))]
    pub fn import(&self, path: &Path, kind: BackendKind) -> ImportResult<ModelTraits> {
        let backend = self
            .backends
            .get(&kind)
            .ok_or_else(|| ImportError::UnknownBackend(kind.to_string()))?;

        ensure_file_exists(path)?;

        let extensions = self.settings.extensions_for(kind);
        if !has_extension(path, extensions) {
            return Err(ImportError::UnsupportedFormat {
                path: path.to_path_buf(),
                reason: format!(
                    "expected extension {} for backend {}",
                    extensions.join("|"),
                    kind
                ),
            });
        }

        let model = backend.read(path)?;
        info!(
            model = model.name(),
            cases = model.num_cases(),
            backend = %kind,
            "model imported"
        );
        Ok(model)
    }

    /// Imports with the backend named by `settings.default_backend`.
    pub fn import_default(&self, path: &Path) -> ImportResult<ModelTraits> {
        self.import(path, self.default_backend()?)
    }
}

/// Imports `path` with the built-in readers and settings loaded from the
/// usual config locations.
pub fn read_from_file(path: &Path, kind: BackendKind) -> ImportResult<ModelTraits> {
    let settings = Settings::load()?;
    Importer::new(settings).import(path, kind)
}
