use std::path::Path;

use tracing::{instrument, warn};

use crate::backends::{Backend, ImportError, ImportResult};
use crate::domain::ModelTraits;

/// Reader tag for Simmetrix model files.
///
/// The native format is only readable through the vendor SDK, which this
/// crate does not link. Applications that do link it register their own
/// reader for [`BackendKind::Simmetrix`](crate::backends::BackendKind) on an
/// [`Importer`](crate::backends::Importer).
#[derive(Debug, Clone, Copy, Default)]
pub struct Simmetrix;

impl Backend for Simmetrix {
    fn name(&self) -> &'static str {
        "simmetrix"
    }

    #[instrument(level = "debug", skip(self))]
    fn read(&self, path: &Path) -> ImportResult<ModelTraits> {
        warn!(path = %path.display(), "simmetrix SDK not linked");
        Err(ImportError::BackendUnavailable {
            backend: self.name().to_string(),
            path: path.to_path_buf(),
        })
    }
}
