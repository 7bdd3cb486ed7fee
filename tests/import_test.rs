//! Tests for the backend import contract

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::TempDir;

use model_traits::config::BackendSettings;
use model_traits::util::testing;
use model_traits::{
    read_from_file, Backend, BackendKind, ImportError, ImportResult, Importer, ModelTraits,
    Settings,
};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn create_model_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write model file");
    path
}

/// Stand-in for a vendor reader: one case per non-empty line.
struct LineBackend {
    reads: Rc<Cell<usize>>,
}

impl Backend for LineBackend {
    fn name(&self) -> &'static str {
        "lines"
    }

    fn read(&self, path: &Path) -> ImportResult<ModelTraits> {
        self.reads.set(self.reads.get() + 1);
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Err(ImportError::UnsupportedFormat {
                path: path.to_path_buf(),
                reason: "empty model".to_string(),
            });
        }
        let mut model = ModelTraits::new("model");
        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            model.add_case(line.trim()).add_attribute("source", line.trim());
        }
        Ok(model)
    }
}

fn importer_with_line_backend() -> (Importer, Rc<Cell<usize>>) {
    let reads = Rc::new(Cell::new(0));
    let mut importer = Importer::new(Settings::default());
    let previous = importer.register(
        BackendKind::Simmetrix,
        Box::new(LineBackend {
            reads: Rc::clone(&reads),
        }),
    );
    assert_eq!(previous.map(|b| b.name()), Some("simmetrix"));
    (importer, reads)
}

// ============================================================
// Successful import
// ============================================================

#[test]
fn given_registered_reader_when_importing_then_returns_model() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_model_file(&temp, "wing.smd", "Load1\nLoad2\nLoad1\n");
    let (importer, reads) = importer_with_line_backend();

    // Act
    let model = importer.import(&path, BackendKind::Simmetrix).unwrap();

    // Assert
    assert_eq!(model.num_cases(), 2);
    assert!(model.get_case("Load2").is_some());
    assert_eq!(reads.get(), 1);
}

#[test]
fn given_uppercase_extension_when_importing_then_accepted() {
    let temp = TempDir::new().unwrap();
    let path = create_model_file(&temp, "WING.SMD", "Load1\n");
    let (importer, _) = importer_with_line_backend();

    let model = importer.import_default(&path).unwrap();

    assert_eq!(model.num_cases(), 1);
}

// ============================================================
// Failures
// ============================================================

#[test]
fn given_missing_file_when_importing_then_file_not_found() {
    let (importer, reads) = importer_with_line_backend();

    let result = importer.import(Path::new("/nonexistent/wing.smd"), BackendKind::Simmetrix);

    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    assert_eq!(reads.get(), 0);
}

#[test]
fn given_directory_when_importing_then_not_a_file() {
    let temp = TempDir::new().unwrap();
    let (importer, _) = importer_with_line_backend();

    let result = importer.import(temp.path(), BackendKind::Simmetrix);

    assert!(matches!(result, Err(ImportError::NotAFile(_))));
}

#[test]
fn given_wrong_extension_when_importing_then_unsupported_format() {
    let temp = TempDir::new().unwrap();
    let path = create_model_file(&temp, "wing.step", "Load1\n");
    let (importer, reads) = importer_with_line_backend();

    let result = importer.import(&path, BackendKind::Simmetrix);

    match result {
        Err(ImportError::UnsupportedFormat { path: p, reason }) => {
            assert_eq!(p, path);
            assert!(reason.contains("smd"), "reason: {reason}");
        }
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
    assert_eq!(reads.get(), 0);
}

#[test]
fn given_reader_rejecting_content_when_importing_then_error_is_propagated() {
    let temp = TempDir::new().unwrap();
    let path = create_model_file(&temp, "empty.smd", "   \n");
    let (importer, _) = importer_with_line_backend();

    let result = importer.import(&path, BackendKind::Simmetrix);

    assert!(matches!(result, Err(ImportError::UnsupportedFormat { .. })));
}

#[test]
fn given_builtin_simmetrix_reader_when_importing_then_backend_unavailable() {
    let temp = TempDir::new().unwrap();
    let path = create_model_file(&temp, "wing.smd", "binary");
    let importer = Importer::default();

    let result = importer.import(&path, BackendKind::Simmetrix);

    match result {
        Err(ImportError::BackendUnavailable { backend, path: p }) => {
            assert_eq!(backend, "simmetrix");
            assert_eq!(p, path);
        }
        other => panic!("expected BackendUnavailable, got {other:?}"),
    }
}

#[test]
fn given_read_from_file_when_file_missing_then_file_not_found() {
    let result = read_from_file(Path::new("/nonexistent/wing.smd"), BackendKind::Simmetrix);

    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}

#[test]
fn given_empty_extension_list_when_importing_then_any_file_is_accepted() {
    let temp = TempDir::new().unwrap();
    let path = create_model_file(&temp, "wing.txt", "Load1\n");
    let mut settings = Settings::default();
    settings
        .backends
        .insert("simmetrix".to_string(), BackendSettings::default());
    let mut importer = Importer::new(settings);
    importer.register(
        BackendKind::Simmetrix,
        Box::new(LineBackend {
            reads: Rc::new(Cell::new(0)),
        }),
    );

    let model = importer.import(&path, BackendKind::Simmetrix).unwrap();

    assert_eq!(model.num_cases(), 1);
}

// ============================================================
// Backend tags
// ============================================================

#[test]
fn given_backend_names_when_parsing_then_known_tags_resolve() {
    assert_eq!("simmetrix".parse::<BackendKind>().unwrap(), BackendKind::Simmetrix);
    assert_eq!(" Simmetrix ".parse::<BackendKind>().unwrap(), BackendKind::Simmetrix);
    assert!(matches!(
        "parasolid".parse::<BackendKind>(),
        Err(ImportError::UnknownBackend(name)) if name == "parasolid"
    ));
    assert_eq!(BackendKind::Simmetrix.to_string(), "simmetrix");
}

#[test]
fn given_unknown_default_backend_when_importing_default_then_unknown_backend() {
    let settings = Settings {
        default_backend: "parasolid".to_string(),
        ..Settings::default()
    };
    let importer = Importer::new(settings);

    let result = importer.import_default(Path::new("wing.smd"));

    assert!(matches!(result, Err(ImportError::UnknownBackend(_))));
}
