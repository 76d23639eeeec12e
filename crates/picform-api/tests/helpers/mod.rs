//! Test helpers: build AppState and router for integration tests.
//!
//! Every app gets its own temporary storage root, so tests can run in parallel.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::{TestResponse, TestServer};
use picform_api::setup::routes;
use picform_api::state::AppState;
use picform_core::{Config, Operation};
use picform_processing::{ImageCodec, ImagePipeline};
use picform_storage::{LocalStorage, Storage};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn root(&self) -> &Path {
        self._temp_dir.path()
    }

    /// Path an operation output is expected at
    pub fn output_path(&self, operation: Operation, filename: &str) -> PathBuf {
        self.root().join(operation.directory()).join(filename)
    }

    /// Names of everything written to an operation directory
    pub fn list_outputs(&self, operation: Operation) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.root().join(operation.directory()))
            .expect("Failed to read output directory")
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

/// Setup test app with default configuration and a temporary storage root.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// Setup test app, letting the caller adjust configuration first.
pub async fn setup_test_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

    let mut config = Config {
        storage_root: temp_dir.path().to_path_buf(),
        ..Config::default()
    };
    configure(&mut config);

    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(config.storage_root.clone())
            .await
            .expect("Failed to create local storage"),
    );
    let pipeline = ImagePipeline::new(ImageCodec::new(config.jpeg_quality));
    let state = Arc::new(AppState::new(config, storage, pipeline));

    let app = routes::setup_routes(state);
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        _temp_dir: temp_dir,
    }
}

/// Assert a response is a `302 Found` to `location`.
pub fn assert_redirect(response: &TestResponse, location: &str) {
    assert_eq!(response.status_code(), 302, "expected a redirect");
    let header = response.header("location");
    assert_eq!(
        header.to_str().expect("Location header is not ASCII"),
        location
    );
}
