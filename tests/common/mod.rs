//! Common test utilities for plugreg integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory holding a registry file for integration tests
#[allow(dead_code)]
pub struct TestRegistry {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the registry file inside the temp directory
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestRegistry {
    /// Create a new scratch registry location (no file written yet)
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("plugins.json");
        Self { temp, path }
    }

    /// Seed the registry file with raw JSON content
    pub fn seed(&self, content: &str) {
        std::fs::write(&self.path, content).expect("Failed to write registry file");
    }

    /// Read the registry file back as text
    pub fn read_text(&self) -> String {
        std::fs::read_to_string(&self.path).expect("Failed to read registry file")
    }

    /// Read the registry file back as JSON
    pub fn read_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_text()).expect("Registry file is not valid JSON")
    }

    /// Plugin ids in file order
    pub fn ids(&self) -> Vec<String> {
        // IndexMap, not serde_json::Map: entry order is part of the contract
        let registry: indexmap::IndexMap<String, serde_json::Value> =
            serde_json::from_str(&self.read_text()).expect("Registry file is not valid JSON");
        registry.keys().cloned().collect()
    }
}

/// Build a command running the real plugreg binary
#[allow(dead_code, deprecated)]
pub fn plugreg_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("plugreg").expect("plugreg binary not built")
}
