//! Shared stored-controller fixtures for tests and benches.
//!
//! `fixtures/manifest.json` lists each controller document together with the states it
//! declares and the state it starts in, so loader tests can check a parse against it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    controllers: BTreeMap<String, ControllerFixture>,
}

/// One manifest entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerFixture {
    /// Path relative to `fixtures/`.
    pub path: String,
    pub default_state: String,
    /// State names in declaration order.
    pub states: Vec<String>,
}

impl ControllerFixture {
    pub fn full_path(&self) -> PathBuf {
        fixtures_root().join(&self.path)
    }

    pub fn read(&self) -> Result<String> {
        let path = self.full_path();
        fs::read_to_string(&path)
            .with_context(|| format!("failed to read fixture at {}", path.display()))
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

pub mod controllers {
    use super::*;

    /// Fixture names, sorted.
    pub fn names() -> impl Iterator<Item = &'static str> {
        MANIFEST.controllers.keys().map(String::as_str)
    }

    pub fn entry(name: &str) -> Result<&'static ControllerFixture> {
        MANIFEST
            .controllers
            .get(name)
            .ok_or_else(|| anyhow!("unknown controller fixture '{name}'"))
    }

    pub fn json(name: &str) -> Result<String> {
        entry(name)?.read()
    }

    /// Generic JSON view, for tooling that does not go through the loader.
    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let text = json(name)?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse JSON fixture '{name}'"))
    }

    /// Run `parse` over the fixture text, tagging its error with the fixture name.
    pub fn parse_with<T, E>(name: &str, parse: impl FnOnce(&str) -> Result<T, E>) -> Result<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let text = json(name)?;
        parse(&text).with_context(|| format!("controller fixture '{name}' was rejected"))
    }
}
