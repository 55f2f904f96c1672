//! Shared integration-test harness for running the `chantier` binary
//! against fixture files.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

/// A small three.js-style scene inventory covering four phases.
pub const INVENTORY: &str = r#"[
    {"id": "t1", "name": "Terrain_Naturel"},
    {"id": "f1", "name": "Semelle_Filante_01"},
    {"id": "f2", "name": "Semelle_Filante_02"},
    {"id": "w1", "name": "Mur_Nord"},
    {"id": "w2", "name": "Mur_Sud"},
    {"id": "r1", "name": "Toiture_Tuiles"},
    {"id": "x1", "name": "Mobilier_Jardin"}
]"#;

/// Runs the `chantier` binary with the given arguments.
///
/// # Panics
///
/// Panics if the binary cannot be spawned.
pub fn run_chantier(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_chantier");
    std::process::Command::new(bin)
        .args(args)
        .output()
        .expect("failed to spawn chantier")
}

/// Writes a fixture file into `dir` and returns its path.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write fixture");
    path
}
