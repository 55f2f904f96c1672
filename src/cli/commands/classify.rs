//! `classify` command handler.
//!
//! Loads a model inventory, runs the phase classifier, and reports the
//! resulting mapping as a per-phase table or as a portable JSON
//! document.

use crate::catalog::{GameConfig, MAPPING_EXPORT_FILENAME, PhaseCatalog};
use crate::cli::args::{ClassifyArgs, OutputFormat};
use crate::error::Result;
use crate::game::GameEngine;
use crate::scene::MemoryScene;

/// Classify a model inventory into construction phases.
///
/// # Errors
///
/// Returns an I/O error if the inventory cannot be read, or a JSON
/// error if it is malformed.
pub fn run(args: &ClassifyArgs) -> Result<()> {
    let scene = MemoryScene::from_file(&args.model)?;
    let catalog = PhaseCatalog::standard();
    let mut engine = GameEngine::new(GameConfig::default(), catalog.clone());

    let total = engine.load_model(&scene);
    let matched: usize = catalog
        .iter()
        .map(|phase| engine.mapping().count(&phase.key))
        .sum();

    let document = engine.mapping().export_document();
    let json = serde_json::to_string_pretty(&document)?;

    if let Some(ref path) = args.output {
        // A directory target gets the conventional filename.
        let path = if path.is_dir() {
            path.join(MAPPING_EXPORT_FILENAME)
        } else {
            path.clone()
        };
        std::fs::write(&path, format!("{json}\n"))?;
        tracing::info!(file = %path.display(), "mapping document written");
    }

    match args.format {
        OutputFormat::Human => {
            for phase in catalog.iter() {
                println!("{:<16} {}", phase.label, engine.mapping().count(&phase.key));
            }
            println!("{matched}/{total} entities matched");
        }
        OutputFormat::Json => {
            if args.output.is_none() {
                println!("{json}");
            }
        }
    }

    Ok(())
}
