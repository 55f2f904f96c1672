//! `play` command handler.
//!
//! Drives a full headless quiz session from a script: a JSON array of
//! steps mixing tick waits, entity picks, and control actions. After
//! the script runs out, a still-running game is ticked to completion
//! so the session always ends with a full history.
//!
//! Script example:
//!
//! ```json
//! [
//!   {"wait": 3},
//!   {"pick": "mesh-wall-01"},
//!   "pause",
//!   {"wait": 5},
//!   "resume",
//!   {"pick": "mesh-roof-02"}
//! ]
//! ```

use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::catalog::{CSV_EXPORT_FILENAME, GameConfig, PhaseCatalog};
use crate::cli::args::PlayArgs;
use crate::error::{Result, SessionError};
use crate::game::state::format_clock;
use crate::game::{GameEngine, Status};
use crate::scene::{EntityId, MemoryScene, PickEvent};
use crate::session::Ticker;

/// One step of a play script.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
enum Step {
    /// Consume this many game ticks.
    Wait {
        /// Tick count.
        wait: u64,
    },
    /// Aim at an entity and pick it.
    Pick {
        /// Entity identifier.
        pick: String,
    },
    /// A bare control keyword.
    Control(Control),
}

/// Control keywords accepted as bare strings.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum Control {
    Pause,
    Resume,
    Reset,
}

/// Play a scripted quiz session.
///
/// # Errors
///
/// Returns an I/O or JSON error on unreadable inputs, a session error
/// on a malformed script or unknown entity reference, a mapping error
/// on a malformed mapping document, or a game error when the inventory
/// is empty.
pub async fn run(args: &PlayArgs) -> Result<()> {
    let mut scene = MemoryScene::from_file(&args.model)?;

    let config = GameConfig {
        duration_secs: args.duration,
        ..GameConfig::default()
    };
    let catalog = PhaseCatalog::standard();
    let mut engine = match args.seed {
        Some(seed) => GameEngine::with_seed(config, catalog, seed),
        None => GameEngine::new(config, catalog),
    };
    engine.load_model(&scene);

    if let Some(ref path) = args.mapping {
        let text = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        engine.mapping_mut().import_document(&value)?;
        info!(file = %path.display(), "mapping document imported");
    }

    let steps = match args.script {
        Some(ref path) => parse_script(&std::fs::read_to_string(path)?)?,
        None => Vec::new(),
    };

    engine.start_game(&mut scene)?;
    let mut ticker = Ticker::start(Duration::from_millis(args.tick_millis));

    for step in steps {
        if engine.state().status == Status::Finished {
            break;
        }
        match step {
            Step::Wait { wait } => {
                for _ in 0..wait {
                    if engine.state().status == Status::Finished
                        || ticker.next().await.is_none()
                    {
                        break;
                    }
                    engine.tick();
                }
            }
            Step::Pick { pick } => {
                let id = EntityId::new(pick);
                if !engine.registry().contains(&id) {
                    return Err(SessionError::UnknownEntity(id.to_string()).into());
                }
                scene.script_next_pick(id);
                engine.handle_pick(&mut scene, &PickEvent::default());
            }
            Step::Control(Control::Pause) => engine.pause(),
            Step::Control(Control::Resume) => engine.resume(),
            Step::Control(Control::Reset) => engine.reset_game(&mut scene),
        }
    }

    // A game left running (or paused mid-script with no resume) would
    // wait forever; only a running clock is drained to completion.
    if engine.state().status == Status::Running {
        info!(
            clock = %format_clock(engine.state().time_left),
            "script exhausted; running the clock out"
        );
    }
    while engine.state().status == Status::Running {
        if ticker.next().await.is_none() {
            break;
        }
        engine.tick();
    }
    ticker.cancel();

    if let Some(summary) = engine.end_summary() {
        info!(%summary, "session complete");
    }

    let csv = engine.export_csv();
    match args.csv_out {
        Some(ref path) => {
            // A directory target gets the conventional filename.
            let path = if path.is_dir() {
                path.join(CSV_EXPORT_FILENAME)
            } else {
                path.clone()
            };
            std::fs::write(&path, &csv)?;
            info!(file = %path.display(), "session CSV written");
        }
        None => println!("{csv}"),
    }
    Ok(())
}

fn parse_script(text: &str) -> Result<Vec<Step>> {
    serde_json::from_str(text).map_err(|e| SessionError::Script(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_parses_mixed_steps() {
        let steps = parse_script(
            r#"[{"wait": 3}, {"pick": "mesh-1"}, "pause", "resume", "reset"]"#,
        )
        .unwrap();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0], Step::Wait { wait: 3 });
        assert_eq!(
            steps[1],
            Step::Pick {
                pick: "mesh-1".to_string()
            }
        );
        assert_eq!(steps[2], Step::Control(Control::Pause));
        assert_eq!(steps[4], Step::Control(Control::Reset));
    }

    #[test]
    fn unknown_control_keyword_is_rejected() {
        let result = parse_script(r#"["explode"]"#);
        assert!(matches!(
            result,
            Err(crate::error::ChantierError::Session(SessionError::Script(_)))
        ));
    }

    #[test]
    fn non_array_script_is_rejected() {
        assert!(parse_script(r#"{"wait": 1}"#).is_err());
    }

    #[test]
    fn empty_script_is_fine() {
        assert!(parse_script("[]").unwrap().is_empty());
    }
}
