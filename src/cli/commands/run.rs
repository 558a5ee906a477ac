//! `run` command handler.
//!
//! Replays a session script through the engine, either instantly or on a
//! wall-clock ticker, and prints the final assessment.

use std::time::Duration;

use chrono::Utc;

use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::loader::load_scenario;
use crate::error::{CodeBlueError, SessionError};
use crate::observability::events::{Event, EventEmitter};
use crate::script::SessionScript;
use crate::session::{PhaseTransition, SessionEngine};

/// Wall-clock tick interval for `--realtime` playback.
const REALTIME_TICK: Duration = Duration::from_millis(100);

/// Runs a scripted session and prints the assessment.
///
/// # Errors
///
/// Returns a config error if the scenario or script fails to load, an I/O
/// error if the event file cannot be created, or a session error if the
/// script drives the engine outside its contract.
pub async fn run(args: &RunArgs) -> Result<(), CodeBlueError> {
    let load = load_scenario(&args.scenario)?;
    for warning in &load.warnings {
        tracing::warn!(%warning, "scenario warning");
    }

    let script = SessionScript::load(&args.script)?;

    let mut engine = match args.seed {
        Some(seed) => SessionEngine::with_seed(load.scenario, seed)?,
        None => SessionEngine::new(load.scenario)?,
    };

    let emitter = match &args.events_out {
        Some(path) => EventEmitter::from_file(path)?,
        None => EventEmitter::noop(),
    };

    engine.start(script.duration_seconds)?;
    emitter.emit(Event::SessionStarted {
        timestamp: Utc::now(),
        session_id: engine.session_id(),
        scenario: engine.scenario().scenario.name.clone(),
        total_duration: script.duration_seconds,
    });

    if args.realtime {
        replay_realtime(&mut engine, &script, &emitter, args.speed).await?;
    } else {
        replay_instant(&mut engine, &script, &emitter)?;
    }

    let assessment = engine.assessment()?;
    emitter.emit(Event::SessionCompleted {
        timestamp: Utc::now(),
        session_id: engine.session_id(),
        score: assessment.score,
        actions_taken: assessment.action_log.len(),
    });

    match args.format {
        OutputFormat::Human => {
            println!("Scenario: {}", engine.scenario().scenario.name);
            println!("Score: {}%", assessment.score);
            if assessment.action_log.is_empty() {
                println!("No actions taken.");
            } else {
                println!("Actions:");
                for entry in &assessment.action_log {
                    let marker = if entry.critical { "*" } else { " " };
                    println!("  {marker} {} ({})", entry.label, entry.id);
                }
                println!("(* critical)");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
    }

    Ok(())
}

/// Replays the script without waiting: each scripted action is applied at
/// its timestamp, then the clock is drained to the scenario's end.
fn replay_instant(
    engine: &mut SessionEngine,
    script: &SessionScript,
    emitter: &EventEmitter,
) -> Result<(), CodeBlueError> {
    for scripted in &script.actions {
        if engine.is_complete() {
            break;
        }
        feed_time(engine, scripted.at_seconds, emitter)?;
        if engine.is_complete() {
            break;
        }
        apply_action(engine, &scripted.action, scripted.at_seconds, emitter);
    }

    // Drain the clock; at most one transition fires per call, so two calls
    // cover the worst case of finishing from Briefing.
    while !engine.is_complete() {
        match engine.advance_time(script.duration_seconds) {
            Ok(Some(transition)) => emit_transition(emitter, engine, &transition),
            Ok(None) => break,
            Err(SessionError::SessionComplete) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Replays the script on a wall-clock ticker scaled by `speed`.
async fn replay_realtime(
    engine: &mut SessionEngine,
    script: &SessionScript,
    emitter: &EventEmitter,
    speed: f64,
) -> Result<(), CodeBlueError> {
    let mut interval = tokio::time::interval(REALTIME_TICK);
    let mut elapsed = 0.0_f64;
    let mut pending = script.actions.iter().peekable();

    while !engine.is_complete() && elapsed < script.duration_seconds {
        interval.tick().await;
        elapsed = (elapsed + REALTIME_TICK.as_secs_f64() * speed).min(script.duration_seconds);

        while let Some(scripted) = pending.peek() {
            if scripted.at_seconds > elapsed || engine.is_complete() {
                break;
            }
            feed_time(engine, scripted.at_seconds, emitter)?;
            if !engine.is_complete() {
                apply_action(engine, &scripted.action, scripted.at_seconds, emitter);
            }
            pending.next();
        }

        if engine.is_complete() {
            break;
        }
        match engine.advance_time(elapsed) {
            Ok(Some(transition)) => emit_transition(emitter, engine, &transition),
            Ok(None) => {}
            Err(SessionError::SessionComplete) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Advances the engine clock to `elapsed`, emitting any transition.
fn feed_time(
    engine: &mut SessionEngine,
    elapsed: f64,
    emitter: &EventEmitter,
) -> Result<(), CodeBlueError> {
    match engine.advance_time(elapsed) {
        Ok(Some(transition)) => {
            emit_transition(emitter, engine, &transition);
            Ok(())
        }
        Ok(None) | Err(SessionError::SessionComplete) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Records one scripted action. Rejections are logged, not fatal, so a
/// script with a typo still plays out the rest of the session.
fn apply_action(engine: &mut SessionEngine, id: &str, at_seconds: f64, emitter: &EventEmitter) {
    match engine.record_action(id) {
        Ok(transition) => {
            let critical = engine
                .scenario()
                .action(id)
                .is_some_and(|action| action.critical);
            emitter.emit(Event::ActionRecorded {
                timestamp: Utc::now(),
                session_id: engine.session_id(),
                action: id.to_string(),
                critical,
                elapsed_seconds: at_seconds,
            });
            if let Some(transition) = transition {
                emit_transition(emitter, engine, &transition);
            }
        }
        Err(e) => {
            tracing::warn!(action = id, error = %e, "scripted action rejected");
        }
    }
}

fn emit_transition(emitter: &EventEmitter, engine: &SessionEngine, transition: &PhaseTransition) {
    emitter.emit(Event::PhaseEntered {
        timestamp: Utc::now(),
        session_id: engine.session_id(),
        phase: transition.to,
        elapsed_seconds: transition.at_seconds,
        reason: transition.reason.clone(),
    });
}
