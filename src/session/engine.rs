//! Session engine orchestration.
//!
//! The `SessionEngine` coordinates phase transitions, action recording,
//! and the vitals simulator for one simulation session. It is driven by
//! two independent external signals — a monotonically increasing time feed
//! and discrete action submissions — and has no notion of wall-clock time
//! of its own, so pausing the host's time source pauses the session for
//! free.
//!
//! The two triggers into Assessment are evaluated separately so the race
//! between them cannot double-fire: the time threshold only inside
//! [`advance_time`], the action-count threshold only inside
//! [`record_action`]. First to fire wins; entering Assessment is
//! idempotent and freezes the session.
//!
//! [`advance_time`]: SessionEngine::advance_time
//! [`record_action`]: SessionEngine::record_action

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::schema::ScenarioConfig;
use crate::config::validation::Validator;
use crate::error::{ConfigError, SessionError};

use super::phase::Phase;
use super::scoring::{self, Assessment};
use super::state::{ActionId, PhaseTransition, SessionState, Snapshot};
use super::vitals::{Vitals, VitalsSimulator};

/// Simulation session engine.
///
/// Generic over the randomness source used by the vitals simulator so
/// tests (and the CLI `--seed` flag) can make vitals deterministic.
pub struct SessionEngine<R: Rng = StdRng> {
    scenario: Arc<ScenarioConfig>,
    session_id: Uuid,
    state: Option<SessionState>,
    vitals_sim: VitalsSimulator,
    rng: R,
}

impl SessionEngine<StdRng> {
    /// Creates an engine with OS-entropy randomness.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the scenario violates an engine
    /// invariant: no actions, duplicate action ids, or no critical actions.
    pub fn new(scenario: Arc<ScenarioConfig>) -> Result<Self, ConfigError> {
        Self::with_rng(scenario, StdRng::from_os_rng())
    }

    /// Creates an engine with seeded randomness for deterministic vitals.
    ///
    /// # Errors
    ///
    /// Same as [`SessionEngine::new`].
    pub fn with_seed(scenario: Arc<ScenarioConfig>, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(scenario, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SessionEngine<R> {
    /// Creates an engine with an injected randomness source.
    ///
    /// # Errors
    ///
    /// Same as [`SessionEngine::new`].
    pub fn with_rng(scenario: Arc<ScenarioConfig>, rng: R) -> Result<Self, ConfigError> {
        check_scenario(&scenario)?;
        let vitals_sim = VitalsSimulator::new(scenario.vitals.clone());
        Ok(Self {
            scenario,
            session_id: Uuid::new_v4(),
            state: None,
            vitals_sim,
            rng,
        })
    }

    /// Returns the scenario this engine runs.
    #[must_use]
    pub fn scenario(&self) -> &ScenarioConfig {
        &self.scenario
    }

    /// Returns the id of the current session. Changes on every `start`.
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Returns the current phase, if a session has started.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.state.as_ref().map(SessionState::phase)
    }

    /// Returns whether the session has reached Assessment.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase().is_some_and(Phase::is_terminal)
    }

    /// Starts (or restarts) a session.
    ///
    /// Any previous session state is discarded; the fresh session begins
    /// in Briefing at zero elapsed seconds with baseline vitals.
    ///
    /// # Errors
    ///
    /// Rejects a non-finite or non-positive `total_duration` with
    /// [`SessionError::InvalidTime`].
    pub fn start(&mut self, total_duration: f64) -> Result<(), SessionError> {
        if !total_duration.is_finite() || total_duration <= 0.0 {
            return Err(SessionError::InvalidTime {
                value: total_duration,
            });
        }

        self.session_id = Uuid::new_v4();
        self.vitals_sim.disarm();
        self.state = Some(SessionState::new(
            total_duration,
            Vitals::from_baseline(&self.scenario.vitals.baseline),
        ));

        info!(
            session = %self.session_id,
            scenario = %self.scenario.scenario.name,
            total_duration,
            "session started"
        );
        Ok(())
    }

    /// Feeds the engine a new elapsed-time reading and re-evaluates the
    /// time-driven transitions.
    ///
    /// At most one transition fires per call, so a large jump can never
    /// skip Briefing straight into Assessment. Vitals are refreshed on
    /// their cadence while the session is in Emergency and running.
    ///
    /// # Errors
    ///
    /// Rejects the call, leaving state unchanged, if no session has
    /// started, the session is already in Assessment, the value is not a
    /// finite number, or the clock would move backwards.
    pub fn advance_time(&mut self, elapsed: f64) -> Result<Option<PhaseTransition>, SessionError> {
        let state = self.state.as_mut().ok_or(SessionError::NotStarted)?;

        if state.phase().is_terminal() {
            return Err(SessionError::SessionComplete);
        }
        if !elapsed.is_finite() {
            return Err(SessionError::InvalidTime { value: elapsed });
        }
        if elapsed < state.elapsed_seconds() {
            return Err(SessionError::TimeRegression {
                current: state.elapsed_seconds(),
                supplied: elapsed,
            });
        }

        state.set_elapsed(elapsed);

        let timing = &self.scenario.timing;
        let transition = if state.phase() == Phase::Briefing
            && elapsed >= timing.briefing_seconds
        {
            state.enter(Phase::Emergency);
            self.vitals_sim.arm(elapsed);
            Some(PhaseTransition {
                from: Phase::Briefing,
                to: Phase::Emergency,
                reason: format!("briefing window of {}s elapsed", timing.briefing_seconds),
                at_seconds: elapsed,
            })
        } else if state.phase() == Phase::Emergency
            && elapsed >= state.total_duration() - timing.assessment_lead_seconds
        {
            state.enter(Phase::Assessment);
            self.vitals_sim.disarm();
            Some(PhaseTransition {
                from: Phase::Emergency,
                to: Phase::Assessment,
                reason: format!(
                    "entered final {}s of the scenario",
                    timing.assessment_lead_seconds
                ),
                at_seconds: elapsed,
            })
        } else {
            None
        };

        // Vitals tick on the post-transition phase: they stop the instant
        // the session leaves Emergency or is paused.
        if state.phase() == Phase::Emergency && state.is_running() {
            self.vitals_sim
                .advance(elapsed, state.vitals_mut(), &mut self.rng);
        }

        if let Some(t) = &transition {
            info!(
                session = %self.session_id,
                from = %t.from,
                to = %t.to,
                reason = %t.reason,
                "phase transition"
            );
        }
        Ok(transition)
    }

    /// Records a user action and re-evaluates the action-count transition.
    ///
    /// An already-selected action is a silent no-op, not an error. The
    /// early-finish trigger only fires while in Emergency; actions
    /// recorded during Briefing count toward the log but never end the
    /// session.
    ///
    /// # Errors
    ///
    /// Rejects the call, leaving state unchanged, if no session has
    /// started, the session is already in Assessment, or `id` does not
    /// reference a configured action.
    pub fn record_action(&mut self, id: &str) -> Result<Option<PhaseTransition>, SessionError> {
        let state = self.state.as_mut().ok_or(SessionError::NotStarted)?;

        if state.phase().is_terminal() {
            return Err(SessionError::SessionComplete);
        }
        let Some(action) = self.scenario.action(id) else {
            return Err(SessionError::UnknownAction { id: id.to_string() });
        };

        if state.has_action(id) {
            debug!(session = %self.session_id, action = id, "duplicate action ignored");
            return Ok(None);
        }

        state.push_action(ActionId::new(&action.id));
        debug!(
            session = %self.session_id,
            action = id,
            critical = action.critical,
            selected = state.selected_actions().len(),
            "action recorded"
        );

        let threshold = self.scenario.timing.early_finish_actions;
        let transition = if state.phase() == Phase::Emergency
            && state.selected_actions().len() >= threshold
        {
            state.enter(Phase::Assessment);
            self.vitals_sim.disarm();
            let t = PhaseTransition {
                from: Phase::Emergency,
                to: Phase::Assessment,
                reason: format!("{threshold} distinct actions selected"),
                at_seconds: state.elapsed_seconds(),
            };
            info!(
                session = %self.session_id,
                from = %t.from,
                to = %t.to,
                reason = %t.reason,
                "phase transition"
            );
            Some(t)
        } else {
            None
        };

        Ok(transition)
    }

    /// Pauses the session: vitals stop refreshing immediately. A no-op
    /// once the session is complete.
    ///
    /// # Errors
    ///
    /// Rejects the call if no session has started.
    pub fn pause(&mut self) -> Result<(), SessionError> {
        let state = self.state.as_mut().ok_or(SessionError::NotStarted)?;
        if !state.phase().is_terminal() {
            state.set_running(false);
            self.vitals_sim.disarm();
            debug!(session = %self.session_id, "session paused");
        }
        Ok(())
    }

    /// Resumes a paused session. A no-op once the session is complete.
    ///
    /// # Errors
    ///
    /// Rejects the call if no session has started.
    pub fn resume(&mut self) -> Result<(), SessionError> {
        let state = self.state.as_mut().ok_or(SessionError::NotStarted)?;
        if !state.phase().is_terminal() {
            state.set_running(true);
            if state.phase() == Phase::Emergency {
                self.vitals_sim.arm(state.elapsed_seconds());
            }
            debug!(session = %self.session_id, "session resumed");
        }
        Ok(())
    }

    /// Returns a read-only snapshot of the current session state.
    ///
    /// # Errors
    ///
    /// Rejects the call if no session has started.
    pub fn snapshot(&self) -> Result<Snapshot, SessionError> {
        self.state
            .as_ref()
            .map(SessionState::snapshot)
            .ok_or(SessionError::NotStarted)
    }

    /// Computes the assessment over the current action log.
    ///
    /// Callable at any time, but the result is only final once the
    /// session has reached Assessment (the log is frozen from then on).
    ///
    /// # Errors
    ///
    /// Rejects the call if no session has started.
    pub fn assessment(&self) -> Result<Assessment, SessionError> {
        let state = self.state.as_ref().ok_or(SessionError::NotStarted)?;
        Ok(scoring::assess(&self.scenario, state.selected_actions()))
    }
}

impl<R: Rng> std::fmt::Debug for SessionEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEngine")
            .field("scenario", &self.scenario.scenario.name)
            .field("session_id", &self.session_id)
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

/// Checks the engine's configuration invariants.
///
/// A scenario that passed load-time validation always passes these; they
/// exist so an engine built from a hand-assembled config is equally safe.
/// The action-set violations get their dedicated error variants; everything
/// else (timing thresholds, vitals cadence and ranges) goes through the
/// same `Validator` the loader uses, so a non-positive refresh cadence or
/// an inverted range can never reach a running session.
fn check_scenario(scenario: &ScenarioConfig) -> Result<(), ConfigError> {
    if scenario.actions.is_empty() {
        return Err(ConfigError::EmptyActions {
            scenario: scenario.scenario.name.clone(),
        });
    }

    let mut seen = HashSet::new();
    for action in &scenario.actions {
        if !seen.insert(action.id.as_str()) {
            return Err(ConfigError::DuplicateAction {
                id: action.id.clone(),
            });
        }
    }

    if scenario.critical_count() == 0 {
        return Err(ConfigError::NoCriticalActions {
            scenario: scenario.scenario.name.clone(),
        });
    }

    let result = Validator::new().validate(scenario);
    if result.has_errors() {
        return Err(ConfigError::ValidationError {
            path: scenario.scenario.name.clone(),
            errors: result.errors,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ActionDefinition, ScenarioMetadata, TimingConfig, VitalsConfig};

    fn action(id: &str, critical: bool) -> ActionDefinition {
        ActionDefinition {
            id: id.to_string(),
            label: id.to_string(),
            critical,
        }
    }

    fn paramedic_scenario() -> Arc<ScenarioConfig> {
        Arc::new(ScenarioConfig {
            scenario: ScenarioMetadata {
                name: "paramedic".to_string(),
                description: None,
            },
            timing: TimingConfig::default(),
            vitals: VitalsConfig::default(),
            actions: vec![
                action("vitals", true),
                action("airway", true),
                action("oxygen", false),
                action("iv", false),
                action("monitor", true),
                action("transport", false),
            ],
        })
    }

    fn started_engine() -> SessionEngine {
        let mut engine = SessionEngine::with_seed(paramedic_scenario(), 7).unwrap();
        engine.start(180.0).unwrap();
        engine
    }

    // ---- Construction ----

    #[test]
    fn test_empty_actions_rejected() {
        let mut scenario = Arc::unwrap_or_clone(paramedic_scenario());
        scenario.actions.clear();
        let err = SessionEngine::new(Arc::new(scenario)).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyActions { .. }));
    }

    #[test]
    fn test_duplicate_action_rejected() {
        let mut scenario = Arc::unwrap_or_clone(paramedic_scenario());
        scenario.actions.push(action("vitals", false));
        let err = SessionEngine::new(Arc::new(scenario)).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateAction { .. }));
    }

    #[test]
    fn test_zero_critical_rejected() {
        let mut scenario = Arc::unwrap_or_clone(paramedic_scenario());
        for a in &mut scenario.actions {
            a.critical = false;
        }
        let err = SessionEngine::new(Arc::new(scenario)).unwrap_err();
        assert!(matches!(err, ConfigError::NoCriticalActions { .. }));
    }

    #[test]
    fn test_non_positive_refresh_cadence_rejected() {
        // A zero cadence would make the refresh loop never converge.
        for bad in [0.0, -1.0, f64::NAN] {
            let mut scenario = Arc::unwrap_or_clone(paramedic_scenario());
            scenario.vitals.refresh_seconds = bad;
            let err = SessionEngine::with_seed(Arc::new(scenario), 7).unwrap_err();
            assert!(matches!(err, ConfigError::ValidationError { .. }), "accepted {bad}");
        }
    }

    #[test]
    fn test_inverted_vitals_range_rejected() {
        let mut scenario = Arc::unwrap_or_clone(paramedic_scenario());
        scenario.vitals.heart_rate_range.min = 130;
        scenario.vitals.heart_rate_range.max = 110;
        let err = SessionEngine::with_seed(Arc::new(scenario), 7).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn test_bad_timing_rejected() {
        let mut scenario = Arc::unwrap_or_clone(paramedic_scenario());
        scenario.timing.early_finish_actions = 0;
        assert!(SessionEngine::with_seed(Arc::new(scenario), 7).is_err());

        let mut scenario = Arc::unwrap_or_clone(paramedic_scenario());
        scenario.timing.briefing_seconds = f64::INFINITY;
        assert!(SessionEngine::with_seed(Arc::new(scenario), 7).is_err());
    }

    // ---- Lifecycle ----

    #[test]
    fn test_ops_before_start_rejected() {
        let mut engine = SessionEngine::with_seed(paramedic_scenario(), 7).unwrap();
        assert!(matches!(
            engine.advance_time(1.0),
            Err(SessionError::NotStarted)
        ));
        assert!(matches!(
            engine.record_action("vitals"),
            Err(SessionError::NotStarted)
        ));
        assert!(matches!(engine.snapshot(), Err(SessionError::NotStarted)));
        assert!(matches!(engine.assessment(), Err(SessionError::NotStarted)));
    }

    #[test]
    fn test_start_resets_state() {
        let mut engine = started_engine();
        engine.advance_time(20.0).unwrap();
        engine.record_action("vitals").unwrap();
        let first_id = engine.session_id();

        engine.start(120.0).unwrap();
        let snap = engine.snapshot().unwrap();
        assert_eq!(snap.phase, Phase::Briefing);
        assert!(snap.elapsed_seconds.abs() < f64::EPSILON);
        assert!(snap.selected_actions.is_empty());
        assert!(!snap.show_assessment);
        assert_ne!(engine.session_id(), first_id);
    }

    #[test]
    fn test_start_rejects_bad_duration() {
        let mut engine = SessionEngine::with_seed(paramedic_scenario(), 7).unwrap();
        assert!(engine.start(0.0).is_err());
        assert!(engine.start(-10.0).is_err());
        assert!(engine.start(f64::NAN).is_err());
        assert!(engine.start(f64::INFINITY).is_err());
    }

    // ---- Time-driven transitions ----

    #[test]
    fn test_briefing_to_emergency_at_exactly_15() {
        let mut engine = started_engine();
        assert!(engine.advance_time(14.9).unwrap().is_none());
        assert_eq!(engine.phase(), Some(Phase::Briefing));

        let transition = engine.advance_time(15.0).unwrap().unwrap();
        assert_eq!(transition.from, Phase::Briefing);
        assert_eq!(transition.to, Phase::Emergency);
        assert_eq!(engine.phase(), Some(Phase::Emergency));
    }

    #[test]
    fn test_emergency_to_assessment_in_final_window() {
        let mut engine = started_engine();
        engine.advance_time(15.0).unwrap();
        assert!(engine.advance_time(149.9).unwrap().is_none());
        assert_eq!(engine.phase(), Some(Phase::Emergency));

        // 180 - 30 = 150
        let transition = engine.advance_time(150.0).unwrap().unwrap();
        assert_eq!(transition.to, Phase::Assessment);
        assert!(engine.is_complete());
    }

    #[test]
    fn test_single_step_per_call() {
        // A huge jump from Briefing lands in Emergency, not Assessment.
        let mut engine = started_engine();
        let transition = engine.advance_time(179.0).unwrap().unwrap();
        assert_eq!(transition.to, Phase::Emergency);
        assert_eq!(engine.phase(), Some(Phase::Emergency));

        // The next reading finishes the walk.
        let transition = engine.advance_time(179.0).unwrap().unwrap();
        assert_eq!(transition.to, Phase::Assessment);
    }

    #[test]
    fn test_time_regression_rejected_without_mutation() {
        let mut engine = started_engine();
        engine.advance_time(20.0).unwrap();
        let err = engine.advance_time(19.0).unwrap_err();
        assert!(matches!(err, SessionError::TimeRegression { .. }));
        let snap = engine.snapshot().unwrap();
        assert!((snap.elapsed_seconds - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_equal_time_accepted() {
        let mut engine = started_engine();
        engine.advance_time(10.0).unwrap();
        assert!(engine.advance_time(10.0).is_ok());
    }

    #[test]
    fn test_non_finite_time_rejected() {
        let mut engine = started_engine();
        assert!(matches!(
            engine.advance_time(f64::NAN),
            Err(SessionError::InvalidTime { .. })
        ));
        assert!(matches!(
            engine.advance_time(f64::INFINITY),
            Err(SessionError::InvalidTime { .. })
        ));
    }

    // ---- Action-driven transitions ----

    #[test]
    fn test_three_actions_force_early_assessment() {
        let mut engine = started_engine();
        engine.advance_time(20.0).unwrap();
        assert!(engine.record_action("vitals").unwrap().is_none());
        assert!(engine.record_action("airway").unwrap().is_none());

        let transition = engine.record_action("oxygen").unwrap().unwrap();
        assert_eq!(transition.from, Phase::Emergency);
        assert_eq!(transition.to, Phase::Assessment);
        assert!((transition.at_seconds - 20.0).abs() < f64::EPSILON);
        assert!(engine.is_complete());
    }

    #[test]
    fn test_duplicate_action_is_silent_noop() {
        let mut engine = started_engine();
        engine.advance_time(20.0).unwrap();
        engine.record_action("vitals").unwrap();
        assert!(engine.record_action("vitals").unwrap().is_none());
        assert!(engine.record_action("vitals").unwrap().is_none());

        let snap = engine.snapshot().unwrap();
        assert_eq!(snap.selected_actions.len(), 1);
        assert_eq!(engine.phase(), Some(Phase::Emergency));
    }

    #[test]
    fn test_unknown_action_rejected() {
        let mut engine = started_engine();
        engine.advance_time(20.0).unwrap();
        let err = engine.record_action("defibrillate").unwrap_err();
        assert!(matches!(err, SessionError::UnknownAction { .. }));
        assert!(engine.snapshot().unwrap().selected_actions.is_empty());
    }

    #[test]
    fn test_early_exit_never_fires_in_briefing() {
        let mut engine = started_engine();
        engine.record_action("vitals").unwrap();
        engine.record_action("airway").unwrap();
        assert!(engine.record_action("oxygen").unwrap().is_none());
        assert_eq!(engine.phase(), Some(Phase::Briefing));
        assert_eq!(engine.snapshot().unwrap().selected_actions.len(), 3);
    }

    // ---- Terminal behavior ----

    #[test]
    fn test_mutation_after_assessment_rejected() {
        let mut engine = started_engine();
        engine.advance_time(20.0).unwrap();
        engine.record_action("vitals").unwrap();
        engine.record_action("airway").unwrap();
        engine.record_action("oxygen").unwrap();
        assert!(engine.is_complete());

        assert!(matches!(
            engine.advance_time(30.0),
            Err(SessionError::SessionComplete)
        ));
        assert!(matches!(
            engine.record_action("monitor"),
            Err(SessionError::SessionComplete)
        ));

        let snap = engine.snapshot().unwrap();
        assert_eq!(snap.selected_actions.len(), 3);
        assert!((snap.elapsed_seconds - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_assessment_sets_show_flag() {
        let mut engine = started_engine();
        engine.advance_time(15.0).unwrap();
        assert!(!engine.snapshot().unwrap().show_assessment);
        engine.advance_time(150.0).unwrap();
        let snap = engine.snapshot().unwrap();
        assert!(snap.show_assessment);
        assert!(!snap.running);
    }

    #[test]
    fn test_assessment_score() {
        let mut engine = started_engine();
        engine.advance_time(20.0).unwrap();
        engine.record_action("vitals").unwrap();
        engine.record_action("airway").unwrap();
        engine.record_action("oxygen").unwrap();

        let assessment = engine.assessment().unwrap();
        assert_eq!(assessment.score, 67);
        assert_eq!(assessment.action_log.len(), 3);
    }

    // ---- Vitals ----

    #[test]
    fn test_vitals_static_during_briefing() {
        let mut engine = started_engine();
        engine.advance_time(14.0).unwrap();
        let vitals = engine.snapshot().unwrap().vitals;
        assert_eq!(vitals.heart_rate, 95);
        assert_eq!(vitals.oxygen_saturation, 98);
    }

    #[test]
    fn test_vitals_refresh_in_emergency_range() {
        let mut engine = started_engine();
        engine.advance_time(15.0).unwrap();
        for step in 0..20 {
            engine.advance_time(18.0 + f64::from(step) * 3.0).unwrap();
            let vitals = engine.snapshot().unwrap().vitals;
            assert!((110..=129).contains(&vitals.heart_rate));
            assert!((93..=97).contains(&vitals.oxygen_saturation));
        }
    }

    #[test]
    fn test_vitals_stop_while_paused() {
        let mut engine = started_engine();
        engine.advance_time(15.0).unwrap();
        engine.advance_time(18.0).unwrap();
        engine.pause().unwrap();
        let frozen = engine.snapshot().unwrap().vitals;

        engine.advance_time(60.0).unwrap();
        assert_eq!(engine.snapshot().unwrap().vitals, frozen);

        engine.resume().unwrap();
        engine.advance_time(63.0).unwrap();
        // after resume the cadence re-arms from the resume point
        let vitals = engine.snapshot().unwrap().vitals;
        assert!((110..=129).contains(&vitals.heart_rate));
    }

    #[test]
    fn test_vitals_stop_on_assessment() {
        let mut engine = started_engine();
        engine.advance_time(15.0).unwrap();
        engine.advance_time(150.0).unwrap();
        assert!(engine.is_complete());
        let frozen = engine.snapshot().unwrap().vitals;
        // further signals are rejected entirely; vitals can never move again
        assert!(engine.advance_time(160.0).is_err());
        assert_eq!(engine.snapshot().unwrap().vitals, frozen);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let run = || {
            let mut engine = SessionEngine::with_seed(paramedic_scenario(), 99).unwrap();
            engine.start(180.0).unwrap();
            engine.advance_time(15.0).unwrap();
            engine.advance_time(30.0).unwrap();
            engine.snapshot().unwrap().vitals
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_debug_output() {
        let engine = started_engine();
        let debug = format!("{engine:?}");
        assert!(debug.contains("SessionEngine"));
        assert!(debug.contains("paramedic"));
    }
}
