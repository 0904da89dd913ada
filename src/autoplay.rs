//! Drives the session from the fixed timestep while auto-play is on.

use std::time::Duration;

use bevy::prelude::*;

use crate::{prelude::UPDATE_INTERVAL_MS, session::Session, state::GameState};

/// Runs [`Session::tick`] once per `interval` while the game is in [`GameState::Running`],
/// and keeps the game state in line with the session's play mode.
pub struct AutoPlayPlugin {
    pub interval: Duration,
}

impl Default for AutoPlayPlugin {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(UPDATE_INTERVAL_MS),
        }
    }
}

impl Plugin for AutoPlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Session>()
            .insert_resource(Time::<Fixed>::from_duration(self.interval))
            .add_systems(
                FixedUpdate,
                auto_step.run_if(in_state(GameState::Running)),
            )
            .add_systems(
                Update,
                follow_session_mode.run_if(not(in_state(GameState::Load))),
            )
            .add_systems(OnEnter(GameState::Running), drop_pending_tick);
    }
}

// ——> SYSTEMS

fn auto_step(mut session: ResMut<Session>) {
    if session.tick() {
        debug!(
            "generation {}, {} alive",
            session.generation(),
            session.grid().live_count()
        );
    }
}

fn follow_session_mode(
    session: Res<Session>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let wanted = GameState::from(session.mode());
    if *state.get() != wanted {
        next_state.set(wanted);
    }
}

/// The fixed loop keeps accumulating while idle; the first tick after a start is a full
/// interval away.
fn drop_pending_tick(mut time: ResMut<Time<Fixed>>) {
    let overstep = time.overstep();
    time.discard_overstep(overstep);
}
