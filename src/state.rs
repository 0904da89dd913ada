use bevy::prelude::*;

use crate::session::PlayMode;

#[derive(States, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Load,
    Idle,
    Running,
}

impl From<PlayMode> for GameState {
    fn from(mode: PlayMode) -> Self {
        match mode {
            PlayMode::Idle => GameState::Idle,
            PlayMode::Running => GameState::Running,
        }
    }
}
