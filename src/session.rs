//! The interaction state machine: one owned board plus its auto-play mode.

use bevy::prelude::{info, Resource};

use crate::{
    engine,
    error::Result,
    grid::{check_probability, CellCoord, Grid},
    patterns::Pattern,
    prelude::{BOARD_HEIGHT, BOARD_WIDTH, RANDOMIZE_PROBABILITY},
};

const _: () = assert!(BOARD_WIDTH > 0 && BOARD_HEIGHT > 0);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayMode {
    #[default]
    Idle,
    Running,
}

/// Everything a user can ask the board to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleAutoPlay,
    Step,
    Clear,
    Randomize,
    ToggleCell(CellCoord),
    LoadPattern(Pattern),
}

#[derive(Resource, Debug, Clone)]
pub struct Session {
    grid: Grid,
    mode: PlayMode,
    /// transitions committed since the board was last reset
    generation: u64,
    probability: f64,
    rng: fastrand::Rng,
}

impl Session {
    /// An idle session over an all-dead `width` x `height` board.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self::with_grid(Grid::new(width, height)?))
    }

    /// An idle session over an externally seeded board.
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            mode: PlayMode::Idle,
            generation: 0,
            probability: RANDOMIZE_PROBABILITY,
            rng: fastrand::Rng::new(),
        }
    }

    /// Sets the alive probability used by [`Session::randomize`].
    pub fn with_probability(mut self, probability: f64) -> Result<Self> {
        self.probability = check_probability(probability)?;
        Ok(self)
    }

    /// Replaces the generator used by [`Session::randomize`].
    pub fn with_rng(mut self, rng: fastrand::Rng) -> Self {
        self.rng = rng;
        self
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.mode == PlayMode::Running
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begins auto-play. Returns `false` if it was already running.
    pub fn start(&mut self) -> bool {
        self.set_mode(PlayMode::Running)
    }

    /// Ends auto-play. Returns `false` if it was already idle.
    pub fn stop(&mut self) -> bool {
        self.set_mode(PlayMode::Idle)
    }

    pub fn toggle_auto_play(&mut self) -> PlayMode {
        match self.mode {
            PlayMode::Idle => self.start(),
            PlayMode::Running => self.stop(),
        };
        self.mode
    }

    fn set_mode(&mut self, mode: PlayMode) -> bool {
        if self.mode == mode {
            return false;
        }
        info!("auto-play {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        true
    }

    /// One transition, regardless of the auto-play mode.
    pub fn step(&mut self) {
        engine::step(&mut self.grid);
        self.generation += 1;
    }

    /// The periodic entry point. Only advances while running, so nothing happens after a stop.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.step();
        true
    }

    /// Stops auto-play and kills every cell.
    pub fn clear(&mut self) {
        self.stop();
        self.grid.clear();
        self.generation = 0;
    }

    /// Re-rolls every cell with the session's probability. The auto-play mode is kept.
    pub fn randomize(&mut self) {
        self.grid.fill_random(&mut self.rng, self.probability);
        self.generation = 0;
        info!(
            "randomized board, {} of {} cells alive",
            self.grid.live_count(),
            self.grid.width() * self.grid.height()
        );
    }

    pub fn toggle_cell(&mut self, coord: CellCoord) -> Result<bool> {
        self.grid.toggle(coord.row, coord.col)
    }

    pub fn set_cell(&mut self, coord: CellCoord, alive: bool) -> Result<()> {
        self.grid.set(coord.row, coord.col, alive)
    }

    /// Replaces the board with `pattern` centred on it. The auto-play mode is kept.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> Result<()> {
        let mut grid = Grid::dead(self.grid.width(), self.grid.height());
        grid.stamp(pattern.cells, pattern.centred_origin(&grid))?;
        self.grid = grid;
        self.generation = 0;
        info!("loaded {}", pattern.name);
        Ok(())
    }

    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::ToggleAutoPlay => {
                self.toggle_auto_play();
            }
            Action::Step => self.step(),
            Action::Clear => self.clear(),
            Action::Randomize => self.randomize(),
            Action::ToggleCell(coord) => {
                self.toggle_cell(coord)?;
            }
            Action::LoadPattern(pattern) => self.load_pattern(&pattern)?,
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_grid(Grid::dead(BOARD_WIDTH, BOARD_HEIGHT))
    }
}
