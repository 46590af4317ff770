use tracing::{debug, info};

use crate::config::SimConfig;
use crate::domain::{Grid, Rule, RuleKind};
use crate::error::SimResult;
use crate::rendering::{Surface, render};

/// Whether generations are currently advancing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    /// Generations do not advance; edits are expected here
    #[default]
    Idle,
    /// Generations advance on the rule's cadence
    Running,
}

/// Outcome of a single `Simulation::tick`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Paused; the grid was re-rendered as-is
    Idle,
    /// Running, but the rule's interval has not elapsed yet
    Waiting,
    /// A generation was computed, committed and rendered
    Advanced { generation: u64 },
}

/// Simulation is the explicit context for one automaton.
/// It owns the grid, the run state and the cadence; the caller drives it
/// by calling `tick` once per frame with the elapsed time.
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    state: RunState,
    selected_rule: RuleKind,
    active_rule: &'static dyn Rule,
    interval: f32,
    update_timer: f32,
    generation: u64,
}

impl Simulation {
    /// Create an idle simulation sized for a `(width, height)` surface
    pub fn new(config: SimConfig, surface_size: (u32, u32)) -> SimResult<Self> {
        config.validate()?;
        let (width, height) = surface_size;
        let grid = Grid::for_surface(width, height, &config);
        let selected_rule = RuleKind::default();
        let (rows, cols) = grid.dimensions();
        info!(rows, cols, cell_size = config.cell_size, "Created simulation grid");

        Ok(Self {
            interval: config.interval(selected_rule).as_secs_f32(),
            config,
            grid,
            state: RunState::Idle,
            selected_rule,
            active_rule: selected_rule.rule(),
            update_timer: 0.0,
            generation: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for the edit controller.
    /// Edits made while running are overwritten by the next commit.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub const fn state(&self) -> RunState {
        self.state
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running)
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn selected_rule(&self) -> RuleKind {
        self.selected_rule
    }

    /// Choose the rule used by the next `start` or `step`.
    /// A run already in progress keeps the rule it was started with.
    pub fn select_rule(&mut self, rule: RuleKind) {
        self.selected_rule = rule;
    }

    /// Idle -> Running with the given rule
    pub fn start(&mut self, rule: RuleKind) {
        if self.is_running() {
            debug!(%rule, "Start ignored, simulation already running");
            return;
        }
        self.selected_rule = rule;
        self.active_rule = rule.rule();
        self.interval = self.config.interval(rule).as_secs_f32();
        // First generation fires on the next tick
        self.update_timer = self.interval;
        self.state = RunState::Running;
        info!(%rule, interval_ms = self.interval * 1000.0, "Simulation started");
    }

    /// Running -> Idle. The current generation is kept.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.state = RunState::Idle;
        self.update_timer = 0.0;
        info!(generation = self.generation, "Simulation stopped");
    }

    /// Force Idle and rebuild an empty grid for the surface's current size
    pub fn reset(&mut self, surface: &mut dyn Surface) {
        self.state = RunState::Idle;
        self.update_timer = 0.0;
        self.generation = 0;
        let (width, height) = surface.size();
        self.grid = Grid::for_surface(width, height, &self.config);
        let (rows, cols) = self.grid.dimensions();
        info!(rows, cols, "Simulation reset");
        render(&self.grid, surface);
    }

    /// Fill cells at random with the configured probability and pause
    pub fn randomize(&mut self, surface: &mut dyn Surface) {
        self.stop();
        self.generation = 0;
        self.grid.randomize(self.config.fill_probability);
        debug!(population = self.grid.population(), "Grid randomized");
        render(&self.grid, surface);
    }

    /// Advance one generation with the selected rule while paused.
    /// Returns `None` when a run is in progress.
    pub fn step(&mut self, surface: &mut dyn Surface) -> SimResult<Option<u64>> {
        if self.is_running() {
            return Ok(None);
        }
        let generation = self.advance(self.selected_rule.rule())?;
        render(&self.grid, surface);
        Ok(Some(generation))
    }

    /// Update the simulation by one frame
    pub fn tick(&mut self, delta_time: f32, surface: &mut dyn Surface) -> SimResult<Tick> {
        if !self.is_running() {
            render(&self.grid, surface);
            return Ok(Tick::Idle);
        }

        self.update_timer += delta_time;
        if self.update_timer < self.interval {
            return Ok(Tick::Waiting);
        }

        let generation = self.advance(self.active_rule)?;
        self.update_timer = 0.0;
        render(&self.grid, surface);
        Ok(Tick::Advanced { generation })
    }

    /// Redraw the current grid without advancing
    pub fn render(&self, surface: &mut dyn Surface) {
        render(&self.grid, surface);
    }

    /// Compute the whole next generation, then commit it in one step
    fn advance(&mut self, rule: &dyn Rule) -> SimResult<u64> {
        let snapshot = rule.next_generation(&self.grid);
        self.grid.commit(&snapshot)?;
        self.generation += 1;
        debug!(
            rule = rule.name(),
            generation = self.generation,
            population = snapshot.count_filled(),
            "Generation committed"
        );
        Ok(self.generation)
    }
}
