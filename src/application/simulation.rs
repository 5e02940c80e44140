use crate::config::Config;
use crate::domain::Grid;
use log::info;

/// Cell count at which `tick` switches to the rayon step path.
const PARALLEL_THRESHOLD: usize = 10_000;

/// Simulation owns the grid, the generation counter and the run flag,
/// and coordinates timed generation stepping. This is the application
/// layer over the domain logic; the frame loop owns exactly one of these.
pub struct Simulation {
    pub grid: Grid,
    pub generation: u64,
    pub is_running: bool,
    update_timer: f32,
    tick_rate: f32,
}

impl Simulation {
    /// Create a paused simulation with an all-dead grid sized from config
    pub fn new(config: &Config) -> Self {
        Self {
            grid: Grid::new(config.rows(), config.cols()),
            generation: 0,
            is_running: false,
            update_timer: 0.0,
            tick_rate: config.tick_rate,
        }
    }

    /// Flip one cell. Any edit resets the generation counter, even while
    /// the simulation is paused.
    pub fn toggle_cell(&mut self, row: i32, col: i32) {
        self.grid.toggle(row, col);
        self.generation = 0;
    }

    /// Toggle play/pause state; grid and counter are untouched
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Clear the grid, zero the counter and force pause
    pub fn reset(mut self) -> Self {
        self.grid.clear();
        self.generation = 0;
        self.is_running = false;
        info!("grid cleared");
        self
    }

    /// Advance the simulation by one frame. While running, frame time
    /// accumulates against the tick interval and each expiry executes
    /// one generation step.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.tick_rate;

        if self.update_timer >= update_interval {
            self.advance();
            self.update_timer = 0.0;
        }

        self
    }

    /// Install the next generation wholesale and bump the counter.
    /// The live grid is never edited in place during rule evaluation.
    fn advance(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        self.grid = if rows * cols >= PARALLEL_THRESHOLD {
            self.grid.step_parallel()
        } else {
            self.grid.step()
        };
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn test_config() -> Config {
        // 12x8 cells at 10px, 10 ticks/s
        Config::new(120, 80, 10, 10.0).expect("valid test config")
    }

    fn blinker_sim() -> Simulation {
        let mut sim = Simulation::new(&test_config());
        sim.grid.set(4, 3, Cell::Alive);
        sim.grid.set(4, 4, Cell::Alive);
        sim.grid.set(4, 5, Cell::Alive);
        sim
    }

    #[test]
    fn starts_paused_with_empty_grid_at_generation_zero() {
        let sim = Simulation::new(&test_config());
        assert!(!sim.is_running);
        assert_eq!(sim.generation, 0);
        assert_eq!(sim.grid.dimensions(), (8, 12));
        assert_eq!(sim.grid.population(), 0);
    }

    #[test]
    fn toggle_running_flips_unconditionally() {
        let sim = Simulation::new(&test_config());
        let sim = sim.toggle_running();
        assert!(sim.is_running);
        let sim = sim.toggle_running();
        assert!(!sim.is_running);
    }

    #[test]
    fn tick_while_paused_does_nothing() {
        let mut sim = blinker_sim();
        let before = sim.grid.clone();
        for _ in 0..10 {
            sim = sim.tick(1.0);
        }
        assert_eq!(sim.generation, 0);
        assert_eq!(sim.grid, before);
    }

    #[test]
    fn generation_counts_executed_steps() {
        let mut sim = blinker_sim().toggle_running();
        for _ in 0..5 {
            sim = sim.tick(1.0);
        }
        assert_eq!(sim.generation, 5);
    }

    #[test]
    fn tick_accumulates_frame_time_until_the_interval_elapses() {
        // 10 ticks/s -> 0.1s interval
        let mut sim = blinker_sim().toggle_running();
        sim = sim.tick(0.04);
        sim = sim.tick(0.04);
        assert_eq!(sim.generation, 0);
        sim = sim.tick(0.04);
        assert_eq!(sim.generation, 1);
    }

    #[test]
    fn tick_steps_the_grid_synchronously() {
        let sim = blinker_sim().toggle_running().tick(1.0);
        assert!(sim.grid.get(3, 4).is_alive());
        assert!(sim.grid.get(4, 4).is_alive());
        assert!(sim.grid.get(5, 4).is_alive());
        assert_eq!(sim.grid.population(), 3);
    }

    #[test]
    fn toggle_cell_flips_state_and_resets_generation() {
        let mut sim = blinker_sim().toggle_running();
        for _ in 0..3 {
            sim = sim.tick(1.0);
        }
        assert_eq!(sim.generation, 3);

        sim.toggle_cell(0, 0);
        assert!(sim.grid.get(0, 0).is_alive());
        assert_eq!(sim.generation, 0);

        sim.toggle_cell(0, 0);
        assert!(!sim.grid.get(0, 0).is_alive());
    }

    #[test]
    fn toggle_cell_resets_generation_even_while_paused() {
        let mut sim = blinker_sim().toggle_running();
        for _ in 0..2 {
            sim = sim.tick(1.0);
        }
        sim = sim.toggle_running();
        assert!(!sim.is_running);
        assert_eq!(sim.generation, 2);

        sim.toggle_cell(7, 11);
        assert_eq!(sim.generation, 0);
    }

    #[test]
    fn reset_clears_grid_zeroes_counter_and_pauses() {
        let mut sim = blinker_sim().toggle_running();
        for _ in 0..2 {
            sim = sim.tick(1.0);
        }
        let sim = sim.reset();
        assert_eq!(sim.grid.population(), 0);
        assert_eq!(sim.generation, 0);
        assert!(!sim.is_running);
    }
}
