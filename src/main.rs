use anyhow::Context;
use clap::Parser;
use macroquad::prelude::{clear_background, get_frame_time, next_frame};

use toroidal_life::{Config, Simulation, input, rendering};

/// Command-line arguments for launching the simulation.
#[derive(Debug, Parser)]
#[command(author, version, about = "Conway's Game of Life on a toroidal grid", long_about = None)]
struct CliArgs {
    /// Window width in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = Config::DEFAULT_WINDOW_WIDTH)]
    width: u32,
    /// Window height in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = Config::DEFAULT_WINDOW_HEIGHT)]
    height: u32,
    /// Side length of one grid cell in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = Config::DEFAULT_CELL_SIZE)]
    cell_size: u32,
    /// Generations advanced per second while running.
    #[arg(long, value_name = "PER_SECOND", default_value_t = Config::DEFAULT_TICK_RATE)]
    tick_rate: f32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let config = Config::new(args.width, args.height, args.cell_size, args.tick_rate)
        .context("invalid configuration")?;

    log::info!(
        "starting {}x{} grid ({}px cells, {} ticks/s)",
        config.rows(),
        config.cols(),
        config.cell_size,
        config.tick_rate,
    );

    macroquad::Window::from_config(config.window_conf(), run(config));
    Ok(())
}

/// The frame loop: poll input, advance the simulation, draw.
/// The core never blocks here; pacing comes from the frame timer.
async fn run(config: Config) {
    let cell_size = config.cell_size as f32;
    let mut sim = Simulation::new(&config);

    loop {
        if input::quit_requested() {
            break;
        }

        input::handle_mouse(&mut sim, cell_size);
        sim = input::handle_keyboard(sim);
        sim = sim.tick(get_frame_time());

        clear_background(rendering::BACKGROUND);
        rendering::draw_cells(&sim.grid, cell_size);
        rendering::draw_hud(&sim);

        next_frame().await;
    }
}
