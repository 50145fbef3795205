use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use elevator_sim::simulation::{ElevatorSystem, ElevatorSystemStatus, RequestGenerator};

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Headless elevator dispatch simulation")]
struct Cli {
    /// Number of floors in the building
    #[arg(long, default_value = "10")]
    floors: usize,

    /// Number of elevators in the building
    #[arg(long, default_value = "3")]
    elevators: usize,

    /// Maximum number of requests an elevator takes per trip
    #[arg(long, default_value = "4")]
    capacity: usize,

    /// Number of simulation steps to run
    #[arg(long, default_value = "60")]
    steps: u32,

    /// Random requests submitted before each step
    #[arg(long, default_value = "1")]
    requests_per_step: usize,

    /// Seed for reproducible request generation
    #[arg(long)]
    seed: Option<u64>,

    /// Step after which the system is asked to stop
    #[arg(long)]
    stop_at: Option<u32>,

    /// Print the system summary every N steps
    #[arg(long, default_value = "10")]
    report_every: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    run_headless(&cli)
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(cli: &Cli) -> Result<()> {
    println!("Running elevator simulation in headless mode...");
    println!(
        "Floors: {}, Elevators: {}, Capacity: {}, Steps: {}",
        cli.floors, cli.elevators, cli.capacity, cli.steps
    );
    println!();

    let mut system = ElevatorSystem::new(cli.floors, cli.elevators, cli.capacity)
        .context("Failed to build the elevator system")?;
    let mut generator = match cli.seed {
        Some(seed) => RequestGenerator::new_with_seed(cli.floors, seed),
        None => RequestGenerator::new(cli.floors),
    };

    println!("Initial state:");
    let report = system.elevator_system_status();
    report.print_summary();
    report.draw_shafts();

    let report_every = cli.report_every.max(1);
    for step in 1..=cli.steps {
        if system.elevator_system_status().system_status() == ElevatorSystemStatus::Running {
            for _ in 0..cli.requests_per_step {
                let Some(request) = generator.next_request() else {
                    break;
                };
                if let Err(e) = system.add_request(request) {
                    warn!("Generated request rejected: {}", e);
                }
            }
        }

        system
            .take_step(1)
            .with_context(|| format!("Step {} failed", step))?;

        if cli.stop_at == Some(step) {
            system.stop_elevator_system();
        }

        if step % report_every == 0 {
            println!("--- After step {} ---", step);
            let report = system.elevator_system_status();
            report.print_summary();
            report.draw_shafts();
        }
    }

    println!("=== Final State ===");
    let report = system.elevator_system_status();
    report.print_summary();
    report.draw_shafts();

    let stats = system.stats();
    info!("=== SIMULATION COMPLETE ===");
    info!("Steps taken: {}", stats.steps_taken);
    info!("Requests submitted: {}", stats.requests_submitted);
    info!("Requests rejected: {}", stats.requests_rejected);
    info!("Requests dispatched: {}", system.requests_dispatched());
    info!(
        "Requests pending: {}",
        report.up_requests().len() + report.down_requests().len()
    );
    info!("Final status: {}", report.system_status());

    Ok(())
}
