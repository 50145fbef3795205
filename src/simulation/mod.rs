//! Standalone elevator simulation module
//!
//! This module contains the dispatcher, the elevator cars and the reports.
//! It runs without any I/O so it can be driven from tests or the headless
//! runner alike.

mod building;
mod config;
mod elevator;
mod error;
mod generator;
mod report;
mod requests;
mod sim_elevator;
mod system;
mod types;

pub use building::SimBuilding;
pub use config::BuildingConfig;
pub use elevator::{Elevator, ElevatorReport};
pub use error::SimError;
pub use generator::RequestGenerator;
pub use report::BuildingReport;
pub use requests::RequestQueues;
pub use sim_elevator::SimElevator;
pub use system::{ElevatorSystem, SimStats};
pub use types::{
    Direction, ElevatorId, ElevatorSystemStatus, Request, BOUNDARY_WAIT_STEPS, DOOR_OPEN_STEPS,
};
