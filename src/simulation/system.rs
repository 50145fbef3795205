//! Entry point for driving the elevator simulation
//!
//! `ElevatorSystem` is the surface callers use. It forwards to the
//! dispatcher and keeps running statistics for the headless runner.

use super::building::SimBuilding;
use super::elevator::Elevator;
use super::error::SimError;
use super::report::BuildingReport;
use super::sim_elevator::SimElevator;
use super::types::Request;

/// Counters collected over the lifetime of a system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    pub requests_submitted: usize,
    pub requests_rejected: usize,
    pub steps_taken: u64,
}

/// A building's elevator system as seen by a caller
#[derive(Debug, Clone)]
pub struct ElevatorSystem<E: Elevator = SimElevator> {
    building: SimBuilding<E>,
    stats: SimStats,
}

impl ElevatorSystem<SimElevator> {
    pub fn new(
        num_floors: usize,
        num_elevators: usize,
        elevator_capacity: usize,
    ) -> Result<Self, SimError> {
        SimBuilding::new(num_floors, num_elevators, elevator_capacity).map(Self::from_building)
    }
}

impl<E: Elevator> ElevatorSystem<E> {
    pub fn from_building(building: SimBuilding<E>) -> Self {
        Self {
            building,
            stats: SimStats::default(),
        }
    }

    pub fn add_request(&mut self, request: Request) -> Result<(), SimError> {
        match self.building.submit(request) {
            Ok(()) => {
                self.stats.requests_submitted += 1;
                Ok(())
            }
            Err(e) => {
                self.stats.requests_rejected += 1;
                Err(e)
            }
        }
    }

    pub fn start_elevator_system(&mut self) -> bool {
        self.building.start()
    }

    pub fn stop_elevator_system(&mut self) {
        self.building.stop();
    }

    pub fn take_step(&mut self, num_steps: u32) -> Result<(), SimError> {
        self.building.step(num_steps)?;
        self.stats.steps_taken += u64::from(num_steps);
        Ok(())
    }

    pub fn elevator_system_status(&self) -> BuildingReport {
        self.building.report()
    }

    pub fn building(&self) -> &SimBuilding<E> {
        &self.building
    }

    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// Accepted requests that have left the queues for an elevator
    pub fn requests_dispatched(&self) -> usize {
        self.stats.requests_submitted - self.building.requests().pending()
    }
}
