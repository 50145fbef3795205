//! Building-wide dispatcher for the elevator simulation
//!
//! `SimBuilding` owns the fleet and the request queues. It hands batches of
//! queued requests to elevators parked at the ground or top floor, advances
//! every elevator in lockstep, and derives the system status from the fleet.

use log::{debug, info, warn};

use super::config::BuildingConfig;
use super::elevator::{Elevator, ElevatorReport};
use super::error::SimError;
use super::report::BuildingReport;
use super::requests::RequestQueues;
use super::sim_elevator::SimElevator;
use super::types::{Direction, ElevatorId, ElevatorSystemStatus, Request};

impl ElevatorSystemStatus {
    /// Derive the system status from the fleet
    ///
    /// A running system stays running. Once a stop has been requested the
    /// system is out of service only when every elevator is parked at the
    /// ground floor with closed doors.
    pub fn derive(stop_requested: bool, elevators: &[ElevatorReport]) -> Self {
        if !stop_requested {
            ElevatorSystemStatus::Running
        } else if elevators.iter().all(ElevatorReport::is_halted_at_ground) {
            ElevatorSystemStatus::OutOfService
        } else {
            ElevatorSystemStatus::Stopping
        }
    }
}

/// The dispatcher controlling every elevator in a building
#[derive(Debug, Clone)]
pub struct SimBuilding<E: Elevator = SimElevator> {
    config: BuildingConfig,
    elevators: Vec<E>,
    requests: RequestQueues,
    status: ElevatorSystemStatus,
}

impl SimBuilding<SimElevator> {
    /// Create a building with `num_elevators` elevators, all started at the
    /// ground floor
    pub fn new(
        num_floors: usize,
        num_elevators: usize,
        elevator_capacity: usize,
    ) -> Result<Self, SimError> {
        Self::from_config(BuildingConfig::new(
            num_floors,
            num_elevators,
            elevator_capacity,
        ))
    }

    pub fn from_config(config: BuildingConfig) -> Result<Self, SimError> {
        Self::new_with(config, |id| {
            SimElevator::new(id, config.num_floors, config.elevator_capacity)
        })
    }
}

impl<E: Elevator> SimBuilding<E> {
    /// Create a building whose elevators are produced by `make_elevator`,
    /// called once per index in fleet order
    pub fn new_with<F>(config: BuildingConfig, make_elevator: F) -> Result<Self, SimError>
    where
        F: FnMut(ElevatorId) -> E,
    {
        config.validate()?;

        let mut elevators: Vec<E> = (0..config.num_elevators)
            .map(ElevatorId)
            .map(make_elevator)
            .collect();
        for elevator in &mut elevators {
            elevator.start();
        }

        info!(
            "Building created: {} floors, {} elevators, capacity {}",
            config.num_floors, config.num_elevators, config.elevator_capacity
        );

        Ok(Self {
            config,
            elevators,
            requests: RequestQueues::new(),
            status: ElevatorSystemStatus::Running,
        })
    }

    /// Queue a request for dispatch
    pub fn submit(&mut self, request: Request) -> Result<(), SimError> {
        self.requests.submit(request, self.config.num_floors)?;
        if self.status != ElevatorSystemStatus::Running {
            warn!(
                "Request {} queued while the system is {}; it waits for a restart",
                request, self.status
            );
        }
        Ok(())
    }

    /// Advance the whole system by `num_steps` steps
    ///
    /// Queued requests are dispatched once, then every elevator steps
    /// `num_steps` times in lockstep, lowest index first in each round.
    pub fn step(&mut self, num_steps: u32) -> Result<(), SimError> {
        if num_steps < 1 {
            return Err(SimError::InvalidArgument {
                name: "num_steps",
                value: u64::from(num_steps),
            });
        }

        self.dispatch(Direction::Up);
        self.dispatch(Direction::Down);

        for _ in 0..num_steps {
            for elevator in &mut self.elevators {
                elevator.step();
            }
        }

        if self.status == ElevatorSystemStatus::Stopping {
            self.refresh_status(true);
        }
        Ok(())
    }

    /// Start the system if every elevator is parked at the ground floor
    ///
    /// Returns false and changes nothing if any elevator is moving, has its
    /// doors open, or is away from the ground floor.
    pub fn start(&mut self) -> bool {
        if !self.elevators.iter().all(|e| e.is_halted_at_ground()) {
            debug!("Start refused: not every elevator is parked at the ground floor");
            return false;
        }

        for elevator in &mut self.elevators {
            elevator.start();
        }
        self.refresh_status(false);
        info!("Elevator system started");
        true
    }

    /// Take every elevator out of service
    ///
    /// The system is out of service right away if the whole fleet is already
    /// parked at the ground floor, otherwise it is stopping.
    pub fn stop(&mut self) {
        for elevator in &mut self.elevators {
            elevator.take_out_of_service();
        }
        self.refresh_status(true);
        info!("Elevator system stop requested, now {}", self.status);
    }

    fn refresh_status(&mut self, stop_requested: bool) {
        let previous = self.status;
        self.status = ElevatorSystemStatus::derive(stop_requested, &self.elevator_reports());
        if previous != self.status {
            info!("System status {} -> {}", previous, self.status);
        }
    }

    /// Hand queued requests for `direction` to elevators parked at the
    /// matching end of the building
    fn dispatch(&mut self, direction: Direction) {
        let boundary_floor = match direction {
            Direction::Up => 0,
            Direction::Down => self.config.top_floor(),
            Direction::Stopped => return,
        };

        for elevator in &mut self.elevators {
            if self.requests.is_empty(direction) {
                break;
            }
            if elevator.current_floor() != boundary_floor || !elevator.is_taking_requests() {
                continue;
            }

            let batch = self
                .requests
                .take_batch(direction, self.config.elevator_capacity);
            debug!(
                "Dispatching {} {:?} request(s) to {}",
                batch.len(),
                direction,
                elevator.id()
            );
            if let Err(e) = elevator.accept_batch(batch.clone()) {
                warn!("{}; returning batch to the queue", e);
                self.requests.restore_batch(direction, batch);
            }
        }
    }

    pub fn report(&self) -> BuildingReport {
        BuildingReport::new(self)
    }

    pub fn elevator_reports(&self) -> Vec<ElevatorReport> {
        self.elevators.iter().map(|e| e.report()).collect()
    }

    pub fn elevators(&self) -> &[E] {
        &self.elevators
    }

    pub fn requests(&self) -> &RequestQueues {
        &self.requests
    }

    pub fn config(&self) -> BuildingConfig {
        self.config
    }

    pub fn num_floors(&self) -> usize {
        self.config.num_floors
    }

    pub fn num_elevators(&self) -> usize {
        self.config.num_elevators
    }

    pub fn elevator_capacity(&self) -> usize {
        self.config.elevator_capacity
    }

    pub fn status(&self) -> ElevatorSystemStatus {
        self.status
    }
}
