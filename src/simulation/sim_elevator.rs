//! Elevator car logic for the elevator simulation
//!
//! A `SimElevator` shuttles between the ground floor and the top floor. It
//! picks up a batch while parked at one end, serves every stop of the batch
//! on the way to the other end, and parks there waiting for the next batch.
//! If nothing arrives within `BOUNDARY_WAIT_STEPS` it sweeps back empty so
//! that both ends of the building keep being visited.

use log::debug;

use super::elevator::{Elevator, ElevatorReport};
use super::error::SimError;
use super::types::{Direction, ElevatorId, Request, BOUNDARY_WAIT_STEPS, DOOR_OPEN_STEPS};

/// A single elevator car
#[derive(Debug, Clone)]
pub struct SimElevator {
    id: ElevatorId,
    num_floors: usize,
    capacity: usize,
    current_floor: usize,
    direction: Direction,
    door_closed: bool,
    door_timer: u32,
    wait_timer: u32,
    taking_requests: bool,
    out_of_service: bool,
    requests: Vec<Request>,
    floor_stops: Vec<bool>,
}

impl SimElevator {
    /// Create an elevator parked at the ground floor, doors closed and out of
    /// service until `start` is called
    pub fn new(id: ElevatorId, num_floors: usize, capacity: usize) -> Self {
        Self {
            id,
            num_floors,
            capacity,
            current_floor: 0,
            direction: Direction::Stopped,
            door_closed: true,
            door_timer: 0,
            wait_timer: 0,
            taking_requests: false,
            out_of_service: true,
            requests: Vec::new(),
            floor_stops: vec![false; num_floors],
        }
    }

    fn top_floor(&self) -> usize {
        self.num_floors.saturating_sub(1)
    }

    fn has_stops(&self) -> bool {
        self.floor_stops.iter().any(|&stop| stop)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_out_of_service(&self) -> bool {
        self.out_of_service
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    fn step_idle(&mut self) {
        if self.out_of_service || self.top_floor() == 0 {
            return;
        }

        if self.has_stops() {
            if self.floor_stops[self.current_floor] {
                self.serve_floor();
                return;
            }
            let stops_above = self.floor_stops[self.current_floor + 1..]
                .iter()
                .any(|&stop| stop);
            self.direction = if stops_above {
                Direction::Up
            } else {
                Direction::Down
            };
            self.step_moving();
            return;
        }

        if self.wait_timer > 0 {
            self.wait_timer -= 1;
            return;
        }

        // Nobody showed up, sweep to the other end
        self.taking_requests = false;
        self.direction = if self.current_floor == 0 {
            Direction::Up
        } else {
            Direction::Down
        };
        self.step_moving();
    }

    fn step_moving(&mut self) {
        match self.direction {
            Direction::Up if self.current_floor < self.top_floor() => self.current_floor += 1,
            Direction::Down if self.current_floor > 0 => self.current_floor -= 1,
            _ => {}
        }

        if self.floor_stops[self.current_floor] {
            self.serve_floor();
        }

        let at_boundary = match self.direction {
            Direction::Up => self.current_floor == self.top_floor(),
            Direction::Down => self.current_floor == 0,
            Direction::Stopped => false,
        };
        if at_boundary {
            self.arrive_at_boundary();
        }
    }

    /// Open the doors at the current floor and drop off everyone going here
    fn serve_floor(&mut self) {
        let floor = self.current_floor;
        self.floor_stops[floor] = false;
        self.requests.retain(|request| request.end_floor() != floor);
        self.door_closed = false;
        self.door_timer = DOOR_OPEN_STEPS;
    }

    fn arrive_at_boundary(&mut self) {
        self.direction = Direction::Stopped;
        self.requests.clear();
        self.floor_stops.fill(false);
        if !self.out_of_service {
            self.taking_requests = true;
            self.wait_timer = BOUNDARY_WAIT_STEPS;
        }
        debug!("{} parked at floor {}", self.id, self.current_floor);
    }
}

impl Elevator for SimElevator {
    fn id(&self) -> ElevatorId {
        self.id
    }

    fn step(&mut self) {
        if !self.door_closed {
            self.door_timer = self.door_timer.saturating_sub(1);
            if self.door_timer == 0 {
                self.door_closed = true;
            }
            return;
        }

        match self.direction {
            Direction::Stopped => self.step_idle(),
            Direction::Up | Direction::Down => self.step_moving(),
        }
    }

    fn start(&mut self) {
        self.out_of_service = false;
        if self.direction == Direction::Stopped && self.requests.is_empty() {
            self.taking_requests = true;
            self.wait_timer = BOUNDARY_WAIT_STEPS;
        }
    }

    fn take_out_of_service(&mut self) {
        self.out_of_service = true;
        self.taking_requests = false;
        self.wait_timer = 0;
        self.requests.clear();
        self.floor_stops.fill(false);
        self.direction = if self.current_floor == 0 {
            Direction::Stopped
        } else {
            Direction::Down
        };
    }

    fn accept_batch(&mut self, requests: Vec<Request>) -> Result<(), SimError> {
        let reject = |reason| SimError::BatchRejected {
            elevator: self.id,
            reason,
        };

        if !self.taking_requests {
            return Err(reject("not taking requests"));
        }
        if requests.is_empty() {
            return Err(reject("empty batch"));
        }
        if self.requests.len() + requests.len() > self.capacity {
            return Err(reject("batch exceeds capacity"));
        }
        if requests
            .iter()
            .any(|r| r.start_floor() >= self.num_floors || r.end_floor() >= self.num_floors)
        {
            return Err(reject("floor outside the shaft"));
        }

        for request in &requests {
            self.floor_stops[request.start_floor()] = true;
            self.floor_stops[request.end_floor()] = true;
        }
        debug!(
            "{} accepted {} request(s) at floor {}",
            self.id,
            requests.len(),
            self.current_floor
        );
        self.requests.extend(requests);
        self.taking_requests = false;
        self.wait_timer = 0;
        Ok(())
    }

    fn current_floor(&self) -> usize {
        self.current_floor
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn is_door_closed(&self) -> bool {
        self.door_closed
    }

    fn is_taking_requests(&self) -> bool {
        self.taking_requests
    }

    fn report(&self) -> ElevatorReport {
        ElevatorReport {
            id: self.id,
            current_floor: self.current_floor,
            direction: self.direction,
            door_closed: self.door_closed,
            door_timer: self.door_timer,
            wait_timer: self.wait_timer,
            taking_requests: self.taking_requests,
            out_of_service: self.out_of_service,
            capacity: self.capacity,
            requests: self.requests.clone(),
            floor_stops: self.floor_stops.clone(),
        }
    }
}
