//! Read-only snapshot of a building
//!
//! A `BuildingReport` owns copies of everything it exposes, so holding or
//! mutating one never touches the dispatcher it was taken from.

use super::building::SimBuilding;
use super::elevator::{Elevator, ElevatorReport};
use super::types::{ElevatorSystemStatus, Request};

/// Status of the whole elevator system at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingReport {
    up_requests: Vec<Request>,
    down_requests: Vec<Request>,
    elevator_reports: Vec<ElevatorReport>,
    num_floors: usize,
    num_elevators: usize,
    elevator_capacity: usize,
    system_status: ElevatorSystemStatus,
}

impl BuildingReport {
    pub fn new<E: Elevator>(building: &SimBuilding<E>) -> Self {
        Self {
            up_requests: building.requests().up().iter().copied().collect(),
            down_requests: building.requests().down().iter().copied().collect(),
            elevator_reports: building.elevator_reports(),
            num_floors: building.num_floors(),
            num_elevators: building.num_elevators(),
            elevator_capacity: building.elevator_capacity(),
            system_status: building.status(),
        }
    }

    /// Pending upward requests, oldest first
    pub fn up_requests(&self) -> &[Request] {
        &self.up_requests
    }

    /// Pending downward requests, oldest first
    pub fn down_requests(&self) -> &[Request] {
        &self.down_requests
    }

    pub fn elevator_reports(&self) -> &[ElevatorReport] {
        &self.elevator_reports
    }

    pub fn num_floors(&self) -> usize {
        self.num_floors
    }

    pub fn num_elevators(&self) -> usize {
        self.num_elevators
    }

    pub fn elevator_capacity(&self) -> usize {
        self.elevator_capacity
    }

    pub fn system_status(&self) -> ElevatorSystemStatus {
        self.system_status
    }

    /// Mutable access to the copied up queue; changes stay in this report
    pub fn up_requests_mut(&mut self) -> &mut Vec<Request> {
        &mut self.up_requests
    }

    /// Mutable access to the copied down queue; changes stay in this report
    pub fn down_requests_mut(&mut self) -> &mut Vec<Request> {
        &mut self.down_requests
    }

    /// Print a summary of the report
    pub fn print_summary(&self) {
        println!("=== Elevator System Summary ===");
        println!("Status: {}", self.system_status);
        println!(
            "Floors: {}, Elevators: {}, Capacity: {}",
            self.num_floors, self.num_elevators, self.elevator_capacity
        );
        println!(
            "Pending: {} up, {} down",
            self.up_requests.len(),
            self.down_requests.len()
        );

        println!("--- Elevators ---");
        for elevator in &self.elevator_reports {
            println!(
                "  {}: floor={}, dir={}, door={}, load={}/{}, {}",
                elevator.id,
                elevator.current_floor,
                elevator.direction,
                if elevator.door_closed { "closed" } else { "open" },
                elevator.requests.len(),
                elevator.capacity,
                if elevator.out_of_service {
                    "out of service"
                } else if elevator.taking_requests {
                    "taking requests"
                } else {
                    "busy"
                }
            );
        }
    }

    /// Draw the elevator shafts in the terminal, top floor first
    pub fn draw_shafts(&self) {
        println!("\n=== Shafts ===");
        println!("Legend: ^/v/-=Car (up/down/stopped), O=Car with open doors, *=Stop, |=Shaft");
        println!();
        for floor in (0..self.num_floors).rev() {
            let mut line = format!("{:>3} ", floor);
            for elevator in &self.elevator_reports {
                let cell = if elevator.current_floor == floor {
                    if elevator.door_closed {
                        elevator.direction.to_string()
                    } else {
                        "O".to_string()
                    }
                } else if elevator.floor_stops.get(floor).copied().unwrap_or(false) {
                    "*".to_string()
                } else {
                    "|".to_string()
                };
                line.push_str(&format!(" {} ", cell));
            }
            let waiting_up = self
                .up_requests
                .iter()
                .filter(|r| r.start_floor() == floor)
                .count();
            let waiting_down = self
                .down_requests
                .iter()
                .filter(|r| r.start_floor() == floor)
                .count();
            if waiting_up + waiting_down > 0 {
                line.push_str(&format!("  waiting: {} up, {} down", waiting_up, waiting_down));
            }
            println!("{}", line);
        }
        println!();
    }
}
