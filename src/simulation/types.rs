//! Core types for the elevator simulation
//!
//! Plain value types shared by the elevators, the dispatcher and the reports.

use std::fmt;

/// Number of steps a door stays open at a served floor before closing
pub const DOOR_OPEN_STEPS: u32 = 3;

/// Number of steps an idle elevator waits at floor 0 or the top floor for a
/// batch before sweeping empty to the other end of the shaft
pub const BOUNDARY_WAIT_STEPS: u32 = 5;

/// Index of an elevator in the building's fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElevatorId(pub usize);

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// Direction of travel of an elevator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Stopped,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Direction::Up => "^",
            Direction::Down => "v",
            Direction::Stopped => "-",
        };
        f.write_str(symbol)
    }
}

/// Aggregate status of the whole elevator system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElevatorSystemStatus {
    /// Elevators are in service and taking requests
    Running,
    /// Stop was requested; elevators are still returning to the ground floor
    Stopping,
    /// Every elevator is parked at the ground floor with its doors closed
    OutOfService,
}

impl fmt::Display for ElevatorSystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElevatorSystemStatus::Running => "running",
            ElevatorSystemStatus::Stopping => "stopping",
            ElevatorSystemStatus::OutOfService => "out of service",
        };
        f.write_str(name)
    }
}

/// A request to travel from one floor to another
///
/// Requests are immutable once created. Validation against the building
/// happens when a request is submitted, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Request {
    start_floor: usize,
    end_floor: usize,
}

impl Request {
    pub fn new(start_floor: usize, end_floor: usize) -> Self {
        Self {
            start_floor,
            end_floor,
        }
    }

    pub fn start_floor(&self) -> usize {
        self.start_floor
    }

    pub fn end_floor(&self) -> usize {
        self.end_floor
    }

    /// Direction of travel, or `None` when both floors are the same
    pub fn direction(&self) -> Option<Direction> {
        match self.end_floor.cmp(&self.start_floor) {
            std::cmp::Ordering::Greater => Some(Direction::Up),
            std::cmp::Ordering::Less => Some(Direction::Down),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.start_floor, self.end_floor)
    }
}
