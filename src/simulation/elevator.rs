//! The elevator contract consumed by the dispatcher
//!
//! The dispatcher only talks to elevators through the [`Elevator`] trait, so
//! tests can drive it with scripted elevators that have no motion logic.

use super::error::SimError;
use super::types::{Direction, ElevatorId, Request};

/// Snapshot of a single elevator at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorReport {
    pub id: ElevatorId,
    pub current_floor: usize,
    pub direction: Direction,
    pub door_closed: bool,
    /// Steps left before an open door closes
    pub door_timer: u32,
    /// Steps left waiting at a boundary floor before sweeping
    pub wait_timer: u32,
    pub taking_requests: bool,
    pub out_of_service: bool,
    pub capacity: usize,
    /// Requests assigned to this elevator and not yet delivered
    pub requests: Vec<Request>,
    /// `floor_stops[f]` is true when the elevator still has to stop at floor `f`
    pub floor_stops: Vec<bool>,
}

impl ElevatorReport {
    /// Parked at the ground floor with closed doors and not moving
    pub fn is_halted_at_ground(&self) -> bool {
        self.current_floor == 0 && self.door_closed && self.direction == Direction::Stopped
    }
}

/// An independently stepping elevator car
pub trait Elevator {
    fn id(&self) -> ElevatorId;

    /// Advance the elevator by one simulated step
    fn step(&mut self);

    /// Put the elevator (back) into service
    fn start(&mut self);

    /// Stop taking requests and return to the ground floor
    fn take_out_of_service(&mut self);

    /// Hand a batch of same-direction requests to the elevator
    fn accept_batch(&mut self, requests: Vec<Request>) -> Result<(), SimError>;

    fn current_floor(&self) -> usize;

    fn direction(&self) -> Direction;

    fn is_door_closed(&self) -> bool;

    fn is_taking_requests(&self) -> bool;

    fn report(&self) -> ElevatorReport;

    /// Parked at the ground floor with closed doors and not moving
    fn is_halted_at_ground(&self) -> bool {
        self.current_floor() == 0 && self.is_door_closed() && self.direction() == Direction::Stopped
    }
}
