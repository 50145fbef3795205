//! Elevator car behavior tests

use elevator_sim::simulation::{
    Direction, Elevator, ElevatorId, Request, SimElevator, SimError, BOUNDARY_WAIT_STEPS,
    DOOR_OPEN_STEPS,
};

fn started(num_floors: usize, capacity: usize) -> SimElevator {
    let mut elevator = SimElevator::new(ElevatorId(0), num_floors, capacity);
    elevator.start();
    elevator
}

fn step_n(elevator: &mut SimElevator, steps: u32) {
    for _ in 0..steps {
        elevator.step();
    }
}

#[test]
fn test_new_elevator_is_parked_and_out_of_service() {
    let elevator = SimElevator::new(ElevatorId(3), 5, 2);

    assert_eq!(elevator.id(), ElevatorId(3));
    assert_eq!(elevator.current_floor(), 0);
    assert_eq!(elevator.direction(), Direction::Stopped);
    assert!(elevator.is_door_closed());
    assert!(!elevator.is_taking_requests());
    assert!(elevator.is_out_of_service());
    assert!(elevator.is_halted_at_ground());
}

#[test]
fn test_start_puts_elevator_in_service() {
    let elevator = started(5, 2);

    assert!(elevator.is_taking_requests());
    assert!(!elevator.is_out_of_service());
    assert_eq!(elevator.report().wait_timer, BOUNDARY_WAIT_STEPS);
}

#[test]
fn test_accept_batch_rejections() {
    let mut idle = SimElevator::new(ElevatorId(0), 5, 2);
    assert!(matches!(
        idle.accept_batch(vec![Request::new(0, 1)]),
        Err(SimError::BatchRejected { .. })
    ));

    let mut elevator = started(5, 2);
    assert!(elevator.accept_batch(Vec::new()).is_err());
    assert!(elevator
        .accept_batch(vec![Request::new(0, 1), Request::new(0, 2), Request::new(0, 3)])
        .is_err());
    assert!(elevator.accept_batch(vec![Request::new(0, 9)]).is_err());
    assert!(elevator.is_taking_requests());
    assert!(elevator.requests().is_empty());
}

#[test]
fn test_accepted_batch_makes_elevator_busy() {
    let mut elevator = started(5, 2);

    elevator
        .accept_batch(vec![Request::new(0, 3), Request::new(1, 4)])
        .unwrap();

    assert!(!elevator.is_taking_requests());
    let report = elevator.report();
    assert_eq!(report.requests, vec![Request::new(0, 3), Request::new(1, 4)]);
    assert_eq!(report.floor_stops, vec![true, true, false, true, true]);
}

#[test]
fn test_upward_trip_serves_stops_and_parks_at_top() {
    let mut elevator = started(5, 2);
    elevator.accept_batch(vec![Request::new(0, 3)]).unwrap();

    // Pick up at the ground floor
    elevator.step();
    assert_eq!(elevator.current_floor(), 0);
    assert!(!elevator.is_door_closed());

    step_n(&mut elevator, DOOR_OPEN_STEPS);
    assert!(elevator.is_door_closed());

    // Travel to floor 3 and drop off
    step_n(&mut elevator, 3);
    assert_eq!(elevator.current_floor(), 3);
    assert_eq!(elevator.direction(), Direction::Up);
    assert!(!elevator.is_door_closed());
    assert!(elevator.requests().is_empty());

    step_n(&mut elevator, DOOR_OPEN_STEPS);
    elevator.step();
    assert_eq!(elevator.current_floor(), 4);
    assert_eq!(elevator.direction(), Direction::Stopped);
    assert!(elevator.is_taking_requests());
}

#[test]
fn test_idle_elevator_sweeps_after_waiting() {
    let mut elevator = started(5, 2);

    step_n(&mut elevator, BOUNDARY_WAIT_STEPS);
    assert_eq!(elevator.current_floor(), 0);
    assert!(elevator.is_taking_requests());

    elevator.step();
    assert_eq!(elevator.current_floor(), 1);
    assert_eq!(elevator.direction(), Direction::Up);
    assert!(!elevator.is_taking_requests());

    step_n(&mut elevator, 3);
    assert_eq!(elevator.current_floor(), 4);
    assert_eq!(elevator.direction(), Direction::Stopped);
    assert!(elevator.is_taking_requests());
}

#[test]
fn test_downward_batch_from_top_floor() {
    let mut elevator = started(3, 1);
    // Sweep to the top floor first
    step_n(&mut elevator, BOUNDARY_WAIT_STEPS + 2);
    assert_eq!(elevator.current_floor(), 2);
    assert!(elevator.is_taking_requests());

    elevator.accept_batch(vec![Request::new(1, 0)]).unwrap();
    elevator.step();
    assert_eq!(elevator.current_floor(), 1);
    assert_eq!(elevator.direction(), Direction::Down);
    assert!(!elevator.is_door_closed());

    step_n(&mut elevator, DOOR_OPEN_STEPS + 1);
    assert_eq!(elevator.current_floor(), 0);
    assert_eq!(elevator.direction(), Direction::Stopped);
    assert!(elevator.requests().is_empty());
}

#[test]
fn test_out_of_service_elevator_returns_home_and_halts() {
    let mut elevator = started(5, 2);
    step_n(&mut elevator, BOUNDARY_WAIT_STEPS + 2);
    assert_eq!(elevator.current_floor(), 2);

    elevator.take_out_of_service();
    assert_eq!(elevator.direction(), Direction::Down);
    assert!(!elevator.is_taking_requests());

    step_n(&mut elevator, 2);
    assert!(elevator.is_halted_at_ground());
    assert!(!elevator.is_taking_requests());

    // Stays parked
    step_n(&mut elevator, 10);
    assert!(elevator.is_halted_at_ground());
}

#[test]
fn test_out_of_service_drops_assigned_requests() {
    let mut elevator = started(5, 2);
    elevator.accept_batch(vec![Request::new(0, 4)]).unwrap();

    elevator.take_out_of_service();

    assert!(elevator.requests().is_empty());
    assert!(elevator.report().floor_stops.iter().all(|&stop| !stop));
    assert_eq!(elevator.direction(), Direction::Stopped);
}

#[test]
fn test_single_floor_elevator_never_moves() {
    let mut elevator = started(1, 1);

    step_n(&mut elevator, 20);

    assert_eq!(elevator.current_floor(), 0);
    assert_eq!(elevator.direction(), Direction::Stopped);
}
