//! Elevator Simulation Library
//!
//! A discrete-step simulation of a bank of elevators and the dispatcher that
//! assigns travel requests to them.

pub mod simulation;
