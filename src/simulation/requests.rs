//! Request queueing for the elevator simulation
//!
//! Incoming requests are split by direction into two FIFO queues. Arrival
//! order within a queue is the order in which batches are handed out.

use log::debug;
use std::collections::VecDeque;

use super::error::SimError;
use super::types::{Direction, Request};

/// Pending upward and downward requests, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestQueues {
    up: VecDeque<Request>,
    down: VecDeque<Request>,
}

impl RequestQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a request against the building and append it to its queue
    pub fn submit(&mut self, request: Request, num_floors: usize) -> Result<(), SimError> {
        let reject = |reason| SimError::InvalidRequest {
            start_floor: request.start_floor(),
            end_floor: request.end_floor(),
            reason,
        };

        if request.start_floor() >= num_floors || request.end_floor() >= num_floors {
            return Err(reject("floor outside the building"));
        }

        match request.direction() {
            Some(Direction::Up) => self.up.push_back(request),
            Some(Direction::Down) => self.down.push_back(request),
            _ => return Err(reject("start floor and end floor are the same")),
        }
        debug!("Queued request {}", request);
        Ok(())
    }

    /// Remove up to `max` requests from the head of the queue for `direction`
    pub fn take_batch(&mut self, direction: Direction, max: usize) -> Vec<Request> {
        let queue = match self.queue_mut(direction) {
            Some(queue) => queue,
            None => return Vec::new(),
        };
        let count = max.min(queue.len());
        queue.drain(..count).collect()
    }

    /// Put a batch back at the head of its queue, keeping its original order
    pub fn restore_batch(&mut self, direction: Direction, batch: Vec<Request>) {
        if let Some(queue) = self.queue_mut(direction) {
            for request in batch.into_iter().rev() {
                queue.push_front(request);
            }
        }
    }

    fn queue_mut(&mut self, direction: Direction) -> Option<&mut VecDeque<Request>> {
        match direction {
            Direction::Up => Some(&mut self.up),
            Direction::Down => Some(&mut self.down),
            Direction::Stopped => None,
        }
    }

    pub fn up(&self) -> &VecDeque<Request> {
        &self.up
    }

    pub fn down(&self) -> &VecDeque<Request> {
        &self.down
    }

    pub fn is_empty(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up.is_empty(),
            Direction::Down => self.down.is_empty(),
            Direction::Stopped => true,
        }
    }

    /// Total number of requests waiting in both queues
    pub fn pending(&self) -> usize {
        self.up.len() + self.down.len()
    }
}
