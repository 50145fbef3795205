use super::types::ElevatorId;

/// Errors raised by the elevator simulation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// A building dimension is below its minimum. No building is produced.
    #[error("invalid configuration: {name} is {value}, must be at least {min}")]
    InvalidConfiguration {
        name: &'static str,
        value: usize,
        min: usize,
    },

    /// A request was rejected. The queues are left unchanged.
    #[error("invalid request {start_floor}->{end_floor}: {reason}")]
    InvalidRequest {
        start_floor: usize,
        end_floor: usize,
        reason: &'static str,
    },

    /// An operation argument is out of range. Nothing was mutated.
    #[error("invalid argument: {name} is {value}")]
    InvalidArgument { name: &'static str, value: u64 },

    /// An elevator refused a batch of requests.
    #[error("elevator {elevator} rejected batch: {reason}")]
    BatchRejected {
        elevator: ElevatorId,
        reason: &'static str,
    },
}
