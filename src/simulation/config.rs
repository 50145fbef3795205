//! Building dimensions

use super::error::SimError;

/// Fixed dimensions of a building, validated before any elevator is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingConfig {
    pub num_floors: usize,
    pub num_elevators: usize,
    pub elevator_capacity: usize,
}

impl BuildingConfig {
    pub fn new(num_floors: usize, num_elevators: usize, elevator_capacity: usize) -> Self {
        Self {
            num_floors,
            num_elevators,
            elevator_capacity,
        }
    }

    /// Check that every dimension is at least 1
    pub fn validate(&self) -> Result<(), SimError> {
        let dimensions = [
            ("num_floors", self.num_floors),
            ("num_elevators", self.num_elevators),
            ("elevator_capacity", self.elevator_capacity),
        ];
        for (name, value) in dimensions {
            if value < 1 {
                return Err(SimError::InvalidConfiguration {
                    name,
                    value,
                    min: 1,
                });
            }
        }
        Ok(())
    }

    /// Highest floor index in the building
    pub fn top_floor(&self) -> usize {
        self.num_floors.saturating_sub(1)
    }
}
