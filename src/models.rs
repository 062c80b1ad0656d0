use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{NAME_PATTERN, not_blank};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub duration: i64,
}

/// Storage row for a workout. Carries the unused `is_deleted` flag, which no
/// query filters on; the flag never reaches the transfer shape.
#[derive(sqlx::FromRow, Clone)]
pub struct DbWorkout {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub duration: i64,
    #[allow(dead_code)]
    pub is_deleted: bool,
}

impl From<DbWorkout> for Workout {
    fn from(workout: DbWorkout) -> Self {
        Self {
            id: workout.id,
            name: workout.name,
            description: workout.description,
            duration: workout.duration,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutType {
    pub id: i64,
    pub name: String,
}

#[derive(sqlx::FromRow, Clone)]
pub struct DbWorkoutType {
    pub id: i64,
    pub name: String,
}

impl From<DbWorkoutType> for WorkoutType {
    fn from(workout_type: DbWorkoutType) -> Self {
        Self {
            id: workout_type.id,
            name: workout_type.name,
        }
    }
}

#[derive(Deserialize, Validate, Clone)]
pub struct CreateWorkoutRequest {
    #[validate(
        custom(function = not_blank),
        length(max = 200, message = "Name must not exceed 200 characters")
    )]
    pub name: String,
    #[validate(
        custom(function = not_blank),
        length(max = 200, message = "Description must not exceed 200 characters")
    )]
    pub description: String,
    #[validate(range(min = 1, message = "Duration must be greater than zero"))]
    pub duration: i64,
}

/// Update payload carries its own id, cross-checked against the path id.
#[derive(Deserialize, Validate, Clone)]
pub struct UpdateWorkoutRequest {
    pub id: i64,
    #[validate(
        custom(function = not_blank),
        length(max = 200, message = "Name must not exceed 200 characters")
    )]
    pub name: String,
    #[validate(
        custom(function = not_blank),
        length(max = 200, message = "Description must not exceed 200 characters")
    )]
    pub description: String,
    #[validate(range(min = 1, message = "Duration must be greater than zero"))]
    pub duration: i64,
}

#[derive(Deserialize, Validate, Clone)]
pub struct CreateWorkoutTypeRequest {
    #[validate(
        custom(function = not_blank),
        length(max = 100, message = "Name must not exceed 100 characters"),
        regex(
            path = *NAME_PATTERN,
            message = "Name may only contain letters, digits, spaces and hyphens"
        )
    )]
    pub name: String,
}

#[derive(Deserialize, Validate, Clone)]
pub struct UpdateWorkoutTypeRequest {
    #[validate(
        custom(function = not_blank),
        length(max = 100, message = "Name must not exceed 100 characters"),
        regex(
            path = *NAME_PATTERN,
            message = "Name may only contain letters, digits, spaces and hyphens"
        )
    )]
    pub name: String,
}
