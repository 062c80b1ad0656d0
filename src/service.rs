use std::sync::Arc;

use validator::Validate;

use crate::error::AppError;
use crate::models::{
    CreateWorkoutRequest, CreateWorkoutTypeRequest, UpdateWorkoutRequest,
    UpdateWorkoutTypeRequest, Workout, WorkoutType,
};
use crate::repository::{WorkoutRepository, WorkoutTypeRepository};

/// Business rules shared by both entity types: ids must be positive, payloads
/// must validate, and updates/deletes must target an existing row. All
/// precondition and validation failures are detected before any store call.
#[derive(Clone)]
pub struct WorkoutService {
    repository: Arc<dyn WorkoutRepository>,
}

impl WorkoutService {
    pub fn new(repository: Arc<dyn WorkoutRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> Result<Vec<Workout>, AppError> {
        self.repository.get_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Workout>, AppError> {
        require_positive_id(id)?;
        self.repository.get_by_id(id).await
    }

    pub async fn create(&self, request: CreateWorkoutRequest) -> Result<Workout, AppError> {
        request.validate()?;
        self.repository
            .create(&request.name, &request.description, request.duration)
            .await
    }

    pub async fn update(&self, id: i64, request: UpdateWorkoutRequest) -> Result<(), AppError> {
        require_positive_id(id)?;
        if request.id != id {
            return Err(AppError::InvalidArgument(format!(
                "Payload id {} does not match path id {}",
                request.id, id
            )));
        }
        request.validate()?;

        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Workout with id {} not found", id)))?;

        let updated = self
            .repository
            .update(existing.id, &request.name, &request.description, request.duration)
            .await?;
        if !updated {
            // Row vanished between lookup and write
            return Err(AppError::NotFound(format!(
                "Workout with id {} not found",
                id
            )));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        require_positive_id(id)?;

        if self.repository.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Workout with id {} not found",
                id
            )));
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!(
                "Workout with id {} not found",
                id
            )));
        }

        Ok(())
    }
}

#[derive(Clone)]
pub struct WorkoutTypeService {
    repository: Arc<dyn WorkoutTypeRepository>,
}

impl WorkoutTypeService {
    pub fn new(repository: Arc<dyn WorkoutTypeRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> Result<Vec<WorkoutType>, AppError> {
        self.repository.get_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<WorkoutType>, AppError> {
        require_positive_id(id)?;
        self.repository.get_by_id(id).await
    }

    pub async fn create(&self, request: CreateWorkoutTypeRequest) -> Result<WorkoutType, AppError> {
        request.validate()?;
        self.repository.create(&request.name).await
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateWorkoutTypeRequest,
    ) -> Result<(), AppError> {
        require_positive_id(id)?;
        request.validate()?;

        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Workout type with id {} not found", id)))?;

        let updated = self.repository.update(existing.id, &request.name).await?;
        if !updated {
            return Err(AppError::NotFound(format!(
                "Workout type with id {} not found",
                id
            )));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        require_positive_id(id)?;

        if self.repository.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Workout type with id {} not found",
                id
            )));
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!(
                "Workout type with id {} not found",
                id
            )));
        }

        Ok(())
    }
}

fn require_positive_id(id: i64) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::InvalidArgument(
            "Id must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
