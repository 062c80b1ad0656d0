use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::models::{DbWorkout, DbWorkoutType, Workout, WorkoutType};

/// Store operations for workouts. Absence is a value (`None` / `false`),
/// never an error; only store-level failures surface as `AppError::Database`.
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Workout>, AppError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Workout>, AppError>;
    async fn create(
        &self,
        name: &str,
        description: &str,
        duration: i64,
    ) -> Result<Workout, AppError>;
    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
        duration: i64,
    ) -> Result<bool, AppError>;
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

#[async_trait]
pub trait WorkoutTypeRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<WorkoutType>, AppError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<WorkoutType>, AppError>;
    async fn create(&self, name: &str) -> Result<WorkoutType, AppError>;
    async fn update(&self, id: i64, name: &str) -> Result<bool, AppError>;
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

#[derive(Debug, Clone)]
pub struct SqliteWorkoutRepository {
    pool: Pool<Sqlite>,
}

impl SqliteWorkoutRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkoutRepository for SqliteWorkoutRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Workout>, AppError> {
        info!("Fetching all workouts");
        let rows = sqlx::query_as::<_, DbWorkout>(
            "SELECT id, name, description, duration, is_deleted FROM workouts",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Workout::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Workout>, AppError> {
        info!("Fetching workout by ID");
        let row = sqlx::query_as::<_, DbWorkout>(
            "SELECT id, name, description, duration, is_deleted FROM workouts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Workout::from))
    }

    #[instrument(skip(self))]
    async fn create(
        &self,
        name: &str,
        description: &str,
        duration: i64,
    ) -> Result<Workout, AppError> {
        info!("Creating workout");
        let res = sqlx::query("INSERT INTO workouts (name, description, duration) VALUES (?, ?, ?)")
            .bind(name)
            .bind(description)
            .bind(duration)
            .execute(&self.pool)
            .await?;

        Ok(Workout {
            id: res.last_insert_rowid(),
            name: name.to_string(),
            description: description.to_string(),
            duration,
        })
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
        duration: i64,
    ) -> Result<bool, AppError> {
        info!("Updating workout");
        let res =
            sqlx::query("UPDATE workouts SET name = ?, description = ?, duration = ? WHERE id = ?")
                .bind(name)
                .bind(description)
                .bind(duration)
                .bind(id)
                .execute(&self.pool)
                .await?;

        Ok(res.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        info!("Deleting workout");
        let res = sqlx::query("DELETE FROM workouts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected() > 0)
    }
}

#[derive(Debug, Clone)]
pub struct SqliteWorkoutTypeRepository {
    pool: Pool<Sqlite>,
}

impl SqliteWorkoutTypeRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkoutTypeRepository for SqliteWorkoutTypeRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<WorkoutType>, AppError> {
        info!("Fetching all workout types");
        let rows = sqlx::query_as::<_, DbWorkoutType>("SELECT id, name FROM workout_types")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(WorkoutType::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<WorkoutType>, AppError> {
        info!("Fetching workout type by ID");
        let row =
            sqlx::query_as::<_, DbWorkoutType>("SELECT id, name FROM workout_types WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(WorkoutType::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> Result<WorkoutType, AppError> {
        info!("Creating workout type");
        let res = sqlx::query("INSERT INTO workout_types (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(WorkoutType {
            id: res.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, name: &str) -> Result<bool, AppError> {
        info!("Updating workout type");
        let res = sqlx::query("UPDATE workout_types SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        info!("Deleting workout type");
        let res = sqlx::query("DELETE FROM workout_types WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected() > 0)
    }
}
