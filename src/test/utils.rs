use std::sync::Arc;

use rocket::local::asynchronous::Client;
use sqlx::{Pool, Sqlite, sqlite::SqlitePoolOptions};

use crate::error::AppError;
use crate::init_rocket;
use crate::repository::{
    SqliteWorkoutRepository, SqliteWorkoutTypeRepository, WorkoutRepository, WorkoutTypeRepository,
};
use crate::service::{WorkoutService, WorkoutTypeService};

pub struct TestWorkout {
    pub name: String,
    pub description: String,
    pub duration: i64,
}

#[derive(Default)]
pub struct TestDbBuilder {
    workouts: Vec<TestWorkout>,
    workout_types: Vec<String>,
}

impl TestDbBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workout(mut self, name: &str, description: &str, duration: i64) -> Self {
        self.workouts.push(TestWorkout {
            name: name.to_string(),
            description: description.to_string(),
            duration,
        });
        self
    }

    pub fn workout_type(mut self, name: &str) -> Self {
        self.workout_types.push(name.to_string());
        self
    }

    pub async fn build(self) -> Result<TestDb, AppError> {
        // A single connection keeps every query on the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations on test database");

        let workout_repo = SqliteWorkoutRepository::new(pool.clone());
        for workout in &self.workouts {
            workout_repo
                .create(&workout.name, &workout.description, workout.duration)
                .await?;
        }

        let type_repo = SqliteWorkoutTypeRepository::new(pool.clone());
        for name in &self.workout_types {
            type_repo.create(name).await?;
        }

        Ok(TestDb { pool })
    }
}

pub struct TestDb {
    pub pool: Pool<Sqlite>,
}

impl TestDb {
    pub fn workout_service(&self) -> WorkoutService {
        WorkoutService::new(Arc::new(SqliteWorkoutRepository::new(self.pool.clone())))
    }

    pub fn workout_type_service(&self) -> WorkoutTypeService {
        WorkoutTypeService::new(Arc::new(SqliteWorkoutTypeRepository::new(self.pool.clone())))
    }
}

pub async fn setup_test_client(test_db: TestDb) -> Client {
    let rocket = init_rocket(test_db.pool.clone());
    Client::tracked(rocket)
        .await
        .expect("Failed to build test client")
}
