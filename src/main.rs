#[macro_use]
extern crate rocket;

mod api;
mod env;
mod error;
mod models;
mod repository;
mod service;
mod telemetry;
#[cfg(test)]
mod test;
mod validation;

use std::sync::Arc;

use rocket::{Build, Rocket};
use sqlx::SqlitePool;
use tracing::{error, info};

use api::{
    api_create_workout, api_create_workout_type, api_delete_workout, api_delete_workout_type,
    api_get_workout, api_get_workout_type, api_get_workout_types, api_get_workouts,
    api_update_workout, api_update_workout_type, health,
};
use repository::{SqliteWorkoutRepository, SqliteWorkoutTypeRepository};
use service::{WorkoutService, WorkoutTypeService};
use telemetry::{TelemetryFairing, init_tracing};

#[launch]
async fn rocket() -> _ {
    init_tracing();

    if let Err(e) = env::load_environment() {
        error!("Failed to load environment files: {}", e);
    }

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = SqlitePool::connect(&database_url)
        .await
        .expect("Failed to connect to SQLite database");

    info!("Running database migrations...");
    match sqlx::migrate!("./migrations").run(&pool).await {
        Ok(_) => info!("Migrations completed successfully"),
        Err(e) => {
            error!("Failed to run migrations: {}", e);
            panic!("Database migration failed: {}", e);
        }
    }

    init_rocket(pool)
}

pub fn init_rocket(pool: SqlitePool) -> Rocket<Build> {
    info!("Starting fitness tracker API");

    let workout_service =
        WorkoutService::new(Arc::new(SqliteWorkoutRepository::new(pool.clone())));
    let workout_type_service =
        WorkoutTypeService::new(Arc::new(SqliteWorkoutTypeRepository::new(pool)));

    rocket::build()
        .manage(workout_service)
        .manage(workout_type_service)
        .mount(
            "/api",
            routes![
                api_get_workouts,
                api_get_workout,
                api_create_workout,
                api_update_workout,
                api_delete_workout,
                api_get_workout_types,
                api_get_workout_type,
                api_create_workout_type,
                api_update_workout_type,
                api_delete_workout_type,
                health,
            ],
        )
        .attach(TelemetryFairing)
}
