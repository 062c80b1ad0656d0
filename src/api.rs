use rocket::State;
use rocket::http::Status;
use rocket::response::status::{Created, Custom, NoContent};
use rocket::serde::json::Json;

use crate::models::{
    CreateWorkoutRequest, CreateWorkoutTypeRequest, UpdateWorkoutRequest,
    UpdateWorkoutTypeRequest, Workout, WorkoutType,
};
use crate::service::{WorkoutService, WorkoutTypeService};
use crate::validation::{ToValidationResponse, ValidationResponse};

#[get("/workouts")]
pub async fn api_get_workouts(
    service: &State<WorkoutService>,
) -> Result<Json<Vec<Workout>>, Status> {
    let workouts = service.get_all().await?;
    Ok(Json(workouts))
}

#[get("/workouts/<id>")]
pub async fn api_get_workout(
    id: i64,
    service: &State<WorkoutService>,
) -> Result<Json<Workout>, Status> {
    match service.get_by_id(id).await? {
        Some(workout) => Ok(Json(workout)),
        None => Err(Status::NotFound),
    }
}

#[post("/workouts", data = "<request>")]
pub async fn api_create_workout(
    request: Json<CreateWorkoutRequest>,
    service: &State<WorkoutService>,
) -> Result<Created<Json<Workout>>, Custom<Json<ValidationResponse>>> {
    let workout = service
        .create(request.into_inner())
        .await
        .map_err(|e| e.to_validation_response())?;

    Ok(Created::new(format!("/api/workouts/{}", workout.id)).body(Json(workout)))
}

#[put("/workouts/<id>", data = "<request>")]
pub async fn api_update_workout(
    id: i64,
    request: Json<UpdateWorkoutRequest>,
    service: &State<WorkoutService>,
) -> Result<NoContent, Custom<Json<ValidationResponse>>> {
    service
        .update(id, request.into_inner())
        .await
        .map_err(|e| e.to_validation_response())?;

    Ok(NoContent)
}

#[delete("/workouts/<id>")]
pub async fn api_delete_workout(
    id: i64,
    service: &State<WorkoutService>,
) -> Result<NoContent, Status> {
    service.delete(id).await?;
    Ok(NoContent)
}

#[get("/workout_types")]
pub async fn api_get_workout_types(
    service: &State<WorkoutTypeService>,
) -> Result<Json<Vec<WorkoutType>>, Status> {
    let types = service.get_all().await?;
    Ok(Json(types))
}

#[get("/workout_types/<id>")]
pub async fn api_get_workout_type(
    id: i64,
    service: &State<WorkoutTypeService>,
) -> Result<Json<WorkoutType>, Status> {
    match service.get_by_id(id).await? {
        Some(workout_type) => Ok(Json(workout_type)),
        None => Err(Status::NotFound),
    }
}

#[post("/workout_types", data = "<request>")]
pub async fn api_create_workout_type(
    request: Json<CreateWorkoutTypeRequest>,
    service: &State<WorkoutTypeService>,
) -> Result<Created<Json<WorkoutType>>, Custom<Json<ValidationResponse>>> {
    let workout_type = service
        .create(request.into_inner())
        .await
        .map_err(|e| e.to_validation_response())?;

    Ok(Created::new(format!("/api/workout_types/{}", workout_type.id)).body(Json(workout_type)))
}

#[put("/workout_types/<id>", data = "<request>")]
pub async fn api_update_workout_type(
    id: i64,
    request: Json<UpdateWorkoutTypeRequest>,
    service: &State<WorkoutTypeService>,
) -> Result<NoContent, Custom<Json<ValidationResponse>>> {
    service
        .update(id, request.into_inner())
        .await
        .map_err(|e| e.to_validation_response())?;

    Ok(NoContent)
}

#[delete("/workout_types/<id>")]
pub async fn api_delete_workout_type(
    id: i64,
    service: &State<WorkoutTypeService>,
) -> Result<NoContent, Status> {
    service.delete(id).await?;
    Ok(NoContent)
}

#[get("/health")]
pub fn health() -> &'static str {
    "OK"
}
