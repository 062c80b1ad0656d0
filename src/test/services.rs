#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::error::AppError;
    use crate::models::{
        UpdateWorkoutRequest, UpdateWorkoutTypeRequest, Workout, WorkoutType,
    };
    use crate::repository::{WorkoutRepository, WorkoutTypeRepository};
    use crate::service::{WorkoutService, WorkoutTypeService};

    /// Counts every store call so tests can prove preconditions short-circuit
    /// before the repository is touched.
    #[derive(Default)]
    struct RecordingWorkoutRepository {
        calls: AtomicUsize,
    }

    impl RecordingWorkoutRepository {
        fn record(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WorkoutRepository for RecordingWorkoutRepository {
        async fn get_all(&self) -> Result<Vec<Workout>, AppError> {
            self.record();
            Ok(vec![])
        }

        async fn get_by_id(&self, _id: i64) -> Result<Option<Workout>, AppError> {
            self.record();
            Ok(None)
        }

        async fn create(
            &self,
            name: &str,
            description: &str,
            duration: i64,
        ) -> Result<Workout, AppError> {
            self.record();
            Ok(Workout {
                id: 1,
                name: name.to_string(),
                description: description.to_string(),
                duration,
            })
        }

        async fn update(
            &self,
            _id: i64,
            _name: &str,
            _description: &str,
            _duration: i64,
        ) -> Result<bool, AppError> {
            self.record();
            Ok(true)
        }

        async fn delete(&self, _id: i64) -> Result<bool, AppError> {
            self.record();
            Ok(true)
        }
    }

    #[derive(Default)]
    struct RecordingWorkoutTypeRepository {
        calls: AtomicUsize,
    }

    impl RecordingWorkoutTypeRepository {
        fn record(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WorkoutTypeRepository for RecordingWorkoutTypeRepository {
        async fn get_all(&self) -> Result<Vec<WorkoutType>, AppError> {
            self.record();
            Ok(vec![])
        }

        async fn get_by_id(&self, _id: i64) -> Result<Option<WorkoutType>, AppError> {
            self.record();
            Ok(None)
        }

        async fn create(&self, name: &str) -> Result<WorkoutType, AppError> {
            self.record();
            Ok(WorkoutType {
                id: 1,
                name: name.to_string(),
            })
        }

        async fn update(&self, _id: i64, _name: &str) -> Result<bool, AppError> {
            self.record();
            Ok(true)
        }

        async fn delete(&self, _id: i64) -> Result<bool, AppError> {
            self.record();
            Ok(true)
        }
    }

    fn update_workout_request(id: i64) -> UpdateWorkoutRequest {
        UpdateWorkoutRequest {
            id,
            name: "Run".to_string(),
            description: "5k".to_string(),
            duration: 30,
        }
    }

    #[rocket::async_test]
    async fn test_non_positive_ids_rejected_before_any_store_access() {
        let repository = Arc::new(RecordingWorkoutRepository::default());
        let service = WorkoutService::new(repository.clone());

        for id in [0, -1] {
            let get = service.get_by_id(id).await;
            assert!(matches!(get, Err(AppError::InvalidArgument(_))));

            let update = service.update(id, update_workout_request(id)).await;
            assert!(matches!(update, Err(AppError::InvalidArgument(_))));

            let delete = service.delete(id).await;
            assert!(matches!(delete, Err(AppError::InvalidArgument(_))));
        }

        assert_eq!(repository.call_count(), 0);
    }

    #[rocket::async_test]
    async fn test_workout_type_non_positive_ids_rejected_before_any_store_access() {
        let repository = Arc::new(RecordingWorkoutTypeRepository::default());
        let service = WorkoutTypeService::new(repository.clone());

        let update = service
            .update(
                0,
                UpdateWorkoutTypeRequest {
                    name: "Yoga".to_string(),
                },
            )
            .await;
        assert!(matches!(update, Err(AppError::InvalidArgument(_))));

        let delete = service.delete(-3).await;
        assert!(matches!(delete, Err(AppError::InvalidArgument(_))));

        assert_eq!(repository.call_count(), 0);
    }

    #[rocket::async_test]
    async fn test_update_checks_existence_before_writing() {
        let repository = Arc::new(RecordingWorkoutRepository::default());
        let service = WorkoutService::new(repository.clone());

        let result = service.update(7, update_workout_request(7)).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        // One lookup, no write
        assert_eq!(repository.call_count(), 1);
    }

    #[rocket::async_test]
    async fn test_invalid_payload_rejected_before_any_store_access() {
        let repository = Arc::new(RecordingWorkoutRepository::default());
        let service = WorkoutService::new(repository.clone());

        let mut request = update_workout_request(7);
        request.duration = 0;

        let result = service.update(7, request).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(repository.call_count(), 0);
    }
}
