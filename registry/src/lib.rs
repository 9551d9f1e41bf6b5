use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::{
    address::AddressRepositoryImpl, auth::AuthRepositoryImpl,
    course::CourseRepositoryImpl, enrollment::EnrollmentRepositoryImpl,
    health::HealthCheckRepositoryImpl, meeting::MeetingRepositoryImpl,
    rating::RatingRepositoryImpl, user::UserRepositoryImpl,
};
use kernel::repository::{
    address::AddressRepository, auth::AuthRepository, course::CourseRepository,
    enrollment::EnrollmentRepository, health::HealthCheckRepository,
    meeting::MeetingRepository, rating::RatingRepository, user::UserRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    course_repository: Arc<dyn CourseRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    meeting_repository: Arc<dyn MeetingRepository>,
    rating_repository: Arc<dyn RatingRepository>,
    address_repository: Arc<dyn AddressRepository>,
    auth_repository: Arc<dyn AuthRepository>,
}

impl AppRegistry {
    pub fn new(
        pool: ConnectionPool,
        redis_client: Arc<RedisClient>,
        app_config: AppConfig,
    ) -> Self {
        let health_check_repository =
            Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let course_repository = Arc::new(CourseRepositoryImpl::new(pool.clone()));
        let enrollment_repository =
            Arc::new(EnrollmentRepositoryImpl::new(pool.clone()));
        let meeting_repository = Arc::new(MeetingRepositoryImpl::new(pool.clone()));
        let rating_repository = Arc::new(RatingRepositoryImpl::new(pool.clone()));
        let address_repository = Arc::new(AddressRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        Self {
            health_check_repository,
            user_repository,
            course_repository,
            enrollment_repository,
            meeting_repository,
            rating_repository,
            address_repository,
            auth_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn course_repository(&self) -> Arc<dyn CourseRepository> {
        self.course_repository.clone()
    }

    pub fn enrollment_repository(&self) -> Arc<dyn EnrollmentRepository> {
        self.enrollment_repository.clone()
    }

    pub fn meeting_repository(&self) -> Arc<dyn MeetingRepository> {
        self.meeting_repository.clone()
    }

    pub fn rating_repository(&self) -> Arc<dyn RatingRepository> {
        self.rating_repository.clone()
    }

    pub fn address_repository(&self) -> Arc<dyn AddressRepository> {
        self.address_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }
}
