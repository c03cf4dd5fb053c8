use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    auth::AuthRepositoryImpl, enrollment::EnrollmentRepositoryImpl,
    health::HealthCheckRepositoryImpl, hotel::HotelRepositoryImpl, ticket::TicketRepositoryImpl,
};
use kernel::repository::{
    auth::AuthRepository, enrollment::EnrollmentRepository, health::HealthCheckRepository,
    hotel::HotelRepository, ticket::TicketRepository,
};
use kernel::service::hotel::{HotelService, HotelServiceImpl};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    hotel_service: Arc<dyn HotelService>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        Self::with_repositories(
            Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            Arc::new(AuthRepositoryImpl::new(pool.clone())),
            Arc::new(HotelRepositoryImpl::new(pool.clone())),
            Arc::new(EnrollmentRepositoryImpl::new(pool.clone())),
            Arc::new(TicketRepositoryImpl::new(pool)),
        )
    }

    // リポジトリの実装を差し替えて組み立てる（テストではインメモリ実装を渡す）
    pub fn with_repositories(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        hotel_repository: Arc<dyn HotelRepository>,
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
    ) -> Self {
        let hotel_service = Arc::new(HotelServiceImpl::new(
            hotel_repository,
            enrollment_repository,
            ticket_repository,
        ));
        Self {
            health_check_repository,
            auth_repository,
            hotel_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn hotel_service(&self) -> Arc<dyn HotelService> {
        self.hotel_service.clone()
    }
}
