use async_trait::async_trait;
use derive_new::new;
use kernel::model::{enrollment::Enrollment, id::UserId};
use kernel::repository::enrollment::EnrollmentRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::enrollment::EnrollmentRow, ConnectionPool};

#[derive(new)]
pub struct EnrollmentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryImpl {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Enrollment>> {
        sqlx::query_as::<_, EnrollmentRow>(
            r#"
                SELECT
                    e.id,
                    e.name,
                    e.cpf,
                    e.birthday,
                    e.phone,
                    e.user_id,
                    e.created_at,
                    e.updated_at,
                    a.id AS address_id,
                    a.cep,
                    a.street,
                    a.city,
                    a.state,
                    a.number,
                    a.neighborhood,
                    a.address_detail
                FROM enrollments AS e
                LEFT JOIN addresses AS a ON a.enrollment_id = e.id
                WHERE e.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Enrollment::from))
        .map_err(AppError::from_db)
    }
}
