use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::EnrollmentId, ticket::Ticket};
use kernel::repository::ticket::TicketRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::ticket::TicketRow, ConnectionPool};

#[derive(new)]
pub struct TicketRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>> {
        // tickets テーブルと ticket_types テーブルを INNER JOIN し、
        // 資格判定に必要なチケット種別の情報も一緒に抽出する
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
                SELECT
                    t.id,
                    t.enrollment_id,
                    t.status,
                    t.created_at,
                    t.updated_at,
                    tt.id AS ticket_type_id,
                    tt.name AS ticket_type_name,
                    tt.price,
                    tt.is_remote,
                    tt.includes_hotel,
                    tt.created_at AS ticket_type_created_at,
                    tt.updated_at AS ticket_type_updated_at
                FROM tickets AS t
                INNER JOIN ticket_types AS tt ON t.ticket_type_id = tt.id
                WHERE t.enrollment_id = $1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::from_db)?;

        row.map(Ticket::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::{id::TicketId, ticket::TicketStatus};

    #[sqlx::test(fixtures("common"))]
    #[ignore = "requires DATABASE_URL"]
    async fn test_find_by_enrollment_id(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = TicketRepositoryImpl::new(ConnectionPool::new(pool));

        let Some(ticket) = repo.find_by_enrollment_id(EnrollmentId::new(1)).await? else {
            anyhow::bail!("ticket for enrollment 1 should exist");
        };
        assert_eq!(ticket.id, TicketId::new(1));
        assert_eq!(ticket.status, TicketStatus::Paid);
        assert!(!ticket.ticket_type.is_remote);
        assert!(ticket.ticket_type.includes_hotel);

        let Some(ticket) = repo.find_by_enrollment_id(EnrollmentId::new(2)).await? else {
            anyhow::bail!("ticket for enrollment 2 should exist");
        };
        assert_eq!(ticket.status, TicketStatus::Reserved);

        // 参加登録 4 にはチケットがない
        assert!(repo.find_by_enrollment_id(EnrollmentId::new(4)).await?.is_none());
        Ok(())
    }
}
