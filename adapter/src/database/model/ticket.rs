use kernel::model::{
    id::{EnrollmentId, TicketId, TicketTypeId},
    ticket::{Ticket, TicketStatus, TicketType},
};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};

// tickets と ticket_types を INNER JOIN した結果を受け取る型
#[derive(sqlx::FromRow)]
pub struct TicketRow {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ticket_type_id: TicketTypeId,
    pub ticket_type_name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub ticket_type_created_at: DateTime<Utc>,
    pub ticket_type_updated_at: DateTime<Utc>,
}

// status 列は文字列で保存されているため、変換に失敗しうる
impl TryFrom<TicketRow> for Ticket {
    type Error = AppError;

    fn try_from(value: TicketRow) -> Result<Self, Self::Error> {
        let TicketRow {
            id,
            enrollment_id,
            status,
            created_at,
            updated_at,
            ticket_type_id,
            ticket_type_name,
            price,
            is_remote,
            includes_hotel,
            ticket_type_created_at,
            ticket_type_updated_at,
        } = value;
        let status = status.parse::<TicketStatus>().map_err(|_| {
            AppError::ConversionEntityError(format!(
                "チケット（{id}）のステータス {status:?} は不正です。"
            ))
        })?;
        Ok(Ticket {
            id,
            enrollment_id,
            status,
            ticket_type: TicketType {
                id: ticket_type_id,
                name: ticket_type_name,
                price,
                is_remote,
                includes_hotel,
                created_at: ticket_type_created_at,
                updated_at: ticket_type_updated_at,
            },
            created_at,
            updated_at,
        })
    }
}
