use crate::model::id::{EnrollmentId, TicketId, TicketTypeId};
use chrono::{DateTime, Utc};
use strum::{Display, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reason a user may not browse hotels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HotelIneligibility {
    #[error("user has no enrollment")]
    NoEnrollment,
    #[error("enrollment has no ticket")]
    NoTicket,
    #[error("ticket is not paid")]
    TicketNotPaid,
    #[error("ticket is for remote attendance")]
    RemoteTicket,
    #[error("ticket type does not include hotel")]
    HotelNotIncluded,
}

impl Ticket {
    /// Only a paid, in-person ticket whose type includes accommodation
    /// grants access to hotel listings.
    pub fn check_hotel_access(&self) -> Result<(), HotelIneligibility> {
        if self.status == TicketStatus::Reserved {
            return Err(HotelIneligibility::TicketNotPaid);
        }
        if self.ticket_type.is_remote {
            return Err(HotelIneligibility::RemoteTicket);
        }
        if !self.ticket_type.includes_hotel {
            return Err(HotelIneligibility::HotelNotIncluded);
        }
        Ok(())
    }
}
