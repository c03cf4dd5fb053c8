//! In-memory repository fakes.
//!
//! A single [`MockStore`] implements every repository trait so one fixture can
//! back a whole service or router under test.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::{AppError, AppResult};

use crate::{
    model::{
        auth::AccessToken,
        enrollment::{Address, Enrollment},
        hotel::{Hotel, Room},
        id::{AddressId, EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, UserId},
        ticket::{Ticket, TicketStatus, TicketType},
    },
    repository::{
        auth::AuthRepository, enrollment::EnrollmentRepository, health::HealthCheckRepository,
        hotel::HotelRepository, ticket::TicketRepository,
    },
};

#[derive(Default)]
struct State {
    unavailable: bool,
    next_id: i32,
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
    enrollments: Vec<Enrollment>,
    ticket_types: Vec<TicketType>,
    tickets: Vec<Ticket>,
    sessions: Vec<(String, UserId)>,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared in-memory store; clones see the same data.
#[derive(Clone, Default)]
pub struct MockStore {
    state: Arc<Mutex<State>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    /// Makes every subsequent read fail as if the database were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    pub fn add_hotel(&self, name: &str) -> Hotel {
        let mut state = self.lock();
        let now = Self::now();
        let hotel = Hotel {
            id: HotelId::new(state.next_id()),
            name: name.into(),
            image: format!("https://images.example.com/{}.jpg", name.to_lowercase().replace(' ', "-")),
            created_at: now,
            updated_at: now,
        };
        state.hotels.push(hotel.clone());
        hotel
    }

    pub fn add_room(&self, hotel: &Hotel, name: &str, capacity: i32) -> Room {
        let mut state = self.lock();
        let now = Self::now();
        let room = Room {
            id: RoomId::new(state.next_id()),
            name: name.into(),
            capacity,
            hotel_id: hotel.id,
            created_at: now,
            updated_at: now,
            hotel: hotel.clone(),
        };
        state.rooms.push(room.clone());
        room
    }

    pub fn add_enrollment(&self, user_id: UserId) -> EnrollmentId {
        let mut state = self.lock();
        let now = Self::now();
        let id = EnrollmentId::new(state.next_id());
        let address = Address {
            id: AddressId::new(state.next_id()),
            cep: "01310-100".into(),
            street: "Avenida Paulista".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
            number: "1000".into(),
            neighborhood: "Bela Vista".into(),
            address_detail: None,
        };
        state.enrollments.push(Enrollment {
            id,
            name: format!("attendee {user_id}"),
            cpf: "12345678909".into(),
            birthday: now,
            phone: "(11) 99999-9999".into(),
            user_id,
            address: Some(address),
            created_at: now,
            updated_at: now,
        });
        id
    }

    pub fn add_ticket_type(&self, is_remote: bool, includes_hotel: bool) -> TicketTypeId {
        let mut state = self.lock();
        let now = Self::now();
        let id = TicketTypeId::new(state.next_id());
        state.ticket_types.push(TicketType {
            id,
            name: format!("remote={is_remote} hotel={includes_hotel}"),
            price: 250,
            is_remote,
            includes_hotel,
            created_at: now,
            updated_at: now,
        });
        id
    }

    /// Returns `None` if `ticket_type_id` was not added to this store.
    pub fn add_ticket(
        &self,
        enrollment_id: EnrollmentId,
        ticket_type_id: TicketTypeId,
        status: TicketStatus,
    ) -> Option<Ticket> {
        let mut state = self.lock();
        let now = Self::now();
        let ticket_type = state
            .ticket_types
            .iter()
            .find(|tt| tt.id == ticket_type_id)?
            .clone();
        let ticket = Ticket {
            id: TicketId::new(state.next_id()),
            enrollment_id,
            status,
            ticket_type,
            created_at: now,
            updated_at: now,
        };
        state.tickets.push(ticket.clone());
        Some(ticket)
    }

    pub fn add_session(&self, token: &str, user_id: UserId) {
        self.lock().sessions.push((token.into(), user_id));
    }

    fn read(&self) -> AppResult<MutexGuard<'_, State>> {
        let state = self.lock();
        if state.unavailable {
            return Err(AppError::from_db(sqlx::Error::PoolTimedOut));
        }
        Ok(state)
    }
}

#[async_trait]
impl HotelRepository for MockStore {
    async fn find_hotels(&self) -> AppResult<Vec<Hotel>> {
        Ok(self.read()?.hotels.clone())
    }

    async fn find_hotel_rooms(&self, hotel_id: HotelId) -> AppResult<Vec<Room>> {
        Ok(self
            .read()?
            .rooms
            .iter()
            .filter(|room| room.hotel_id == hotel_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl EnrollmentRepository for MockStore {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Enrollment>> {
        Ok(self
            .read()?
            .enrollments
            .iter()
            .find(|e| e.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl TicketRepository for MockStore {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>> {
        Ok(self
            .read()?
            .tickets
            .iter()
            .find(|t| t.enrollment_id == enrollment_id)
            .cloned())
    }
}

#[async_trait]
impl AuthRepository for MockStore {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        Ok(self
            .read()?
            .sessions
            .iter()
            .find(|(token, _)| *token == access_token.0)
            .map(|(_, user_id)| *user_id))
    }
}

#[async_trait]
impl HealthCheckRepository for MockStore {
    async fn check_db(&self) -> bool {
        !self.lock().unavailable
    }
}
