use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::{
    model::{
        hotel::{Hotel, Room},
        id::{HotelId, UserId},
        ticket::HotelIneligibility,
    },
    repository::{enrollment::EnrollmentRepository, hotel::HotelRepository, ticket::TicketRepository},
};

/// Hotel listings gated on the caller's enrollment and ticket.
#[async_trait]
pub trait HotelService: Send + Sync {
    async fn get_hotels(&self, user_id: UserId) -> AppResult<Vec<Hotel>>;
    /// `hotel_id` is the raw path segment; it is validated here.
    async fn get_hotel_rooms(&self, hotel_id: &str, user_id: UserId) -> AppResult<Vec<Room>>;
}

#[derive(new)]
pub struct HotelServiceImpl {
    hotel_repository: Arc<dyn HotelRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
}

#[async_trait]
impl HotelService for HotelServiceImpl {
    async fn get_hotels(&self, user_id: UserId) -> AppResult<Vec<Hotel>> {
        // 一覧取得では資格チェックを先に行う
        self.ensure_hotel_access(user_id).await?;
        self.hotel_repository.find_hotels().await
    }

    async fn get_hotel_rooms(&self, hotel_id: &str, user_id: UserId) -> AppResult<Vec<Room>> {
        let hotel_id: HotelId = hotel_id.parse()?;

        // 部屋の存在確認は資格チェックより先に行う（403 より 404 を優先する）
        let rooms = self.hotel_repository.find_hotel_rooms(hotel_id).await?;
        if rooms.is_empty() {
            return Err(AppError::EntityNotFound(format!(
                "ホテル（{hotel_id}）の部屋が見つかりませんでした。"
            )));
        }

        self.ensure_hotel_access(user_id).await?;
        Ok(rooms)
    }
}

impl HotelServiceImpl {
    async fn ensure_hotel_access(&self, user_id: UserId) -> AppResult<()> {
        let verdict = self.hotel_access(user_id).await?;
        verdict.map_err(|reason| {
            tracing::debug!(user_id = %user_id, reason = %reason, "hotel access denied");
            AppError::ForbiddenOperation(reason.to_string())
        })
    }

    // 外側の Result はストレージの失敗、内側は資格判定の結果
    async fn hotel_access(&self, user_id: UserId) -> AppResult<Result<(), HotelIneligibility>> {
        let Some(enrollment) = self.enrollment_repository.find_by_user_id(user_id).await? else {
            return Ok(Err(HotelIneligibility::NoEnrollment));
        };
        let Some(ticket) = self
            .ticket_repository
            .find_by_enrollment_id(enrollment.id)
            .await?
        else {
            return Ok(Err(HotelIneligibility::NoTicket));
        };
        Ok(ticket.check_hotel_access())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mocks::MockStore,
        model::ticket::TicketStatus,
    };

    fn service(store: &MockStore) -> HotelServiceImpl {
        let store = Arc::new(store.clone());
        HotelServiceImpl::new(store.clone(), store.clone(), store)
    }

    fn eligible_user(store: &MockStore) -> UserId {
        let user_id = UserId::new(1);
        let enrollment = store.add_enrollment(user_id);
        let ticket_type = store.add_ticket_type(false, true);
        store.add_ticket(enrollment, ticket_type, TicketStatus::Paid);
        user_id
    }

    #[tokio::test]
    async fn eligible_user_gets_every_hotel_unchanged() {
        let store = MockStore::new();
        let user_id = eligible_user(&store);
        let first = store.add_hotel("Driven Resort");
        let second = store.add_hotel("Driven Palace");

        let hotels = service(&store).get_hotels(user_id).await.unwrap();
        assert_eq!(hotels, vec![first, second]);
    }

    #[tokio::test]
    async fn eligible_user_with_no_hotels_gets_empty_list() {
        let store = MockStore::new();
        let user_id = eligible_user(&store);

        let hotels = service(&store).get_hotels(user_id).await.unwrap();
        assert!(hotels.is_empty());
    }

    #[tokio::test]
    async fn user_without_enrollment_is_forbidden() {
        let store = MockStore::new();
        let hotel = store.add_hotel("Driven Resort");
        store.add_room(&hotel, "101", 2);
        let service = service(&store);

        let res = service.get_hotels(UserId::new(7)).await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));

        let res = service.get_hotel_rooms(&hotel.id.to_string(), UserId::new(7)).await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
    }

    #[tokio::test]
    async fn enrollment_without_ticket_is_forbidden() {
        let store = MockStore::new();
        let user_id = UserId::new(3);
        store.add_enrollment(user_id);
        store.add_hotel("Driven Resort");

        let res = service(&store).get_hotels(user_id).await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
    }

    #[tokio::test]
    async fn disqualifying_tickets_are_forbidden() {
        let cases = [
            (TicketStatus::Reserved, false, true),
            (TicketStatus::Paid, true, true),
            (TicketStatus::Paid, false, false),
            (TicketStatus::Reserved, true, false),
        ];
        for (status, is_remote, includes_hotel) in cases {
            let store = MockStore::new();
            let user_id = UserId::new(1);
            let enrollment = store.add_enrollment(user_id);
            let ticket_type = store.add_ticket_type(is_remote, includes_hotel);
            store.add_ticket(enrollment, ticket_type, status);
            let hotel = store.add_hotel("Driven Resort");
            store.add_room(&hotel, "101", 2);
            let service = service(&store);

            let res = service.get_hotels(user_id).await;
            assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
            let res = service.get_hotel_rooms(&hotel.id.to_string(), user_id).await;
            assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
        }
    }

    #[tokio::test]
    async fn malformed_hotel_id_is_rejected_before_any_lookup() {
        let store = MockStore::new();
        // 接続不能でも、ID の検証が先に失敗する
        store.set_unavailable(true);

        let res = service(&store).get_hotel_rooms("abc", UserId::new(1)).await;
        assert!(matches!(res, Err(AppError::InvalidIdentifier(_))));
    }

    #[tokio::test]
    async fn missing_rooms_are_not_found_before_eligibility() {
        let store = MockStore::new();
        // 登録もチケットもないユーザーでも 404 になる
        let res = service(&store).get_hotel_rooms("1", UserId::new(9)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        let user_id = eligible_user(&store);
        let res = service(&store).get_hotel_rooms("1", user_id).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn eligible_user_gets_rooms_of_the_requested_hotel() {
        let store = MockStore::new();
        let user_id = eligible_user(&store);
        let hotel = store.add_hotel("Driven Resort");
        let other = store.add_hotel("Driven Palace");
        let single = store.add_room(&hotel, "101", 1);
        let double = store.add_room(&hotel, "102", 2);
        store.add_room(&other, "201", 3);

        let rooms = service(&store)
            .get_hotel_rooms(&hotel.id.to_string(), user_id)
            .await
            .unwrap();
        assert_eq!(rooms, vec![single, double]);
        assert!(rooms.iter().all(|room| room.hotel == hotel));
    }

    #[tokio::test]
    async fn repeated_reads_are_identical() {
        let store = MockStore::new();
        let user_id = eligible_user(&store);
        let hotel = store.add_hotel("Driven Resort");
        store.add_room(&hotel, "101", 2);
        let service = service(&store);

        assert_eq!(
            service.get_hotels(user_id).await.unwrap(),
            service.get_hotels(user_id).await.unwrap()
        );
        let hotel_id = hotel.id.to_string();
        assert_eq!(
            service.get_hotel_rooms(&hotel_id, user_id).await.unwrap(),
            service.get_hotel_rooms(&hotel_id, user_id).await.unwrap()
        );
    }

    #[tokio::test]
    async fn storage_failure_is_surfaced_not_hidden() {
        let store = MockStore::new();
        let user_id = eligible_user(&store);
        store.set_unavailable(true);

        let res = service(&store).get_hotels(user_id).await;
        assert!(matches!(res, Err(AppError::StoreUnavailable(_))));
    }
}
