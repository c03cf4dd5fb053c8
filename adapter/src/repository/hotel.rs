use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    hotel::{Hotel, Room},
    id::HotelId,
};
use kernel::repository::hotel::HotelRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::hotel::{HotelRow, RoomRow},
    ConnectionPool,
};

#[derive(new)]
pub struct HotelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HotelRepository for HotelRepositoryImpl {
    async fn find_hotels(&self) -> AppResult<Vec<Hotel>> {
        sqlx::query_as::<_, HotelRow>(
            r#"
                SELECT
                    id,
                    name,
                    image,
                    created_at,
                    updated_at
                FROM hotels
                ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Hotel::from).collect())
        .map_err(AppError::from_db)
    }

    async fn find_hotel_rooms(&self, hotel_id: HotelId) -> AppResult<Vec<Room>> {
        // rooms テーブルと hotels テーブルを INNER JOIN し、
        // 所属するホテルの情報も一緒に抽出する
        sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT
                    r.id AS room_id,
                    r.name AS room_name,
                    r.capacity,
                    r.hotel_id,
                    r.created_at AS room_created_at,
                    r.updated_at AS room_updated_at,
                    h.name AS hotel_name,
                    h.image AS hotel_image,
                    h.created_at AS hotel_created_at,
                    h.updated_at AS hotel_updated_at
                FROM rooms AS r
                INNER JOIN hotels AS h ON r.hotel_id = h.id
                WHERE r.hotel_id = $1
                ORDER BY r.id ASC
            "#,
        )
        .bind(hotel_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Room::from).collect())
        .map_err(AppError::from_db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(fixtures("common", "hotel"))]
    #[ignore = "requires DATABASE_URL"]
    async fn test_find_hotels(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = HotelRepositoryImpl::new(ConnectionPool::new(pool));

        let hotels = repo.find_hotels().await?;
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].id, HotelId::new(1));
        assert_eq!(hotels[0].name, "Driven Resort");
        assert_eq!(hotels[0].image, "https://images.example.com/resort.jpg");
        assert_eq!(hotels[1].name, "Driven Palace");
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    #[ignore = "requires DATABASE_URL"]
    async fn test_find_hotels_empty(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = HotelRepositoryImpl::new(ConnectionPool::new(pool));

        assert!(repo.find_hotels().await?.is_empty());
        Ok(())
    }

    #[sqlx::test(fixtures("common", "hotel"))]
    #[ignore = "requires DATABASE_URL"]
    async fn test_find_hotel_rooms(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = HotelRepositoryImpl::new(ConnectionPool::new(pool));

        let rooms = repo.find_hotel_rooms(HotelId::new(1)).await?;
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].name, "Suite 101");
        assert_eq!(rooms[0].capacity, 2);
        assert_eq!(rooms[1].name, "Suite 102");
        for room in &rooms {
            assert_eq!(room.hotel_id, HotelId::new(1));
            assert_eq!(room.hotel.id, HotelId::new(1));
            assert_eq!(room.hotel.name, "Driven Resort");
        }

        // 部屋のないホテルと存在しないホテルはどちらも空になる
        assert!(repo.find_hotel_rooms(HotelId::new(2)).await?.is_empty());
        assert!(repo.find_hotel_rooms(HotelId::new(999)).await?.is_empty());
        Ok(())
    }
}
