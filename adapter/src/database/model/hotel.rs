use kernel::model::{
    hotel::{Hotel, Room},
    id::{HotelId, RoomId},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct HotelRow {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HotelRow> for Hotel {
    fn from(value: HotelRow) -> Self {
        let HotelRow {
            id,
            name,
            image,
            created_at,
            updated_at,
        } = value;
        Hotel {
            id,
            name,
            image,
            created_at,
            updated_at,
        }
    }
}

// rooms と hotels を INNER JOIN した結果を受け取る型
// 列名が衝突するため、ホテル側の列には hotel_ の接頭辞をつけて取得する
#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub room_name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub room_created_at: DateTime<Utc>,
    pub room_updated_at: DateTime<Utc>,
    pub hotel_name: String,
    pub hotel_image: String,
    pub hotel_created_at: DateTime<Utc>,
    pub hotel_updated_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            room_name,
            capacity,
            hotel_id,
            room_created_at,
            room_updated_at,
            hotel_name,
            hotel_image,
            hotel_created_at,
            hotel_updated_at,
        } = value;
        Room {
            id: room_id,
            name: room_name,
            capacity,
            hotel_id,
            created_at: room_created_at,
            updated_at: room_updated_at,
            hotel: Hotel {
                id: hotel_id,
                name: hotel_name,
                image: hotel_image,
                created_at: hotel_created_at,
                updated_at: hotel_updated_at,
            },
        }
    }
}
