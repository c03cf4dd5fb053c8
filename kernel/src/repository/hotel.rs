use crate::model::{
    hotel::{Hotel, Room},
    id::HotelId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    // すべてのホテルを取得する（存在しない場合は空の Vec）
    async fn find_hotels(&self) -> AppResult<Vec<Hotel>>;
    // ホテル ID に紐づく部屋を、所属するホテルの情報とともに取得する
    async fn find_hotel_rooms(&self, hotel_id: HotelId) -> AppResult<Vec<Room>>;
}
