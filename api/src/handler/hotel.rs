use crate::{
    extractor::AuthorizedUser,
    model::hotel::{HotelResponse, RoomResponse},
};
use axum::{
    extract::{Path, State},
    Json,
};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_hotel_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<HotelResponse>>> {
    registry
        .hotel_service()
        .get_hotels(user.id())
        .await
        .map(|hotels| hotels.into_iter().map(HotelResponse::from).collect())
        .map(Json)
}

// hotel_id は文字列のまま受け取り、数値としての検証はサービス層で行う
pub async fn show_hotel_rooms(
    user: AuthorizedUser,
    Path(hotel_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<RoomResponse>>> {
    registry
        .hotel_service()
        .get_hotel_rooms(&hotel_id, user.id())
        .await
        .map(|rooms| rooms.into_iter().map(RoomResponse::from).collect())
        .map(Json)
}
