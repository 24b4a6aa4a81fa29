use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::booking;
use crate::errors::ApiError;
use crate::models::reservation::{CreateReservation, Reservation};

pub async fn create_reservation(
    pool: web::Data<SqlitePool>,
    body: web::Json<CreateReservation>,
) -> Result<HttpResponse, ApiError> {
    let reservation_id = booking::create_reservation(pool.get_ref(), &body).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Reservation successfully created.",
        "reservationId": reservation_id,
        "data": {
            "userId": body.user_id,
            "roomId": body.room_id,
            "checkIn": body.check_in_date,
        },
    })))
}

pub async fn get_user_reservations(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    let reservations = sqlx::query_as::<_, Reservation>(
        "SELECT * FROM reservations WHERE user_id = ? ORDER BY check_in_date",
    )
    .bind(user_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "reservations": reservations })))
}
