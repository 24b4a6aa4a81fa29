use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle states. The booking engine only ever produces `Pending`;
/// the remaining states belong to reservation management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub reservation_id: i64,
    pub user_id: i64,
    pub room_id: i64,
    pub check_in_date: chrono::NaiveDate,
    pub check_out_date: chrono::NaiveDate,
    pub total_price: f64,
    pub status: ReservationStatus,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateReservation {
    pub user_id: i64,
    pub room_id: i64,
    pub check_in_date: chrono::NaiveDate,
    pub check_out_date: chrono::NaiveDate,
    pub total_price: Option<f64>,
}
