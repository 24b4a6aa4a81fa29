use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Room {
    pub room_id: i64,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub capacity: i64,
    pub description: Option<String>,
    /// Administrative flag, independent of bookings. A room taken out of
    /// service never shows up in availability results.
    pub is_available: bool,
}
