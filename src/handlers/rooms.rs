use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::booking::{self, DateRange};
use crate::errors::ApiError;
use crate::models::room::Room;

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

fn parse_date(value: Option<&str>, field: &str) -> Result<NaiveDate, ApiError> {
    let raw = value.ok_or_else(|| ApiError::Validation(format!("Missing {field} date")))?;
    raw.parse()
        .map_err(|_| ApiError::Validation(format!("{field} must be a YYYY-MM-DD date")))
}

pub async fn get_available_rooms(
    pool: web::Data<SqlitePool>,
    query: web::Query<AvailabilityQuery>,
) -> Result<HttpResponse, ApiError> {
    let check_in = parse_date(query.check_in.as_deref(), "check_in")?;
    let check_out = parse_date(query.check_out.as_deref(), "check_out")?;
    let range = DateRange::new(check_in, check_out)?;

    log::debug!("searching rooms for {} to {}", check_in, check_out);

    let rooms = booking::find_available_rooms(pool.get_ref(), range).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Available rooms retrieved successfully.",
        "count": rooms.len(),
        "rooms": rooms,
    })))
}

pub async fn get_room_by_id(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let room_id = path.into_inner();

    let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE room_id = ?")
        .bind(room_id)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found.".to_string()))?;

    Ok(HttpResponse::Ok().json(room))
}
