//! Availability and admission for rooms.
//!
//! Both the search query and the admission guard are transcriptions of the
//! same half-open overlap predicate, so a room reported available for a
//! range is exactly a room whose admission for that range would succeed at
//! that instant. Admission re-validates at commit time and never trusts a
//! prior query result.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::reservation::CreateReservation;
use crate::models::room::Room;

/// A half-open interval `[check_in, check_out)` over calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl DateRange {
    /// Rejects empty and inverted ranges: a stay is always at least one night.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, ApiError> {
        if check_in >= check_out {
            return Err(ApiError::Validation(
                "check_out_date must be after check_in_date".to_string(),
            ));
        }
        Ok(DateRange {
            check_in,
            check_out,
        })
    }

    /// Half-open overlap: touching ranges (one's check-out equals the
    /// other's check-in) do NOT overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        !(self.check_out <= other.check_in || self.check_in >= other.check_out)
    }
}

/// All administratively open rooms with no reservation overlapping `range`.
///
/// Computed as a single set-difference query so there is no read race
/// between listing reservations and listing rooms. Cancelled reservations
/// do not block a room.
pub async fn find_available_rooms(
    pool: &SqlitePool,
    range: DateRange,
) -> Result<Vec<Room>, ApiError> {
    let rooms = sqlx::query_as::<_, Room>(
        r#"
        SELECT * FROM rooms r
        WHERE r.is_available = 1
        AND r.room_id NOT IN (
            SELECT room_id FROM reservations
            WHERE status <> 'Cancelled'
            AND NOT (check_out_date <= ? OR check_in_date >= ?)
        )
        "#,
    )
    .bind(range.check_in)
    .bind(range.check_out)
    .fetch_all(pool)
    .await?;

    Ok(rooms)
}

/// Admit a reservation, returning the new reservation id.
///
/// The insert carries its own conflict guard: a single
/// `INSERT .. SELECT .. WHERE NOT EXISTS(<overlap>)` statement, serialized
/// by SQLite's writer lock. Two racing admissions for the same room cannot
/// both pass the guard, so the losing request observes zero inserted rows
/// and reports a conflict. The separate user/room lookups only improve the
/// error; correctness never depends on them.
pub async fn create_reservation(
    pool: &SqlitePool,
    req: &CreateReservation,
) -> Result<i64, ApiError> {
    let range = DateRange::new(req.check_in_date, req.check_out_date)?;
    let total_price = req.total_price.unwrap_or(0.0);

    let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE room_id = ?")
        .bind(req.room_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found.".to_string()))?;

    if !room.is_available {
        return Err(ApiError::Conflict(
            "Room is not open for booking.".to_string(),
        ));
    }

    let user_exists: Option<i64> = sqlx::query_scalar("SELECT user_id FROM users WHERE user_id = ?")
        .bind(req.user_id)
        .fetch_optional(pool)
        .await?;
    if user_exists.is_none() {
        return Err(ApiError::NotFound("User not found.".to_string()));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO reservations
            (user_id, room_id, check_in_date, check_out_date, total_price, status)
        SELECT ?, ?, ?, ?, ?, 'Pending'
        WHERE NOT EXISTS (
            SELECT 1 FROM reservations
            WHERE room_id = ?
            AND status <> 'Cancelled'
            AND NOT (check_out_date <= ? OR check_in_date >= ?)
        )
        "#,
    )
    .bind(req.user_id)
    .bind(req.room_id)
    .bind(range.check_in)
    .bind(range.check_out)
    .bind(total_price)
    .bind(req.room_id)
    .bind(range.check_in)
    .bind(range.check_out)
    .execute(pool)
    .await
    .map_err(|e| match &e {
        // FK violation means the referenced user or room vanished between
        // the lookup above and the insert.
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            ApiError::NotFound("User or room not found.".to_string())
        }
        _ => ApiError::Storage(e),
    })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::Conflict(
            "Room is already booked for an overlapping date range.".to_string(),
        ));
    }

    Ok(result.last_insert_rowid())
}
