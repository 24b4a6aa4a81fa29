use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::errors::ApiError;
use crate::models::user::{LoginUser, RegisterUser};

pub async fn register_user(
    pool: web::Data<SqlitePool>,
    body: web::Json<RegisterUser>,
) -> Result<HttpResponse, ApiError> {
    body.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    // Never persisted or logged in recoverable form.
    let password_hash = bcrypt::hash(&body.password, bcrypt::DEFAULT_COST)?;

    let result = sqlx::query(
        r#"
        INSERT INTO users (first_name, last_name, email, password_hash, phone_number)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&body.first_name)
    .bind(&body.last_name)
    .bind(&body.email)
    .bind(&password_hash)
    .bind(&body.phone_number)
    .execute(pool.get_ref())
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => ApiError::Conflict(
            "Email already registered. Please use a different email.".to_string(),
        ),
        _ => ApiError::Storage(e),
    })?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "User registered successfully.",
        "userId": result.last_insert_rowid(),
    })))
}

pub async fn login_user(
    pool: web::Data<SqlitePool>,
    body: web::Json<LoginUser>,
) -> Result<HttpResponse, ApiError> {
    let row: Option<(i64, String)> =
        sqlx::query_as("SELECT user_id, password_hash FROM users WHERE email = ?")
            .bind(&body.email)
            .fetch_optional(pool.get_ref())
            .await?;

    // Unknown email and wrong password are indistinguishable to the caller.
    let (user_id, password_hash) = row.ok_or(ApiError::InvalidCredentials)?;

    if !bcrypt::verify(&body.password, &password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Login successful.",
        "userId": user_id,
    })))
}
