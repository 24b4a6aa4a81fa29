pub mod booking;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;

use actix_web::{web, HttpResponse};

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Hotel Reservation API."
    }))
}

/// Route tree shared by the binary and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index)).service(
        web::scope("/api/v1")
            .service(
                web::scope("/users")
                    .route("/register", web::post().to(handlers::users::register_user))
                    .route("/login", web::post().to(handlers::users::login_user)),
            )
            .service(
                web::scope("/rooms")
                    // "/available" must be registered before the id catch-all.
                    .route("/available", web::get().to(handlers::rooms::get_available_rooms))
                    .route("/{room_id}", web::get().to(handlers::rooms::get_room_by_id)),
            )
            .service(
                web::scope("/reservations")
                    .route("", web::post().to(handlers::reservations::create_reservation))
                    .route(
                        "/{user_id}",
                        web::get().to(handlers::reservations::get_user_reservations),
                    ),
            ),
    );
}
