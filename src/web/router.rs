use axum::{
    routing::{delete, get},
    Router,
};

use crate::web::{
    controller::{home, national_park},
    state::WebState,
};

pub fn router() -> Router<WebState> {
    Router::new()
        .route("/", get(home::index))
        .route("/home/index", get(home::index))
        .route("/home/login", get(home::login_form).post(home::login))
        .route(
            "/home/register",
            get(home::register_form).post(home::register),
        )
        .route("/home/logout", get(home::logout))
        .route("/nationalparks", get(national_park::index))
        .route("/nationalparks/getall", get(national_park::get_all))
        .route(
            "/nationalparks/upsert",
            get(national_park::upsert_create_form).post(national_park::upsert),
        )
        .route(
            "/nationalparks/upsert/{id}",
            get(national_park::upsert_edit_form),
        )
        .route("/nationalparks/{id}", delete(national_park::delete))
}
