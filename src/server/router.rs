use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        national_park::{
            create_national_park, delete_national_park, get_national_park, get_national_parks,
            update_national_park,
        },
        trail::{
            create_trail, delete_trail, get_trail, get_trails, get_trails_in_national_park,
            update_trail,
        },
        user::{authenticate, register},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/nationalparks",
            get(get_national_parks).post(create_national_park),
        )
        .route(
            "/api/v1/nationalparks/{id}",
            get(get_national_park)
                .patch(update_national_park)
                .delete(delete_national_park),
        )
        .route("/api/v1/trails", get(get_trails).post(create_trail))
        .route(
            "/api/v1/trails/{id}",
            get(get_trail).patch(update_trail).delete(delete_trail),
        )
        // Literal segment kept for client compatibility.
        .route(
            "/api/v1/trails/GetTrailInNationalPark/{nationalParkId}",
            get(get_trails_in_national_park),
        )
        .route("/api/v1/users/authenticate", post(authenticate))
        .route("/api/v1/users/register", post(register))
}
