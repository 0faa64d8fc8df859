//! OpenAPI documentation for the API, served through Swagger UI.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::model::{
    api::ErrorDto,
    national_park::NationalParkDto,
    trail::{Difficulty, TrailCreateDto, TrailDto, TrailUpdateDto},
    user::{AuthenticationDto, RegistrationDto, UserDto},
};
use crate::server::controller;

#[derive(OpenApi)]
#[openapi(
    paths(
        controller::national_park::get_national_parks,
        controller::national_park::get_national_park,
        controller::national_park::create_national_park,
        controller::national_park::update_national_park,
        controller::national_park::delete_national_park,
        controller::trail::get_trails,
        controller::trail::get_trail,
        controller::trail::get_trails_in_national_park,
        controller::trail::create_trail,
        controller::trail::update_trail,
        controller::trail::delete_trail,
        controller::user::authenticate,
        controller::user::register,
    ),
    components(schemas(
        ErrorDto,
        NationalParkDto,
        TrailDto,
        TrailCreateDto,
        TrailUpdateDto,
        Difficulty,
        AuthenticationDto,
        RegistrationDto,
        UserDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "national-parks", description = "National park catalogue"),
        (name = "trails", description = "Trails and their owning parks"),
        (name = "users", description = "Account registration and authentication")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
