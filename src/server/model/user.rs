//! User domain model and operation parameters.

use crate::model::user::{RegistrationDto, UserDto};

/// User account without credential material.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub role: String,
}

impl User {
    /// Converts an entity model to a domain model, dropping the stored
    /// password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            role: entity.role,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            role: self.role,
            token: None,
        }
    }
}

/// A user together with a freshly issued bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

impl AuthenticatedUser {
    pub fn into_dto(self) -> UserDto {
        let mut dto = self.user.into_dto();
        dto.token = Some(self.token);
        dto
    }
}

/// Parameters for registering a new user account.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl RegisterUserParams {
    /// Builds registration parameters from an inbound DTO. The role defaults
    /// to `Admin` when the payload omits it.
    pub fn from_dto(dto: RegistrationDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
            role: dto.role.unwrap_or_else(|| "Admin".to_string()),
        }
    }
}
