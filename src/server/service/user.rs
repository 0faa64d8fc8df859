use sea_orm::DatabaseConnection;

use crate::server::{
    auth::{password, JwtManager},
    data::user::UserRepository,
    error::AppError,
    model::user::{AuthenticatedUser, RegisterUserParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtManager,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtManager) -> Self {
        Self { db, jwt }
    }

    /// Authenticates a user by username and password.
    ///
    /// An unknown username and a wrong password are indistinguishable to the
    /// caller; both return `Ok(None)`.
    ///
    /// # Returns
    /// - `Ok(Some(AuthenticatedUser))` - Credentials valid, token issued
    /// - `Ok(None)` - Unknown username or wrong password
    /// - `Err(AppError)` - Database or token issuance error
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AuthenticatedUser>, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(entity) = repo.find_by_username(username).await? else {
            return Ok(None);
        };

        if !password::verify_password(password, &entity.password_hash) {
            return Ok(None);
        }

        let user = User::from_entity(entity);
        let token = self.jwt.issue(user.id, &user.username, &user.role)?;

        Ok(Some(AuthenticatedUser { user, token }))
    }

    /// Registers a new user account.
    ///
    /// The password is hashed with argon2id before storage.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Username already taken
    /// - `Err(AppError)` - Database or hashing error
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.is_unique_username(&params.username).await? {
            return Err(AppError::BadRequest("Username already exists".to_string()));
        }

        let password_hash = password::hash_password(&params.password)?;

        Ok(repo
            .create(params.username, password_hash, params.role)
            .await?)
    }
}
