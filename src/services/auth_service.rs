//! Authentication service

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    config::AuthConfig,
    constants::roles,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub name: String,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// A freshly signed session token
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    pub async fn register(pool: &PgPool, name: &str, email: &str, password: &str) -> AppResult<User> {
        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let password_hash = Self::hash_password(password)?;

        UserRepository::create(pool, name, email, &password_hash, roles::USER).await
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        config: &AuthConfig,
        email: &str,
        password: &str,
    ) -> AppResult<(User, IssuedSession)> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let session = Self::issue_session(&user, config)?;

        Ok((user, session))
    }

    /// Sign a session token for a user
    pub fn issue_session(user: &User, config: &AuthConfig) -> AppResult<IssuedSession> {
        Self::issue_session_at(user, config, Utc::now())
    }

    fn issue_session_at(
        user: &User,
        config: &AuthConfig,
        now: DateTime<Utc>,
    ) -> AppResult<IssuedSession> {
        let expires_at = now + Duration::hours(config.session_expiry_hours);

        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok(IssuedSession { token, expires_at })
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Hash password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
