/// Authentication service - accounts, passwords and JWTs
use crate::error::{Result, ServerError};
use cadence_core::{User, UserId};
use cadence_storage::users;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone)]
pub struct AuthService {
    secret: String,
    access_token_expiration: Duration,
    refresh_token_expiration: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub exp: i64,
    pub iat: i64,
    pub token_type: TokenType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Tokens handed out on sign-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Result of a successful sign-up or sign-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    #[serde(flatten)]
    pub tokens: TokenPair,
}

impl AuthService {
    pub fn new(secret: String, access_expiration_hours: u64, refresh_expiration_days: u64) -> Self {
        Self {
            secret,
            access_token_expiration: Duration::hours(access_expiration_hours as i64),
            refresh_token_expiration: Duration::days(refresh_expiration_days as i64),
        }
    }

    /// Hash a password using bcrypt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(ServerError::from)
    }

    /// Verify a password against a hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(ServerError::from)
    }

    /// Issue an access/refresh pair for `user_id`
    pub fn issue_tokens(&self, user_id: &UserId) -> Result<TokenPair> {
        Ok(TokenPair {
            access_token: self.create_token(user_id, TokenType::Access, self.access_token_expiration)?,
            refresh_token: self.create_token(user_id, TokenType::Refresh, self.refresh_token_expiration)?,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_expiration.num_seconds(),
        })
    }

    /// Verify and decode a token
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
        Ok(token_data.claims)
    }

    /// Resolve an access token to its user
    pub fn verify_access_token(&self, token: &str) -> Result<UserId> {
        self.verify_typed(token, TokenType::Access)
    }

    /// Resolve a refresh token to its user
    pub fn verify_refresh_token(&self, token: &str) -> Result<UserId> {
        self.verify_typed(token, TokenType::Refresh)
    }

    /// Create an account with a password credential
    pub async fn create_account(&self, pool: &SqlitePool, username: &str, password: &str) -> Result<User> {
        validate_credentials(username, password)?;

        let hash = self.hash_password(password)?;
        let user = users::create(pool, username).await?;
        users::set_password_hash(pool, &user.id, &hash).await?;

        Ok(user)
    }

    /// Create an account and sign it in
    pub async fn register(&self, pool: &SqlitePool, username: &str, password: &str) -> Result<Session> {
        let user = self.create_account(pool, username, password).await?;
        self.session(user)
    }

    /// Sign in with name and password
    ///
    /// Unknown names, guests and wrong passwords all fail the same way.
    pub async fn login(&self, pool: &SqlitePool, username: &str, password: &str) -> Result<Session> {
        let invalid = || ServerError::Auth("Invalid username or password".to_string());

        let user = users::find_by_name(pool, username).await?.ok_or_else(invalid)?;
        let hash = users::get_password_hash(pool, &user.id)
            .await?
            .ok_or_else(invalid)?;

        if !self.verify_password(password, &hash)? {
            tracing::warn!(username, "Rejected login");
            return Err(invalid());
        }

        self.session(user)
    }

    /// Create a guest account without credentials and sign it in
    pub async fn sign_in_anonymously(&self, pool: &SqlitePool) -> Result<Session> {
        let user = users::create_anonymous(pool).await?;
        self.session(user)
    }

    /// Exchange a refresh token for a fresh pair
    pub async fn refresh(&self, pool: &SqlitePool, refresh_token: &str) -> Result<TokenPair> {
        let user_id = self.verify_refresh_token(refresh_token)?;

        if users::get_by_id(pool, &user_id).await?.is_none() {
            return Err(ServerError::Auth("User no longer exists".to_string()));
        }

        self.issue_tokens(&user_id)
    }

    fn session(&self, user: User) -> Result<Session> {
        let tokens = self.issue_tokens(&user.id)?;
        Ok(Session { user, tokens })
    }

    fn verify_typed(&self, token: &str, expected: TokenType) -> Result<UserId> {
        let claims = self.verify_token(token)?;
        if claims.token_type != expected {
            return Err(ServerError::Auth("Invalid token type".to_string()));
        }
        Ok(UserId::new(claims.sub))
    }

    fn create_token(
        &self,
        user_id: &UserId,
        token_type: TokenType,
        expiration: Duration,
    ) -> Result<String> {
        let now = Utc::now();
        let exp = now + expiration;

        let claims = Claims {
            sub: user_id.as_str().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            token_type,
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key).map_err(ServerError::from)
    }
}

fn validate_credentials(username: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(ServerError::BadRequest("Username must not be empty".to_string()));
    }
    if password.is_empty() {
        return Err(ServerError::BadRequest("Password must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let auth = AuthService::new("secret".to_string(), 24, 30);
        let password = "my_secure_password";

        let hash = auth.hash_password(password).unwrap();
        assert!(auth.verify_password(password, &hash).unwrap());
        assert!(!auth.verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_issued_tokens_verify() {
        let auth = AuthService::new("secret".to_string(), 24, 30);
        let user_id = UserId::new("user-123");

        let pair = auth.issue_tokens(&user_id).unwrap();
        assert_eq!(pair.token_type, "Bearer");
        assert_eq!(pair.expires_in, 24 * 3600);
        assert_eq!(auth.verify_access_token(&pair.access_token).unwrap(), user_id);
        assert_eq!(auth.verify_refresh_token(&pair.refresh_token).unwrap(), user_id);
    }

    #[test]
    fn test_token_type_validation() {
        let auth = AuthService::new("secret".to_string(), 24, 30);
        let pair = auth.issue_tokens(&UserId::new("user-123")).unwrap();

        assert!(auth.verify_refresh_token(&pair.access_token).is_err());
        assert!(auth.verify_access_token(&pair.refresh_token).is_err());
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let ours = AuthService::new("secret".to_string(), 24, 30);
        let theirs = AuthService::new("other".to_string(), 24, 30);

        let pair = theirs.issue_tokens(&UserId::new("user-123")).unwrap();
        assert!(matches!(
            ours.verify_access_token(&pair.access_token),
            Err(ServerError::Jwt(_))
        ));
        assert!(ours.verify_access_token("not-a-jwt").is_err());
    }

    #[test]
    fn test_blank_credentials_rejected() {
        assert!(validate_credentials("  ", "pw").is_err());
        assert!(validate_credentials("alice", "").is_err());
        assert!(validate_credentials("alice", "pw").is_ok());
    }
}
