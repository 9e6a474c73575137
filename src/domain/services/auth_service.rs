use crate::config::{Config, DEFAULT_SECRET_KEY};
use crate::domain::models::auth::{Claims, TokenPair};
use crate::error::AppError;
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use bson::oid::ObjectId;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;

pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl AuthService {
    pub fn new(config: &Config) -> Self {
        if config.secret_key == DEFAULT_SECRET_KEY {
            tracing::warn!("SECRET_KEY is the built-in default; unsafe for production");
        }

        Self {
            encoding_key: EncodingKey::from_secret(config.secret_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            access_ttl: Duration::minutes(config.access_token_ttl_minutes),
            refresh_ttl: Duration::days(config.refresh_token_ttl_days),
        }
    }

    /// Mints an access + refresh pair bound to the user id.
    pub fn issue_pair(&self, user_id: &ObjectId) -> Result<TokenPair, AppError> {
        let access = self.sign(user_id, self.access_ttl)?;
        let refresh = self.sign(user_id, self.refresh_ttl)?;
        Ok(TokenPair::bearer(access, refresh))
    }

    /// Verifies a refresh token and mints a fresh pair for the same subject.
    /// Stateless refresh: the presented token stays valid until its own
    /// expiry, there is no revocation store.
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.verify(refresh_token)?;
        let user_id = ObjectId::parse_str(&claims.sub).map_err(|_| AppError::Unauthorized)?;
        self.issue_pair(&user_id)
    }

    /// Signature + expiry check. Any failure collapses to Unauthorized.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized)
    }

    fn sign(&self, user_id: &ObjectId, lifetime: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_hex(),
            exp: (now + lifetime).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("JWT encoding failed: {}", e);
            AppError::Internal
        })
    }

    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|_| AppError::Internal)
    }

    pub fn verify_password(&self, password: &str, password_hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(&Config {
            database_url: "memory://".into(),
            database_name: "test".into(),
            port: 0,
            secret_key: "test-secret".into(),
            access_token_ttl_minutes: 30,
            refresh_token_ttl_days: 7,
        })
    }

    #[test]
    fn token_round_trip_resolves_subject() {
        let svc = service();
        let user_id = ObjectId::new();
        let pair = svc.issue_pair(&user_id).unwrap();

        let claims = svc.verify(&pair.access_token).unwrap();
        assert_eq!(claims.sub, user_id.to_hex());
    }

    #[test]
    fn expired_token_is_rejected() {
        let svc = service();
        let token = svc.sign(&ObjectId::new(), Duration::hours(-1)).unwrap();

        assert!(matches!(svc.verify(&token), Err(AppError::Unauthorized)));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let svc = service();
        let pair = svc.issue_pair(&ObjectId::new()).unwrap();
        let mut tampered = pair.access_token.clone();
        tampered.pop();
        tampered.push('x');

        assert!(matches!(svc.verify(&tampered), Err(AppError::Unauthorized)));
    }

    #[test]
    fn refresh_mints_pair_for_same_subject() {
        let svc = service();
        let user_id = ObjectId::new();
        let pair = svc.issue_pair(&user_id).unwrap();

        let next = svc.refresh(&pair.refresh_token).unwrap();
        assert_eq!(svc.verify(&next.access_token).unwrap().sub, user_id.to_hex());
    }

    #[test]
    fn password_hash_verifies_only_original() {
        let svc = service();
        let hash = svc.hash_password("hunter2").unwrap();

        assert!(svc.verify_password("hunter2", &hash));
        assert!(!svc.verify_password("hunter3", &hash));
        assert!(!svc.verify_password("hunter2", "not-a-phc-string"));
    }
}
