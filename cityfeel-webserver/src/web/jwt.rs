use anyhow::{anyhow, Result};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use time::{Duration, OffsetDateTime};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The username in our case
    sub: String,
    /// Expiry time as Unix timestamp
    exp: usize,
}

pub struct JwtState {
    jwt_service: JwtService,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new(time_valid: Duration) -> Self {
        Self {
            jwt_service: JwtService::new(),
            time_valid,
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, username: &str) -> Result<String> {
        let exp = usize::try_from((OffsetDateTime::now_utc() + self.time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: username.to_string(),
            exp,
        };
        self.jwt_service.encode(&claims)
    }

    pub fn validate_token_and_get_username(&self, token: &str) -> Result<String> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        let claims = self.jwt_service.decode(token)?;
        Ok(claims.sub)
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens();
        self.lock().insert(token);
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    /// Expired tokens are rejected anyway and can be forgotten.
    fn remove_invalid_tokens(&self) {
        let invalid_tokens = self
            .lock()
            .iter()
            .filter(|token| self.jwt_service.decode(token).is_err())
            .cloned()
            .collect::<Vec<_>>();
        let mut blacklist = self.lock();
        for token in invalid_tokens {
            blacklist.remove(&token);
        }
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}

use self::jwt_service::JwtService;

mod jwt_service {
    use super::{Claims, Result};
    use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

    /// 256 random bits, regenerated on every start.
    fn generate_secret() -> Vec<u8> {
        [uuid::Uuid::new_v4(), uuid::Uuid::new_v4()]
            .iter()
            .flat_map(|id| id.into_bytes())
            .collect()
    }

    pub struct Key {
        encoding_key: EncodingKey,
        decoding_key: DecodingKey,
    }

    impl Key {
        pub fn new(secret: &[u8]) -> Self {
            let encoding_key = EncodingKey::from_secret(secret);
            let decoding_key = DecodingKey::from_secret(secret);
            Self {
                encoding_key,
                decoding_key,
            }
        }

        pub fn random() -> Self {
            Self::new(&generate_secret())
        }
    }

    pub struct JwtService {
        key: Key,
    }

    impl JwtService {
        pub fn new() -> Self {
            Self { key: Key::random() }
        }

        pub fn encode(&self, claims: &Claims) -> Result<String> {
            let token = encode(&Header::default(), claims, &self.key.encoding_key)?;
            Ok(token)
        }

        pub fn decode(&self, token: &str) -> Result<Claims> {
            let token_data =
                decode::<Claims>(token, &self.key.decoding_key, &Validation::default())?;
            Ok(token_data.claims)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_state() -> JwtState {
        JwtState::new(Duration::days(1))
    }

    #[test]
    fn blacklisting_works() {
        let jwt_state = jwt_state();
        let token = jwt_state.generate_token("alice").unwrap();
        jwt_state.blacklist_token(token.clone());
        assert!(jwt_state.is_on_blacklist(&token));
    }

    #[test]
    fn validation_works() {
        let jwt_state = jwt_state();
        let token = jwt_state.generate_token("alice").unwrap();
        let username = jwt_state.validate_token_and_get_username(&token).unwrap();
        assert_eq!(username, "alice");
        jwt_state.blacklist_token(token.clone());
        assert!(jwt_state.validate_token_and_get_username(&token).is_err())
    }

    #[test]
    fn invalid_tokens_are_removed() {
        let jwt_state = jwt_state();
        let token = jwt_state.generate_token("alice").unwrap();
        let invalid_token = "dubidubidu".to_string();
        jwt_state.blacklist_token(token.clone());
        jwt_state.blacklist_token(invalid_token.clone());
        assert!(jwt_state.is_on_blacklist(&token));
        assert!(jwt_state.is_on_blacklist(&invalid_token));
        jwt_state.remove_invalid_tokens();
        assert!(jwt_state.is_on_blacklist(&token));
        assert!(!jwt_state.is_on_blacklist(&invalid_token));
    }

    #[test]
    fn expired_tokens_are_rejected() {
        // beyond the default leeway of 60 seconds
        let jwt_state = JwtState::new(Duration::minutes(-5));
        let token = jwt_state.generate_token("alice").unwrap();
        assert!(jwt_state.validate_token_and_get_username(&token).is_err());
    }

    #[test]
    fn tokens_of_other_instances_are_rejected() {
        let token = jwt_state().generate_token("alice").unwrap();
        assert!(jwt_state().validate_token_and_get_username(&token).is_err());
    }
}
