use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
    pub token_type: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(
        &self,
        user_id: i64,
        role: &str,
        token_type: &str,
    ) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = match token_type {
            "access" => (now + Duration::minutes(60)).timestamp() as usize,
            "refresh" => (now + Duration::days(7)).timestamp() as usize,
            _ => return Err(ServiceError::InvalidTokenType),
        };

        let claims = Claims {
            user_id,
            role: role.to_string(),
            exp,
            iat,
            token_type: token_type.to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str, expected_type: &str) -> Result<Claims, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        if token_data.claims.token_type != expected_type {
            return Err(ServiceError::InvalidTokenType);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_round_trips() {
        let jwt = JwtConfig::new("test-secret");
        let token = jwt.generate_token(42, "USER", "access").unwrap();
        let claims = jwt.verify_token(&token, "access").unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.role, "USER");
    }

    #[test]
    fn token_type_is_enforced() {
        let jwt = JwtConfig::new("test-secret");
        let token = jwt.generate_token(1, "USER", "refresh").unwrap();
        assert!(matches!(
            jwt.verify_token(&token, "access"),
            Err(ServiceError::InvalidTokenType)
        ));
        assert!(matches!(
            jwt.generate_token(1, "USER", "session"),
            Err(ServiceError::InvalidTokenType)
        ));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = JwtConfig::new("secret-a")
            .generate_token(7, "ADMIN", "access")
            .unwrap();
        assert!(JwtConfig::new("secret-b").verify_token(&token, "access").is_err());
    }
}
