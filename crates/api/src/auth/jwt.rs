//! JWT access-token minting and verification.
//!
//! Access tokens are HS256-signed JWTs carrying the subject, role names,
//! and attribute claims in a fixed order: subject first, then roles, then
//! attribute claims. Issuer and audience come from configuration and are
//! checked on every verification.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use warden_core::identity::{AttributeClaim, IdentityFacts};

/// Default access token expiry in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 10;
/// Default refresh token expiry in days.
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

/// Claims payload embedded in every access token.
///
/// Field order is the serialization order, which keeps the claim layout
/// deterministic across mints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject -- the username.
    pub sub: String,
    /// Role names in assignment order. Never deduplicated.
    pub roles: Vec<String>,
    /// Attribute claims in append order. Never deduplicated.
    pub attrs: Vec<AttributeClaim>,
    pub iss: String,
    pub aud: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for JWT minting and verification.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Value of the `iss` claim; verification rejects anything else.
    pub issuer: String,
    /// Value of the `aud` claim; verification rejects anything else.
    pub audience: String,
    /// Access token lifetime in minutes (default: 10).
    pub access_token_expiry_mins: i64,
    /// Refresh token lifetime in days (default: 7).
    pub refresh_token_expiry_days: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                   | Required | Default |
    /// |---------------------------|----------|---------|
    /// | `JWT_SECRET`              | **yes**  | --      |
    /// | `JWT_ISSUER`              | **yes**  | --      |
    /// | `JWT_AUDIENCE`            | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`  | no       | `10`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS` | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics when a required variable is missing or empty. Signing
    /// misconfiguration must stop the process at startup, never surface
    /// as a per-request error.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let issuer =
            std::env::var("JWT_ISSUER").expect("JWT_ISSUER must be set in the environment");
        assert!(!issuer.is_empty(), "JWT_ISSUER must not be empty");

        let audience =
            std::env::var("JWT_AUDIENCE").expect("JWT_AUDIENCE must be set in the environment");
        assert!(!audience.is_empty(), "JWT_AUDIENCE must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid integer");

        let refresh_token_expiry_days: i64 = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_REFRESH_EXPIRY_DAYS must be a valid integer");

        Self {
            secret,
            issuer,
            audience,
            access_token_expiry_mins,
            refresh_token_expiry_days,
        }
    }
}

/// Mints and verifies access tokens for a fixed key, issuer, and audience.
pub struct AccessTokenMinter {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    access_token_expiry_mins: i64,
}

impl AccessTokenMinter {
    pub fn new(config: &JwtConfig) -> Self {
        // HS256 with exp validation; issuer and audience checks added on top.
        let mut validation = Validation::default();
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            access_token_expiry_mins: config.access_token_expiry_mins,
        }
    }

    /// Mint an access token from the given identity facts.
    ///
    /// Roles and attribute claims go in exactly as provided; the minter
    /// neither drops nor deduplicates values.
    pub fn mint(&self, facts: &IdentityFacts) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp();
        let claims = AccessClaims {
            sub: facts.subject.clone(),
            roles: facts.roles.clone(),
            attrs: facts.attributes.clone(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now,
            exp: now + self.access_token_expiry_mins * 60,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Verify a token's signature, expiry, issuer, and audience, returning
    /// the embedded [`AccessClaims`].
    pub fn verify(&self, token: &str) -> Result<AccessClaims, jsonwebtoken::errors::Error> {
        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            issuer: "warden-test".to_string(),
            audience: "warden-clients".to_string(),
            access_token_expiry_mins: 10,
            refresh_token_expiry_days: 7,
        }
    }

    fn test_facts() -> IdentityFacts {
        IdentityFacts {
            subject: "admin".to_string(),
            roles: vec!["Admin".to_string(), "Auditor".to_string()],
            attributes: vec![
                AttributeClaim::new("Department", "IT"),
                AttributeClaim::new("Department", "Security"),
                AttributeClaim::new("Region", "EU"),
            ],
        }
    }

    #[test]
    fn mint_and_verify_roundtrip() {
        let minter = AccessTokenMinter::new(&test_config());
        let token = minter.mint(&test_facts()).expect("minting should succeed");

        let claims = minter.verify(&token).expect("verification should succeed");
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.roles, vec!["Admin", "Auditor"]);
        // Attribute claims keep append order, including repeated types.
        assert_eq!(claims.attrs, test_facts().attributes);
        assert_eq!(claims.iss, "warden-test");
        assert_eq!(claims.aud, "warden-clients");
        assert_eq!(claims.exp - claims.iat, 600, "10 minute lifetime");
    }

    #[test]
    fn empty_roles_and_claims_are_preserved() {
        let minter = AccessTokenMinter::new(&test_config());
        let facts = IdentityFacts {
            subject: "plain".to_string(),
            roles: vec![],
            attributes: vec![],
        };
        let token = minter.mint(&facts).expect("minting should succeed");

        let claims = minter.verify(&token).expect("verification should succeed");
        assert!(claims.roles.is_empty());
        assert!(claims.attrs.is_empty());
    }

    #[test]
    fn expired_token_fails() {
        // Negative lifetime pushes exp into the past, beyond the leeway.
        let mut config = test_config();
        config.access_token_expiry_mins = -10;
        let stale_minter = AccessTokenMinter::new(&config);
        let token = stale_minter.mint(&test_facts()).expect("minting should succeed");

        let verifier = AccessTokenMinter::new(&test_config());
        assert!(
            verifier.verify(&token).is_err(),
            "expired token must fail verification"
        );
    }

    #[test]
    fn wrong_audience_fails() {
        let minter = AccessTokenMinter::new(&test_config());
        let token = minter.mint(&test_facts()).expect("minting should succeed");

        let mut other = test_config();
        other.audience = "other-service".to_string();
        let verifier = AccessTokenMinter::new(&other);
        assert!(verifier.verify(&token).is_err(), "audience mismatch must fail");
    }

    #[test]
    fn wrong_issuer_fails() {
        let minter = AccessTokenMinter::new(&test_config());
        let token = minter.mint(&test_facts()).expect("minting should succeed");

        let mut other = test_config();
        other.issuer = "someone-else".to_string();
        let verifier = AccessTokenMinter::new(&other);
        assert!(verifier.verify(&token).is_err(), "issuer mismatch must fail");
    }

    #[test]
    fn different_secret_fails() {
        let minter = AccessTokenMinter::new(&test_config());
        let token = minter.mint(&test_facts()).expect("minting should succeed");

        let mut other = test_config();
        other.secret = "a-completely-different-secret".to_string();
        let verifier = AccessTokenMinter::new(&other);
        assert!(
            verifier.verify(&token).is_err(),
            "token signed with a different secret must fail"
        );
    }
}
