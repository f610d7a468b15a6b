use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

/// Errors from access-token verification + strict claim validation.
///
/// The middleware collapses every variant into one client-facing 401
/// ("Invalid token"); the distinction exists so logs, and later callers,
/// can tell an expired token from a forged or malformed one.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("token expired")]
    Expired,
    #[error("bad signature")]
    BadSignature,
    #[error("malformed token: {0}")]
    Malformed(jsonwebtoken::errors::Error),
    #[error("empty '{0}' claim")]
    EmptyClaim(&'static str),
    #[error("invalid 'sub' (expected UUID)")]
    InvalidSubUuid,
}

impl From<jsonwebtoken::errors::Error> for VerifyError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::BadSignature,
            // Missing claims, bad base64, bad JSON, wrong algorithm, ...
            _ => Self::Malformed(e),
        }
    }
}

/// Access token (JWT) claims.
///
/// Tokens are issued elsewhere; authentication only requires a subject and
/// an expiry. Anything extra in the token is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,
    pub exp: u64,

    #[serde(default)]
    pub iat: Option<u64>,
}

/// Verified token in the shape the application uses.
///
/// `sub` is a UUID by project convention, so it is promoted to `Uuid` here.
#[derive(Debug, Clone)]
pub struct VerifiedAccessToken {
    pub user_id: Uuid,
    pub issued_at: Option<u64>,
}

/// HS256 access-token verifier.
///
/// - The signing secret is injected at construction time (from `Config`);
///   nothing in here reads ambient process state.
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AuthService {
    pub fn new(secret: &str, leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        // `exp` is required and checked by default; tokens carry no iss/aud,
        // so no issuer/audience expectations are set.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;

        Self {
            decoding_key,
            validation,
        }
    }

    // Verify signature/expiry and decode claims.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, VerifyError> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }

    /// Verify + strict claim validation, converted into the application type.
    ///
    /// `jsonwebtoken::Validation` already checks the signature and `exp`;
    /// this additionally requires a non-empty `sub` that parses as a UUID.
    ///
    /// This is the entry-point for middleware.
    pub fn verify_verified(&self, token: &str) -> Result<VerifiedAccessToken, VerifyError> {
        let claims = self.verify(token)?;

        if claims.sub.trim().is_empty() {
            return Err(VerifyError::EmptyClaim("sub"));
        }

        let user_id =
            Uuid::parse_str(claims.sub.trim()).map_err(|_| VerifyError::InvalidSubUuid)?;

        Ok(VerifiedAccessToken {
            user_id,
            issued_at: claims.iat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::json;

    const SECRET: &str = "unit-test-secret";

    fn sign(claims: &serde_json::Value, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn service() -> AuthService {
        // leeway 0 so expiry tests are exact
        AuthService::new(SECRET, 0)
    }

    fn future_exp() -> i64 {
        Utc::now().timestamp() + 3600
    }

    #[test]
    fn accepts_valid_token_and_promotes_sub_to_uuid() {
        let user_id = Uuid::new_v4();
        let token = sign(&json!({ "sub": user_id, "exp": future_exp() }), SECRET);

        let verified = service().verify_verified(&token).unwrap();

        assert_eq!(verified.user_id, user_id);
        assert_eq!(verified.issued_at, None);
    }

    #[test]
    fn keeps_optional_iat() {
        let user_id = Uuid::new_v4();
        let iat = Utc::now().timestamp();
        let token = sign(
            &json!({ "sub": user_id, "exp": future_exp(), "iat": iat }),
            SECRET,
        );

        let verified = service().verify_verified(&token).unwrap();

        assert_eq!(verified.issued_at, Some(iat as u64));
    }

    #[test]
    fn rejects_expired_token() {
        let token = sign(
            &json!({ "sub": Uuid::new_v4(), "exp": Utc::now().timestamp() - 3600 }),
            SECRET,
        );

        let err = service().verify_verified(&token).unwrap_err();

        assert!(matches!(err, VerifyError::Expired), "got {err:?}");
    }

    #[test]
    fn rejects_token_signed_with_another_secret() {
        let token = sign(
            &json!({ "sub": Uuid::new_v4(), "exp": future_exp() }),
            "some-other-secret",
        );

        let err = service().verify_verified(&token).unwrap_err();

        assert!(matches!(err, VerifyError::BadSignature), "got {err:?}");
    }

    #[test]
    fn rejects_garbage_as_malformed() {
        let err = service().verify_verified("not-a-jwt").unwrap_err();

        assert!(matches!(err, VerifyError::Malformed(_)), "got {err:?}");
    }

    #[test]
    fn rejects_token_without_exp_as_malformed() {
        let token = sign(&json!({ "sub": Uuid::new_v4() }), SECRET);

        let err = service().verify_verified(&token).unwrap_err();

        assert!(matches!(err, VerifyError::Malformed(_)), "got {err:?}");
    }

    #[test]
    fn rejects_token_without_sub_as_malformed() {
        let token = sign(&json!({ "exp": future_exp() }), SECRET);

        let err = service().verify_verified(&token).unwrap_err();

        assert!(matches!(err, VerifyError::Malformed(_)), "got {err:?}");
    }

    #[test]
    fn rejects_non_uuid_sub() {
        let token = sign(&json!({ "sub": "user-42", "exp": future_exp() }), SECRET);

        let err = service().verify_verified(&token).unwrap_err();

        assert!(matches!(err, VerifyError::InvalidSubUuid), "got {err:?}");
    }

    #[test]
    fn leeway_allows_recently_expired_token() {
        let token = sign(
            &json!({ "sub": Uuid::new_v4(), "exp": Utc::now().timestamp() - 10 }),
            SECRET,
        );

        let lenient = AuthService::new(SECRET, 60);

        assert!(lenient.verify_verified(&token).is_ok());
        assert!(matches!(
            service().verify_verified(&token).unwrap_err(),
            VerifyError::Expired
        ));
    }
}
