use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use lambda_http::http::{HeaderMap, StatusCode};
use lambda_http::{Body, Error, Response};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use aws_sdk_dynamodb::Client as DynamoClient;
use goat_atoms::users::{self, User};

use crate::error::ApiError;
use crate::respond;

type HmacSha256 = Hmac<Sha256>;

/// Session lifetime: 12 hours.
pub const SESSION_TTL_SECS: i64 = 43_200;

/// Claims carried by a session token. The role gates the executive view;
/// the user id scopes dashboard queries and notification ownership.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionClaims {
    pub user_id: String,
    pub email: String,
    pub role: String,
    pub expires_at: i64,
}

fn sign(secret: &str, payload: &str) -> Result<Vec<u8>, ApiError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| ApiError::Unhandled("invalid session secret".to_string()))?;
    mac.update(payload.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Encode claims as `base64(payload).base64(hmac)`.
fn encode_token(secret: &str, claims: &SessionClaims) -> Result<String, ApiError> {
    let payload = format!(
        "{}|{}|{}|{}",
        claims.user_id, claims.email, claims.role, claims.expires_at
    );
    let sig = sign(secret, &payload)?;
    Ok(format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(payload.as_bytes()),
        URL_SAFE_NO_PAD.encode(sig)
    ))
}

fn decode_token(secret: &str, token: &str, now: i64) -> Result<SessionClaims, ApiError> {
    let invalid = || ApiError::Unauthorized("Invalid session token".to_string());

    let (payload_b64, sig_b64) = token.split_once('.').ok_or_else(invalid)?;
    let payload_bytes = URL_SAFE_NO_PAD.decode(payload_b64).map_err(|_| invalid())?;
    let payload = String::from_utf8(payload_bytes).map_err(|_| invalid())?;
    let sig = URL_SAFE_NO_PAD.decode(sig_b64).map_err(|_| invalid())?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| ApiError::Unhandled("invalid session secret".to_string()))?;
    mac.update(payload.as_bytes());
    mac.verify_slice(&sig).map_err(|_| invalid())?;

    // payload = user_id|email|role|expiry; role may itself contain spaces
    let mut parts = payload.split('|');
    let (user_id, email, role, expires_at) = match (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) {
        (Some(uid), Some(email), Some(role), Some(exp), None) => (
            uid.to_string(),
            email.to_string(),
            role.to_string(),
            exp.parse::<i64>().map_err(|_| invalid())?,
        ),
        _ => return Err(invalid()),
    };

    if expires_at <= now {
        return Err(ApiError::Unauthorized("Session expired".to_string()));
    }

    Ok(SessionClaims {
        user_id,
        email,
        role,
        expires_at,
    })
}

/// Issue a fresh session token for a user that just logged in.
pub fn issue_session_token(secret: &str, user: &User) -> Result<String, ApiError> {
    let claims = SessionClaims {
        user_id: user.user_id.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        expires_at: chrono::Utc::now().timestamp() + SESSION_TTL_SECS,
    };
    encode_token(secret, &claims)
}

/// Validate the `Authorization: Bearer` header of an incoming request.
pub fn authenticate_request(headers: &HeaderMap, secret: &str) -> Result<SessionClaims, ApiError> {
    let token = headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    decode_token(secret, token, chrono::Utc::now().timestamp())
}

#[derive(Deserialize)]
struct LoginRequest {
    email: Option<String>,
}

#[derive(Serialize)]
struct LoginResponse {
    token: String,
    user: User,
}

/// POST /login - exchange a known email (the demo credential) for a
/// session token.
pub async fn login(
    client: &DynamoClient,
    table_name: &str,
    secret: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let req: LoginRequest = match serde_json::from_slice(body) {
        Ok(req) => req,
        Err(e) => {
            return respond::error(&ApiError::Validation(format!("Invalid request body: {}", e)))
        }
    };

    let email = match req.email {
        Some(email) if !email.trim().is_empty() => email,
        _ => return respond::error(&ApiError::Validation("Email is required".to_string())),
    };

    let user = match users::find_user_by_email(client, table_name, &email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return respond::error(&ApiError::Unauthorized("Unknown email".to_string()))
        }
        Err(e) => return respond::error(&e.into()),
    };

    tracing::info!("Issuing session for {} ({})", user.email, user.role);

    let token = match issue_session_token(secret, &user) {
        Ok(token) => token,
        Err(e) => return respond::error(&e),
    };

    respond::json(StatusCode::OK, &LoginResponse { token, user })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    fn claims(expires_at: i64) -> SessionClaims {
        SessionClaims {
            user_id: "u-1".to_string(),
            email: "alex@goatmedia.com".to_string(),
            role: "Content Strategist".to_string(),
            expires_at,
        }
    }

    #[test]
    fn token_round_trips() {
        let issued = claims(2_000_000_000);
        let token = encode_token(SECRET, &issued).unwrap();
        let decoded = decode_token(SECRET, &token, 1_000_000_000).unwrap();
        assert_eq!(decoded, issued);
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let token = encode_token(SECRET, &claims(2_000_000_000)).unwrap();
        let (payload, sig) = token.split_once('.').unwrap();
        let forged_payload =
            URL_SAFE_NO_PAD.encode("u-2|morgan@goatmedia.com|Executive|2000000000");
        let forged = format!("{}.{}", forged_payload, sig);
        assert!(decode_token(SECRET, &forged, 1_000_000_000).is_err());
        // original still verifies
        assert!(decode_token(SECRET, &format!("{}.{}", payload, sig), 1_000_000_000).is_ok());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = encode_token(SECRET, &claims(2_000_000_000)).unwrap();
        assert!(decode_token("other-secret", &token, 1_000_000_000).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = encode_token(SECRET, &claims(1_000)).unwrap();
        let err = decode_token(SECRET, &token, 2_000).unwrap_err();
        assert_eq!(
            err.status_code(),
            lambda_http::http::StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        for token in ["", "not-a-token", "a.b", "a.b.c", "%%%.%%%"] {
            assert!(decode_token(SECRET, token, 0).is_err());
        }
    }
}
