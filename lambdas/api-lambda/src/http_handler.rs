use std::env;
use std::sync::Arc;

use lambda_http::http::header::{HeaderValue, VARY};
use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, Response,
};

use dashboards_block::{employee, executive, notifications};
use goat_shared::{auth, respond, AppState};

fn with_cors_headers(mut resp: Response<Body>, request_origin: Option<&str>) -> Response<Body> {
    let allowed = env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string());
    let cors_origin = match request_origin {
        Some(origin) if allowed == "*" || origin == allowed => origin.to_string(),
        _ => allowed,
    };

    let headers = resp.headers_mut();
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_str(&cors_origin).unwrap_or_else(|_| HeaderValue::from_static("*")),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type,Authorization"),
    );
    headers.append(VARY, HeaderValue::from_static("Origin"));

    resp
}

fn finalize_response(
    resp: Result<Response<Body>, Error>,
    request_origin: Option<&str>,
) -> Result<Response<Body>, Error> {
    resp.map(|r| with_cors_headers(r, request_origin))
}

fn not_found() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .body(serde_json::json!({"error": "Not found"}).to_string().into())
        .map_err(Box::new)?)
}

fn method_not_allowed() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "application/json")
        .body(
            serde_json::json!({"error": "Method not allowed"})
                .to_string()
                .into(),
        )
        .map_err(Box::new)?)
}

/// Main Lambda handler - routes requests to the login and dashboard endpoints
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let body = event.body();
    let request_origin = event.headers().get("Origin").and_then(|v| v.to_str().ok());
    tracing::info!("API invoked - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if method == "OPTIONS" {
        let resp = Response::builder()
            .status(StatusCode::OK)
            .body(Body::Empty)
            .map_err(Box::new)?;
        return Ok(with_cors_headers(resp, request_origin));
    }

    let table_name = env::var("TABLE_NAME").unwrap_or_else(|_| "goatmedia".to_string());
    let session_secret = env::var("SESSION_SECRET").expect("SESSION_SECRET must be set");

    // Login issues the session token; everything else validates it.
    if path == "/login" {
        return match method {
            &Method::POST => finalize_response(
                auth::login(&state.dynamo_client, &table_name, &session_secret, body).await,
                request_origin,
            ),
            _ => finalize_response(method_not_allowed(), request_origin),
        };
    }

    let claims = match auth::authenticate_request(event.headers(), &session_secret) {
        Ok(claims) => claims,
        Err(e) => return finalize_response(respond::error(&e), request_origin),
    };

    let resp = match (method, path) {
        (&Method::GET, "/employee-dashboard") => {
            employee::employee_dashboard(&state.dynamo_client, &table_name, &claims).await
        }
        (&Method::GET, "/executive-dashboard") => {
            executive::executive_dashboard(&state.dynamo_client, &table_name, &claims).await
        }
        (&Method::POST, "/notifications/dismiss") => {
            notifications::dismiss(&state.dynamo_client, &table_name, &claims, body).await
        }
        (_, "/employee-dashboard" | "/executive-dashboard" | "/notifications/dismiss") => {
            method_not_allowed()
        }
        _ => {
            tracing::warn!("No route matched - Method: {} Path: {}", method, path);
            not_found()
        }
    };

    finalize_response(resp, request_origin)
}
