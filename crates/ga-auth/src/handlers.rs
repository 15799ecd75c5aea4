use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use ga_core::ID;
use ga_core::Unique;
use std::sync::Arc;
use tokio_postgres::Client;

pub async fn obtain(tokens: web::Data<Protocol>, req: web::Json<TokenRequest>) -> impl Responder {
    log::debug!("token obtain for username {}", req.username);
    match tokens.obtain(&req.username, &req.password, &req.day, &req.month, &req.random) {
        Ok(pair) => HttpResponse::Ok().json(pair),
        Err(e) => {
            log::error!("error during token obtain: {}", e);
            HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "Authentication failed",
                "detail": e.to_string(),
            }))
        }
    }
}

pub async fn refresh(tokens: web::Data<Protocol>, req: web::Json<RefreshRequest>) -> impl Responder {
    match tokens.refresh(&req.refresh) {
        Ok(pair) => HttpResponse::Ok().json(pair),
        Err(AuthError::TokenExpired) => HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Refresh token has expired",
        })),
        Err(e) => {
            log::error!("error during token refresh: {}", e);
            HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "Invalid refresh token",
            }))
        }
    }
}

pub async fn register(
    db: web::Data<Arc<Client>>,
    _auth: Auth,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    if req.username.is_empty() || req.username.len() > 150 {
        return rejected("Registration failed.", "username must be 1-150 characters");
    }
    if !req.email.contains('@') {
        return rejected("Registration failed.", "Enter a valid email address.");
    }
    if req.password.len() < 6 {
        return rejected(
            "Registration failed.",
            "Password must be at least 6 characters long.",
        );
    }
    if req.password != req.password_confirm {
        return rejected("Registration failed.", "Passwords do not match.");
    }
    match db.exists(&req.username, &req.email).await {
        Ok(false) => {}
        Ok(true) => {
            return rejected(
                "Registration failed.",
                "An account with this username or email already exists.",
            );
        }
        Err(e) => return creation_failed(e),
    }
    let hashword = match password::hash(&req.password) {
        Ok(h) => h,
        Err(e) => return creation_failed(e),
    };
    let account = GameAccount::new(
        ID::default(),
        req.username.clone(),
        req.email.clone(),
        req.display_name.clone(),
    );
    if let Err(e) = db.create(&account, &hashword).await {
        return creation_failed(e);
    }
    log::info!("registered account {}", account.username());
    HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "message": "Account created successfully.",
        "username": account.username(),
    }))
}

pub async fn login(
    db: web::Data<Arc<Client>>,
    _auth: Auth,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    let (account, hashword) = match db.lookup(&req.username).await {
        Ok(Some(found)) => found,
        Ok(None) => return unauthorized("Login failed. Invalid credentials."),
        Err(e) => return login_failed(e),
    };
    if !account.is_active() {
        return unauthorized("Login failed. Account is inactive.");
    }
    if !password::verify(&req.password, &hashword) {
        return unauthorized("Login failed. Invalid credentials.");
    }
    let mut account = account;
    match db.touch_login(account.id()).await {
        Ok(at) => account.last_login = Some(at),
        Err(e) => return login_failed(e),
    }
    log::info!("account {} logged in", account.username());
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Login successful.",
        "account": AccountInfo::from(&account),
    }))
}

pub async fn profile(db: web::Data<Arc<Client>>, auth: Auth) -> impl Responder {
    match db.fetch(auth.identity().username()).await {
        Ok(Some(account)) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "account": AccountInfo::from(&account),
        })),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "success": false,
            "message": "Failed to retrieve profile.",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "message": "Failed to retrieve profile.",
            "error": e.to_string(),
        })),
    }
}

/// Tokens are stateless, so logout is an acknowledgement; revocation is
/// an external capability.
pub async fn logout(_auth: Auth) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Logout successful.",
    }))
}

fn rejected(message: &str, errors: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "success": false,
        "message": message,
        "errors": errors,
    }))
}

fn unauthorized(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({
        "success": false,
        "message": message,
    }))
}

fn creation_failed(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "success": false,
        "message": "Account creation failed. Please try again.",
        "error": e.to_string(),
    }))
}

fn login_failed(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "success": false,
        "message": "Login failed. Please try again.",
        "error": e.to_string(),
    }))
}
