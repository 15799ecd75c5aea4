//! Game-account API server.
//!
//! Wires the token endpoints and the account endpoints into a single
//! actix-web application. Routing lives here; payloads and behavior live
//! in [`ga_auth`].

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({"status": "ok"})),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let client = ga_pg::db().await;
    ga_pg::migrate::<ga_auth::GameAccount>(&client)
        .await
        .expect("account schema");
    let crypto = ga_auth::Crypto::from_env();
    let tokens = web::Data::new(ga_auth::Protocol::new(crypto.clone()));
    let crypto = web::Data::new(crypto);
    let client = web::Data::new(client);
    log::info!("starting game account server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(tokens.clone())
            .app_data(crypto.clone())
            .app_data(client.clone())
            .route("/health", web::get().to(health))
            .service(
                web::scope("/api/token")
                    .route("", web::post().to(ga_auth::obtain))
                    .route("/refresh", web::post().to(ga_auth::refresh)),
            )
            .service(
                web::scope("/api/game")
                    .route("/register", web::post().to(ga_auth::register))
                    .route("/login", web::post().to(ga_auth::login))
                    .route("/logout", web::post().to(ga_auth::logout))
                    .route("/profile", web::get().to(ga_auth::profile)),
            )
    })
    .workers(6)
    .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
    .run()
    .await
}
