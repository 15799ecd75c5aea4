//! Game-account server binary.
//!
//! Serves token issuance and account endpoints over HTTP.

#[tokio::main]
async fn main() {
    ga_core::log();
    ga_server::run().await.unwrap();
}
