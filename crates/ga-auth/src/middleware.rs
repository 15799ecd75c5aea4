use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::web;
use std::future::Ready;
use std::future::ready;

/// Extractor for bearer-protected routes.
///
/// Rejects with 401 when no bearer credentials are presented or when the
/// token fails to decode. Token verification is pure, so extraction
/// completes synchronously.
pub struct Auth(pub Identity);

impl Auth {
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

impl FromRequest for Auth {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<Auth, actix_web::Error> {
    let crypto = req
        .app_data::<web::Data<Crypto>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("token service not configured"))?;
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());
    match authenticate(crypto, header) {
        Ok(Some(identity)) => Ok(Auth(identity)),
        Ok(None) => Err(actix_web::error::ErrorUnauthorized(
            "authentication credentials were not provided",
        )),
        Err(e) => Err(actix_web::error::ErrorUnauthorized(e.to_string())),
    }
}

/// Optional authentication extractor - does not fail if unauthenticated.
pub struct MaybeAuth(pub Option<Identity>);

impl MaybeAuth {
    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref()
    }
}

impl FromRequest for MaybeAuth {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        ready(Ok(MaybeAuth(
            Auth::from_request(req, payload)
                .into_inner()
                .ok()
                .map(|auth| auth.0),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use chrono::TimeZone;
    use chrono::Utc;
    use std::sync::Arc;

    fn crypto() -> Crypto {
        let noon = Utc.with_ymd_and_hms(2024, 10, 2, 12, 0, 0).unwrap();
        Crypto::new(b"test-signing-key", Arc::new(FixedClock(noon)))
    }

    fn bearer() -> String {
        let noon = Utc.with_ymd_and_hms(2024, 10, 2, 12, 0, 0).unwrap();
        let claims = Claims::access("woecdtnoebsedr", "wednesday", "october", "12345678", noon);
        format!("Bearer {}", crypto().encode(&claims).unwrap())
    }

    #[actix_web::test]
    async fn valid_bearer_header_extracts_an_identity() {
        let req = TestRequest::default()
            .app_data(web::Data::new(crypto()))
            .insert_header(("Authorization", bearer()))
            .to_http_request();
        let auth = Auth::from_request(&req, &mut Payload::None).await.unwrap();
        assert_eq!(auth.identity().username(), "woecdtnoebsedr");
    }

    #[actix_web::test]
    async fn absent_credentials_reject_protected_routes() {
        let req = TestRequest::default()
            .app_data(web::Data::new(crypto()))
            .to_http_request();
        assert!(Auth::from_request(&req, &mut Payload::None).await.is_err());
    }

    #[actix_web::test]
    async fn foreign_scheme_defers_for_optional_routes() {
        let req = TestRequest::default()
            .app_data(web::Data::new(crypto()))
            .insert_header(("Authorization", "Basic xyz"))
            .to_http_request();
        let auth = MaybeAuth::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert!(auth.identity().is_none());
    }

    #[actix_web::test]
    async fn malformed_header_rejects_even_optional_routes_quietly() {
        let req = TestRequest::default()
            .app_data(web::Data::new(crypto()))
            .insert_header(("Authorization", "Bearer a b"))
            .to_http_request();
        assert!(Auth::from_request(&req, &mut Payload::None).await.is_err());
        let maybe = MaybeAuth::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert!(maybe.identity().is_none());
    }
}
