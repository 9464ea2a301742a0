use actix_web::{http::header::AUTHORIZATION, HttpRequest};

/// Raw `Authorization` header bytes, untouched.
pub fn presented_credential(req: &HttpRequest) -> Option<&[u8]> {
    req.headers().get(AUTHORIZATION).map(|value| value.as_bytes())
}
