use std::future::{ready, Ready};

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use subtle::ConstantTimeEq;

use crate::{errors::ServerError, utils::presented_credential};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    Reject,
}

/// Single shared-secret check applied to every note operation.
#[derive(Clone)]
pub struct AccessGate {
    credential: Vec<u8>,
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate").finish_non_exhaustive()
    }
}

impl AccessGate {
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            credential: credential.into().into_bytes(),
        }
    }

    /// Byte-for-byte comparison; no trimming or case folding.
    pub fn authorize(&self, presented: Option<&[u8]>) -> Access {
        match presented {
            Some(presented) if constant_time_eq(presented, &self.credential) => Access::Allow,
            _ => Access::Reject,
        }
    }
}

/// Runs in time independent of where the inputs first differ. Both sides are
/// padded to the longer length with distinct fill bytes, and the length check
/// is folded in with the content check.
fn constant_time_eq(presented: &[u8], expected: &[u8]) -> bool {
    let max_len = presented.len().max(expected.len());

    let mut presented_padded = vec![0u8; max_len];
    let mut expected_padded = vec![0xFFu8; max_len];
    presented_padded[..presented.len()].copy_from_slice(presented);
    expected_padded[..expected.len()].copy_from_slice(expected);

    let lengths_equal = presented.len().ct_eq(&expected.len());
    let contents_equal = presented_padded.ct_eq(&expected_padded);

    (lengths_equal & contents_equal).into()
}

/// Extractor proof that the request carried the configured credential.
/// Handlers take it as their first argument so it resolves before the path
/// or body is looked at.
pub struct Authorized;

impl FromRequest for Authorized {
    type Error = ServerError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let gate = match req.app_data::<web::Data<AccessGate>>() {
            Some(gate) => gate,
            None => {
                log::error!("access gate is not registered as app data");
                return ready(Err(ServerError::EnvironmentError));
            }
        };

        ready(match gate.authorize(presented_credential(req)) {
            Access::Allow => Ok(Authorized),
            Access::Reject => {
                log::warn!("rejected {} {}: bad or missing credential", req.method(), req.path());
                Err(ServerError::Unauthorized)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AccessGate {
        AccessGate::new("s3cret-Token")
    }

    #[test]
    fn allows_exact_match_only() {
        let gate = gate();
        assert_eq!(gate.authorize(Some(b"s3cret-Token")), Access::Allow);
        assert_eq!(gate.authorize(Some(b"s3cret-")), Access::Reject);
        assert_eq!(gate.authorize(Some(b"s3cret-Token!")), Access::Reject);
        assert_eq!(gate.authorize(Some(b"S3CRET-TOKEN")), Access::Reject);
        assert_eq!(gate.authorize(Some(b" s3cret-Token")), Access::Reject);
        assert_eq!(gate.authorize(Some(b"Bearer s3cret-Token")), Access::Reject);
        assert_eq!(gate.authorize(Some(b"")), Access::Reject);
    }

    #[test]
    fn rejects_same_length_value_differing_in_last_byte() {
        let gate = gate();
        assert_eq!(gate.authorize(Some(b"s3cret-Tokem")), Access::Reject);
        assert_eq!(gate.authorize(Some(b"s3cret-XXXXX")), Access::Reject);
    }

    #[test]
    fn constant_time_eq_handles_length_mismatch() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(constant_time_eq(b"", b""));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(!constant_time_eq(b"abcd", b"abc"));
        // pad bytes on the shorter side must never line up with real bytes
        assert!(!constant_time_eq(b"ab", b"ab\xFF"));
        assert!(!constant_time_eq(b"ab\x00", b"ab"));
    }

    #[test]
    fn rejects_missing_credential() {
        assert_eq!(gate().authorize(None), Access::Reject);
    }

    #[actix_web::test]
    async fn extractor_reads_authorization_header() {
        use actix_web::test::TestRequest;

        let req = TestRequest::default()
            .app_data(web::Data::new(gate()))
            .insert_header(("Authorization", "s3cret-Token"))
            .to_http_request();
        assert!(Authorized::extract(&req).await.is_ok());

        let req = TestRequest::default()
            .app_data(web::Data::new(gate()))
            .insert_header(("Authorization", "1234"))
            .to_http_request();
        assert!(matches!(
            Authorized::extract(&req).await,
            Err(ServerError::Unauthorized)
        ));
    }
}
