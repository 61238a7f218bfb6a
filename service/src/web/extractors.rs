// shopcart_service/src/web/extractors.rs

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use tracing::warn;

use crate::errors::AppError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Guard for handlers that read a JSON body. Extraction fails with 415 unless
/// the request's media type is `application/json`; parameters such as
/// `charset` are ignored.
#[derive(Debug)]
pub struct JsonContentType;

impl FromRequest for JsonContentType {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    match req.mime_type() {
      Ok(Some(mime)) if mime.essence_str() == JSON_CONTENT_TYPE => futures_util::future::ready(Ok(JsonContentType)),
      other => {
        let received = match other {
          Ok(Some(mime)) => mime.to_string(),
          Ok(None) => "<none>".to_string(),
          Err(_) => "<unparseable>".to_string(),
        };
        warn!(content_type = %received, "Invalid Content-Type on request with a body.");
        futures_util::future::ready(Err(AppError::UnsupportedMediaType {
          expected: JSON_CONTENT_TYPE,
        }))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::header;
  use actix_web::test::TestRequest;

  fn extract(req: TestRequest) -> Result<JsonContentType, AppError> {
    let (req, mut payload) = req.to_http_parts();
    futures_util::FutureExt::now_or_never(JsonContentType::from_request(&req, &mut payload))
      .expect("extractor is always ready")
  }

  #[test]
  fn accepts_json_with_parameters() {
    let req = TestRequest::default().insert_header((header::CONTENT_TYPE, "application/json; charset=utf-8"));
    assert!(extract(req).is_ok());
  }

  #[test]
  fn rejects_other_or_missing_media_types() {
    let form = TestRequest::default().insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"));
    assert!(matches!(extract(form), Err(AppError::UnsupportedMediaType { .. })));
    assert!(matches!(
      extract(TestRequest::default()),
      Err(AppError::UnsupportedMediaType { .. })
    ));
  }
}
