//! 요청 컨텍스트 모델
//!
//! 로그 상관관계용 trace id와 요청 시작 시각을 담는
//! 요청 범위 컨텍스트를 정의합니다.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use uuid::Uuid;

/// 클라이언트가 trace id를 전달할 때 사용하는 헤더 이름
pub const TRACE_ID_HEADER: &str = "X-Request-Id";

/// 요청 범위 컨텍스트
///
/// 모든 핸들러의 Begin/End 로그는 이 컨텍스트의 trace id로 태깅되며,
/// End 로그의 처리 시간은 `started_at` 기준으로 계산됩니다.
/// 요청 단위로 생성되고 요청이 끝나면 폐기됩니다.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// 로그 상관관계용 식별자
    pub trace_id: String,
    /// 요청 진입 시점의 단조 시계 값
    pub started_at: Instant,
}

impl RequestContext {
    /// 주어진 trace id로 새 컨텍스트를 생성합니다.
    pub fn new(trace_id: String) -> Self {
        Self {
            trace_id,
            started_at: Instant::now(),
        }
    }

    /// 요청 헤더에서 trace id를 읽어 컨텍스트를 구성합니다.
    ///
    /// `X-Request-Id` 헤더가 없거나 비어 있으면 UUID v4를 새로 발급합니다.
    pub fn from_request_head(req: &HttpRequest) -> Self {
        let trace_id = req
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| value.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self::new(trace_id)
    }

    /// 요청 진입 이후 경과한 시간을 밀리초 단위로 반환합니다.
    pub fn elapsed_ms(&self) -> u128 {
        self.started_at.elapsed().as_millis()
    }
}

impl FromRequest for RequestContext {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        // 컨텍스트 미들웨어가 삽입한 값이 없으면 헤더에서 직접 구성
        let ctx = req
            .extensions()
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_else(|| Self::from_request_head(req));

        ready(Ok(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_trace_id_from_header() {
        let req = TestRequest::default()
            .insert_header((TRACE_ID_HEADER, "trace-abc-123"))
            .to_http_request();

        let ctx = RequestContext::from_request_head(&req);

        assert_eq!(ctx.trace_id, "trace-abc-123");
    }

    #[test]
    fn test_generates_uuid_when_header_missing() {
        let req = TestRequest::default().to_http_request();

        let ctx = RequestContext::from_request_head(&req);

        assert!(Uuid::parse_str(&ctx.trace_id).is_ok());
    }

    #[test]
    fn test_generates_uuid_when_header_empty() {
        let req = TestRequest::default()
            .insert_header((TRACE_ID_HEADER, ""))
            .to_http_request();

        let ctx = RequestContext::from_request_head(&req);

        assert!(Uuid::parse_str(&ctx.trace_id).is_ok());
    }

    #[actix_web::test]
    async fn test_extractor_prefers_extensions_value() {
        let req = TestRequest::default()
            .insert_header((TRACE_ID_HEADER, "header-trace"))
            .to_http_request();
        req.extensions_mut()
            .insert(RequestContext::new("middleware-trace".to_string()));

        let ctx = RequestContext::extract(&req).await.unwrap();

        assert_eq!(ctx.trace_id, "middleware-trace");
    }
}
