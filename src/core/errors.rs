//! # Application Error Handling
//!
//! 서비스 전역에서 사용하는 통합 에러 타입을 정의합니다.
//! `thiserror`로 `Error` trait을 유도하고 `actix_web::ResponseError`를
//! 구현하여, 핸들러가 `?`로 전파한 에러가 자동으로 적절한 HTTP 응답으로
//! 변환되도록 합니다.
//!
//! ## 계층별 책임
//!
//! - 리포지토리 계층: MongoDB/Redis 에러를 `DatabaseError`/`RedisError`로 변환
//! - 서비스 계층: 비즈니스 규칙 위반을 `NotFound`/`ConflictError` 등으로 표현
//! - 핸들러 계층: 에러를 직접 처리하지 않고 그대로 전파
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `AuthorizationError` | 403 Forbidden |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | 나머지 | 500 Internal Server Error |
//!
//! 모든 에러 응답 본문은 `{"error": "<메시지>"}` 형식을 따릅니다.

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 사람이 읽을 수 있는 메시지 문자열을 담습니다.
/// 5xx 계열 메시지는 내부 원인을 포함하므로 로그에만 남기고
/// 클라이언트 응답에는 요약된 형태로 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 연산 실패 (연결, 쿼리, 인덱스 생성 등)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 연산 실패
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 실패
    ///
    /// 요청 본문이나 쿼리 파라미터가 형식 요구사항을 만족하지 않을 때
    /// 발생합니다. 400 Bad Request로 응답됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청한 리소스가 존재하지 않음
    ///
    /// 존재하지 않는 사용자/리포트 id 조회, 이미 삭제된 리소스 접근 등.
    /// 404 Not Found로 응답됩니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 비즈니스 규칙 충돌 (중복 이메일 등)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 (토큰 누락, 만료, 서명 불일치)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 인증은 되었으나 권한이 부족함
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 예상하지 못한 내부 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// `AppError` 변형을 HTTP 상태 코드와 JSON 본문으로 변환합니다.
    ///
    /// 핸들러는 에러를 직접 응답으로 만들지 않습니다. 서비스 계층에서
    /// 올라온 에러는 이 구현을 통해서만 전송 계층에 도달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// `Result<T, AppError>` 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 컨텍스트 문자열과 함께 `AppError`로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let parsed: i64 = raw.parse().context("포트 번호 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 고정 컨텍스트 메시지와 함께 `InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 지연 평가되는 컨텍스트 메시지를 사용합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("email 형식이 올바르지 않습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("사용자를 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("이미 사용 중인 이메일입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("접근 권한이 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_database_error_maps_to_internal_server_error() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
