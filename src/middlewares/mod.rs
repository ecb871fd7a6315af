//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - JWT 토큰 기반 인증 검증
//! - Bearer 토큰 추출 및 검증
//! - 사용자 정보를 request extension에 저장
//! - 검증 실패 시 401 응답으로 단락
//!
//! ### 2. 요청 컨텍스트 미들웨어 (ContextMiddleware)
//! - trace id 부여 (`X-Request-Id` 헤더 또는 UUID v4)
//! - 요청 시작 시각 기록
//!
//! # 사용 방법
//!
//! ## 글로벌 미들웨어 등록
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::context_middleware::ContextMiddleware;
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(ContextMiddleware) // 모든 라우트에 trace id 부여
//!         .service(/* 라우트들 */)
//! })
//! ```
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/users")
//!             .wrap(AuthMiddleware::new(token_service)) // 보호된 라우트에만 강제 인증
//!             .service(handlers::users::get_all_users)
//!     )
//!     .service(
//!         web::scope("/health")
//!             .route("", web::get().to(health_check))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;
pub mod context_middleware;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
pub use context_middleware::ContextMiddleware;
