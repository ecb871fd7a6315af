//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 사용자 관리, 보고서 승인, 인증 기능을 담당합니다.
//! 핸들러가 의존하는 서비스는 트레이트로 추상화되어 있고, 구현체는
//! 애플리케이션 초기화 시점에 생성되어 `web::Data`로 주입됩니다.
//!
//! # Features
//!
//! - 사용자 조회/수정/삭제 및 이메일 필터 조회
//! - 보고서 승인/반려 처리
//! - JWT 토큰 기반 인증 시스템
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{auth::TokenService, users::user_service::UserServiceImpl};
//!
//! let user_service = Arc::new(UserServiceImpl::new(user_repo));
//! let token_service = Arc::new(TokenService::new());
//! ```

pub mod auth;
pub mod reports;
pub mod users;
