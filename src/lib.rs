//! 사용자 관리 서비스 백엔드
//!
//! Rust 기반의 사용자 및 보고서 관리 서비스입니다.
//! JWT Bearer 토큰 인증, 요청 단위 trace id 추적,
//! 그리고 계층형 아키텍처 기반의 REST API를 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 목록 조회, 단건 조회, 수정, 삭제
//! - **보고서 승인**: 승인/반려 상태 변경
//! - **JWT 인증**: Bearer 토큰 기반 상태 없는 인증
//! - **요청 추적**: trace id 기반 Begin/End 로깅과 처리 시간 측정
//! - **MongoDB**: 사용자 및 보고서 데이터 영구 저장
//! - **Redis**: 사용자 단건 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::repositories::users::user_repo::UserRepository;
//! use user_service_backend::services::users::user_service::{UserServiceImpl, UsersService};
//!
//! // 리포지토리를 주입해 서비스 조립
//! let user_repo = Arc::new(UserRepository::new(database, redis_client));
//! let users_service: Arc<dyn UsersService> = Arc::new(UserServiceImpl::new(user_repo));
//!
//! // 전체 사용자 조회
//! let response = users_service.get_all(None, "trace-1").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
