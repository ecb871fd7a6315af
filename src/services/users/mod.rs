//! 사용자 관리 서비스 모듈
//!
//! 사용자 리소스와 관련된 비즈니스 로직을 담당합니다.
//! 핸들러는 [`user_service::UsersService`] 트레이트에만 의존합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::user_service::{UserServiceImpl, UsersService};
//!
//! let service: Arc<dyn UsersService> = Arc::new(UserServiceImpl::new(user_repo));
//! let response = service.get(1, "trace-id").await?;
//! ```

pub mod user_service;

pub use user_service::*;
