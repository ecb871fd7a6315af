//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하고 Redis를 통한 캐싱을 지원합니다.
//! 리포지토리 인스턴스는 애플리케이션 초기화 시점에 생성되어
//! `Arc`로 공유되며, 서비스 계층에만 노출됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = Arc::new(UserRepository::new(db, redis));
//! let user = user_repo.find_by_id(1).await?;
//! ```

pub mod reports;
pub mod users;
