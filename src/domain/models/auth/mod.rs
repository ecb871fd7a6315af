//! 인증 관련 도메인 모델
//!
//! 인증 미들웨어와 핸들러 사이에서 공유되는 인증 상태 모델을 정의합니다.

pub mod authenticated_user;

pub use authenticated_user::AuthenticatedUser;
