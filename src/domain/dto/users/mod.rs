//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 사용자 데이터 교환을 위한 계약을 정의합니다.
//!
//! ## 구성
//!
//! - [`request`] - 클라이언트 → 서버 방향의 입력 구조 (검증 포함)
//! - [`response`] - 서버 → 클라이언트 방향의 출력 구조

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
