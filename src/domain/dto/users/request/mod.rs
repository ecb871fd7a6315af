//! # 사용자 관련 요청 DTO 모듈
//!
//! 이 모듈은 사용자 도메인과 관련된 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (serde)
//! 2. **형식 검증**: 이메일, 길이 등 기본 형식 규칙 (validator)
//! 3. **비즈니스 검증**: 수정 필드 존재 여부 등 도메인 특화 규칙
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! 핸들러에서 HTTP 400 Bad Request 응답으로 변환됩니다.

pub mod update_user_request;

pub use update_user_request::UpdateUserRequest;
