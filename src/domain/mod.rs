//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 데이터 구조와
//! 도메인 규칙을 담당합니다. Domain-Driven Design (DDD) 원칙에
//! 따라 설계되었습니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (MongoDB 문서)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response/Wrapper)
//! └── Models        - 요청 범위 모델 (컨텍스트, 인증 상태)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 비즈니스의 핵심 개념을 나타내는 영속 가능한 객체들입니다.
//! MongoDB 컬렉션과 1:1로 매핑되며, 정수 `_id`를 사용합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//! 요청 DTO는 `validator`로 검증되고, 응답은 공통 봉투
//! `ResponseWrapper<T>`에 담겨 반환됩니다.
//!
//! ### [`models`] - 요청 범위 모델
//!
//! 요청과 함께 생성되고 폐기되는 상태를 표현합니다.
//! trace id 컨텍스트, 인증된 사용자, JWT 클레임이 여기에 속합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
