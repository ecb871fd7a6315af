//! # Domain Models Module
//!
//! 도메인의 비즈니스 모델과 값 객체(Value Objects)를 정의하는 모듈입니다.
//! 영속 엔티티(entities)와 달리 요청 범위에서만 살아있는 상태를 표현합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//!
//! ### Models (`./`)
//! - **요청 범위**: 요청과 함께 생성되고 폐기되는 상태
//! - **불변성**: 일반적으로 불변 객체로 설계
//! - **예시**: 요청 컨텍스트, 인증된 사용자, 토큰 클레임
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── mod.rs               ← 이 파일
//! ├── request_context.rs   ← trace id + 시작 시각 컨텍스트
//! ├── auth/                ← 인증 상태 모델
//! │   └── authenticated_user.rs
//! └── token/               ← JWT 클레임 모델
//!     └── token.rs
//! ```

pub mod auth;
pub mod token;
pub mod request_context;

pub use auth::AuthenticatedUser;
pub use token::TokenClaims;
pub use request_context::RequestContext;
