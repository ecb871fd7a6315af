//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. API 계약 우선 (API Contract First)
//! - **명시적 인터페이스**: 클라이언트가 기대할 수 있는 명확한 데이터 구조
//! - **공통 봉투**: 모든 응답은 [`response_wrapper::ResponseWrapper`]에 담겨 반환
//!
//! ### 2. 유효성 검증 내장 (Built-in Validation)
//! - **타입 안전성**: 컴파일 타임 타입 검증
//! - **런타임 검증**: validator crate를 통한 형식/규칙 검증
//! - **에러 메시지**: 한국어 메시지의 사용자 친화적 검증 실패 응답
//!
//! ### 3. 도메인 분리 (Domain Separation)
//! - **내부 표현 vs 외부 표현**: Entity와 DTO의 명확한 분리
//! - **진화 가능성**: 내부 구조 변경이 API에 미치는 영향 최소화
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── response_wrapper.rs  # 공통 응답 봉투
//! ├── users/               # 사용자 관련 DTO
//! │   ├── request/         # 요청 DTO (클라이언트 → 서버)
//! │   │   └── update_user_request.rs
//! │   └── response/        # 응답 DTO (서버 → 클라이언트)
//! │       └── user_response.rs
//! └── reports/             # 리포트 관련 DTO
//!     ├── request/
//!     │   └── approve_report_request.rs
//!     └── response/
//!         └── report_response.rs
//! ```

pub mod response_wrapper;
pub mod users;
pub mod reports;

// 공통 re-exports
pub use response_wrapper::ResponseWrapper;
pub use users::*;
pub use reports::*;
