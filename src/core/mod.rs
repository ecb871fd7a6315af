//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 자동 응답 변환
//! - **AppResult**: `Result<T, AppError>` 별칭
//! - **ErrorContext**: 외부 에러에 컨텍스트를 붙여 변환하는 확장 trait

pub mod errors;
