//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리 및 선택적 필드 역직렬화 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::clean_optional_string;
//!
//! // 쿼리 파라미터 정리
//! let email = clean_optional_string(query.email);
//! ```

pub mod string_utils;
