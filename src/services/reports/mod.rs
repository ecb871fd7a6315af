//! 보고서 승인 서비스 모듈
//!
//! 보고서 승인/반려와 관련된 비즈니스 로직을 담당합니다.
//! 핸들러는 [`report_service::ReportsService`] 트레이트에만 의존합니다.

pub mod report_service;

pub use report_service::*;
