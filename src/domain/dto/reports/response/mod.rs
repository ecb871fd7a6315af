//! 리포트 관련 응답 DTO 모듈

pub mod report_response;

pub use report_response::ReportResponse;
