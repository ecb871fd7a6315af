//! 리포트 관련 요청 DTO 모듈

pub mod approve_report_request;

pub use approve_report_request::ApproveReportRequest;
