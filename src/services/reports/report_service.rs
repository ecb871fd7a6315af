//! # 보고서 승인 서비스 구현
//!
//! 보고서 승인 처리를 담당하는 비즈니스 로직입니다.
//! 승인 플래그로부터 보고서 상태를 파생시키고, 결과를
//! [`ResponseWrapper`] 봉투로 감싸서 반환합니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    core::errors::{AppError, AppResult},
    domain::dto::reports::request::ApproveReportRequest,
    domain::dto::reports::response::ReportResponse,
    domain::dto::ResponseWrapper,
    domain::entities::reports::report::{REPORT_STATUS_APPROVED, REPORT_STATUS_REJECTED},
    repositories::reports::report_repo::ReportRepository,
};

/// 보고서 비즈니스 로직 인터페이스
#[async_trait]
pub trait ReportsService: Send + Sync {
    /// 보고서 승인 또는 반려 처리
    ///
    /// `approved` 플래그에 따라 상태를 `approved` 또는 `rejected`로
    /// 변경하고 갱신된 보고서를 반환합니다.
    async fn approve(
        &self,
        id: i64,
        request: ApproveReportRequest,
        trace_id: &str,
    ) -> AppResult<ResponseWrapper<ReportResponse>>;
}

/// MongoDB 기반 보고서 서비스 구현체
pub struct ReportServiceImpl {
    /// 보고서 리포지토리
    report_repo: Arc<ReportRepository>,
}

impl ReportServiceImpl {
    /// 새 서비스 인스턴스 생성
    pub fn new(report_repo: Arc<ReportRepository>) -> Self {
        Self { report_repo }
    }
}

/// 승인 플래그에서 보고서 상태 파생
fn status_for(approved: bool) -> &'static str {
    if approved {
        REPORT_STATUS_APPROVED
    } else {
        REPORT_STATUS_REJECTED
    }
}

#[async_trait]
impl ReportsService for ReportServiceImpl {
    async fn approve(
        &self,
        id: i64,
        request: ApproveReportRequest,
        trace_id: &str,
    ) -> AppResult<ResponseWrapper<ReportResponse>> {
        log::debug!(
            "[{}] ReportService.approve - id: {}, approved: {}",
            trace_id, id, request.approved
        );

        let report = self.report_repo
            .set_approval(id, request.approved, status_for(request.approved))
            .await?
            .ok_or_else(|| AppError::NotFound("보고서를 찾을 수 없습니다".to_string()))?;

        log::debug!(
            "[{}] ReportService.approve - id {} now {}",
            trace_id, id, report.status
        );

        Ok(ResponseWrapper::ok(ReportResponse::from(report)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_derivation() {
        assert_eq!(status_for(true), REPORT_STATUS_APPROVED);
        assert_eq!(status_for(false), REPORT_STATUS_REJECTED);
    }
}
