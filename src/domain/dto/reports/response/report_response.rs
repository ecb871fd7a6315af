use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::reports::report::Report;

/// 리포트 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    pub id: i64,
    pub title: String,
    pub approved: bool,
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        let Report {
            id,
            title,
            approved,
            status,
            created_at,
            updated_at,
        } = report;

        Self {
            id,
            title,
            approved,
            status,
            created_at,
            updated_at,
        }
    }
}
