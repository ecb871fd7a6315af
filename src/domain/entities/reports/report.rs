//! Report Entity Implementation
//!
//! 승인 워크플로우 대상이 되는 리포트 엔티티입니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 리포트 상태 문자열 상수
pub const REPORT_STATUS_PENDING: &str = "pending";
pub const REPORT_STATUS_APPROVED: &str = "approved";
pub const REPORT_STATUS_REJECTED: &str = "rejected";

/// 리포트 엔티티
///
/// `reports` 컬렉션의 문서와 매핑됩니다. 승인 처리 전에는
/// `pending` 상태이며, 승인 요청의 `approved` 값에 따라
/// `approved` 또는 `rejected`로 전이됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// 리포트 식별자 (정수, `_id`로 저장)
    #[serde(rename = "_id")]
    pub id: i64,
    /// 리포트 제목
    pub title: String,
    /// 승인 여부
    pub approved: bool,
    /// 처리 상태 (pending / approved / rejected)
    pub status: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Report {
    /// 승인 대기 상태의 새 리포트를 생성합니다.
    pub fn new(id: i64, title: String) -> Self {
        let now = DateTime::now();

        Self {
            id,
            title,
            approved: false,
            status: REPORT_STATUS_PENDING.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
