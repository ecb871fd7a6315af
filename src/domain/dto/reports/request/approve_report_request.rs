//! 리포트 승인 요청 DTO
//!
//! 승인 엔드포인트의 요청 본문 구조를 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 리포트 승인 요청 DTO
///
/// `approved` 필드가 본문에서 생략되면 `false`로 처리됩니다.
/// boolean 이외의 값(`"yes"`, `1` 등)은 역직렬화 단계에서 거부되어
/// 400 응답으로 이어집니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApproveReportRequest {
    /// 승인 여부 (생략 시 false)
    #[serde(default)]
    pub approved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_approved_true() {
        let req: ApproveReportRequest =
            serde_json::from_value(json!({ "approved": true })).unwrap();

        assert!(req.approved);
    }

    #[test]
    fn test_accepts_approved_false() {
        let req: ApproveReportRequest =
            serde_json::from_value(json!({ "approved": false })).unwrap();

        assert!(!req.approved);
    }

    #[test]
    fn test_rejects_string_value() {
        let result: Result<ApproveReportRequest, _> =
            serde_json::from_value(json!({ "approved": "yes" }));

        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_numeric_value() {
        let result: Result<ApproveReportRequest, _> =
            serde_json::from_value(json!({ "approved": 1 }));

        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_to_false_when_omitted() {
        let req: ApproveReportRequest = serde_json::from_value(json!({})).unwrap();

        assert!(!req.approved);
    }
}
