//! 공통 응답 래퍼 DTO
//!
//! 모든 엔드포인트가 공유하는 응답 봉투 형식을 정의합니다.

use serde::{Deserialize, Serialize};

/// 공통 응답 래퍼
///
/// 서비스 계층의 모든 결과는 이 봉투에 담긴 뒤에야 전송 계층에
/// 도달합니다. 핸들러는 봉투를 열어보거나 가공하지 않고 그대로
/// 직렬화해 반환합니다.
///
/// ## 직렬화 형식
///
/// ```json
/// { "success": true, "data": { ... } }
/// { "success": false, "error": "사용자를 찾을 수 없습니다" }
/// ```
///
/// 값이 없는 필드는 본문에서 생략됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseWrapper<T> {
    /// 처리 성공 여부
    pub success: bool,
    /// 성공 시 결과 데이터
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// 실패 시 에러 메시지
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ResponseWrapper<T> {
    /// 성공 응답을 생성합니다.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// 실패 응답을 생성합니다.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_wraps_data() {
        let wrapper = ResponseWrapper::ok(vec![1, 2, 3]);

        assert!(wrapper.success);
        assert_eq!(wrapper.data, Some(vec![1, 2, 3]));
        assert!(wrapper.error.is_none());
    }

    #[test]
    fn test_error_carries_message() {
        let wrapper: ResponseWrapper<()> = ResponseWrapper::error("사용자를 찾을 수 없습니다");

        assert!(!wrapper.success);
        assert!(wrapper.data.is_none());
        assert_eq!(wrapper.error.as_deref(), Some("사용자를 찾을 수 없습니다"));
    }

    #[test]
    fn test_ok_serialization_omits_error_field() {
        let wrapper = ResponseWrapper::ok(true);
        let json = serde_json::to_value(&wrapper).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"], true);
        assert!(json.get("error").is_none());
    }
}
