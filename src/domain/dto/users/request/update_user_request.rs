//! 사용자 부분 수정 요청 DTO
//!
//! PATCH 요청 본문의 데이터 구조와 검증 규칙을 정의합니다.
//! 모든 필드가 선택 사항이며, 제공된 필드만 수정 대상이 됩니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::string_utils::deserialize_optional_string;

/// 사용자 부분 수정 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 핸들러에서 검증을 마친 뒤에만 서비스 계층으로 전달되므로,
/// 서비스는 이미 검증된 본문을 그대로 수정 쿼리로 변환합니다.
/// 공백만 있는 필드는 역직렬화 단계에서 None으로 정리됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_has_update_fields"))]
pub struct UpdateUserRequest {
    /// 변경할 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,

    /// 변경할 표시 이름 (1-50자, 유니코드 지원)
    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
}

/// 수정할 필드가 최소 하나는 있는지 검증
fn validate_has_update_fields(req: &UpdateUserRequest) -> Result<(), ValidationError> {
    if req.email.is_none() && req.name.is_none() {
        return Err(ValidationError::new("empty_update")
            .with_message("수정할 필드를 최소 하나 이상 제공해야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_body_with_name_only_is_valid() {
        let req = UpdateUserRequest {
            email: None,
            name: Some("홍길동".to_string()),
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_valid_email_passes() {
        let req = UpdateUserRequest {
            email: Some("new@example.com".to_string()),
            name: None,
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_fails() {
        let req = UpdateUserRequest {
            email: Some("not-an-email".to_string()),
            name: None,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_body_fails() {
        let req = UpdateUserRequest {
            email: None,
            name: None,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_overlong_name_fails() {
        let req = UpdateUserRequest {
            email: None,
            name: Some("가".repeat(51)),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_whitespace_only_field_becomes_none() {
        let req: UpdateUserRequest = serde_json::from_str(r#"{"name": "   "}"#).unwrap();

        assert_eq!(req.name, None);
        // 정리 후 남는 필드가 없으므로 빈 수정 요청으로 검증에 실패한다
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_fields_are_trimmed_on_deserialize() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"email": " new@example.com ", "name": " 홍길동 "}"#).unwrap();

        assert_eq!(req.email, Some("new@example.com".to_string()));
        assert_eq!(req.name, Some("홍길동".to_string()));
        assert!(req.validate().is_ok());
    }
}
