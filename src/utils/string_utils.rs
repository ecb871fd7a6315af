//! # 문자열 유틸리티
//!
//! 요청 파라미터와 DTO 필드의 공백 정리를 담당하는 공통 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
/// 쿼리 파라미터처럼 "비어 있음"과 "없음"을 같게 취급해야 하는 곳에서 사용합니다.
///
/// # 인자
/// * `value` - 정리할 Option<String>
///
/// # 반환값
/// * `None` - 값이 없거나 빈 문자열인 경우
/// * `Some(String)` - 정리된 유효한 문자열
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]` 속성과 함께 사용됩니다.
///
/// # 인자
/// * `deserializer` - serde deserializer 인스턴스
///
/// # 반환값
/// * `Ok(Some(String))` - 유효한 문자열 (앞뒤 공백 제거됨)
/// * `Ok(None)` - null 값, 빈 문자열, 또는 공백만 있는 경우
/// * `Err(D::Error)` - 역직렬화 실패 시
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(Some("\t\n".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        // 유효한 문자열 - 공백이 제거되고 Some 반환
        let json = r#"{"optional_field": "  Hello World  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, Some("Hello World".to_string()));

        // 빈 문자열 - None 반환
        let json = r#"{"optional_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // 공백만 있는 문자열 - None 반환
        let json = r#"{"optional_field": "   "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // null 값 - None 반환
        let json = r#"{"optional_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // 필드가 없는 경우 - default로 None 반환
        let json = r#"{}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_with_korean() {
        #[derive(Deserialize)]
        struct KoreanTestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            korean_field: Option<String>,
        }

        // 한글 문자열 테스트
        let json = r#"{"korean_field": "  안녕하세요  "}"#;
        let result: KoreanTestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.korean_field, Some("안녕하세요".to_string()));

        // 한글 + 영문 혼합
        let json = r#"{"korean_field": "  Hello 안녕  "}"#;
        let result: KoreanTestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.korean_field, Some("Hello 안녕".to_string()));
    }
}
