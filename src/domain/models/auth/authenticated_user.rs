use serde::{Deserialize, Serialize};

/// JWT 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 토큰 검증에 성공하면 이 구조체를 요청 extensions에
/// 삽입합니다. 이후 파이프라인에서 요청을 보낸 사용자를 식별할 때
/// 사용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (토큰의 sub 클레임)
    pub user_id: String,

    /// 사용자 이메일 (토큰에 포함된 경우)
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_user_clone_preserves_fields() {
        let user = AuthenticatedUser {
            user_id: "user123".to_string(),
            email: Some("user@example.com".to_string()),
        };
        let cloned = user.clone();

        assert_eq!(cloned.user_id, "user123");
        assert_eq!(cloned.email.as_deref(), Some("user@example.com"));
    }
}
