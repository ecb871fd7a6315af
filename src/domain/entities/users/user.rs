//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 정수 id를 MongoDB 문서의 `_id`로 직접 사용합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서와 1:1로 매핑되는 핵심 도메인 엔티티입니다.
/// 외부 시스템과 공유되는 정수 식별자를 `_id`로 사용하므로
/// ObjectId 변환 없이 숫자 경로 파라미터로 바로 조회할 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 사용자 식별자 (정수, `_id`로 저장)
    #[serde(rename = "_id")]
    pub id: i64,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 표시 이름
    pub name: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 엔티티를 생성합니다.
    pub fn new(id: i64, email: String, name: String) -> Self {
        let now = DateTime::now();

        Self {
            id,
            email,
            name,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_sets_timestamps() {
        let user = User::new(1, "user@example.com".to_string(), "홍길동".to_string());

        assert_eq!(user.id, 1);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_user_serializes_id_as_underscore_id() {
        let user = User::new(42, "user@example.com".to_string(), "홍길동".to_string());
        let doc = mongodb::bson::to_document(&user).unwrap();

        assert_eq!(doc.get_i64("_id").unwrap(), 42);
        assert!(doc.get("id").is_none());
    }
}
