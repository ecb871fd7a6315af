//! # 사용자 관리 서비스 구현
//!
//! 사용자 리소스의 조회, 수정, 삭제를 담당하는 핵심 비즈니스 로직입니다.
//! 핸들러 계층과 리포지토리 계층 사이에서 엔티티를 DTO로 변환하고,
//! 모든 결과를 [`ResponseWrapper`] 봉투로 감싸서 반환합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────┐      ┌──────────────────┐      ┌────────────────┐
//! │   Handlers   │ ───▶ │  dyn UsersService │ ───▶ │ UserRepository │
//! │ (HTTP 바인딩) │      │  (비즈니스 로직)    │      │ (MongoDB+Redis)│
//! └──────────────┘      └──────────────────┘      └────────────────┘
//! ```
//!
//! 핸들러는 구체 타입이 아닌 [`UsersService`] 트레이트 객체에 의존하므로,
//! 테스트에서는 호출을 기록하는 목 구현으로 대체할 수 있습니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::{doc, DateTime, Document};
use crate::{
    core::errors::{AppError, AppResult},
    domain::dto::users::request::UpdateUserRequest,
    domain::dto::users::response::UserResponse,
    domain::dto::ResponseWrapper,
    domain::entities::users::user::User,
    repositories::users::user_repo::UserRepository,
};

/// 사용자 비즈니스 로직 인터페이스
///
/// 모든 메서드는 추적 ID를 받아 디버그 로그에 태깅하고,
/// 결과를 [`ResponseWrapper`]로 감싸서 반환합니다.
///
/// # 에러 규약
///
/// * 존재하지 않는 사용자 → `AppError::NotFound`
/// * 다른 사용자가 이미 사용 중인 이메일로 변경 → `AppError::ConflictError`
/// * 저장소 오류 → `AppError::DatabaseError`
#[async_trait]
pub trait UsersService: Send + Sync {
    /// 전체 사용자 조회 (선택적 이메일 필터)
    async fn get_all(
        &self,
        email: Option<&str>,
        trace_id: &str,
    ) -> AppResult<ResponseWrapper<Vec<UserResponse>>>;

    /// ID로 단일 사용자 조회
    async fn get(&self, id: i64, trace_id: &str) -> AppResult<ResponseWrapper<UserResponse>>;

    /// 사용자 정보 부분 수정
    async fn update(
        &self,
        id: i64,
        request: UpdateUserRequest,
        trace_id: &str,
    ) -> AppResult<ResponseWrapper<UserResponse>>;

    /// 사용자 삭제
    async fn delete(&self, id: i64, trace_id: &str) -> AppResult<ResponseWrapper<bool>>;
}

/// MongoDB 기반 사용자 서비스 구현체
pub struct UserServiceImpl {
    /// 사용자 리포지토리
    user_repo: Arc<UserRepository>,
}

impl UserServiceImpl {
    /// 새 서비스 인스턴스 생성
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }
}

/// 수정 요청에서 `$set` 업데이트 문서 생성
///
/// 값이 있는 필드만 포함하며, `updated_at`은 항상 현재 시각으로 갱신합니다.
fn build_update_doc(request: &UpdateUserRequest) -> Document {
    let mut update_doc = doc! { "updated_at": DateTime::now() };

    if let Some(ref email) = request.email {
        update_doc.insert("email", email);
    }
    if let Some(ref name) = request.name {
        update_doc.insert("name", name);
    }

    update_doc
}

/// 이메일이 수정 대상이 아닌 다른 사용자에게 이미 사용 중인지 확인
///
/// 본인이 이미 보유한 이메일로의 변경은 충돌로 보지 않습니다.
fn email_taken_by_other(holders: &[User], id: i64) -> bool {
    holders.iter().any(|u| u.id != id)
}

#[async_trait]
impl UsersService for UserServiceImpl {
    async fn get_all(
        &self,
        email: Option<&str>,
        trace_id: &str,
    ) -> AppResult<ResponseWrapper<Vec<UserResponse>>> {
        log::debug!("[{}] UserService.get_all - filter: {:?}", trace_id, email);

        let users = self.user_repo.find_all(email).await?;
        let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

        log::debug!("[{}] UserService.get_all - {} users found", trace_id, responses.len());

        Ok(ResponseWrapper::ok(responses))
    }

    async fn get(&self, id: i64, trace_id: &str) -> AppResult<ResponseWrapper<UserResponse>> {
        log::debug!("[{}] UserService.get - id: {}", trace_id, id);

        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(ResponseWrapper::ok(UserResponse::from(user)))
    }

    async fn update(
        &self,
        id: i64,
        request: UpdateUserRequest,
        trace_id: &str,
    ) -> AppResult<ResponseWrapper<UserResponse>> {
        log::debug!("[{}] UserService.update - id: {}", trace_id, id);

        // 이메일 변경 시 다른 사용자와의 중복 확인
        if let Some(ref email) = request.email {
            let holders = self.user_repo.find_all(Some(email)).await?;
            if email_taken_by_other(&holders, id) {
                return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
            }
        }

        let updated = self.user_repo
            .update(id, build_update_doc(&request))
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        log::debug!("[{}] UserService.update - id {} updated", trace_id, id);

        Ok(ResponseWrapper::ok(UserResponse::from(updated)))
    }

    async fn delete(&self, id: i64, trace_id: &str) -> AppResult<ResponseWrapper<bool>> {
        log::debug!("[{}] UserService.delete - id: {}", trace_id, id);

        let deleted = self.user_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        log::debug!("[{}] UserService.delete - id {} deleted", trace_id, id);

        Ok(ResponseWrapper::ok(true))
    }
}
