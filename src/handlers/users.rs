//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 조회, 부분 수정, 삭제 작업을 지원하며 RESTful API 설계 원칙을 따릅니다.
//!
//! ## 구현된 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 사용자 목록 조회 (선택적 이메일 필터) | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 단건 조회 | 200 OK |
//! | `PATCH` | `/users/{id}` | 사용자 부분 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 200 OK |
//!
//! ## 핸들러 계약
//!
//! 모든 핸들러는 동일한 형태를 따릅니다:
//!
//! 1. trace id를 태깅한 `Begin` 디버그 로그
//! 2. 주입된 [`UsersService`] 트레이트 객체의 메서드를 **정확히 한 번** 호출
//! 3. 결과 요약과 처리 시간을 담은 `End` 디버그 로그
//! 4. 서비스가 돌려준 [`ResponseWrapper`](crate::domain::dto::ResponseWrapper)를
//!    가공 없이 200 JSON 본문으로 반환
//!
//! 비즈니스 로직과 에러 분기는 서비스 계층의 몫입니다. 서비스가 반환한
//! `AppError`는 `?` 연산자로 그대로 전파되어 전역 에러 매핑이 상태 코드를
//! 결정합니다.
//!
//! ## 로그 형식
//!
//! ```text
//! [{trace_id}] getAllUsers: Begin - Email: user@example.com
//! [{trace_id}] getAllUsers: End - Amount of users returned: 3 - Time: 12ms
//! [{trace_id}] getUser: Begin - Id: 42
//! [{trace_id}] getUser: End - Response: {"success":true,...} - Time: 4ms
//! ```
//!
//! ## 사용 예제
//!
//! ```bash
//! curl -X PATCH http://localhost:8080/api/v1/users/42 \
//!   -H "Authorization: Bearer {token}" \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "새 이름"}'
//! ```

use std::sync::Arc;

use actix_web::{web, HttpResponse, get, patch, delete};
use serde::Deserialize;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::UpdateUserRequest;
use crate::domain::models::request_context::RequestContext;
use crate::services::users::user_service::UsersService;
use crate::utils::string_utils::clean_optional_string;

/// 사용자 목록 조회 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    /// 정확히 일치해야 하는 이메일 필터 (선택)
    pub email: Option<String>,
}

/// 사용자 목록 조회 핸들러
///
/// 전체 사용자 목록을 반환합니다. `email` 쿼리 파라미터가 주어지면
/// 해당 이메일과 정확히 일치하는 사용자만 반환합니다.
///
/// # 엔드포인트
///
/// `GET /users` 또는 `GET /users?email=user@example.com`
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 1,
///       "email": "user@example.com",
///       "name": "홍길동",
///       "created_at": "2024-01-01T00:00:00Z",
///       "updated_at": "2024-01-01T00:00:00Z"
///     }
///   ]
/// }
/// ```
///
/// # 필터 정규화
///
/// 빈 문자열이나 공백뿐인 `email` 파라미터는 필터가 없는 것으로
/// 취급합니다. 정규화된 필터 값이 서비스에 그대로 전달됩니다.
#[get("")]
pub async fn get_all_users(
    service: web::Data<Arc<dyn UsersService>>,
    query: web::Query<UserListQuery>,
    ctx: RequestContext,
) -> Result<HttpResponse, AppError> {
    let email = clean_optional_string(query.into_inner().email);

    match email.as_deref() {
        Some(email) => log::debug!("[{}] getAllUsers: Begin - Email: {}", ctx.trace_id, email),
        None => log::debug!("[{}] getAllUsers: Begin", ctx.trace_id),
    }

    let res = service.get_all(email.as_deref(), &ctx.trace_id).await?;

    let amount = res.data.as_ref().map(Vec::len).unwrap_or(0);
    log::debug!(
        "[{}] getAllUsers: End - Amount of users returned: {} - Time: {}ms",
        ctx.trace_id,
        amount,
        ctx.elapsed_ms()
    );

    Ok(HttpResponse::Ok().json(res))
}

/// 사용자 단건 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/{user_id}`
///
/// # 실패 사례
///
/// 존재하지 않는 ID는 서비스가 `AppError::NotFound`로 알려 404가 됩니다.
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<Arc<dyn UsersService>>,
    user_id: web::Path<i64>,
    ctx: RequestContext,
) -> Result<HttpResponse, AppError> {
    let id = user_id.into_inner();
    log::debug!("[{}] getUser: Begin - Id: {}", ctx.trace_id, id);

    let res = service.get(id, &ctx.trace_id).await?;

    log::debug!(
        "[{}] getUser: End - Response: {} - Time: {}ms",
        ctx.trace_id,
        serde_json::to_string(&res).unwrap_or_default(),
        ctx.elapsed_ms()
    );

    Ok(HttpResponse::Ok().json(res))
}

/// 사용자 부분 수정 핸들러
///
/// 요청 본문에 포함된 필드만 수정합니다. 본문은 서비스 호출 전에
/// 검증되며, 수정할 필드가 하나도 없으면 400으로 거부됩니다.
///
/// # 엔드포인트
///
/// `PATCH /users/{user_id}`
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "changed@example.com",
///   "name": "바뀐 이름"
/// }
/// ```
///
/// # 실패 사례
///
/// ### 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "error": "email: 유효한 이메일 주소를 입력해주세요"
/// }
/// ```
#[patch("/{user_id}")]
pub async fn update_user(
    service: web::Data<Arc<dyn UsersService>>,
    user_id: web::Path<i64>,
    payload: web::Json<UpdateUserRequest>,
    ctx: RequestContext,
) -> Result<HttpResponse, AppError> {
    let id = user_id.into_inner();
    log::debug!("[{}] updateUser: Begin - Id: {}", ctx.trace_id, id);

    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let res = service.update(id, payload.into_inner(), &ctx.trace_id).await?;

    log::debug!(
        "[{}] updateUser: End - Response: {} - Time: {}ms",
        ctx.trace_id,
        serde_json::to_string(&res).unwrap_or_default(),
        ctx.elapsed_ms()
    );

    Ok(HttpResponse::Ok().json(res))
}

/// 사용자 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /users/{user_id}`
///
/// # 응답
///
/// 서비스가 감싼 불리언을 그대로 반환합니다. 존재하지 않는 사용자에
/// 대한 처리(404 여부)는 서비스 계층이 결정합니다.
#[delete("/{user_id}")]
pub async fn remove_user(
    service: web::Data<Arc<dyn UsersService>>,
    user_id: web::Path<i64>,
    ctx: RequestContext,
) -> Result<HttpResponse, AppError> {
    let id = user_id.into_inner();
    log::debug!("[{}] removeUser: Begin - Id: {}", ctx.trace_id, id);

    let res = service.delete(id, &ctx.trace_id).await?;

    log::debug!(
        "[{}] removeUser: End - Response: {} - Time: {}ms",
        ctx.trace_id,
        serde_json::to_string(&res).unwrap_or_default(),
        ctx.elapsed_ms()
    );

    Ok(HttpResponse::Ok().json(res))
}
