//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.
//! 검증에 실패하면 핸들러를 호출하지 않고 401 응답으로 단락(short-circuit)합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// JWT 인증 미들웨어
///
/// 보호가 필요한 스코프에 `wrap()`으로 등록합니다. 토큰 검증에 성공하면
/// [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
/// 요청 extensions에 삽입한 뒤 다음 서비스로 전달합니다.
pub struct AuthMiddleware {
    /// 토큰 검증에 사용할 서비스
    token_service: Arc<TokenService>,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use crate::domain::entities::users::user::User;

    async fn protected_probe() -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
    }

    fn issue_token() -> String {
        let token_service = TokenService::new();
        let user = User::new(7, "guard@example.com".to_string(), "가드".to_string());
        token_service.generate_access_token(&user).unwrap()
    }

    #[actix_web::test]
    async fn test_rejects_request_without_token() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .wrap(AuthMiddleware::new(Arc::new(TokenService::new())))
                    .route("/probe", web::get().to(protected_probe)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/probe").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "authentication_required");
    }

    #[actix_web::test]
    async fn test_rejects_malformed_authorization_header() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .wrap(AuthMiddleware::new(Arc::new(TokenService::new())))
                    .route("/probe", web::get().to(protected_probe)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/probe")
            .insert_header(("Authorization", "Basic dXNlcjpwdw=="))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_rejects_invalid_token() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .wrap(AuthMiddleware::new(Arc::new(TokenService::new())))
                    .route("/probe", web::get().to(protected_probe)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/probe")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_allows_request_with_valid_token() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .wrap(AuthMiddleware::new(Arc::new(TokenService::new())))
                    .route("/probe", web::get().to(protected_probe)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/probe")
            .insert_header(("Authorization", format!("Bearer {}", issue_token())))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }
}
