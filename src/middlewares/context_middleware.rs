//! 요청 컨텍스트 미들웨어
//!
//! 모든 요청에 trace id와 시작 시각을 담은 [`RequestContext`]를 부여합니다.
//! 클라이언트가 `X-Request-Id` 헤더를 보내면 그 값을 trace id로 사용하고,
//! 없으면 UUID v4를 새로 발급합니다. 요청을 거부하는 일은 없습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, Result,
};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::request_context::RequestContext;

/// 요청 컨텍스트 미들웨어
///
/// 인증 여부와 무관하게 모든 요청에 적용됩니다. 핸들러는
/// [`RequestContext`] 추출기를 통해 여기서 삽입된 값을 읽습니다.
pub struct ContextMiddleware;

impl<S, B> Transform<S, ServiceRequest> for ContextMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = ContextMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ContextMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

/// 컨텍스트 삽입을 수행하는 서비스
pub struct ContextMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ContextMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        // 시작 시각은 파이프라인 진입 시점에 고정
        let context = RequestContext::from_request_head(req.request());
        log::debug!("[{}] {} {}", context.trace_id, req.method(), req.path());
        req.extensions_mut().insert(context);

        Box::pin(async move { service.call(req).await })
    }
}
