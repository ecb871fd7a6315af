//! # Report Approval HTTP Handlers
//!
//! 보고서 승인 처리 엔드포인트를 담당하는 핸들러 함수입니다.
//! 사용자 핸들러와 동일한 계약(Begin/End 로그, 단일 위임,
//! [`ResponseWrapper`](crate::domain::dto::ResponseWrapper) 반환)을 따릅니다.
//!
//! ## 구현된 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `PATCH` | `/reports/{id}/approve` | 보고서 승인/반려 | 200 OK |
//!
//! ## 요청 본문 계약
//!
//! `approved` 필드는 JSON 불리언이어야 하며, 생략하면 `false`로
//! 간주합니다. `"yes"`나 `1` 같은 유사 불리언 값은 역직렬화 단계에서
//! 400으로 거부되고 서비스는 호출되지 않습니다.

use std::sync::Arc;

use actix_web::{web, HttpResponse, patch};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::reports::request::ApproveReportRequest;
use crate::domain::models::request_context::RequestContext;
use crate::services::reports::report_service::ReportsService;

/// 보고서 승인 핸들러
///
/// `approved` 플래그에 따라 보고서를 승인(`approved`) 또는
/// 반려(`rejected`) 상태로 변경합니다.
///
/// # 엔드포인트
///
/// `PATCH /reports/{report_id}/approve`
///
/// # 요청 본문
///
/// ```json
/// { "approved": true }
/// ```
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 5,
///     "title": "1분기 결산",
///     "approved": true,
///     "status": "approved"
///   }
/// }
/// ```
#[patch("/{report_id}/approve")]
pub async fn approve_report(
    service: web::Data<Arc<dyn ReportsService>>,
    report_id: web::Path<i64>,
    payload: web::Json<ApproveReportRequest>,
    ctx: RequestContext,
) -> Result<HttpResponse, AppError> {
    let id = report_id.into_inner();
    log::debug!(
        "[{}] approveReport: Begin - Id: {} - Approved: {}",
        ctx.trace_id,
        id,
        payload.approved
    );

    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let res = service.approve(id, payload.into_inner(), &ctx.trace_id).await?;

    log::debug!(
        "[{}] approveReport: End - Response: {} - Time: {}ms",
        ctx.trace_id,
        serde_json::to_string(&res).unwrap_or_default(),
        ctx.elapsed_ms()
    );

    Ok(HttpResponse::Ok().json(res))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::core::errors::AppResult;
    use crate::domain::dto::reports::response::ReportResponse;
    use crate::domain::dto::ResponseWrapper;
    use crate::domain::entities::reports::report::Report;
    use crate::domain::models::request_context::TRACE_ID_HEADER;

    /// 호출 인자를 기록하는 목 서비스
    #[derive(Default)]
    struct RecordingReportsService {
        approve_calls: Mutex<Vec<(i64, bool, String)>>,
        respond_not_found: bool,
    }

    impl RecordingReportsService {
        fn not_found() -> Self {
            Self {
                respond_not_found: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl ReportsService for RecordingReportsService {
        async fn approve(
            &self,
            id: i64,
            request: ApproveReportRequest,
            trace_id: &str,
        ) -> AppResult<ResponseWrapper<ReportResponse>> {
            self.approve_calls
                .lock()
                .unwrap()
                .push((id, request.approved, trace_id.to_string()));

            if self.respond_not_found {
                return Err(AppError::NotFound("보고서를 찾을 수 없습니다".to_string()));
            }

            Ok(ResponseWrapper::ok(ReportResponse::from(Report::new(
                id,
                "1분기 결산".to_string(),
            ))))
        }
    }

    fn reports_scope() -> actix_web::Scope {
        web::scope("/api/v1/reports").service(approve_report)
    }

    #[actix_web::test]
    async fn test_approve_report_delegates_true_flag() {
        let service = Arc::new(RecordingReportsService::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service.clone() as Arc<dyn ReportsService>))
                .service(reports_scope()),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/v1/reports/5/approve")
            .insert_header((TRACE_ID_HEADER, "trace-approve"))
            .set_json(serde_json::json!({ "approved": true }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            service.approve_calls.lock().unwrap().as_slice(),
            &[(5, true, "trace-approve".to_string())]
        );
    }

    #[actix_web::test]
    async fn test_approve_report_accepts_false_flag() {
        let service = Arc::new(RecordingReportsService::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service.clone() as Arc<dyn ReportsService>))
                .service(reports_scope()),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/v1/reports/5/approve")
            .set_json(serde_json::json!({ "approved": false }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(service.approve_calls.lock().unwrap()[0].1, false);
    }

    #[actix_web::test]
    async fn test_approve_report_defaults_missing_flag_to_false() {
        let service = Arc::new(RecordingReportsService::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service.clone() as Arc<dyn ReportsService>))
                .service(reports_scope()),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/v1/reports/5/approve")
            .set_json(serde_json::json!({}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(service.approve_calls.lock().unwrap()[0].1, false);
    }

    #[actix_web::test]
    async fn test_approve_report_rejects_string_flag() {
        let service = Arc::new(RecordingReportsService::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service.clone() as Arc<dyn ReportsService>))
                .service(reports_scope()),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/v1/reports/5/approve")
            .set_json(serde_json::json!({ "approved": "yes" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(service.approve_calls.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_approve_report_rejects_numeric_flag() {
        let service = Arc::new(RecordingReportsService::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service.clone() as Arc<dyn ReportsService>))
                .service(reports_scope()),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/v1/reports/5/approve")
            .set_json(serde_json::json!({ "approved": 1 }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(service.approve_calls.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_approve_report_propagates_not_found() {
        let service = Arc::new(RecordingReportsService::not_found());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service.clone() as Arc<dyn ReportsService>))
                .service(reports_scope()),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/v1/reports/999/approve")
            .set_json(serde_json::json!({ "approved": true }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "보고서를 찾을 수 없습니다");
    }

    #[actix_web::test]
    async fn test_approve_report_returns_wrapper_unmodified() {
        let service = Arc::new(RecordingReportsService::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service.clone() as Arc<dyn ReportsService>))
                .service(reports_scope()),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/v1/reports/9/approve")
            .set_json(serde_json::json!({ "approved": true }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 9);
        assert_eq!(body["data"]["title"], "1분기 결산");
    }
}
