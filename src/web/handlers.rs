use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;
use log::{info, error};

use crate::rpc::FacadeError;
use crate::web::models::{AnalyseParams, ChatParams, Envelope};
use crate::AppState;

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok", "service": "patent-gateway" }))
}

// Agent chat endpoint
pub async fn chat(
    data: web::Data<AppState>,
    params: web::Query<ChatParams>,
) -> impl Responder {
    let request_id = Uuid::new_v4();
    info!("[{}] Chat request (user: {:?}): {}",
          request_id, params.user_id, params.query);

    let outcome = data.agent
        .chat(&params.query, params.user_id.as_deref())
        .await;
    respond(request_id, outcome)
}

// Patent analysis endpoint, answered by the RAG service
pub async fn analyse(
    data: web::Data<AppState>,
    params: web::Query<AnalyseParams>,
) -> impl Responder {
    let request_id = Uuid::new_v4();
    info!("[{}] Analyse request for patent {}: {}",
          request_id, params.patent_no, params.user_query);

    let outcome = data.rag
        .get_answer(&params.user_query, &params.patent_no)
        .await;
    respond(request_id, outcome)
}

fn respond(request_id: Uuid, outcome: Result<String, FacadeError>) -> HttpResponse {
    match outcome {
        Ok(answer) => {
            info!("[{}] Answer length: {} characters", request_id, answer.len());
            HttpResponse::Ok().json(Envelope::success(answer))
        }
        Err(e) => {
            error!("[{}] {} call ended with {:?}: {:?}",
                   request_id, e.call_kind(), e.kind(), e);
            HttpResponse::Ok().json(Envelope::error(e.message()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::{AgentFacade, AnswerResponse, RagFacade, RemoteInvoker, RemoteRequest, TransportError};
    use crate::web::routes;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    /// Answers chat with "echo: <query>|<user>" and RAG with the combined query.
    struct EchoInvoker;

    #[async_trait]
    impl RemoteInvoker for EchoInvoker {
        async fn invoke(&self, request: &RemoteRequest) -> Result<AnswerResponse, TransportError> {
            let answer = match request {
                RemoteRequest::Chat(chat) => format!(
                    "echo: {}|{}",
                    chat.query,
                    chat.user_id.as_deref().unwrap_or("-")
                ),
                RemoteRequest::Rag(rag) => rag.user_query.clone(),
            };
            Ok(AnswerResponse::new(answer))
        }
    }

    struct DownInvoker;

    #[async_trait]
    impl RemoteInvoker for DownInvoker {
        async fn invoke(&self, _request: &RemoteRequest) -> Result<AnswerResponse, TransportError> {
            Err(TransportError::Status {
                endpoint: "agent-service".to_string(),
                status: 503,
                body: "Traceback (most recent call last)".to_string(),
            })
        }
    }

    struct SilentInvoker;

    #[async_trait]
    impl RemoteInvoker for SilentInvoker {
        async fn invoke(&self, _request: &RemoteRequest) -> Result<AnswerResponse, TransportError> {
            Ok(AnswerResponse::default())
        }
    }

    fn state(invoker: Arc<dyn RemoteInvoker>) -> web::Data<AppState> {
        web::Data::new(AppState {
            agent: AgentFacade::new(invoker.clone()),
            rag: RagFacade::new(invoker),
        })
    }

    #[actix_web::test]
    async fn chat_wraps_answer_in_success_envelope() {
        let app = test::init_service(
            App::new().app_data(state(Arc::new(EchoInvoker))).configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/agent/chat?query=hello&user_id=alice")
            .to_request();
        let body: Envelope = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, Envelope::success("echo: hello|alice"));
    }

    #[actix_web::test]
    async fn chat_without_user_id_is_allowed() {
        let app = test::init_service(
            App::new().app_data(state(Arc::new(EchoInvoker))).configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/agent/chat?query=hi").to_request();
        let body: Envelope = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, Envelope::success("echo: hi|-"));
    }

    #[actix_web::test]
    async fn analyse_sends_combined_query_to_rag() {
        let app = test::init_service(
            App::new().app_data(state(Arc::new(EchoInvoker))).configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/agent/analyse?userQuery=abc&patent_no=123")
            .to_request();
        let body: Envelope = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, Envelope::success("abc and patent no is 123"));
    }

    #[actix_web::test]
    async fn transport_failure_becomes_error_envelope_without_details() {
        let app = test::init_service(
            App::new().app_data(state(Arc::new(DownInvoker))).configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/agent/chat?query=hello").to_request();
        let body: Envelope = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, Envelope::error("failed to call the Agent service"));
        assert!(!body.msg.contains("Traceback"));
    }

    #[actix_web::test]
    async fn empty_answer_becomes_error_envelope() {
        let app = test::init_service(
            App::new().app_data(state(Arc::new(SilentInvoker))).configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/agent/analyse?userQuery=q&patent_no=US1")
            .to_request();
        let body: Envelope = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.code, 0);
        assert_eq!(body.msg, "the RAG service returned an empty answer: \"\"");
        assert_eq!(body.data, None);
    }

    #[actix_web::test]
    async fn missing_query_is_a_bad_request() {
        let app = test::init_service(
            App::new().app_data(state(Arc::new(EchoInvoker))).configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/agent/analyse?userQuery=q").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = test::init_service(App::new().configure(routes::configure)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
    }
}
