use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use roasting_app::domain::RoastResponse;
use roasting_app::infrastructure::security::InputSanitizer;
use roasting_app::AppContext;
use roasting_errors::AppError;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;

/// `POST /api/roast`. Every response, including failures, is JSON in the
/// roaster's voice.
pub fn roast_routes<S>(ctx: AppContext) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let max_body_bytes = ctx.max_body_bytes;
    Router::new()
        .route("/api/roast", post(roast_idea))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CatchPanicLayer::custom(roast_on_panic))
        .with_state(ctx)
}

async fn roast_idea(
    State(ctx): State<AppContext>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<RoastResponse>, AppError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            tracing::warn!("Roast request over {} bytes rejected", ctx.max_body_bytes);
            AppError::IdeaTooLarge(ctx.max_body_bytes)
        } else {
            tracing::warn!("Unreadable roast request body: {}", rejection);
            AppError::MissingIdea
        }
    })?;

    let idea = InputSanitizer::validate_body(&body)?;
    let roast = ctx.generate_roast.execute(&idea);
    tracing::debug!("Roasted '{}' ({:?})", idea.as_str(), roast.source);

    Ok(Json(RoastResponse::from(roast)))
}

fn roast_on_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Roast handler panicked: {}", detail);
    AppError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use roasting_app::infrastructure::roast_book::KEYWORD_ROASTS;
    use roasting_errors::{IDEA_TOO_LARGE_MESSAGE, MISSING_IDEA_MESSAGE, SERVER_FALLBACK_ROAST};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        roast_routes(AppContext::default())
    }

    async fn post_roast(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/roast")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_roasts_uber_idea() {
        let (status, body) = post_roast(app(), json!({ "idea": "Uber für Hunde" }).to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let roast = body["roast"].as_str().unwrap();
        assert!(!roast.is_empty());
        let uber = KEYWORD_ROASTS.iter().find(|(k, _)| *k == "uber").unwrap().1;
        assert!(uber.contains(&roast) || roast.contains("'Uber für Hunde'"), "{roast}");
    }

    #[tokio::test]
    async fn test_missing_idea_is_client_error() {
        let (status, body) = post_roast(app(), "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": MISSING_IDEA_MESSAGE }));
        assert_eq!(body["error"], "Keine Idee? Das ist schon der erste Fehler.");
    }

    #[tokio::test]
    async fn test_non_string_idea_is_client_error() {
        let (status, body) = post_roast(app(), json!({ "idea": 12345 }).to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": MISSING_IDEA_MESSAGE }));
    }

    #[tokio::test]
    async fn test_empty_idea_is_client_error() {
        let (status, body) = post_roast(app(), json!({ "idea": "" }).to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": MISSING_IDEA_MESSAGE }));
    }

    #[tokio::test]
    async fn test_whitespace_idea_is_roasted() {
        let (status, body) = post_roast(app(), json!({ "idea": "   " }).to_string()).await;
        assert_eq!(status, StatusCode::OK);
        let roast = body["roast"].as_str().unwrap();
        assert!(!roast.is_empty());
        assert!(roast.contains("''"), "{roast}");
    }

    #[tokio::test]
    async fn test_unparsable_body_is_client_error() {
        let (status, body) = post_roast(app(), "idea=Toaster").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": MISSING_IDEA_MESSAGE }));
    }

    #[tokio::test]
    async fn test_idea_is_trimmed() {
        let (status, body) =
            post_roast(app(), json!({ "idea": "  Kaffee für Katzen \n" }).to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["roast"].as_str().unwrap().contains("'Kaffee für Katzen'"));
    }

    #[tokio::test]
    async fn test_long_idea_is_shortened() {
        let idea: String = "Kaffee für Katzen ".repeat(5).chars().take(80).collect();
        let expected: String = idea.chars().take(50).chain("...".chars()).collect();

        let (status, body) = post_roast(app(), json!({ "idea": idea }).to_string()).await;
        assert_eq!(status, StatusCode::OK);
        let roast = body["roast"].as_str().unwrap();
        assert!(roast.contains(&expected), "{roast}");
        assert!(!roast.contains(&idea));
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected_in_voice() {
        let app = roast_routes(AppContext::new(64));
        let idea = "Blockchain ".repeat(20);
        let (status, body) = post_roast(app, json!({ "idea": idea }).to_string()).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body, json!({ "error": IDEA_TOO_LARGE_MESSAGE }));
    }

    async fn exploding_handler() -> StatusCode {
        panic!("selector exploded")
    }

    #[tokio::test]
    async fn test_panic_becomes_fallback_roast() {
        let app = Router::new()
            .route("/api/roast", post(exploding_handler))
            .layer(CatchPanicLayer::custom(roast_on_panic));
        let (status, body) = post_roast(app, "{}").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "roast": SERVER_FALLBACK_ROAST }));
        assert!(!body.to_string().contains("exploded"));
    }
}
