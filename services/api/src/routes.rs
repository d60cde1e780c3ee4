use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sso_indicators::error::AppError;
use sso_indicators::indicators::domain::RawRecord;
use sso_indicators::indicators::evaluation::EvaluationConfig;
use sso_indicators::indicators::report::views::AnnualSummaryView;
use sso_indicators::indicators::report::AnnualInsights;
use sso_indicators::indicators::IndicatorService;

use crate::infra::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) records: Vec<RawRecord>,
    /// Goal and K overrides; defaults apply when omitted.
    #[serde(default)]
    pub(crate) config: Option<EvaluationConfig>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) summary: AnnualSummaryView,
    pub(crate) insights: AnnualInsights,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/indicators/assessment", post(assessment_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn assessment_endpoint(
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let AssessmentRequest { records, config } = payload;

    let service = IndicatorService::new(config.unwrap_or_default())?;
    let summary = service.assess_year(records);

    Ok(Json(AssessmentResponse {
        insights: summary.insights(),
        summary: summary.view(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_batch;
    use sso_indicators::indicators::evaluation::GoalSet;

    #[tokio::test]
    async fn assessment_endpoint_returns_the_full_year() {
        let request = AssessmentRequest {
            records: demo_batch(2025),
            config: None,
        };

        let Json(body) = assessment_endpoint(Json(request))
            .await
            .expect("assessment builds");

        assert_eq!(body.summary.periods.len(), 12);
        assert_eq!(body.summary.quarters.len(), 4);
        assert_eq!(body.insights.periods_assessed, 12);
        assert_eq!(body.summary.periods[0].results.len(), 11);
    }

    #[tokio::test]
    async fn assessment_endpoint_applies_config_overrides() {
        let request = AssessmentRequest {
            records: demo_batch(2025),
            config: Some(EvaluationConfig {
                goals: GoalSet {
                    management: 100.0,
                    ..GoalSet::default()
                },
                ..EvaluationConfig::default()
            }),
        };

        let Json(body) = assessment_endpoint(Json(request))
            .await
            .expect("assessment builds");

        assert_eq!(body.insights.periods_compliant, 0);
    }

    #[tokio::test]
    async fn assessment_endpoint_rejects_invalid_configuration() {
        let request = AssessmentRequest {
            records: demo_batch(2025),
            config: Some(EvaluationConfig {
                k_factor: -5.0,
                ..EvaluationConfig::default()
            }),
        };

        let error = assessment_endpoint(Json(request))
            .await
            .expect_err("negative K must be rejected");
        assert!(matches!(error, AppError::Configuration(_)));
    }
}
