//! `POST /stats` handler.
//!
//! Pipeline: JSON body -> `StatsRequest` -> shape check -> `compute`.
//! Failures map to a stable client code plus a `{"error": ...}` body; the
//! shape check in particular answers with the fixed wire message.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use matstats_core::error::{ClientCode, MatStatsError};
use matstats_core::stats::{self, StatsRequest};

use crate::app_state::AppState;

pub async fn compute_stats(
    State(app): State<AppState>,
    payload: Result<Json<StatsRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let err = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                MatStatsError::PayloadTooLarge
            } else {
                MatStatsError::BadRequest(format!("invalid json body: {}", rejection.body_text()))
            };
            return reject(&app, "body", err);
        }
    };

    let (q, r) = match req.validate() {
        Ok(matrices) => matrices,
        Err(err) => return reject(&app, "shape", err),
    };

    let summary = stats::compute(&q, &r);
    tracing::debug!(
        q_rows = q.rows().len(),
        r_rows = r.rows().len(),
        is_diagonal = summary.is_diagonal,
        "stats computed"
    );

    app.metrics()
        .http_requests
        .inc(&[("route", "/stats"), ("status", "200")]);
    (StatusCode::OK, Json(summary)).into_response()
}

fn reject(app: &AppState, reason: &str, err: MatStatsError) -> Response {
    let status = status_for(err.client_code());
    tracing::warn!(code = err.client_code().as_str(), reason, %err, "stats request rejected");

    app.metrics().stats_rejections.inc(&[("reason", reason)]);
    app.metrics().http_requests.inc(&[
        ("route", "/stats"),
        ("status", status.as_str()),
    ]);

    (status, Json(json!({ "error": err.public_message() }))).into_response()
}

fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
        ClientCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
