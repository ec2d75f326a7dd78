//! Typed `POST /stats` request body.
//!
//! `Q` and `R` are captured as raw JSON values so that a missing or
//! mis-shaped field surfaces as a structured `BadRequest` with the fixed
//! wire message, instead of a serde rejection with an uncontrolled one.
//! Unknown top-level fields are tolerated.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{MatStatsError, Result};
use crate::stats::matrix::Matrix;

/// Wire message returned whenever the Q/R shape check fails.
pub const SHAPE_ERROR_MESSAGE: &str = "Q y R deben ser matrices";

/// Request body for the stats endpoint. Both matrices are required.
#[derive(Debug, Deserialize)]
pub struct StatsRequest {
    #[serde(rename = "Q", default)]
    pub q: Option<Value>,
    #[serde(rename = "R", default)]
    pub r: Option<Value>,
}

impl StatsRequest {
    /// Shape-check both fields into matrices.
    ///
    /// Each must be present and be an array of arrays of numbers. Rows may be
    /// empty or ragged; matrices may be entirely empty.
    pub fn validate(&self) -> Result<(Matrix, Matrix)> {
        let q = self.q.as_ref().and_then(Matrix::from_value);
        let r = self.r.as_ref().and_then(Matrix::from_value);
        match (q, r) {
            (Some(q), Some(r)) => Ok((q, r)),
            (q, r) => {
                tracing::debug!(
                    q_ok = q.is_some(),
                    r_ok = r.is_some(),
                    "stats request failed shape check"
                );
                Err(MatStatsError::BadRequest(SHAPE_ERROR_MESSAGE.into()))
            }
        }
    }
}
