use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::{evaluate, FarmReport, LandPolicy};
use crate::config::ScenarioConfig;
use crate::error::FarmError;
use crate::models::{field_specs, out_of_range_fields, FarmParameters, FieldIssue, GreenhouseProduct};

// ---------------------------------------------------------------------------
// Error wrapper
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
    pub details: String,
}

#[derive(Debug)]
pub(crate) struct WebError(FarmError);

impl From<FarmError> for WebError {
    fn from(e: FarmError) -> Self {
        WebError(e)
    }
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_type) = match &self.0 {
            e if e.is_configuration_error() => {
                (actix_web::http::StatusCode::BAD_REQUEST, "Bad Request")
            }
            FarmError::InsufficientLand { .. } => (
                actix_web::http::StatusCode::UNPROCESSABLE_ENTITY,
                "Unprocessable Entity",
            ),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            ),
        };
        HttpResponse::build(status).json(ErrorBody {
            error: error_type.to_string(),
            details: self.0.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductInfo {
    pub product: GreenhouseProduct,
    pub name: String,
    pub yield_t_per_ha: f64,
    pub price_usd_per_kg: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct EvaluateResponse {
    pub name: String,
    pub land_policy: LandPolicy,
    /// Parameters after preset resolution
    pub parameters: FarmParameters,
    pub report: FarmReport,
    pub field_warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Default scenario, ready to edit and post back to `/api/evaluate`.
pub async fn defaults() -> HttpResponse {
    HttpResponse::Ok().json(ScenarioConfig::default())
}

pub async fn products() -> HttpResponse {
    let catalog: Vec<ProductInfo> = GreenhouseProduct::ALL
        .iter()
        .map(|&p| ProductInfo {
            product: p,
            name: p.to_string(),
            yield_t_per_ha: p.default_yield_t_per_ha(),
            price_usd_per_kg: p.default_price_usd_per_kg(),
        })
        .collect();
    HttpResponse::Ok().json(catalog)
}

pub async fn fields() -> HttpResponse {
    HttpResponse::Ok().json(field_specs())
}

pub async fn evaluate_scenario(
    body: web::Json<ScenarioConfig>,
) -> Result<HttpResponse, WebError> {
    let scenario = body.into_inner();
    let params = scenario.resolve()?;

    let issues: Vec<FieldIssue> = out_of_range_fields(&params);
    for issue in &issues {
        warn!(scenario = %scenario.name, "{issue}");
    }

    let report = evaluate(&params, scenario.land_policy)?;
    debug!(
        scenario = %scenario.name,
        profit = report.annual_profit,
        "scenario evaluated"
    );

    Ok(HttpResponse::Ok().json(EvaluateResponse {
        name: scenario.name,
        land_policy: scenario.land_policy,
        parameters: params,
        report,
        field_warnings: issues.iter().map(|i| i.to_string()).collect(),
    }))
}
