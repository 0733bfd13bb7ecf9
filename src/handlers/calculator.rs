// src/handlers/calculator.rs
use crate::models::CalculationRequest;
use crate::services::calculator::calculate_profit;
use crate::services::store::BankStore;
use log::{info, warn};
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;

/// Validates the request and resolves the certificate before handing
/// off to the pure calculation; the calculator itself checks nothing.
pub async fn calculate(
    request: CalculationRequest,
    store: Arc<BankStore>,
) -> Result<Json, Rejection> {
    info!(
        "Handling calculation request for certificate {}",
        request.certificate_id
    );

    if request.amount <= 0.0 {
        warn!("Rejecting non-positive amount: {}", request.amount);
        return Err(warp::reject::custom(ApiError::bad_request(
            "amount must be positive",
        )));
    }

    let certificate = store
        .find_certificate(&request.certificate_id)
        .await
        .ok_or_else(|| {
            warn!("Unknown certificate id: {}", request.certificate_id);
            warp::reject::custom(ApiError::not_found(format!(
                "certificate {} not found",
                request.certificate_id
            )))
        })?;

    if request.amount < certificate.min_amount {
        info!(
            "Amount {} is below the certificate minimum {}, calculating anyway",
            request.amount, certificate.min_amount
        );
    }

    let result = calculate_profit(&certificate, request.amount);
    Ok(warp::reply::json(&result))
}
