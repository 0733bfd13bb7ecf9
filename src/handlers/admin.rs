// src/handlers/admin.rs
use crate::models::{Bank, BankData, Certificate, LoginRequest, LoginResponse};
use crate::services::auth::AdminAuth;
use crate::services::store::{BankStore, StoreError};
use log::{error, info, warn};
use serde_json::json;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;

fn reject_store(e: StoreError) -> Rejection {
    error!("Store operation failed: {}", e);
    match e {
        StoreError::NotFound(what) => {
            warp::reject::custom(ApiError::not_found(format!("{} not found", what)))
        }
        other => warp::reject::custom(ApiError::internal(other.to_string())),
    }
}

pub async fn login(request: LoginRequest, auth: Arc<AdminAuth>) -> Result<Json, Rejection> {
    match auth.login(&request.password) {
        Some(token) => {
            info!("Admin login succeeded");
            Ok(warp::reply::json(&LoginResponse { token }))
        }
        None => {
            warn!("Admin login rejected: wrong password");
            Err(warp::reject::custom(ApiError::unauthorized(
                "invalid password",
            )))
        }
    }
}

/// Wholesale catalog replacement; also serves the import flow.
pub async fn save_data(data: BankData, store: Arc<BankStore>) -> Result<Json, Rejection> {
    info!("Replacing catalog with {} banks", data.banks.len());
    store.replace(data).await.map_err(reject_store)?;
    Ok(warp::reply::json(&json!({ "success": true })))
}

pub async fn export_data(store: Arc<BankStore>) -> Result<Json, Rejection> {
    info!("Handling catalog export");
    let data = store.get_data().await;
    Ok(warp::reply::json(&data))
}

pub async fn add_bank(bank: Bank, store: Arc<BankStore>) -> Result<impl warp::Reply, Rejection> {
    let bank = store.add_bank(bank).await.map_err(reject_store)?;
    info!("Added bank {}", bank.id);
    Ok(warp::reply::with_status(
        warp::reply::json(&bank),
        StatusCode::CREATED,
    ))
}

pub async fn update_bank(
    bank_id: String,
    bank: Bank,
    store: Arc<BankStore>,
) -> Result<Json, Rejection> {
    let bank = store.update_bank(&bank_id, bank).await.map_err(reject_store)?;
    info!("Updated bank {}", bank.id);
    Ok(warp::reply::json(&bank))
}

pub async fn delete_bank(bank_id: String, store: Arc<BankStore>) -> Result<Json, Rejection> {
    store.delete_bank(&bank_id).await.map_err(reject_store)?;
    info!("Deleted bank {}", bank_id);
    Ok(warp::reply::json(&json!({ "success": true })))
}

pub async fn add_certificate(
    bank_id: String,
    cert: Certificate,
    store: Arc<BankStore>,
) -> Result<impl warp::Reply, Rejection> {
    let cert = store
        .add_certificate(&bank_id, cert)
        .await
        .map_err(reject_store)?;
    info!("Added certificate {} to bank {}", cert.id, bank_id);
    Ok(warp::reply::with_status(
        warp::reply::json(&cert),
        StatusCode::CREATED,
    ))
}

pub async fn update_certificate(
    bank_id: String,
    cert_id: String,
    cert: Certificate,
    store: Arc<BankStore>,
) -> Result<Json, Rejection> {
    let cert = store
        .update_certificate(&bank_id, &cert_id, cert)
        .await
        .map_err(reject_store)?;
    info!("Updated certificate {} in bank {}", cert.id, bank_id);
    Ok(warp::reply::json(&cert))
}

pub async fn delete_certificate(
    bank_id: String,
    cert_id: String,
    store: Arc<BankStore>,
) -> Result<Json, Rejection> {
    store
        .delete_certificate(&bank_id, &cert_id)
        .await
        .map_err(reject_store)?;
    info!("Deleted certificate {} from bank {}", cert_id, bank_id);
    Ok(warp::reply::json(&json!({ "success": true })))
}
