// src/routes.rs
use std::convert::Infallible;
use std::sync::Arc;
use warp::reject::Rejection;
use warp::{Filter, Reply};

use crate::handlers::error::ApiError;
use crate::handlers::{admin, banks::get_bank_data, calculator::calculate};
use crate::services::auth::AdminAuth;
use crate::services::store::BankStore;
use log::{info, warn};

// Add recovery handling for our custom errors
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = warp::http::StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = api_error.status();
        message = api_error.message.clone();
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        code = warp::http::StatusCode::BAD_REQUEST;
        message = "Invalid request body".to_string();
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = warp::http::StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed".to_string();
    } else {
        code = warp::http::StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

/// Rejects the request unless it carries a valid admin bearer token.
fn require_admin(auth: Arc<AdminAuth>) -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::header::optional::<String>("authorization")
        .and(warp::any().map(move || auth.clone()))
        .and_then(|header: Option<String>, auth: Arc<AdminAuth>| async move {
            let token = header.as_deref().and_then(|h| h.strip_prefix("Bearer "));
            match token {
                Some(token) if auth.verify(token) => Ok(()),
                _ => {
                    warn!("Rejected admin request without a valid token");
                    Err(warp::reject::custom(ApiError::unauthorized(
                        "missing or invalid admin token",
                    )))
                }
            }
        })
        .untuple_one()
}

pub fn routes(
    store: Arc<BankStore>,
    auth: Arc<AdminAuth>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let store_filter = warp::any().map(move || store.clone());
    let admin_gate = require_admin(auth.clone());
    let auth_filter = warp::any().map(move || auth.clone());

    let bank_data_route = warp::path!("api" / "v1" / "bank-data")
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_bank_data);

    let calculate_route = warp::path!("api" / "v1" / "calculate")
        .and(warp::post())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(calculate);

    let login_route = warp::path!("api" / "v1" / "admin" / "login")
        .and(warp::post())
        .and(warp::body::json())
        .and(auth_filter.clone())
        .and_then(admin::login);

    let save_data_route = warp::path!("api" / "v1" / "admin" / "save-data")
        .and(warp::post())
        .and(admin_gate.clone())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(admin::save_data);

    let export_route = warp::path!("api" / "v1" / "admin" / "export")
        .and(warp::get())
        .and(admin_gate.clone())
        .and(store_filter.clone())
        .and_then(admin::export_data);

    let add_bank_route = warp::path!("api" / "v1" / "admin" / "banks")
        .and(warp::post())
        .and(admin_gate.clone())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(admin::add_bank);

    let update_bank_route = warp::path!("api" / "v1" / "admin" / "banks" / String)
        .and(warp::put())
        .and(admin_gate.clone())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(admin::update_bank);

    let delete_bank_route = warp::path!("api" / "v1" / "admin" / "banks" / String)
        .and(warp::delete())
        .and(admin_gate.clone())
        .and(store_filter.clone())
        .and_then(admin::delete_bank);

    let add_certificate_route =
        warp::path!("api" / "v1" / "admin" / "banks" / String / "certificates")
            .and(warp::post())
            .and(admin_gate.clone())
            .and(warp::body::json())
            .and(store_filter.clone())
            .and_then(admin::add_certificate);

    let update_certificate_route =
        warp::path!("api" / "v1" / "admin" / "banks" / String / "certificates" / String)
            .and(warp::put())
            .and(admin_gate.clone())
            .and(warp::body::json())
            .and(store_filter.clone())
            .and_then(admin::update_certificate);

    let delete_certificate_route =
        warp::path!("api" / "v1" / "admin" / "banks" / String / "certificates" / String)
            .and(warp::delete())
            .and(admin_gate.clone())
            .and(store_filter.clone())
            .and_then(admin::delete_certificate);

    info!("All routes configured successfully.");

    bank_data_route
        .or(calculate_route)
        .or(login_route)
        .or(save_data_route)
        .or(export_route)
        .or(add_bank_route)
        .or(update_bank_route)
        .or(delete_bank_route)
        .or(add_certificate_route)
        .or(update_certificate_route)
        .or(delete_certificate_route)
        .recover(handle_rejection)
}
