// src/handlers/banks.rs
use crate::services::store::BankStore;
use log::info;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

pub async fn get_bank_data(store: Arc<BankStore>) -> Result<Json, Rejection> {
    info!("Handling request to get bank data");
    let data = store.get_data().await;
    Ok(warp::reply::json(&data))
}
