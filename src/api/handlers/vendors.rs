//! Handlers for the vendor resource.
//!
//! All four operations share the `/api/vendors` path and are selected by
//! HTTP method. Update and delete take the vendor id in the JSON body.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::message::MessageResponse;
use crate::api::dto::vendor::{
    CreateVendorRequest, DeleteVendorRequest, UpdateVendorRequest, VendorItem, VendorResponse,
};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all vendors, oldest first.
///
/// # Endpoint
///
/// `GET /api/vendors`
///
/// Returns a bare JSON array; there is no pagination.
pub async fn vendor_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<VendorItem>>, AppError> {
    let vendors = state.vendor_service.list_vendors().await?;

    Ok(Json(vendors.into_iter().map(VendorItem::from).collect()))
}

/// Creates a vendor.
///
/// # Endpoint
///
/// `POST /api/vendors`
///
/// # Errors
///
/// Returns 400 if `name`, `contact` or `services` is missing or empty.
pub async fn create_vendor_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateVendorRequest>,
) -> Result<(StatusCode, Json<VendorResponse>), AppError> {
    let fields = payload.into_fields()?;

    let vendor = state.vendor_service.create_vendor(fields).await?;

    Ok((
        StatusCode::CREATED,
        Json(VendorResponse {
            message: "Vendor created".to_string(),
            vendor: vendor.into(),
        }),
    ))
}

/// Replaces a vendor's name, contact and services.
///
/// # Endpoint
///
/// `PUT /api/vendors`
///
/// # Errors
///
/// Returns 400 if any of `id`, `name`, `contact`, `services` is missing.
/// Returns 404 if no vendor has the given id.
pub async fn update_vendor_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateVendorRequest>,
) -> Result<Json<VendorResponse>, AppError> {
    let (id, fields) = payload.into_parts()?;

    let vendor = state.vendor_service.update_vendor(id, fields).await?;

    Ok(Json(VendorResponse {
        message: "Vendor updated".to_string(),
        vendor: vendor.into(),
    }))
}

/// Deletes a vendor.
///
/// # Endpoint
///
/// `DELETE /api/vendors`
///
/// # Errors
///
/// Returns 400 if `id` is missing.
/// Returns 404 if no vendor has the given id.
pub async fn delete_vendor_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<DeleteVendorRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = payload.into_id()?;

    state.vendor_service.delete_vendor(id).await?;

    Ok(Json(MessageResponse::new("Vendor deleted")))
}
