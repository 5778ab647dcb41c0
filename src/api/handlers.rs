// SPDX-License-Identifier: GPL-3.0-only
use axum::response::Html;
use axum::Json;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::{debug, info, warn};

use crate::api::error::{ApiError, BAD_API_KEY, CAFE_NOT_FOUND, LOCATION_NOT_FOUND, NO_CAFES};
use crate::store::{Cafe, CafeStore};
use crate::validation::AddCafeForm;
use crate::validation::form::MAX_TEXT_LENGTH;

const LANDING_PAGE: &str = include_str!("../../templates/index.html");

#[derive(Debug, Serialize, Deserialize)]
pub struct CafeResponse {
    pub cafe: Cafe,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CafeListResponse {
    pub cafes: Vec<Cafe>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessBody {
    pub success: String,
}

/// `{"response": {"success": "..."}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub response: SuccessBody,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            response: SuccessBody {
                success: message.into(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub loc: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriceQuery {
    pub new_price: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReportClosedQuery {
    pub api_key: Option<String>,
}

pub struct ApiHandlers {
    store: Arc<dyn CafeStore>,
    api_key: Option<String>,
}

impl ApiHandlers {
    pub fn new(store: Arc<dyn CafeStore>, api_key: Option<String>) -> Self {
        if api_key.is_none() {
            warn!("No api_key configured; every report-closed request will be refused");
        }
        Self { store, api_key }
    }

    /// Constant-time comparison against the configured secret
    fn is_authorized(&self, provided: Option<&str>) -> bool {
        match (self.api_key.as_deref(), provided) {
            (Some(expected), Some(given)) => expected.as_bytes().ct_eq(given.as_bytes()).into(),
            _ => false,
        }
    }
}

impl ApiHandlers {
    pub async fn home() -> Html<&'static str> {
        Html(LANDING_PAGE)
    }

    pub async fn health() -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok".to_string(),
        })
    }

    pub async fn list_cafes(&self) -> Result<Json<CafeListResponse>, ApiError> {
        let cafes = self.store.list_cafes().await?;
        debug!(count = cafes.len(), "Listed cafes");
        Ok(Json(CafeListResponse { cafes }))
    }

    pub async fn random_cafe(&self) -> Result<Json<CafeResponse>, ApiError> {
        let cafes = self.store.list_cafes().await?;
        let cafe = cafes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| ApiError::not_found(NO_CAFES))?;

        Ok(Json(CafeResponse { cafe }))
    }

    pub async fn search_cafe(&self, query: SearchQuery) -> Result<Json<CafeResponse>, ApiError> {
        let location = query
            .loc
            .ok_or_else(|| ApiError::BadRequest("Missing required query parameter: loc".to_string()))?;

        match self.store.find_by_location(&location).await? {
            Some(cafe) => Ok(Json(CafeResponse { cafe })),
            None => {
                debug!(location = %location, "No cafe at location");
                Err(ApiError::not_found(LOCATION_NOT_FOUND))
            }
        }
    }

    pub async fn add_cafe(&self, form: AddCafeForm) -> Result<Json<SuccessResponse>, ApiError> {
        let new_cafe = form.validate().map_err(|problems| {
            info!(problems = ?problems, "Rejected add cafe request");
            ApiError::BadRequest(problems.join("; "))
        })?;

        self.store.add_cafe(new_cafe).await?;

        Ok(Json(SuccessResponse::new("Successfully added the new cafe.")))
    }

    pub async fn update_price(
        &self,
        id: i64,
        query: UpdatePriceQuery,
    ) -> Result<Json<SuccessResponse>, ApiError> {
        // Stored as given; whitespace-only counts as missing
        let new_price = query
            .new_price
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| ApiError::BadRequest("Missing required query parameter: new_price".to_string()))?;
        if new_price.chars().count() > MAX_TEXT_LENGTH {
            return Err(ApiError::BadRequest(format!(
                "new_price exceeds maximum length of {} characters",
                MAX_TEXT_LENGTH
            )));
        }

        if self.store.update_price(id, &new_price).await? {
            Ok(Json(SuccessResponse::new("Successfully updated the price.")))
        } else {
            Err(ApiError::not_found(CAFE_NOT_FOUND))
        }
    }

    pub async fn report_closed(
        &self,
        id: i64,
        query: ReportClosedQuery,
    ) -> Result<Json<SuccessResponse>, ApiError> {
        if self.is_authorized(query.api_key.as_deref()) {
            // The delete itself is the existence check
            return if self.store.remove_cafe(id).await? {
                Ok(Json(SuccessResponse::new("Successfully deleted the cafe.")))
            } else {
                Err(ApiError::not_found(CAFE_NOT_FOUND))
            };
        }

        match self.store.get_cafe(id).await? {
            Some(_) => {
                warn!(cafe_id = id, "Refused report-closed with bad api_key");
                Err(ApiError::Forbidden(BAD_API_KEY.to_string()))
            }
            None => Err(ApiError::not_found(CAFE_NOT_FOUND)),
        }
    }
}
