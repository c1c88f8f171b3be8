// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use crate::page;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use staylens::{ControlPanel, Selection, StayField};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub request_id: String,
    #[serde(skip)]
    status: StatusCode,
}
impl ApiError {
    fn bad_request(code: &str, message: String) -> Self {
        Self {
            code: code.to_string(),
            message,
            request_id: Uuid::new_v4().to_string(),
            status: StatusCode::BAD_REQUEST,
        }
    }
    fn internal(message: String) -> Self {
        Self {
            code: "FIGURE_UNAVAILABLE".to_string(),
            message,
            request_id: Uuid::new_v4().to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        let body = Json(self);
        (status, body).into_response()
    }
}
/// Query parameters mirror the original control ids. Absent values fall
/// back to the control defaults; malformed values are a 400. An unknown
/// country or out-of-range year is *not* an error — it degrades to an
/// empty figure inside the builder.
#[derive(Debug, Default, Deserialize)]
pub struct FigureQuery {
    pub country: Option<String>,
    pub stay_type: Option<String>,
    pub year: Option<String>,
}
impl FigureQuery {
    fn into_selection(self, controls: &ControlPanel) -> Result<Selection, ApiError> {
        let stay_field = match self.stay_type {
            Some(value) => StayField::from_str(&value)
                .map_err(|e| ApiError::bad_request("UNKNOWN_STAY_TYPE", e.to_string()))?,
            None => controls.default_stay_field,
        };
        let year = match self.year {
            Some(value) => value.parse::<i32>().map_err(|_| {
                ApiError::bad_request("INVALID_YEAR", format!("'{value}' is not a year"))
            })?,
            None => controls.default_year,
        };
        Ok(Selection {
            country: self.country.unwrap_or_else(|| controls.default_country.clone()),
            stay_field,
            year,
        })
    }
}
async fn handle_index(State(state): State<AppState>) -> Html<String> {
    Html(page::render_page(&state.controls, state.dataset.preview()))
}
async fn handle_figure(
    State(state): State<AppState>,
    Query(query): Query<FigureQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let selection = query.into_selection(&state.controls)?;
    let figure = state
        .figures
        .render(selection)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;
    Ok(Json(figure))
}
async fn handle_controls(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.controls.as_ref().clone())
}
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/api/figure", get(handle_figure))
        .route("/api/controls", get(handle_controls))
        .with_state(state)
}
