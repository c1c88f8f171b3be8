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

use crate::dataset::{Dataset, Selection};
use crate::error::{ChartError, ChartResult};
use crate::figure::{build_figure, FigureSpec};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

const REQUEST_BUFFER: usize = 32;

struct FigureRequest {
    selection: Selection,
    reply: oneshot::Sender<FigureSpec>,
}
/// Explicit channel form of the control-change callback: a single worker
/// task owns the dataset handle, receives selection tuples, and answers
/// each with a freshly built figure. Invocations are independent; no
/// previous figure is consulted.
#[derive(Debug, Clone)]
pub struct FigureService {
    tx: mpsc::Sender<FigureRequest>,
}
impl FigureService {
    pub fn spawn(dataset: Arc<Dataset>) -> Self {
        let (tx, mut rx) = mpsc::channel::<FigureRequest>(REQUEST_BUFFER);
        tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                let figure = build_figure(&dataset, &request.selection);
                debug!(
                    country = %request.selection.country,
                    year = request.selection.year,
                    traces = figure.data.len(),
                    "figure built"
                );
                if request.reply.send(figure).is_err() {
                    warn!("figure receiver dropped before reply");
                }
            }
            debug!("figure dispatcher stopped");
        });
        Self { tx }
    }
    pub async fn render(&self, selection: Selection) -> ChartResult<FigureSpec> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(FigureRequest { selection, reply })
            .await
            .map_err(|_| ChartError::DispatcherClosed)?;
        response.await.map_err(|_| ChartError::DispatcherClosed)
    }
}
impl std::fmt::Debug for FigureRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FigureRequest")
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
