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

use staylens::{ControlPanel, Dataset, FigureService};
use std::sync::Arc;

/// Shared read-only state handed to every handler. The dataset is loaded
/// once at startup and never reloaded while running.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub controls: Arc<ControlPanel>,
    pub figures: FigureService,
}
impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let controls = Arc::new(ControlPanel::from_dataset(dataset.as_ref()));
        let figures = FigureService::spawn(dataset.clone());
        Self {
            dataset,
            controls,
            figures,
        }
    }
}
