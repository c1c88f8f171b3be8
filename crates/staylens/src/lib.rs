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

pub mod controls;
pub mod dataset;
pub mod dispatcher;
pub mod error;
pub mod figure;

pub use controls::{ControlPanel, StayOption, DEFAULT_COUNTRY};
pub use dataset::{
    BookingRecord, Dataset, DatasetId, DatasetMetadata, Selection, StayField, TablePreview,
    YearRange, PREVIEW_ROWS,
};
pub use dispatcher::FigureService;
pub use error::{ChartError, DashboardError, DataError, Result};
pub use figure::{build_figure, Axis, FigureSpec, Layout, Marker, Trace};

use std::path::Path;
use std::sync::Arc;

/// Convenience facade: one loaded dataset and everything derived from
/// it that the serving layer needs.
pub struct DashboardEngine {
    dataset: Arc<Dataset>,
    controls: ControlPanel,
}
impl DashboardEngine {
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let dataset = Arc::new(Dataset::load(path).map_err(DashboardError::Data)?);
        Ok(Self::from_dataset(dataset))
    }
    pub fn from_dataset(dataset: Arc<Dataset>) -> Self {
        let controls = ControlPanel::from_dataset(dataset.as_ref());
        Self { dataset, controls }
    }
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }
    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }
    pub fn figure(&self, selection: &Selection) -> FigureSpec {
        build_figure(&self.dataset, selection)
    }
    /// Spawns the channel-backed figure worker over this dataset.
    pub fn spawn_figure_service(&self) -> FigureService {
        FigureService::spawn(self.dataset.clone())
    }
}
