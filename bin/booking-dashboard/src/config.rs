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

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DATA_PATH: &str = "hotel_bookings.csv";

/// Server settings resolved from CLI flags first, `BD_*` env vars
/// second, baked-in defaults last.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub http_addr: SocketAddr,
    pub data_path: PathBuf,
}
impl ServerConfig {
    pub fn resolve(addr: Option<String>, data: Option<PathBuf>) -> anyhow::Result<Self> {
        let addr_text = addr
            .or_else(|| std::env::var("BD_HTTP_ADDR").ok())
            .unwrap_or_else(|| DEFAULT_HTTP_ADDR.into());
        let http_addr: SocketAddr = addr_text
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid listen address '{addr_text}': {e}"))?;
        let data_path = data
            .or_else(|| std::env::var("BD_DATA_PATH").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        Ok(Self {
            http_addr,
            data_path,
        })
    }
}
