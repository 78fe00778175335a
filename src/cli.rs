// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;

use crate::common::config::AppConfig;
use crate::error::{Error, Result};
use crate::units::UnitRequest;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Host names to report on, as known to the inventory service.
    #[arg(required_unless_present = "hostfile")]
    pub hosts: Vec<String>,

    /// A file containing newline-separated host names to report on.
    #[arg(long)]
    pub hostfile: Option<String>,

    /// Display unit for sizes: MB, GB, TB, or HUMAN (case-insensitive).
    /// Sizes are reported in MB when omitted.
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Auto-scale each size to the largest unit that keeps it >= 1.
    /// Shorthand for --unit HUMAN; wins when both are given.
    #[arg(long)]
    pub human: bool,

    /// Base URL of the inventory service.
    #[arg(long, default_value = AppConfig::DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl Cli {
    /// Resolve the requested display unit.
    ///
    /// `None` means no unit was requested and sizes pass through in MB.
    /// An unrecognized unit string is fatal for the whole invocation.
    pub fn unit_request(&self) -> Result<Option<UnitRequest>> {
        if self.human {
            return Ok(Some(UnitRequest::Auto));
        }
        self.unit.as_deref().map(str::parse).transpose()
    }

    /// Collect the hosts to report on: positional arguments first, then the
    /// hostfile (blank lines and `#` comments skipped), in order.
    pub fn resolve_hosts(&self) -> Result<Vec<String>> {
        let mut hosts = self.hosts.clone();

        if let Some(file_path) = &self.hostfile {
            let content = std::fs::read_to_string(file_path)?;
            hosts.extend(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('#'))
                    .map(String::from),
            );
        }

        if hosts.is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "no hosts to report on",
            )));
        }

        Ok(hosts)
    }
}
