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

//! Unified error types for the ds-usage library.
//!
//! Errors are never retried or suppressed here: unit validation fails fast
//! at the argument boundary, and inventory-service failures propagate to
//! the caller unchanged.

use thiserror::Error;

/// The main error type for ds-usage operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested display unit is not one of MB, GB, TB, or HUMAN.
    ///
    /// Carries the offending value. This is fatal for the invocation: it is
    /// raised while resolving arguments, before any host is queried.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Transport or body-decoding failure talking to the inventory service.
    ///
    /// Connectivity, permission, and stale-session failures from the
    /// underlying client all surface here.
    #[error(transparent)]
    Api(#[from] reqwest::Error),

    /// The inventory service answered with a non-success HTTP status.
    #[error("inventory request to {url} failed with HTTP {status}")]
    Status { url: String, status: u16 },

    /// The inventory endpoint could not be parsed as a URL.
    #[error("invalid inventory endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// An I/O error occurred.
    ///
    /// This wraps standard I/O errors from hostfile reading and report
    /// output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for ds-usage operations.
pub type Result<T> = std::result::Result<T, Error>;
