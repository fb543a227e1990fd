// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for capture-boundary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the scanning-capability boundary
///
/// Only this boundary can fail; the room model and aggregation engines
/// never error for well-typed input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Scanning is not supported on this device: {reason}")]
    Unsupported { reason: String },

    #[error("No scan results available; complete a scan before requesting results")]
    NoResults,

    #[error("A scan session is already in progress")]
    SessionActive,
}
