// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The scanning-capability seam
//!
//! Everything upstream of ingestion talks to a [`RoomScanner`], never to
//! a concrete capture implementation. The simulated scanner substitutes
//! for the native one wherever LiDAR hardware is unavailable.

use chrono::Utc;

use crate::error::{Error, Result};
use crate::types::{ScanEvent, ScanResultBundle, SessionAck, SupportInfo};

/// The opaque room-scanning capability.
///
/// Implementations are expected to be single-session: one scan runs at a
/// time, and results refer to the most recently completed session.
pub trait RoomScanner {
    /// Probe whether scanning is available on this device.
    fn is_supported(&self) -> SupportInfo;

    /// Begin a capture session.
    fn start_scan(&mut self) -> Result<SessionAck>;

    /// End the capture session.
    ///
    /// Stopping before completion discards any partial state; no bundle
    /// is produced and no partial room can be built from it.
    fn stop_scan(&mut self) -> Result<SessionAck>;

    /// Next pending session event, if any.
    ///
    /// The completion event is delivered at most once; after it has been
    /// taken the session is quiescent.
    fn poll_event(&mut self) -> Option<ScanEvent>;

    /// Measurement bundle for the finished session.
    ///
    /// Calling this before a scan completed is a precondition violation
    /// and yields [`Error::NoResults`], never a defaulted bundle.
    fn results(&self) -> Result<ScanResultBundle>;
}

/// Capability stub for platforms without LiDAR capture hardware.
///
/// The probe reports `supported: false` with a reason; session calls
/// fail with [`Error::Unsupported`].
#[derive(Debug, Clone, Default)]
pub struct UnsupportedScanner;

impl UnsupportedScanner {
    const REASON: &'static str = "room capture requires a LiDAR-equipped device";
}

impl RoomScanner for UnsupportedScanner {
    fn is_supported(&self) -> SupportInfo {
        SupportInfo {
            supported: false,
            version: "1.0".to_string(),
            reason: Some(Self::REASON.to_string()),
        }
    }

    fn start_scan(&mut self) -> Result<SessionAck> {
        Err(Error::Unsupported {
            reason: Self::REASON.to_string(),
        })
    }

    fn stop_scan(&mut self) -> Result<SessionAck> {
        Err(Error::Unsupported {
            reason: Self::REASON.to_string(),
        })
    }

    fn poll_event(&mut self) -> Option<ScanEvent> {
        None
    }

    fn results(&self) -> Result<ScanResultBundle> {
        Err(Error::NoResults)
    }
}

pub(crate) fn ack(status: crate::types::ScanStatus) -> SessionAck {
    SessionAck {
        status,
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_scanner_surfaces_structured_result() {
        let mut scanner = UnsupportedScanner;

        let info = scanner.is_supported();
        assert!(!info.supported);
        assert!(info.reason.is_some());

        assert!(matches!(
            scanner.start_scan(),
            Err(Error::Unsupported { .. })
        ));
        assert!(matches!(scanner.results(), Err(Error::NoResults)));
        assert!(scanner.poll_event().is_none());
    }
}
