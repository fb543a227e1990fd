// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decimal rounding for display-stable measurements
//!
//! Every derived quantity in the room model passes through these helpers,
//! so equal inputs produce bit-equal measurements and model invariants can
//! be checked with exact equality.

/// Round `value` to `decimals` decimal places, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round to two decimal places, the model-wide measurement precision.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}
