// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

const BINARY_SUFFIXES: [&str; 6] = ["Ki", "Mi", "Gi", "Ti", "Pi", "Ei"];

/// Render a byte count as a canonical binary-SI quantity.
///
/// The largest suffix that divides the value exactly wins, so 134217728 becomes `128Mi`
/// and 1536 stays `1536`.
pub fn memory_quantity(bytes: u64) -> Quantity {
    let mut value = bytes;
    let mut suffix = "";

    for candidate in BINARY_SUFFIXES {
        if value == 0 || value % 1024 != 0 {
            break;
        }
        value /= 1024;
        suffix = candidate;
    }

    Quantity(format!("{}{}", value, suffix))
}
