// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Builders for the policy objects provisioned into every new namespace.

pub mod limit_range;
pub mod quantity;
pub mod resource_quota;

pub use limit_range::{build_limit_range, limit_range_name};
pub use quantity::memory_quantity;
pub use resource_quota::{build_resource_quota, resource_quota_name};

use crate::constants::{labels, OPERATOR_NAME};
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

/// Metadata shared by every object the operator creates
fn policy_metadata(name: String, namespace: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name),
        namespace: Some(namespace.to_string()),
        labels: Some(BTreeMap::from([(
            labels::MANAGED_BY.to_string(),
            OPERATOR_NAME.to_string(),
        )])),
        ..Default::default()
    }
}
