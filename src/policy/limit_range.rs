// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::{memory_quantity, policy_metadata};
use crate::constants::limit_range::{DEFAULT_MEMORY_BYTES, LIMIT_TYPE, MEMORY, NAME_PREFIX};
use k8s_openapi::api::core::v1::{LimitRange, LimitRangeItem, LimitRangeSpec};
use std::collections::BTreeMap;

/// Deterministic LimitRange name for a namespace
pub fn limit_range_name(namespace: &str) -> String {
    format!("{}{}", NAME_PREFIX, namespace)
}

/// Build the default container memory LimitRange for a namespace
pub fn build_limit_range(namespace: &str) -> LimitRange {
    let memory = BTreeMap::from([(MEMORY.to_string(), memory_quantity(DEFAULT_MEMORY_BYTES))]);

    LimitRange {
        metadata: policy_metadata(limit_range_name(namespace), namespace),
        spec: Some(LimitRangeSpec {
            limits: vec![LimitRangeItem {
                type_: LIMIT_TYPE.to_string(),
                default: Some(memory.clone()),
                default_request: Some(memory),
                ..Default::default()
            }],
        }),
    }
}
