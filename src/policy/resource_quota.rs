// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::policy_metadata;
use crate::constants::resource_quota::{LOAD_BALANCERS, NAME_PREFIX, NODE_PORTS};
use k8s_openapi::api::core::v1::{ResourceQuota, ResourceQuotaSpec};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use std::collections::BTreeMap;

/// Deterministic ResourceQuota name for a namespace
pub fn resource_quota_name(namespace: &str) -> String {
    format!("{}{}", NAME_PREFIX, namespace)
}

/// Build the ResourceQuota forbidding LoadBalancer and NodePort services in a namespace
pub fn build_resource_quota(namespace: &str) -> ResourceQuota {
    let hard = BTreeMap::from([
        (LOAD_BALANCERS.to_string(), Quantity("0".to_string())),
        (NODE_PORTS.to_string(), Quantity("0".to_string())),
    ]);

    ResourceQuota {
        metadata: policy_metadata(resource_quota_name(namespace), namespace),
        spec: Some(ResourceQuotaSpec {
            hard: Some(hard),
            ..Default::default()
        }),
        ..Default::default()
    }
}
