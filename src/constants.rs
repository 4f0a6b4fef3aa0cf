// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The operator name, used as field manager on every create call
pub const OPERATOR_NAME: &str = "namespace-policy";

/// Namespaces whose name matches this pattern are left untouched (kube-system, kube-public, ...)
pub const ADMIN_NAMESPACE_PATTERN: &str = "kube-.*";

/// Label keys set on every object the operator creates
pub mod labels {
    pub const MANAGED_BY: &str = "app.kubernetes.io/managed-by";
}

/// LimitRange defaults
pub mod limit_range {
    pub const NAME_PREFIX: &str = "lr-auto-";
    pub const LIMIT_TYPE: &str = "Container";
    pub const MEMORY: &str = "memory";
    /// 128 MiB, applied as both default and default request
    pub const DEFAULT_MEMORY_BYTES: u64 = 128 * 1024 * 1024;
}

/// ResourceQuota defaults
pub mod resource_quota {
    pub const NAME_PREFIX: &str = "rq-auto-";
    pub const LOAD_BALANCERS: &str = "services.loadbalancers";
    pub const NODE_PORTS: &str = "services.nodeports";
}

/// Namespace watch configuration
pub mod watch {
    /// Default interval between full relists of the namespace set
    pub const RESYNC_INTERVAL_SECS: u64 = 180;
}
