// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace classification

use crate::constants::ADMIN_NAMESPACE_PATTERN;
use regex::Regex;
use std::sync::LazyLock;

static ADMIN_NAMESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ADMIN_NAMESPACE_PATTERN).expect("admin namespace pattern is a valid regex")
});

/// Whether a namespace is reserved for cluster-internal use.
///
/// The pattern is unanchored: any name containing `kube-` is administrative.
pub fn is_admin_namespace(name: &str) -> bool {
    ADMIN_NAMESPACE.is_match(name)
}
