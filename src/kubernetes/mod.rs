// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes access: the cluster capability, the namespace informer, and namespace classification.

pub mod client;
pub mod informer;
pub mod namespaces;

pub use client::{ClusterApi, KubeClusterApi, NamespaceEvents};
pub use informer::{NamespaceHandler, NamespaceInformer};
pub use namespaces::is_admin_namespace;
