// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace controller - provisions a LimitRange and ResourceQuota into every new namespace.

use crate::config::Config;
use crate::kubernetes::{is_admin_namespace, ClusterApi, NamespaceHandler, NamespaceInformer};
use crate::policy::{build_limit_range, build_resource_quota};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Namespace;
use kube::ResourceExt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument};

/// Applies the default namespace policy
pub struct NamespacePolicy<C: ClusterApi> {
    api: Arc<C>,
}

impl<C: ClusterApi> NamespacePolicy<C> {
    pub fn new(api: Arc<C>) -> Self {
        Self { api }
    }

    /// Create the policy objects for a freshly added namespace.
    ///
    /// Both creations are attempted independently and failures are only logged.
    #[instrument(skip(self, namespace), fields(namespace = %namespace.name_any()))]
    pub async fn apply(&self, namespace: &Namespace) {
        let name = namespace.name_any();

        if is_admin_namespace(&name) {
            info!("Skip admin namespace: {}", name);
            return;
        }

        match self.api.create_limit_range(&build_limit_range(&name)).await {
            Ok(()) => info!("LimitRange for namespace {} created", name),
            Err(e) => error!("Namespace {}: {}", name, e),
        }

        match self.api.create_resource_quota(&build_resource_quota(&name)).await {
            Ok(()) => info!("ResourceQuota for namespace {} created", name),
            Err(e) => error!("Namespace {}: {}", name, e),
        }
    }
}

#[async_trait]
impl<C: ClusterApi> NamespaceHandler for NamespacePolicy<C> {
    async fn on_add(&self, namespace: &Namespace) {
        self.apply(namespace).await;
    }
}

pub struct NamespaceController<C: ClusterApi> {
    informer: NamespaceInformer<C>,
}

impl<C: ClusterApi> NamespaceController<C> {
    pub fn new(api: C, config: &Config) -> Self {
        let api = Arc::new(api);
        let policy = Arc::new(NamespacePolicy::new(api.clone()));
        let informer = NamespaceInformer::new(api, config.resync_interval).on_add(policy);

        Self { informer }
    }

    /// Run the informer on its own task until `stop` is cancelled, then wait for it to finish
    pub async fn run(self, stop: CancellationToken) -> anyhow::Result<()> {
        let informer = tokio::spawn(self.informer.run(stop.child_token()));

        stop.cancelled().await;
        info!("Stop signal received, shutting down namespace controller");

        informer.await?;
        Ok(())
    }
}
