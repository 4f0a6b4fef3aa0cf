// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The narrow slice of the Kubernetes API the operator needs.

use crate::constants::OPERATOR_NAME;
use crate::error::{PolicyError, Result};
use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use k8s_openapi::api::core::v1::{LimitRange, Namespace, ResourceQuota};
use kube::{api::PostParams, Api, Client, ResourceExt};
use kube_runtime::{watcher, WatchStreamExt};
use tracing::{debug, instrument};

pub type NamespaceEvents = BoxStream<'static, watcher::Result<watcher::Event<Namespace>>>;

/// Cluster operations used by the namespace policy
#[async_trait]
pub trait ClusterApi: Send + Sync + 'static {
    /// Create a LimitRange in the namespace named by its metadata
    async fn create_limit_range(&self, limit_range: &LimitRange) -> Result<()>;

    /// Create a ResourceQuota in the namespace named by its metadata
    async fn create_resource_quota(&self, quota: &ResourceQuota) -> Result<()>;

    /// Start a fresh list-then-watch subscription over all namespaces
    fn watch_namespaces(&self) -> NamespaceEvents;
}

/// [`ClusterApi`] backed by a live Kubernetes client
#[derive(Clone)]
pub struct KubeClusterApi {
    client: Client,
}

impl KubeClusterApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn post_params() -> PostParams {
        PostParams {
            field_manager: Some(OPERATOR_NAME.to_string()),
            ..Default::default()
        }
    }
}

fn target_namespace<K: ResourceExt>(obj: &K) -> Result<String> {
    obj.namespace().ok_or_else(|| {
        PolicyError::InvalidObject(format!("{} has no namespace set", obj.name_any()))
    })
}

#[async_trait]
impl ClusterApi for KubeClusterApi {
    #[instrument(skip(self, limit_range), fields(name = %limit_range.name_any()))]
    async fn create_limit_range(&self, limit_range: &LimitRange) -> Result<()> {
        let namespace = target_namespace(limit_range)?;
        let api: Api<LimitRange> = Api::namespaced(self.client.clone(), &namespace);

        api.create(&Self::post_params(), limit_range)
            .await
            .map_err(|e| PolicyError::LimitRangeCreation(e.to_string()))?;

        debug!("LimitRange {}/{} accepted", namespace, limit_range.name_any());
        Ok(())
    }

    #[instrument(skip(self, quota), fields(name = %quota.name_any()))]
    async fn create_resource_quota(&self, quota: &ResourceQuota) -> Result<()> {
        let namespace = target_namespace(quota)?;
        let api: Api<ResourceQuota> = Api::namespaced(self.client.clone(), &namespace);

        api.create(&Self::post_params(), quota)
            .await
            .map_err(|e| PolicyError::ResourceQuotaCreation(e.to_string()))?;

        debug!("ResourceQuota {}/{} accepted", namespace, quota.name_any());
        Ok(())
    }

    fn watch_namespaces(&self) -> NamespaceEvents {
        let namespaces: Api<Namespace> = Api::all(self.client.clone());

        watcher(namespaces, watcher::Config::default())
            .default_backoff()
            .boxed()
    }
}
