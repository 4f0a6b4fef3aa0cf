// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace subscription that turns the raw watch stream into add notifications.

use crate::kubernetes::client::ClusterApi;
use async_trait::async_trait;
use futures::StreamExt;
use k8s_openapi::api::core::v1::Namespace;
use kube::ResourceExt;
use kube_runtime::watcher::Event;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Callback invoked for every namespace the informer sees for the first time
#[async_trait]
pub trait NamespaceHandler: Send + Sync {
    async fn on_add(&self, namespace: &Namespace);
}

/// List-and-watch subscription over all namespaces with a periodic full resync.
///
/// A namespace counts as added when its name is not yet known: on its first
/// `Apply`, on a relist after a `Delete`, or when a resync turns up a
/// namespace the watch missed. The handler is awaited inline, so adds are
/// delivered one at a time in stream order.
pub struct NamespaceInformer<C: ClusterApi> {
    api: Arc<C>,
    resync_interval: Duration,
    handler: Option<Arc<dyn NamespaceHandler>>,
    known: HashSet<String>,
    relisted: Option<HashSet<String>>,
}

impl<C: ClusterApi> NamespaceInformer<C> {
    pub fn new(api: Arc<C>, resync_interval: Duration) -> Self {
        Self {
            api,
            resync_interval,
            handler: None,
            known: HashSet::new(),
            relisted: None,
        }
    }

    /// Register the add handler, replacing any previous one
    pub fn on_add(mut self, handler: Arc<dyn NamespaceHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    pub async fn run(mut self, stop: CancellationToken) {
        let mut events = self.api.watch_namespaces();
        let mut resync = interval_at(Instant::now() + self.resync_interval, self.resync_interval);
        resync.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "Namespace informer started, resync every {}s",
            self.resync_interval.as_secs()
        );

        loop {
            tokio::select! {
                biased;
                _ = stop.cancelled() => break,
                _ = resync.tick() => {
                    debug!("Resyncing namespaces");
                    events = self.api.watch_namespaces();
                }
                next = events.next() => match next {
                    Some(Ok(event)) => self.handle_event(event).await,
                    Some(Err(e)) => warn!("Namespace watch error: {}", e),
                    None => {
                        warn!("Namespace watch ended, waiting for next resync");
                        events = futures::stream::pending().boxed();
                    }
                },
            }
        }

        info!("Namespace informer stopped");
    }

    async fn handle_event(&mut self, event: Event<Namespace>) {
        match event {
            Event::Init => {
                self.relisted = Some(HashSet::new());
            }
            Event::InitApply(namespace) => {
                if let Some(relisted) = self.relisted.as_mut() {
                    relisted.insert(namespace.name_any());
                }
                self.observe(namespace).await;
            }
            Event::InitDone => {
                if let Some(relisted) = self.relisted.take() {
                    // Forget namespaces deleted while the watch was down
                    self.known.retain(|name| relisted.contains(name));
                }
            }
            Event::Apply(namespace) => self.observe(namespace).await,
            Event::Delete(namespace) => {
                self.known.remove(&namespace.name_any());
            }
        }
    }

    async fn observe(&mut self, namespace: Namespace) {
        if !self.known.insert(namespace.name_any()) {
            return;
        }
        if let Some(handler) = &self.handler {
            handler.on_add(&namespace).await;
        }
    }
}
