// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking the Kubernetes API.

use crate::error::{PolicyError, Result};
use crate::kubernetes::{ClusterApi, NamespaceEvents, NamespaceHandler};
use async_trait::async_trait;
use futures::StreamExt;
use http::{Request, Response};
use k8s_openapi::api::core::v1::{LimitRange, Namespace, ResourceQuota};
use kube::api::ObjectMeta;
use kube::client::Body;
use kube::Client;
use kube::ResourceExt;
use kube_runtime::watcher;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tower::Service;

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("POST".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "https://kubernetes.default.svc")
    }

    /// Every (method, path) received so far, in arrival order
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        self.requests
            .lock()
            .unwrap()
            .push((method.clone(), path.clone()));
        let response = self.responses.lock().unwrap().get(&(method, path)).cloned();

        Box::pin(async move {
            let (status, body) = response.unwrap_or_else(|| (404, status_json(404, "NotFound", "not found")));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock JSON body for a namespaced core/v1 object
pub fn object_json(kind: &str, name: &str, namespace: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": kind,
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        }
    })
    .to_string()
}

/// Create a failure Status response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

pub fn make_namespace(name: &str) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// A call recorded by [`FakeClusterApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    LimitRange(LimitRange),
    ResourceQuota(ResourceQuota),
}

impl Call {
    pub fn name(&self) -> String {
        match self {
            Call::LimitRange(lr) => lr.name_any(),
            Call::ResourceQuota(rq) => rq.name_any(),
        }
    }
}

struct ScriptedStream {
    items: Vec<watcher::Result<watcher::Event<Namespace>>>,
    terminating: bool,
}

/// In-memory [`ClusterApi`] that records create calls and replays scripted watch streams
#[derive(Clone, Default)]
pub struct FakeClusterApi {
    calls: Arc<Mutex<Vec<Call>>>,
    fail_limit_ranges: bool,
    fail_resource_quotas: bool,
    streams: Arc<Mutex<VecDeque<ScriptedStream>>>,
    watch_count: Arc<Mutex<usize>>,
}

impl FakeClusterApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_limit_ranges(mut self) -> Self {
        self.fail_limit_ranges = true;
        self
    }

    pub fn failing_resource_quotas(mut self) -> Self {
        self.fail_resource_quotas = true;
        self
    }

    /// Queue the events one `watch_namespaces` call will yield before going quiet
    pub fn with_stream(self, events: Vec<watcher::Event<Namespace>>) -> Self {
        self.with_stream_result(events.into_iter().map(Ok).collect(), false)
    }

    /// Queue raw watch items; a terminating stream ends after its last item instead of going quiet
    pub fn with_stream_result(
        self,
        items: Vec<watcher::Result<watcher::Event<Namespace>>>,
        terminating: bool,
    ) -> Self {
        self.streams
            .lock()
            .unwrap()
            .push_back(ScriptedStream { items, terminating });
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn watch_count(&self) -> usize {
        *self.watch_count.lock().unwrap()
    }
}

#[async_trait]
impl ClusterApi for FakeClusterApi {
    async fn create_limit_range(&self, limit_range: &LimitRange) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::LimitRange(limit_range.clone()));
        if self.fail_limit_ranges {
            return Err(PolicyError::LimitRangeCreation("connection refused".to_string()));
        }
        Ok(())
    }

    async fn create_resource_quota(&self, quota: &ResourceQuota) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::ResourceQuota(quota.clone()));
        if self.fail_resource_quotas {
            return Err(PolicyError::ResourceQuotaCreation("connection refused".to_string()));
        }
        Ok(())
    }

    fn watch_namespaces(&self) -> NamespaceEvents {
        *self.watch_count.lock().unwrap() += 1;
        let Some(scripted) = self.streams.lock().unwrap().pop_front() else {
            return futures::stream::pending().boxed();
        };

        let items = futures::stream::iter(scripted.items);
        if scripted.terminating {
            items.boxed()
        } else {
            items.chain(futures::stream::pending()).boxed()
        }
    }
}

/// Shared in-memory sink for captured log output
#[derive(Clone, Default)]
pub struct LogBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    /// Install a plain-text subscriber writing into a fresh buffer for the current thread
    pub fn capture() -> (Self, tracing::subscriber::DefaultGuard) {
        let buffer = Self::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (buffer, guard)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock().unwrap()).into_owned()
    }

    /// Lines containing `needle`
    pub fn lines_containing(&self, needle: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .map(str::to_string)
            .collect()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Handler that forwards the name of every added namespace to a channel
pub struct RecordingHandler {
    tx: mpsc::UnboundedSender<String>,
}

impl RecordingHandler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl NamespaceHandler for RecordingHandler {
    async fn on_add(&self, namespace: &Namespace) {
        let _ = self.tx.send(namespace.name_any());
    }
}
