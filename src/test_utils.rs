// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use bytes::Bytes;
use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

type Responses = HashMap<(String, String), VecDeque<(u16, String)>>;

/// A request the mock received
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// A mock HTTP service that returns predefined responses based on request paths
/// and records every request it serves.
///
/// Several responses registered for the same method and path are served in
/// order; the last one keeps being served once the others are used up.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<Responses>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back((status, body.to_string()));
        self
    }

    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, status, body)
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// All requests served so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests with the given method whose path starts with `path`
    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path.starts_with(path))
            .collect()
    }

    fn next_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let mut responses = self.responses.lock().unwrap();

        let key = (method.to_string(), path.to_string());
        let key = if responses.contains_key(&key) {
            key
        } else {
            // Fall back to a prefix match for paths like /apis/.../namespaces/foo/kind/name
            responses
                .keys()
                .find(|(m, p)| m == method && path.starts_with(p.as_str()))
                .cloned()?
        };

        let queue = responses.get_mut(&key)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
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
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let query = req.uri().query().map(str::to_string);

        let response = self.next_response(&method, &path);
        let requests = self.requests.clone();

        Box::pin(async move {
            let body = req.into_body().collect().await?.to_bytes();
            requests.lock().unwrap().push(RecordedRequest {
                method,
                path,
                query,
                body,
            });

            let (status, body) = response.unwrap_or_else(|| {
                // Default 404 for unmatched requests
                (404, not_found_json("resource", "unknown"))
            });
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" not found", resource, name),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}

/// Create a 500 internal error response
pub fn server_error_json() -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": "etcdserver: request timed out",
        "reason": "InternalError",
        "code": 500
    })
    .to_string()
}

/// Create a successful delete response
pub fn deleted_json(name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Success",
        "details": { "name": name }
    })
    .to_string()
}

/// Create a ResourceBinding JSON object
pub fn resource_binding_json(name: &str, description: &str) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "apps.gaia.io/v1alpha1",
        "kind": "ResourceBinding",
        "metadata": {
            "name": name,
            "namespace": "gaia-merged",
            "resourceVersion": "7",
            "labels": { "apps.gaia.io/ori.desc.name": description }
        },
        "spec": {
            "appID": description,
            "totalPeer": 1,
            "rbApps": []
        }
    })
}

/// Create a ResourceBindingList response
pub fn resource_binding_list_json(names: &[&str], description: &str) -> String {
    serde_json::json!({
        "apiVersion": "apps.gaia.io/v1alpha1",
        "kind": "ResourceBindingList",
        "metadata": { "resourceVersion": "7" },
        "items": names
            .iter()
            .map(|n| resource_binding_json(n, description))
            .collect::<Vec<_>>()
    })
    .to_string()
}
