// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

type Route = (String, String);

/// A mock HTTP service that returns predefined responses based on request paths
/// and records every request it receives.
///
/// Several responses registered for the same route are served in order; the
/// last one keeps being served once the others are used up.
#[derive(Clone, Default)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<Route, Vec<(u16, String)>>>>,
    calls: Arc<Mutex<Vec<Route>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push((status, body.to_string()));
        self
    }

    /// Add a response for GET requests matching the path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Add a response for POST requests matching the path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    /// Add a response for PUT requests matching the path
    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    /// Add a response for DELETE requests matching the path
    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, status, body)
    }

    /// Build a kube Client from this mock service. Clones of the mock keep
    /// observing the requests made through the client.
    pub fn client(&self) -> Client {
        Client::new(self.clone(), "default")
    }

    /// Number of requests received with the given method
    pub fn count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == method)
            .count()
    }

    /// Total number of requests received
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn next_response(queue: &mut Vec<(u16, String)>) -> (u16, String) {
        if queue.len() > 1 {
            queue.remove(0)
        } else {
            queue[0].clone()
        }
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let mut responses = self.responses.lock().unwrap();

        // Try exact match first
        if let Some(queue) = responses.get_mut(&(method.to_string(), path.to_string())) {
            return Some(Self::next_response(queue));
        }

        // Fall back to the longest registered prefix
        responses
            .iter_mut()
            .filter(|((m, p), _)| m == method && path.starts_with(p.as_str()))
            .max_by_key(|((_, p), _)| p.len())
            .map(|(_, queue)| Self::next_response(queue))
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

        self.calls
            .lock()
            .unwrap()
            .push((method.clone(), path.clone()));
        let response = self.find_response(&method, &path);

        Box::pin(async move {
            let (status, body) = response.unwrap_or_else(|| (404, not_found_json("", "")));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Install a fmt subscriber writing through the test harness, filtered by RUST_LOG
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
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
pub fn internal_error_json() -> String {
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

/// Create a 403 forbidden response
pub fn forbidden_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" is forbidden", resource, name),
        "reason": "Forbidden",
        "code": 403
    })
    .to_string()
}
