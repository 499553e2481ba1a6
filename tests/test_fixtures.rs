//! Shared test fixtures and utilities for all test types
//!
//! Every `TestApp` owns a fresh temporary storage root and a router built the
//! same way `main` builds it.

#![allow(dead_code)]

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tower::ServiceExt;

use hierarchy_store::{api::create_router, application::builder::ApplicationBuilder, Config};

pub const BOUNDARY: &str = "hierarchy-store-test-boundary";

/// Router plus the temporary directory backing it
pub struct TestApp {
    pub router: Router,
    root: PathBuf,
    _temp: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Build an app after letting the caller adjust the default config
    pub async fn with_config(configure: impl FnOnce(&mut Config)) -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let root = temp.path().join("storage");

        let mut config = Config::with_storage_root(&root);
        configure(&mut config);

        let state = ApplicationBuilder::new(config)
            .with_storage()
            .await
            .expect("Failed to init storage")
            .build()
            .expect("Failed to build app state");

        Self {
            router: create_router(state),
            root,
            _temp: temp,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path of a hierarchy node
    pub fn node(&self, segments: &[&str]) -> PathBuf {
        segments
            .iter()
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    /// The `Path` value the service reports for a hierarchy node
    pub fn reported(&self, segments: &[&str]) -> String {
        self.node(segments).display().to_string()
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible")
    }

    /// Send a body-less request and collect the response body
    pub async fn call(&self, method: Method, uri: &str) -> (StatusCode, Bytes) {
        let response = self.send(empty_request(method, uri)).await;
        let status = response.status();
        (status, body_bytes(response).await)
    }

    /// Send a body-less request and decode the JSON response
    pub async fn call_json(&self, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.call(method, uri).await;
        (status, parse_json(&body))
    }

    /// Send a multipart form and decode the JSON response
    pub async fn upload(
        &self,
        method: Method,
        uri: &str,
        parts: &[Part<'_>],
    ) -> (StatusCode, serde_json::Value) {
        let response = self.send(multipart_request(method, uri, parts)).await;
        let status = response.status();
        (status, parse_json(&body_bytes(response).await))
    }
}

/// One part of a multipart form
pub enum Part<'a> {
    File {
        field: &'a str,
        filename: &'a str,
        content: &'a [u8],
    },
    Text {
        name: &'a str,
        value: &'a str,
    },
}

/// A `file` part, the field name both upload endpoints read
pub fn file<'a>(filename: &'a str, content: &'a [u8]) -> Part<'a> {
    Part::File {
        field: "file",
        filename,
        content,
    }
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::File {
                field,
                filename,
                content,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(content);
            }
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_request(method: Method, uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .expect("Failed to build multipart request")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

pub async fn body_bytes(response: Response) -> Bytes {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
}

pub fn parse_json(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).unwrap_or_else(|e| {
        panic!(
            "Response is not JSON ({e}): {}",
            String::from_utf8_lossy(body)
        )
    })
}

/// Sorted copy of a JSON string array, for set comparisons
pub fn sorted_names(value: &serde_json::Value) -> Vec<String> {
    let mut names: Vec<String> = value
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|v| v.as_str().expect("Expected a string").to_string())
        .collect();
    names.sort();
    names
}
