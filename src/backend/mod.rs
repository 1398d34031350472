//! Client for the yourOrbit backend REST endpoints
//!
//! The backend exposes `GET /api/health` and `GET /api/job-app-tracker`; text
//! submissions are posted to the tracker endpoint when `submit.mode = "http"`.

pub mod client;

pub use client::{BackendClient, HealthStatus, TextSubmission, TrackerStatus};
