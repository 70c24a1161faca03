//! # Intake
//!
//! A small REST service exposing CRUD over an in-memory collection of
//! application records, with pagination, filtering, sorting, request
//! validation, health checks, and metrics.

pub mod application;
pub mod cli;
pub mod observability;
pub mod rest_api;
pub mod seed;
