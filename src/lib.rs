//! Payroll engine for daily attendance records
//!
//! This crate converts raw clock-in/clock-out periods into a salary report,
//! allocating each day's hours to regular and overtime tiers and applying the
//! weekend premium, and exposes the calculation over a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
