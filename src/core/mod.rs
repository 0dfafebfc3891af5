//! Core module containing the main functionality of Ifabench
//!
//! This module provides:
//! - Validators (RegExp and hand-written scan)
//! - Dataset loading and replication
//! - Timing harness and agreement check
//! - Report rendering

pub mod dataset;
pub mod harness;
pub mod report;
pub mod validator;
