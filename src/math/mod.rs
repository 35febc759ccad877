//! Mathematical utilities for the pipeline

/// Frequency to font size normalization
pub mod normalization;
