//! Metrics definitions for the forum API.
//!
//! This module defines all metrics used throughout the service.
//! Metrics are collected using the `metrics` crate and can be exported
//! to Prometheus via `metrics-exporter-prometheus`.

use metrics::{counter, describe_counter};

/// Initialize all metric descriptions.
/// Call this once at startup before any metrics are recorded.
pub fn init_metrics() {
    describe_counter!("forums_created_total", "Total number of forums created");
    describe_counter!(
        "forums_joined_total",
        "Total number of successful forum join operations"
    );
    describe_counter!(
        "messages_posted_total",
        "Total number of messages posted to forums"
    );
}

/// Record a newly created forum.
pub fn record_forum_created() {
    counter!("forums_created_total").increment(1);
}

/// Record a user joining a forum.
pub fn record_forum_joined() {
    counter!("forums_joined_total").increment(1);
}

/// Record a posted message.
pub fn record_message_posted() {
    counter!("messages_posted_total").increment(1);
}
