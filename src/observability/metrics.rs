//! Metrics collection.
//!
//! # Metrics
//! - `config_store_updates_total` (counter): updates applied, by store name
//! - `config_store_resets_total` (counter): resets to default, by store name
//! - `config_store_history_entries` (gauge): current history length, by store name
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the library installs no exporter
//! - Without a recorder every call is a no-op

/// Record an applied update.
pub fn record_update(store: &str, history_len: usize) {
    metrics::counter!("config_store_updates_total", "store" => store.to_string()).increment(1);
    record_history_len(store, history_len);
}

/// Record a reset to the default configuration.
pub fn record_reset(store: &str, history_len: usize) {
    metrics::counter!("config_store_resets_total", "store" => store.to_string()).increment(1);
    record_history_len(store, history_len);
}

fn record_history_len(store: &str, history_len: usize) {
    metrics::gauge!("config_store_history_entries", "store" => store.to_string())
        .set(history_len as f64);
}
