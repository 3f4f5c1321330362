// Aggregates all former standalone integration tests as modules.
mod scan_dir;
