use std::collections::HashMap;
use std::ffi::OsString;

/// Reads `names` from the process environment, skipping unset variables.
/// Values that are not valid UTF-8 are converted lossily.
pub(crate) fn env_subset_lossy(names: &[&str]) -> HashMap<String, String> {
    names
        .iter()
        .filter_map(|name| {
            let value = std::env::var_os(name)?;
            Some(((*name).to_string(), convert(name, value)))
        })
        .collect()
}

fn convert(name: &str, value: OsString) -> String {
    match value.into_string() {
        Ok(value) => value,
        Err(value) => {
            tracing::warn!(name, "non-UTF-8 environment variable; converting lossily");
            value.to_string_lossy().into_owned()
        }
    }
}
