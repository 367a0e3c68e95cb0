//! `medgate config` -- display resolved configuration.
//!
//! Shows the full resolved configuration as formatted JSON, or a specific
//! section by name.
//!
//! # Examples
//!
//! ```text
//! medgate config show
//! medgate config section server
//! medgate config section model
//! ```

use medgate_types::config::Config;

/// Display the resolved configuration as formatted JSON.
pub fn config_show(config: &Config) {
    match serde_json::to_string_pretty(config) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("error: failed to serialize config: {e}"),
    }
}

/// Display a specific configuration section.
pub fn config_section(config: &Config, section: &str) {
    let value = serde_json::to_value(config).unwrap_or_default();
    match value.get(section) {
        Some(v) => match serde_json::to_string_pretty(v) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("error: failed to serialize section: {e}"),
        },
        None => {
            let available: Vec<&str> = value
                .as_object()
                .map(|m| m.keys().map(|k| k.as_str()).collect())
                .unwrap_or_default();
            eprintln!("error: unknown section '{section}'");
            eprintln!("available sections: {}", available.join(", "));
        }
    }
}
