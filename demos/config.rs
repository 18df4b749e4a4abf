//! Selecting a content format from a configuration file.
//!
//! Run with: cargo run --example config

use cformat::{select, FormatConfig};
use std::error::Error;

const RENDER_CONFIG: &str = r#"{
    "format": "JavaScript",
    "escape": {
        "slash": "after_less_than",
        "html_comment_guard": true
    }
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    // Full configuration, including escape options
    let config: FormatConfig = serde_json::from_str(RENDER_CONFIG)?;
    println!("Format: {}", config.format);
    println!("Options: {:?}", config.options());
    println!("Literal: {}\n", config.format_string("<!-- a/b </script> -->"));

    // Just a name, e.g. from a command line flag
    for name in [None, Some("JSON"), Some("YAML")] {
        match select(name) {
            Ok(format) => println!("{:?} -> {}", name, format),
            Err(err) => println!("{:?} -> error: {}", name, err),
        }
    }

    Ok(())
}
