//! Formatting scalars with each content format.
//!
//! Run with: cargo run --example simple

use cformat::{ContentFormat, Scalar};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let values = vec![
        Scalar::Null,
        Scalar::from(true),
        Scalar::from(42),
        Scalar::from(0.000_000_15),
        Scalar::from("He said \"hi\"\nthen left </script>"),
        Scalar::from("line\u{2028}separator"),
    ];

    for format in ContentFormat::ALL {
        println!("{}:", format);
        for value in &values {
            println!("  {}", format.format_scalar(value));
        }
        println!();
    }

    // The default format is valid as JSON and as JavaScript
    let literal = ContentFormat::default().format_string("a\"b\\c\nd/e");
    let back: String = serde_json::from_str(&literal)?;
    assert_eq!(back, "a\"b\\c\nd/e");
    println!("✓ {} decodes as JSON", literal);

    Ok(())
}
