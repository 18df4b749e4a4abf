//! Writing template values into an inline `<script>` block.
//!
//! Run with: cargo run --example script_embedding

use cformat::{write_literal, ContentFormat, EscapeOptions, SlashEscape};
use serde::Serialize;
use std::error::Error;
use std::fmt::Write as _;
use std::io::{self, Write};

#[derive(Serialize)]
struct Visits(u64);

fn main() -> Result<(), Box<dyn Error>> {
    // User controlled input trying to break out of the script element
    let title = "</script><script>alert('pwned')</script>";
    let comment = "<!-- hidden -->";

    let format = ContentFormat::JavaScriptOrJson;
    let guarded = EscapeOptions::for_grammar(format.grammar())
        .with_slash(SlashEscape::Always)
        .with_html_comment_guard(true);

    let mut html = String::from("<script>\n");
    writeln!(html, "  var title = {};", format.string_literal(title))?;
    writeln!(html, "  var comment = {};", format.format_string_with(comment, &guarded))?;
    html.push_str("  var visits = ");

    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    write_literal(&mut stdout, &Visits(1_024), format)?;
    stdout.write_all(b";\n</script>\n")?;

    assert!(!html.contains("</script><"));
    assert!(!html.contains("<!--"));
    Ok(())
}
