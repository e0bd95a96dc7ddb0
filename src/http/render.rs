//! Minimal HTML rendering for the snapshot page. A structured builder with
//! entity escaping, kept deliberately free of any templating dependency.

use crate::snapshot::SnapshotEntry;

/// Render the full snapshot as a standalone HTML page.
pub fn index_page(entries: &[SnapshotEntry]) -> String {
    let mut rows = String::new();
    for (topic, value) in entries {
        let value = value.as_deref().unwrap_or("(expired)");
        rows.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td></tr>\n",
            escape(topic),
            escape(value)
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>mqttmirror</title></head>\n\
         <body>\n\
           <h1>Last known values</h1>\n\
           <table>\n\
             <tr><th>Topic</th><th>Value</th></tr>\n\
         {rows}\
           </table>\n\
         </body>\n\
         </html>\n"
    )
}

/// Escape the characters with meaning in HTML text content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
