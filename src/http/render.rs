//! Server-side rendering of the header page.
//!
//! # Responsibilities
//! - Embed the page data payload in a minimal HTML document
//! - Escape header text before it lands in markup
//!
//! # Design Decisions
//! - The serialized payload is also embedded verbatim in a JSON script
//!   block so harnesses can scrape it without parsing the table

use crate::snapshot::HeaderSnapshot;

/// Render the snapshot into a self-contained HTML page.
///
/// `data` is the plain-data payload already produced from `snap`; it is
/// embedded as-is so the markup and the payload cannot drift apart.
pub fn render_page(snap: &HeaderSnapshot, data: &serde_json::Value) -> String {
    let mut rows = String::new();
    for (name, value) in snap.iter() {
        rows.push_str("      <tr><td>");
        rows.push_str(&escape(name));
        rows.push_str("</td><td>");
        rows.push_str(&escape(value));
        rows.push_str("</td></tr>\n");
    }

    let payload = serde_json::to_string(data).unwrap_or_else(|_| "{}".to_string());

    format!(
        "<!doctype html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>Request Headers</title></head>\n\
         <body>\n\
           <h1>Request Headers</h1>\n\
           <table>\n\
             <thead><tr><th>Name</th><th>Value</th></tr></thead>\n\
             <tbody>\n{rows}    </tbody>\n\
           </table>\n\
           <script type=\"application/json\" id=\"page-data\">{payload}</script>\n\
         </body>\n\
         </html>\n"
    )
}

/// Minimal HTML escaping for text nodes.
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
