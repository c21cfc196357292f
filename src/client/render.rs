//! HTML for the display client page.

use crate::api::models::PodcastSummary;
use crate::client::view::{CardState, ViewState};

pub const PREVIEW_CHARS: usize = 150;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f5f6fa; color: #222; margin: 0; }
.podcast-app { max-width: 1100px; margin: 0 auto; padding: 24px; }
header { text-align: center; margin-bottom: 24px; }
.podcast-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 16px; }
.podcast-card { display: block; background: #fff; border-radius: 8px; padding: 16px; color: inherit; text-decoration: none; box-shadow: 0 1px 3px rgba(0,0,0,.12); }
.podcast-card.expanded { grid-column: 1 / -1; }
.read-more { display: block; margin-top: 8px; color: #3b6fd8; font-size: 0.9em; }
.loading, .error { text-align: center; padding: 48px; }
.error { color: #b00020; }
footer { margin-top: 24px; text-align: center; color: #888; font-size: 0.8em; }
"#;

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// First [`PREVIEW_CHARS`] characters of the text, trimmed.
pub fn preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    head.trim().to_string()
}

/// Splits text on blank lines (empty or whitespace-only).
pub fn paragraphs(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            flush(&mut current, &mut out);
        } else {
            current.push(line.trim());
        }
    }
    flush(&mut current, &mut out);

    out
}

fn flush(current: &mut Vec<&str>, out: &mut Vec<String>) {
    if !current.is_empty() {
        out.push(current.join("\n"));
        current.clear();
    }
}

fn render_card(summary: &PodcastSummary, state: CardState) -> String {
    let title = escape_html(&summary.title);

    match state {
        CardState::Expanded => {
            let body: String = paragraphs(&summary.text_content)
                .iter()
                .map(|p| format!("<p>{}</p>", escape_html(p)))
                .collect();
            format!(
                r#"<a class="podcast-card expanded" href="/toggle/{id}" data-id="{id}">
<h2 class="podcast-title">{title}</h2>
<div class="podcast-content"><div class="text-content">{body}</div></div>
</a>
"#,
                id = summary.id,
            )
        }
        CardState::Collapsed => format!(
            r#"<a class="podcast-card" href="/toggle/{id}" data-id="{id}">
<h2 class="podcast-title">{title}</h2>
<div class="podcast-preview">{preview}...<span class="read-more">Click to read more</span></div>
</a>
"#,
            id = summary.id,
            preview = escape_html(&preview(&summary.text_content)),
        ),
    }
}

fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Educational Podcasts</title>
<style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

pub fn render_page(view: &ViewState) -> String {
    if view.loading {
        return page(r#"<div class="loading">Loading podcasts...</div>"#);
    }

    if let Some(error) = &view.error {
        return page(&format!(r#"<div class="error">{}</div>"#, escape_html(error)));
    }

    let cards: String = view
        .summaries
        .iter()
        .map(|summary| render_card(summary, view.card_state(summary.id)))
        .collect();

    let footer = view
        .fetched_at
        .map(|at| format!("<footer>Fetched {}</footer>", at.format("%Y-%m-%d %H:%M:%S UTC")))
        .unwrap_or_default();

    page(&format!(
        r#"<div class="podcast-app">
<header>
<h1>Educational Podcasts</h1>
<p>Browse through our collection of educational content</p>
</header>
<div class="podcast-grid">
{cards}</div>
{footer}
</div>"#
    ))
}
