//! HTML rendering of the feed page.
//!
//! Pure rendering: the page is a function of a [`FeedState`] snapshot and the
//! base path the static export is served under. Element text is escaped with
//! `encode_text` and attribute values with `encode_double_quoted_attribute`.

use crate::feed::FeedState;
use crate::models::NewsItem;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::{self, Write};

pub const PAGE_TITLE: &str = "AI News Daily";
pub const PAGE_DESCRIPTION: &str = "Ежедневная подборка новостей про искусственный интеллект";
const HEADING: &str = "🤖 AI News Daily";
const SUBTITLE: &str = "Новости искусственного интеллекта";
const UPDATED_PLACEHOLDER: &str = "...";
const REFRESH_LABEL: &str = "🔄 Обновить";
const LOADING_LABEL: &str = "Загрузка...";
const READ_MORE: &str = "Читать →";
const FOOTER: &str = "AI News Daily — автоматическая подборка новостей про AI";

/// Render the full page document.
///
/// # Arguments
///
/// * `state` - The feed snapshot to render
/// * `base_path` - Prefix for asset links (e.g. `/-News`), without trailing slash
pub fn render_page(state: &FeedState, base_path: &str) -> Result<String, fmt::Error> {
    let mut html = String::new();
    let base = base_path.trim_end_matches('/');

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"ru\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\">")?;
    writeln!(
        html,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    )?;
    writeln!(html, "<title>{}</title>", PAGE_TITLE)?;
    writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        encode_double_quoted_attribute(PAGE_DESCRIPTION)
    )?;
    writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"{}/styles.css\">",
        encode_double_quoted_attribute(base)
    )?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "<main class=\"container\">")?;

    render_header(&mut html, state)?;

    if !state.error_message.is_empty() {
        writeln!(
            html,
            "<div class=\"error\">{}</div>",
            encode_text(&state.error_message)
        )?;
    }

    writeln!(html, "<section class=\"news-grid\">")?;
    for item in &state.items {
        render_card(&mut html, item)?;
    }
    writeln!(html, "</section>")?;

    writeln!(html, "<footer>")?;
    writeln!(html, "<p>{}</p>", FOOTER)?;
    writeln!(html, "</footer>")?;
    writeln!(html, "</main>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;

    Ok(html)
}

fn render_header(html: &mut String, state: &FeedState) -> fmt::Result {
    let updated = if state.last_updated_label.is_empty() {
        UPDATED_PLACEHOLDER.to_string()
    } else {
        encode_text(&state.last_updated_label).into_owned()
    };
    let (disabled, label) = if state.loading {
        (" disabled", LOADING_LABEL)
    } else {
        ("", REFRESH_LABEL)
    };

    writeln!(html, "<header>")?;
    writeln!(html, "<h1>{}</h1>", HEADING)?;
    writeln!(html, "<p class=\"subtitle\">{}</p>", SUBTITLE)?;
    writeln!(html, "<div class=\"meta\">")?;
    writeln!(html, "<span>Обновлено: {}</span>", updated)?;
    writeln!(
        html,
        "<button class=\"refresh-btn\" type=\"button\"{}>{}</button>",
        disabled, label
    )?;
    writeln!(html, "</div>")?;
    writeln!(html, "</header>")
}

fn render_card(html: &mut String, item: &NewsItem) -> fmt::Result {
    writeln!(html, "<article class=\"news-card\">")?;
    writeln!(html, "<h2>{}</h2>", encode_text(&item.title))?;
    writeln!(html, "<p>{}</p>", encode_text(&item.description))?;
    writeln!(html, "<div class=\"card-footer\">")?;
    writeln!(
        html,
        "<span class=\"source\">{}</span>",
        encode_text(&item.source)
    )?;
    writeln!(
        html,
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        encode_double_quoted_attribute(&item.url),
        READ_MORE
    )?;
    writeln!(html, "</div>")?;
    writeln!(html, "</article>")
}
