//! HTML helper functions for the listing containers

use super::date::display_date;
use super::url::{encode_query_value, post_url};
use crate::config::SiteConfig;
use crate::content::Post;

/// Generate a post card linking to the post detail page
///
/// # Examples
/// ```ignore
/// post_card(&config, &post) // -> <a class="card" href="/post.html?slug=hello">...</a>
/// ```
pub fn post_card(config: &SiteConfig, post: &Post) -> String {
    let href = post_url(config, post.slug().unwrap_or_default());

    format!(
        concat!(
            r#"<a class="card" href="{}">"#,
            r#"<h3>{}</h3>"#,
            r#"<p class="muted">{}</p>"#,
            r#"<p class="muted">By {} on {}</p>"#,
            r#"<p class="reading-time">{} min read</p>"#,
            "</a>"
        ),
        html_escape(&href),
        html_escape(post.title()),
        html_escape(post.excerpt()),
        html_escape(post.author()),
        html_escape(&display_date(post.field("date"), &config.date_format)),
        post.reading_time(config.words_per_minute)
    )
}

/// Generate a tag filter button. `None` is the "All" button.
///
/// The element id percent-encodes the tag, so distinct tags never share an id.
pub fn tag_button(tag: Option<&str>, active: bool) -> String {
    let (id, value, label) = match tag {
        Some(tag) => (format!("tag-{}", encode_query_value(tag)), tag, tag),
        None => ("tag-all".to_string(), "all", "All"),
    };
    let class = if active { "badge active" } else { "badge" };

    format!(
        r#"<button class="{}" id="{}" data-tag="{}">{}</button>"#,
        class,
        html_escape(&id),
        html_escape(value),
        html_escape(label)
    )
}

/// Generate a pagination arrow; disabled arrows carry no target page
pub fn page_arrow(label: &str, target: Option<usize>) -> String {
    match target {
        Some(page) => format!(
            r#"<button class="page-arrow" data-page="{}">{}</button>"#,
            page,
            html_escape(label)
        ),
        None => format!(
            r#"<button class="page-arrow" disabled>{}</button>"#,
            html_escape(label)
        ),
    }
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
