//! Open Graph document assembly.
//!
//! The preview response is a head-only HTML document: crawler-facing OG and
//! Twitter Card metadata plus a client-side redirect to the canonical app
//! route. It is hand-assembled with string formatting, so every dynamic value
//! goes through [`mirador_core::sanitize`] on interpolation.

use mirador_core::extract::{self, Extracted};
use mirador_core::model::{Message, Profile};
use mirador_core::sanitize::{escape_html, escape_js_string};

use crate::config::Config;

/// Fixed theme color emitted on every preview document.
const THEME_COLOR: &str = "#5b4dff";

/// Everything needed to render one preview document. Field values are raw;
/// escaping happens at interpolation time in [`render_document`].
#[derive(Debug, Clone)]
pub struct PreviewPage {
    /// `og:title`: display name plus the static site suffix.
    pub title: String,
    /// `og:description`: media-stripped body, with the hidden-media suffix
    /// when any flagged image attachments were excluded.
    pub description: String,
    /// Public preview images, in extraction order.
    pub images: Vec<String>,
    /// Avatar URL of the effective profile; the `og:image` fallback.
    pub avatar: Option<String>,
    /// Site name for `og:site_name`.
    pub site_name: String,
    /// Canonical app URL this page redirects to.
    pub canonical_url: String,
}

/// Build the preview page model for a resolved message and its effective
/// profile.
pub fn build_page(
    config: &Config,
    entity_id: &str,
    message_id: &str,
    message: &Message,
    profile: &Profile,
) -> PreviewPage {
    let Extracted {
        images,
        stripped_body,
        hidden_count,
    } = extract::extract_media(&message.document.body, &message.document.attachments);

    let mut description = stripped_body;
    if hidden_count > 0 {
        if !description.is_empty() {
            description.push(' ');
        }
        description.push_str(&format!("(with {hidden_count} hidden images)"));
    }

    PreviewPage {
        title: format!("{} on {}", profile.display_name(), config.site_name),
        description,
        images,
        avatar: profile.avatar.clone(),
        site_name: config.site_name.clone(),
        canonical_url: format!("{}/{entity_id}/{message_id}", config.app_origin),
    }
}

/// Render the complete HTML document for a preview page.
pub fn render_document(page: &PreviewPage) -> String {
    let title = escape_html(&page.title);
    let description = escape_html(&page.description);
    let site_name = escape_html(&page.site_name);
    let canonical = escape_html(&page.canonical_url);

    // Large card only when the message actually has public images.
    let card = if page.images.is_empty() {
        "summary"
    } else {
        "summary_large_image"
    };

    let mut html = String::with_capacity(2048);
    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str(&format!("<meta name=\"description\" content=\"{description}\">\n"));
    html.push_str(&format!("<link rel=\"canonical\" href=\"{canonical}\">\n"));

    html.push_str(&format!("<meta property=\"og:title\" content=\"{title}\">\n"));
    html.push_str(&format!(
        "<meta property=\"og:description\" content=\"{description}\">\n"
    ));
    html.push_str(&format!("<meta property=\"og:url\" content=\"{canonical}\">\n"));
    html.push_str(&format!(
        "<meta property=\"og:site_name\" content=\"{site_name}\">\n"
    ));
    html.push_str("<meta property=\"og:type\" content=\"article\">\n");

    if page.images.is_empty() {
        if let Some(avatar) = &page.avatar {
            html.push_str(&format!(
                "<meta property=\"og:image\" content=\"{}\">\n",
                escape_html(avatar)
            ));
        }
    } else {
        for image in &page.images {
            html.push_str(&format!(
                "<meta property=\"og:image\" content=\"{}\">\n",
                escape_html(image)
            ));
        }
    }

    html.push_str(&format!("<meta name=\"twitter:card\" content=\"{card}\">\n"));
    html.push_str(&format!("<meta name=\"twitter:title\" content=\"{title}\">\n"));
    html.push_str(&format!(
        "<meta name=\"twitter:description\" content=\"{description}\">\n"
    ));

    html.push_str(&format!("<meta name=\"theme-color\" content=\"{THEME_COLOR}\">\n"));

    html.push_str(&format!(
        "<script>window.location.href='{}';</script>\n",
        escape_js_string(&page.canonical_url)
    ));

    html.push_str("</head>\n<body></body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirador_core::model::{MediaAttachment, MessageDocument};

    fn config() -> Config {
        Config {
            bind_addr: "0.0.0.0:0".to_string(),
            public_origin: "https://go.example".to_string(),
            app_origin: "https://app.example".to_string(),
            site_name: "Mirador".to_string(),
            api_origin: "https://dir.example".to_string(),
            cache_ttl_secs: 600,
        }
    }

    fn message(body: &str, attachments: Vec<MediaAttachment>) -> Message {
        Message {
            id: "m1".to_string(),
            author_id: "e1".to_string(),
            document: MessageDocument {
                schema: "post/v1".to_string(),
                body: body.to_string(),
                attachments,
                profile_override: None,
            },
        }
    }

    fn profile(name: &str, avatar: Option<&str>) -> Profile {
        Profile {
            username: Some(name.to_string()),
            avatar: avatar.map(str::to_string),
        }
    }

    fn flagged_image(url: &str) -> MediaAttachment {
        MediaAttachment {
            media_type: "image/jpeg".to_string(),
            media_url: url.to_string(),
            flag: Some("nsfw".to_string()),
        }
    }

    #[test]
    fn title_is_username_plus_site_suffix() {
        let page = build_page(&config(), "e1", "m1", &message("hi", vec![]), &profile("alice", None));
        assert_eq!(page.title, "alice on Mirador");
    }

    #[test]
    fn canonical_url_targets_the_app_route() {
        let page = build_page(&config(), "e1", "m1", &message("hi", vec![]), &profile("alice", None));
        assert_eq!(page.canonical_url, "https://app.example/e1/m1");
    }

    #[test]
    fn hidden_media_suffix_appended() {
        let msg = message(
            "look",
            vec![flagged_image("http://x/a.jpg"), flagged_image("http://x/b.jpg")],
        );
        let page = build_page(&config(), "e1", "m1", &msg, &profile("alice", None));
        assert_eq!(page.description, "look (with 2 hidden images)");
        assert!(page.images.is_empty());
    }

    #[test]
    fn no_suffix_without_hidden_media() {
        let page = build_page(&config(), "e1", "m1", &message("look", vec![]), &profile("a", None));
        assert_eq!(page.description, "look");
    }

    #[test]
    fn card_is_summary_without_images() {
        let page = build_page(&config(), "e1", "m1", &message("hi", vec![]), &profile("a", None));
        let html = render_document(&page);
        assert!(html.contains(r#"<meta name="twitter:card" content="summary">"#));
        assert!(!html.contains("summary_large_image"));
    }

    #[test]
    fn card_is_large_with_images() {
        let msg = message("pic ![](http://x/1.png)", vec![]);
        let page = build_page(&config(), "e1", "m1", &msg, &profile("a", None));
        let html = render_document(&page);
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
    }

    #[test]
    fn one_og_image_tag_per_extracted_image() {
        let msg = message("![](http://x/1.png) ![](http://x/2.png)", vec![]);
        let page = build_page(&config(), "e1", "m1", &msg, &profile("a", None));
        let html = render_document(&page);
        assert_eq!(html.matches("property=\"og:image\"").count(), 2);
        assert!(html.contains("http://x/1.png"));
        assert!(html.contains("http://x/2.png"));
    }

    #[test]
    fn avatar_is_og_image_fallback() {
        let page = build_page(
            &config(),
            "e1",
            "m1",
            &message("plain", vec![]),
            &profile("a", Some("http://x/avatar.png")),
        );
        let html = render_document(&page);
        assert_eq!(html.matches("property=\"og:image\"").count(), 1);
        assert!(html.contains("http://x/avatar.png"));
    }

    #[test]
    fn no_og_image_without_images_or_avatar() {
        let page = build_page(&config(), "e1", "m1", &message("plain", vec![]), &profile("a", None));
        let html = render_document(&page);
        assert!(!html.contains("og:image"));
    }

    #[test]
    fn redirect_script_targets_canonical_url() {
        let page = build_page(&config(), "e1", "m1", &message("hi", vec![]), &profile("a", None));
        let html = render_document(&page);
        assert!(html.contains("window.location.href"));
        assert!(html.contains("https:\\/\\/app.example\\/e1\\/m1"));
    }

    #[test]
    fn theme_color_is_fixed() {
        let page = build_page(&config(), "e1", "m1", &message("hi", vec![]), &profile("a", None));
        let html = render_document(&page);
        assert!(html.contains(r##"<meta name="theme-color" content="#5b4dff">"##));
    }

    #[test]
    fn hostile_username_never_appears_unescaped() {
        let page = build_page(
            &config(),
            "e1",
            "m1",
            &message("hi", vec![]),
            &profile(r#"<script>alert("x")</script>"#, None),
        );
        let html = render_document(&page);
        assert!(!html.contains("<script>alert"));
        assert!(!html.contains(r#"alert("x")"#));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn hostile_avatar_url_never_appears_unescaped() {
        let page = build_page(
            &config(),
            "e1",
            "m1",
            &message("hi", vec![]),
            &profile("a", Some(r#"http://x/"><script>alert(1)</script>"#)),
        );
        let html = render_document(&page);
        assert!(!html.contains("\"><script>"));
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn quote_in_description_cannot_close_the_attribute() {
        let msg = message(r#"say "hello" <b>now</b>"#, vec![]);
        let page = build_page(&config(), "e1", "m1", &msg, &profile("a", None));
        let html = render_document(&page);
        assert!(html.contains("say &quot;hello&quot; &lt;b&gt;now&lt;/b&gt;"));
    }
}
