// src/ports/html.rs
use crate::constants::DEFAULT_DATETIME_FORMAT;
use crate::domain::Note;
use crate::util::text::format_local_datetime;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

/// Renders a note as a standalone HTML card
#[derive(Debug)]
pub struct HtmlPresenter {
    datetime_format: String,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self::with_datetime_format(DEFAULT_DATETIME_FORMAT)
    }

    pub fn with_datetime_format(format: &str) -> Self {
        Self {
            datetime_format: format.to_string(),
        }
    }

    fn image_block(&self, note: &Note) -> String {
        match &note.image {
            Some(src) => format!(
                r#"<img class="note-image" src="{}" alt="">"#,
                encode_double_quoted_attribute(&image_src(src))
            ),
            None => String::new(),
        }
    }

    fn link_block(&self, note: &Note) -> String {
        match &note.web_link {
            Some(url) => {
                let href = if url.contains("://") {
                    url.clone()
                } else {
                    format!("https://{url}")
                };
                format!(
                    r#"<a class="note-link" href="{}">{}</a>"#,
                    encode_double_quoted_attribute(&href),
                    encode_text(url)
                )
            }
            None => String::new(),
        }
    }

    #[instrument(level = "debug", skip(self, note), fields(note_id = note.id))]
    pub fn render(&self, note: &Note) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .card {{
            background: white;
            border-radius: 8px;
            border-left: 8px solid {color};
            padding: 2rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .note-date {{
            font-size: 0.9em;
            color: #666;
        }}
        .note-body {{
            white-space: pre-wrap;
            word-wrap: break-word;
        }}
        .note-image {{
            max-width: 100%;
            border-radius: 4px;
            margin-top: 1rem;
        }}
        .note-link {{
            display: block;
            margin-top: 1rem;
        }}
    </style>
</head>
<body>
    <div class="card">
        <h2 class="note-title">{title}</h2>
        <div class="note-date">{date}</div>
        <div class="note-body">{body}</div>
        {image}
        {link}
    </div>
</body>
</html>"#,
            title = encode_text(&note.title),
            color = note.color.to_rgb_hex(),
            date = encode_text(&format_local_datetime(&note.timestamp, &self.datetime_format)),
            body = encode_text(&note.body),
            image = self.image_block(note),
            link = self.link_block(note),
        )
    }
}

impl Default for HtmlPresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Local paths become file URLs so the browser can load them
fn image_src(reference: &str) -> String {
    if reference.contains("://") {
        reference.to_string()
    } else {
        format!("file://{reference}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteColor;
    use crate::util::testing::note_titled;
    use rstest::rstest;

    #[test]
    fn given_markup_in_note_when_rendering_then_escapes_it() {
        let mut note = note_titled("<script>alert(1)</script>", 0);
        note.body = "a < b & c".to_string();

        let html = HtmlPresenter::new().render(&note);

        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a &lt; b &amp; c"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn given_color_when_rendering_then_stripe_uses_rgb_hex() {
        let mut note = note_titled("Colored", 0);
        note.color = NoteColor(0xFFFF5722);

        let html = HtmlPresenter::new().render(&note);

        assert!(html.contains("border-left: 8px solid #FF5722"));
    }

    #[rstest]
    #[case("content://media/1", r#"src="content://media/1""#)]
    #[case("/home/user/cat.png", r#"src="file:///home/user/cat.png""#)]
    fn given_image_reference_when_rendering_then_image_tag_points_at_it(
        #[case] reference: &str,
        #[case] expected: &str,
    ) {
        let mut note = note_titled("Pictured", 0);
        note.image = Some(reference.to_string());

        let html = HtmlPresenter::new().render(&note);

        assert!(html.contains(expected));
    }

    #[test]
    fn given_link_without_scheme_when_rendering_then_href_gets_https() {
        let mut note = note_titled("Linked", 0);
        note.web_link = Some("example.com/page".to_string());

        let html = HtmlPresenter::new().render(&note);

        assert!(html.contains(r#"href="https://example.com/page""#));
        assert!(html.contains(">example.com/page</a>"));
    }

    #[test]
    fn given_no_attachments_when_rendering_then_omits_image_and_link() {
        let html = HtmlPresenter::new().render(&note_titled("Plain", 0));

        assert!(!html.contains("<img"));
        assert!(!html.contains("<a "));
    }
}
