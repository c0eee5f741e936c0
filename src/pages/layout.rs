use actix_web::http::header;
use actix_web::HttpResponse;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Error => "error",
        }
    }

    fn from_token(token: &str) -> Option<Tone> {
        [Tone::Success, Tone::Error]
            .into_iter()
            .find(|tone| tone.as_str() == token)
    }
}

/// One-shot toast carried on the redirect that follows an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub notice: String,
    pub tone: Tone,
}

/// Query string of pages that can show a notice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tone")]
    pub tone: Option<Tone>,
}

// unknown tones fall back to success instead of failing the whole query
fn deserialize_tone<'de, D>(deserializer: D) -> Result<Option<Tone>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|token| Tone::from_token(&token)))
}

impl NoticeQuery {
    pub fn into_notice(self) -> Option<Notice> {
        self.notice.map(|notice| Notice {
            notice,
            tone: self.tone.unwrap_or(Tone::Success),
        })
    }
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            notice: message.into(),
            tone: Tone::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            notice: message.into(),
            tone: Tone::Error,
        }
    }

    fn render(&self) -> String {
        let (title, class) = match self.tone {
            Tone::Success => ("Success!", "toast"),
            Tone::Error => ("Error", "toast toast-error"),
        };
        format!(
            r#"<div class="{}" role="status"><strong>{}</strong> {}</div>"#,
            class,
            title,
            escape(&self.notice)
        )
    }
}

pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #0b1020; color: #e5e7eb; }
nav { display: flex; gap: 1.5rem; padding: 1rem 2rem; background: #111831; }
nav a, a { color: #a5b4fc; }
main { max-width: 72rem; margin: 0 auto; padding: 2rem; }
.toast { margin: 1rem 2rem; padding: .75rem 1rem; border-radius: .5rem; background: #14532d; }
.toast-error { background: #7f1d1d; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: 1.5rem; }
.card { background: #161e3a; border-radius: .75rem; padding: 1.5rem; }
.suit { width: 5rem; height: 5rem; border-radius: 50%; display: inline-block; }
.dot { width: 2rem; height: 2rem; border-radius: 50%; display: inline-block; vertical-align: middle; }
.badge { padding: .15rem .6rem; border-radius: 9999px; color: #fff; }
.muted { color: #9ca3af; }
"#;

/// Full page with navigation and an optional toast.
pub fn page(title: &str, notice: Option<&Notice>, body: &str) -> HttpResponse {
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{} | Crewmate Creator</title>
<style>{}</style>
</head>
<body>
<nav>
<a href="/"><strong>Crewmate Creator</strong></a>
<a href="/create">Create</a>
<a href="/gallery">Gallery</a>
</nav>
{}
<main>
{}
</main>
</body>
</html>
"#,
        escape(title),
        STYLE,
        notice.map(Notice::render).unwrap_or_default(),
        body
    );
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// 303 to `location`, with the notice appended to its query string.
pub fn redirect(location: &str, notice: Option<Notice>) -> HttpResponse {
    let location = match notice {
        Some(notice) => format!(
            "{}?notice={}&tone={}",
            location,
            urlencoding::encode(&notice.notice),
            notice.tone.as_str()
        ),
        None => location.to_string(),
    };
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
