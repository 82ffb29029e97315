//! Server-side rendering of the chat page.

use crate::config::UiSettings;
use crate::error::{FaqbotError, Result};
use crate::session::SessionEntry;
use ammonia::clean_text;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

const STYLE: &str = r#"
        body {
            font-family: "Source Sans Pro", sans-serif;
            margin: 0;
            background-color: #0e1117;
            color: #fafafa;
        }
        main {
            position: relative;
            max-width: 730px;
            margin: 0 auto;
            padding: 4rem 1rem;
        }
        .logo {
            position: absolute;
            top: 16px;
            left: 16px;
            width: 250px;
        }
        form {
            display: flex;
            flex-direction: column;
            gap: 8px;
            margin-bottom: 24px;
        }
        input[type=text] {
            padding: 8px;
            border-radius: 5px;
            border: 1px solid #555;
        }
        button {
            align-self: flex-start;
            padding: 6px 16px;
            border-radius: 5px;
        }
        .notice {
            padding: 10px;
            border-radius: 5px;
            margin-bottom: 16px;
        }
        .notice.warning {
            background-color: #ffe8a3;
            color: #5c4400;
        }
        .notice.error {
            background-color: #ffc9c9;
            color: #7d1212;
        }
        .question {
            background-color: #ffffff;
            color: #0e1117;
            padding: 10px;
            border-radius: 5px;
            margin-bottom: 5px;
            white-space: pre-wrap;
        }
        .asked-at {
            float: right;
            font-size: 0.8em;
            color: #6b7280;
        }
        .answer {
            background-color: #d0e7ff;
            color: #0e1117;
            padding: 10px;
            border-radius: 5px;
            margin-bottom: 10px;
            white-space: pre-wrap;
        }
"#;

/// Static page content, fixed at startup.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub subtitle: String,
    pub input_label: String,
    pub submit_label: String,
    pub question_label: String,
    pub answer_label: String,
    /// `data:` URI of the logo, if one is shown.
    pub logo: Option<String>,
}

impl Page {
    /// Page content from the UI settings, without a logo.
    pub fn from_settings(ui: &UiSettings) -> Self {
        Self {
            title: ui.title.clone(),
            subtitle: ui.subtitle.clone(),
            input_label: ui.input_label.clone(),
            submit_label: ui.submit_label.clone(),
            question_label: "Pergunta".to_string(),
            answer_label: "Resposta".to_string(),
            logo: None,
        }
    }

    /// Embed a PNG logo read from `path`.
    pub fn with_logo_file(mut self, path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            FaqbotError::Config(format!("Logo file {} could not be read: {}", path.display(), e))
        })?;
        self.logo = Some(logo_data_uri(&bytes));
        Ok(self)
    }
}

/// A message about the last submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Warning(String),
    Error(String),
}

/// Encode PNG bytes as a `data:` URI.
pub fn logo_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

/// Render the full page: logo, heading, form, notice and history.
pub fn render(page: &Page, history: &[SessionEntry], notice: Option<&Notice>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<main>\n",
        clean_text(&page.title),
        STYLE
    ));

    if let Some(logo) = &page.logo {
        html.push_str(&format!("<img src=\"{}\" class=\"logo\" alt=\"\">\n", logo));
    }

    html.push_str(&format!("<h1>{}</h1>\n", clean_text(&page.title)));
    html.push_str(&format!("<p>{}</p>\n", clean_text(&page.subtitle)));

    html.push_str(&format!(
        "<form method=\"post\" action=\"/\">\n<label for=\"query\">{}</label>\n<input type=\"text\" id=\"query\" name=\"query\" autocomplete=\"off\" autofocus>\n<button type=\"submit\">{}</button>\n</form>\n",
        clean_text(&page.input_label),
        clean_text(&page.submit_label)
    ));

    if let Some(notice) = notice {
        let (class, msg) = match notice {
            Notice::Warning(msg) => ("warning", msg),
            Notice::Error(msg) => ("error", msg),
        };
        html.push_str(&format!(
            "<div class=\"notice {}\">{}</div>\n",
            class,
            clean_text(msg)
        ));
    }

    for entry in history {
        html.push_str(&format!(
            "<div class=\"question\"><span class=\"asked-at\">{}</span><strong>{}:</strong> {}</div>\n",
            entry.asked_at_display(),
            clean_text(&page.question_label),
            clean_text(&entry.query)
        ));
        html.push_str(&format!(
            "<div class=\"answer\"><strong>{}:</strong> {}</div>\n",
            clean_text(&page.answer_label),
            clean_text(&entry.response)
        ));
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}
