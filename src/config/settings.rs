//! Configuration settings for faqbot.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the OpenAI API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub data: DataSettings,
    pub embedding: EmbeddingSettings,
    pub chat: ChatSettings,
    pub retrieval: RetrievalSettings,
    pub ui: UiSettings,
    pub prompts: PromptSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Question/answer data source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Path to the spreadsheet (xlsx, xls, xlsb, ods) or JSON file.
    pub path: String,
    /// Header of the column holding the questions.
    pub question_column: String,
    /// Header of the column holding the answers.
    pub answer_column: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: "TESTE.xlsx".to_string(),
            question_column: "pergunta".to_string(),
            answer_column: "resposta".to_string(),
        }
    }
}

/// Embedding generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    /// Embedding model to use.
    pub model: String,
    /// Requested embedding dimensions. Only sent when set; older models reject it.
    pub dimensions: Option<u32>,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            model: "text-embedding-ada-002".to_string(),
            dimensions: None,
        }
    }
}

/// Language model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    /// LLM model for response generation.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.8,
        }
    }
}

/// Similarity search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalSettings {
    /// Number of records retrieved per query.
    pub top_k: usize,
    /// Minimum cosine similarity for a record to count as relevant.
    pub min_score: Option<f32>,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            top_k: 8,
            min_score: None,
        }
    }
}

/// Web page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Page heading.
    pub title: String,
    /// Line shown under the heading.
    pub subtitle: String,
    /// Label of the query input.
    pub input_label: String,
    /// Label of the submit button.
    pub submit_label: String,
    /// Warning shown when a blank query is submitted.
    pub blank_query_warning: String,
    /// PNG logo shown in the page corner. Empty disables the logo.
    pub logo_path: String,
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: "Chatbot da Blu Logistics part of Scan Logistics".to_string(),
            subtitle: "Digite sua pergunta no campo abaixo para obter uma resposta.".to_string(),
            input_label: "Digite sua pergunta:".to_string(),
            submit_label: "Enviar".to_string(),
            blank_query_warning: "Por favor, insira uma pergunta.".to_string(),
            logo_path: "LOGO_SCAN_BRANCO.png".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory holding a `rag.toml` that overrides the default templates.
    pub custom_dir: Option<String>,
    /// Custom variables available in all prompts as {{variable_name}}.
    pub variables: std::collections::HashMap<String, String>,
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("faqbot")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded data source path.
    pub fn data_path(&self) -> PathBuf {
        Self::expand_path(&self.data.path)
    }

    /// Get the expanded logo path, if a logo is configured.
    pub fn logo_path(&self) -> Option<PathBuf> {
        let path = self.ui.logo_path.trim();
        (!path.is_empty()).then(|| Self::expand_path(path))
    }

    /// Read the API key from the environment.
    pub fn api_key() -> crate::error::Result<String> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            Ok(_) => Err(crate::error::FaqbotError::MissingConfiguration(format!(
                "{} is empty. Set it in your environment or a .env file.",
                API_KEY_ENV
            ))),
            Err(_) => Err(crate::error::FaqbotError::MissingConfiguration(format!(
                "{} not set. Set it in your environment or a .env file.",
                API_KEY_ENV
            ))),
        }
    }
}
