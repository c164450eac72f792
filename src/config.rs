use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Ollama,
    OpenAi,
    Mock,
}

impl ProviderKind {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai" => Ok(Self::OpenAi),
            "mock" => Ok(Self::Mock),
            other => Err(Error::Config(format!(
                "Invalid QUIZ_PROVIDER: {} (expected ollama, openai or mock)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub provider: ProviderKind,
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    /// Upper bound for the requested question count; requests are clamped
    /// into [1, max_questions].
    pub max_questions: usize,
    /// Source text is cut to this many characters before it is embedded in
    /// the prompt.
    pub source_char_budget: usize,
    pub request_timeout_secs: u64,
    pub quiz_language: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

        let provider = match env::var("QUIZ_PROVIDER") {
            Ok(raw) => ProviderKind::parse(&raw)?,
            Err(_) if openai_api_key.is_some() => ProviderKind::OpenAi,
            Err(_) => ProviderKind::Ollama,
        };

        // The two historical deployments used different limits: the Ollama
        // one capped at 20 questions / 4000 chars, the OpenAI one at
        // 50 / 1200. Both stay overridable.
        let (default_max, default_budget) = match provider {
            ProviderKind::Ollama => (20, 4000),
            ProviderKind::OpenAi | ProviderKind::Mock => (50, 1200),
        };

        Ok(Self {
            port: get_env_or_parse("PORT", 4000)?,
            provider,
            ollama_base_url: get_env_or("OLLAMA_BASE", "http://localhost:11434"),
            ollama_model: get_env_or("OLLAMA_MODEL", "llama3"),
            openai_api_key,
            openai_model: get_env_or("OPENAI_MODEL", "gpt-4o"),
            max_questions: get_env_or_parse("MAX_QUESTIONS", default_max)?,
            source_char_budget: get_env_or_parse("SOURCE_CHAR_BUDGET", default_budget)?,
            request_timeout_secs: get_env_or_parse("REQUEST_TIMEOUT_SECS", 60)?,
            quiz_language: get_env_or("QUIZ_LANGUAGE", "ko"),
        })
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).ok().filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_string())
}

fn get_env_or_parse<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.is_empty() => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
