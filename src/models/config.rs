use crate::VehicleError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Front-end settings for the console session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub greeting: String,
    pub intro: String,
    pub vehicle_prompt: PromptConfig,
    pub game_prompt: GamePromptConfig,
    pub closing_message: String,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, VehicleError> {
        toml::from_str(contents).map_err(|e| VehicleError::DeserializationError(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, VehicleError> {
        if !path.exists() {
            return Err(VehicleError::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), VehicleError> {
        self.vehicle_prompt.validate()?;
        self.game_prompt.prompt().validate()?;

        if self.game_prompt.choices.is_empty() {
            return Err(VehicleError::config("game prompt needs at least one choice"));
        }
        if self.game_prompt.choices.iter().any(|c| c.trim().is_empty()) {
            return Err(VehicleError::config("game choices cannot be blank"));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            greeting: "Hello Mike! My name is Skynet. Instead of this crazy coding stuff, \
                       let's play a nice game of chess or thermonuclear war."
                .to_string(),
            intro: "Example 1: Text Prompt".to_string(),
            vehicle_prompt: PromptConfig::new("Select the vehicle you want parts for:", 3),
            game_prompt: GamePromptConfig::default(),
            closing_message: "Good choice. Starting thermonuclear war now...".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    pub title: String,
    pub page_size: usize,
}

impl PromptConfig {
    pub fn new<S: Into<String>>(title: S, page_size: usize) -> Self {
        Self {
            title: title.into(),
            page_size,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    fn validate(&self) -> Result<(), VehicleError> {
        if self.page_size == 0 {
            return Err(VehicleError::config(format!(
                "page_size for '{}' must be at least 1",
                self.title
            )));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GamePromptConfig {
    pub title: String,
    pub page_size: usize,
    pub choices: Vec<String>,
}

impl GamePromptConfig {
    pub fn prompt(&self) -> PromptConfig {
        PromptConfig::new(self.title.clone(), self.page_size)
    }
}

impl Default for GamePromptConfig {
    fn default() -> Self {
        Self {
            title: "Select what game you want to play with me:".to_string(),
            page_size: 8,
            choices: [
                "Chess",
                "Checkers",
                "Global Pandemic",
                "Thermonuclear War",
                "Yahtzee",
                "Go",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}
