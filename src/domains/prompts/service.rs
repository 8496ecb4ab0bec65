//! Prompt service implementation.
//!
//! The PromptService manages prompt templates and their instantiation.
//! Prompts are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Registry of available prompts.
    /// Key: prompt name, Value: prompt template
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService with every registered prompt.
    pub fn new() -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            prompts: HashMap::new(),
        };
        for template in get_all_prompts() {
            service.register_prompt(template);
        }

        service
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        debug!("Registering prompt: {}", template.name);
        self.prompts.insert(template.name.clone(), template);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        for arg in &template.arguments {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_text(result: &GetPromptResult) -> String {
        let message = serde_json::to_value(&result.messages[0]).unwrap();
        message["content"]["text"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_prompt_service_creation() {
        let service = PromptService::new();
        let prompts = service.list_prompts().await;
        assert_eq!(prompts.len(), 2);
    }

    #[tokio::test]
    async fn test_daily_planner_with_focus() {
        let service = PromptService::new();

        let mut args = HashMap::new();
        args.insert("focus".to_string(), "finish the tax return".to_string());

        let result = service.get_prompt("daily_planner", Some(args)).await.unwrap();
        let text = message_text(&result);
        assert!(text.contains("My primary goal for today is: finish the tax return."));
        assert!(!text.contains("{{"));
    }

    #[tokio::test]
    async fn test_daily_planner_without_focus() {
        let service = PromptService::new();

        let result = service.get_prompt("daily_planner", None).await.unwrap();
        let text = message_text(&result);
        assert!(text.contains("overdue"));
        assert!(!text.contains("primary goal"));
        assert!(!text.contains("{{"));
    }

    #[tokio::test]
    async fn test_setup_check() {
        let service = PromptService::new();

        let result = service.get_prompt("setup_check", None).await.unwrap();
        assert!(message_text(&result).contains("`timew_raw`"));
    }

    #[tokio::test]
    async fn test_missing_required_argument() {
        let mut service = PromptService::new();
        service.register_prompt(PromptTemplate::new(
            "needs_focus",
            None,
            vec![rmcp::model::PromptArgument {
                name: "focus".to_string(),
                title: None,
                description: None,
                required: Some(true),
            }],
            "{{focus}}",
        ));

        let result = service.get_prompt("needs_focus", None).await;
        assert!(matches!(result, Err(PromptError::MissingArgument(name)) if name == "focus"));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let service = PromptService::new();

        let result = service.get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
