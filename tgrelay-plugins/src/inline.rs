//! Inline mode: echo-style results for `@bot <query>` and a chosen-result logger.

use async_trait::async_trait;
use tgrelay_core::{
    Bot, ChosenInlineResult, ChosenResultHandler, InlineQuery, InlineResult, InlineResultProducer,
    PluginError, Result,
};
use tracing::info;

/// Offers the query as typed, upper-cased and lower-cased. Blank queries get no results.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoInlineProducer;

#[async_trait]
impl InlineResultProducer for EchoInlineProducer {
    async fn produce(
        &self,
        query: &InlineQuery,
    ) -> std::result::Result<Vec<InlineResult>, PluginError> {
        let text = query.query.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![
            InlineResult::article("echo", format!("Echo: {}", text), text)
                .with_description("Send as typed"),
            InlineResult::article("upper", text.to_uppercase(), text.to_uppercase())
                .with_description("UPPERCASE"),
            InlineResult::article("lower", text.to_lowercase(), text.to_lowercase())
                .with_description("lowercase"),
        ])
    }
}

/// Logs which inline result a user sent.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingChosenHandler;

#[async_trait]
impl ChosenResultHandler for LoggingChosenHandler {
    async fn on_chosen(&self, chosen: &ChosenInlineResult, _bot: &dyn Bot) -> Result<()> {
        info!(
            user_id = chosen.from.id,
            result_id = %chosen.result_id,
            query = %chosen.query,
            "Inline result chosen"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgrelay_core::User;

    fn query(text: &str) -> InlineQuery {
        InlineQuery {
            id: "q".to_string(),
            from: User {
                id: 7,
                username: None,
                first_name: Some("Ann".to_string()),
                last_name: None,
            },
            query: text.to_string(),
            offset: String::new(),
        }
    }

    #[tokio::test]
    async fn test_echo_producer_variants() {
        let results = EchoInlineProducer.produce(&query(" Hello World ")).await.unwrap();
        let texts: Vec<&str> = results.iter().map(|r| r.message_text.as_str()).collect();
        assert_eq!(texts, vec!["Hello World", "HELLO WORLD", "hello world"]);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["echo", "upper", "lower"]);
    }

    #[tokio::test]
    async fn test_blank_query_has_no_results() {
        assert!(EchoInlineProducer.produce(&query("   ")).await.unwrap().is_empty());
    }
}
