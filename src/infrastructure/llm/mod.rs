mod llm_summarizer;
mod openai_client;

pub use llm_summarizer::{LlmSummarizer, SYSTEM_PROMPT, parse_summary_reply};
pub use openai_client::{
    ChatChoice, ChatCompletionResponse, OpenAiClient, ResponseMessage, first_choice_content,
};
