/// Provider-independent completion request
#[derive(Debug, Clone)]
pub struct CompletionRequest<'a> {
    /// Model identifier
    pub model: &'a str,
    /// Instruction preceding the user turn
    pub system_prompt: &'a str,
    /// Trimmed, non-empty user message
    pub user_message: &'a str,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

/// Normalized first choice of a completion response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Generated text, untrimmed
    pub text: String,
    /// Model that answered, when reported
    pub model: Option<String>,
    /// Why generation stopped (e.g. `stop`, `length`)
    pub finish_reason: Option<String>,
}
