use crate::domain::error::WdError;
use async_trait::async_trait;

/// Trait for dictionary providers
///
/// Each provider builds its own request, decodes its own response shape
/// and renders its own block of output lines. The lookup flow only needs
/// the rendered text and a name for error context.
#[async_trait]
pub trait DictSource {
    /// Provider name used when reporting a failed lookup
    fn name(&self) -> &'static str;

    /// Look up a word and return the block of lines to print for it
    async fn query(&self, word: &str) -> Result<String, WdError>;
}
