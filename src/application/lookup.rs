use crate::domain::traits::DictSource;
use anyhow::Context;

/// Query each source in order, printing its block as soon as the call
/// completes. The first failure aborts the remaining lookups; output
/// already printed stays printed.
pub async fn lookup_word(sources: &[&dyn DictSource], word: &str) -> anyhow::Result<()> {
    for source in sources {
        let block = source
            .query(word)
            .await
            .with_context(|| format!("{} lookup failed for '{}'", source.name(), word))?;
        print!("{}", block);
    }

    Ok(())
}
