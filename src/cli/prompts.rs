//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Confirm;

/// Prompt user to confirm writing the cleaned dataset
pub fn confirm_drop_columns(dropped: usize, remaining: usize) -> Result<bool> {
    let message = format!(
        "Drop {} column(s) and write the remaining {}?",
        dropped, remaining
    );
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}
