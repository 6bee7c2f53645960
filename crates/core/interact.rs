use dialoguer::{theme::ColorfulTheme, Input, Select};
use eyre::{eyre, Context, Result};

/// Ask the user to pick one of `items`, `None` when the prompt is dismissed.
pub fn user_select_opt<S: ToString>(
    prompt: &str,
    items: &[S],
    default: usize,
) -> Result<Option<usize>> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .items(items)
        .interact_opt()
        .wrap_err_with(|| eyre!("User selection cancelled"))
}

pub fn user_select<S: ToString>(prompt: &str, items: &[S], default: usize) -> Result<usize> {
    user_select_opt(prompt, items, default)?
        .ok_or_else(|| eyre!("No selection made - cancelling operation"))
}

/// Ask the user for a line of text, an empty line is accepted.
pub fn user_input(prompt: &str) -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))
}
