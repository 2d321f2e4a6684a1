use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

/// Terminal questions asked by the admin flows.
pub trait Prompter {
    fn text(&mut self, prompt: &str) -> eyre::Result<String>;
    fn confirm(&mut self, prompt: &str) -> eyre::Result<bool>;
    fn select(&mut self, prompt: &str, items: &[String]) -> eyre::Result<usize>;
}

pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn text(&mut self, prompt: &str) -> eyre::Result<String> {
        let answer = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn confirm(&mut self, prompt: &str) -> eyre::Result<bool> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(answer)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> eyre::Result<usize> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(choice)
    }
}
