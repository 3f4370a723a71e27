//! Configure command handler for editing service settings.

use anyhow::{Result, bail};
use inquire::{InquireError, Text};

use crate::config::{ConfigFile, ConfigManager};
use crate::ui::{Style, prompt_cancelled};

/// Runs the configure command.
///
/// With `--show`, prints the current configuration (keys masked) and exits.
/// Otherwise walks through the service settings interactively and saves the
/// config file. Cancelling a prompt (Ctrl+C or Escape) aborts without saving.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        return show_configuration();
    }

    match run_configure_inner() {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    print_current(&config);

    config.qna.endpoint = Some(prompt_required(
        "Question answering endpoint:",
        config.qna.endpoint.as_deref(),
    )?);

    let qna_key = prompt_api_key("Question answering API key:", config.qna.api_key.as_deref())?;
    if qna_key.is_none() && config.qna.api_key_env.is_none() {
        bail!(
            "An API key is required for the question answering service\n\n\
             Enter it at the prompt, or set qna.api_key_env in {}",
            manager.config_path().display()
        );
    }
    config.qna.api_key = qna_key;

    config.translator.endpoint = Some(prompt_required(
        "Translation endpoint:",
        config.translator.endpoint.as_deref(),
    )?);

    let translator_key = prompt_api_key(
        "Translation API key:",
        config.translator.api_key.as_deref(),
    )?;
    if translator_key.is_none() && config.translator.api_key_env.is_none() {
        bail!(
            "An API key is required for the translation service\n\n\
             Enter it at the prompt, or set translator.api_key_env in {}",
            manager.config_path().display()
        );
    }
    config.translator.api_key = translator_key;

    config.translator.region = Some(prompt_required(
        "Translation resource region:",
        config.translator.region.as_deref(),
    )?);

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn show_configuration() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();

    println!("{}", Style::header("Question answering"));
    print_entry("endpoint", config.qna.endpoint.as_deref());
    print_entry("api_key", config.qna.api_key.as_deref().map(mask_key).as_deref());
    print_entry("api_key_env", config.qna.api_key_env.as_deref());
    println!();

    println!("{}", Style::header("Translation"));
    print_entry("endpoint", config.translator.endpoint.as_deref());
    print_entry(
        "api_key",
        config.translator.api_key.as_deref().map(mask_key).as_deref(),
    );
    print_entry("api_key_env", config.translator.api_key_env.as_deref());
    print_entry("region", config.translator.region.as_deref());
    println!();

    println!(
        "{}",
        Style::secondary(format!(
            "Config file: {}",
            manager.config_path().display()
        ))
    );

    Ok(())
}

fn print_current(config: &ConfigFile) {
    println!("{}", Style::header("Current settings"));
    print_entry("qna endpoint", config.qna.endpoint.as_deref());
    print_entry(
        "translator endpoint",
        config.translator.endpoint.as_deref(),
    );
    print_entry("translator region", config.translator.region.as_deref());
    println!();
}

fn print_entry(label: &str, value: Option<&str>) {
    println!(
        "  {:20} {}",
        Style::label(label),
        value.map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
}

fn prompt_required(message: &str, default: Option<&str>) -> Result<String> {
    let mut prompt = Text::new(message);
    if let Some(d) = default {
        prompt = prompt.with_default(d);
    }

    let value = prompt.prompt()?;
    if value.trim().is_empty() {
        bail!("Value cannot be empty");
    }

    Ok(value.trim().to_string())
}

fn prompt_api_key(message: &str, existing: Option<&str>) -> Result<Option<String>> {
    let help = if existing.is_some() {
        "leave empty to keep the current key"
    } else {
        "stored in the config file; set api_key_env there to read from the environment instead"
    };

    let value = Text::new(message).with_help_message(help).prompt()?;
    let value = value.trim();

    if value.is_empty() {
        Ok(existing.map(ToString::to_string))
    } else {
        Ok(Some(value.to_string()))
    }
}

fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(4).collect();
    if key.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{prefix}****")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key_keeps_short_prefix() {
        assert_eq!(mask_key("abcdef123456"), "abcd****");
    }

    #[test]
    fn test_mask_key_hides_short_keys_entirely() {
        assert_eq!(mask_key("abc"), "****");
        assert_eq!(mask_key(""), "****");
    }
}
