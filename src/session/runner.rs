use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, Styled};

use super::state::{
    INVALID_LANGUAGE_CHOICE, LanguageChoice, MainInput, State, after_answer,
    after_continue_choice, after_retry_choice, after_translate_choice, classify_language_choice,
    classify_main_input,
};
use super::ui;
use crate::config::ResolvedConfig;
use crate::qna::QnaClient;
use crate::translation::TranslatorClient;
use crate::ui::{Spinner, prompt_cancelled};

/// An interactive question/answer session.
///
/// Owns the two service clients and walks the [`State`] machine one prompt
/// at a time until it reaches [`State::Terminated`].
pub struct Session {
    qna: QnaClient,
    translator: TranslatorClient,
    render_config: RenderConfig<'static>,
}

impl Session {
    /// Creates a new session from the resolved configuration.
    pub fn new(config: &ResolvedConfig) -> Self {
        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        Self {
            qna: QnaClient::new(config),
            translator: TranslatorClient::new(config),
            render_config,
        }
    }

    pub async fn run(&self) -> Result<()> {
        ui::print_header();

        let mut state = State::Prompting;
        while state != State::Terminated {
            state = self.step(state).await?;
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Runs one transition: prompt, classify the reply, perform the network
    /// call where the state asks for one, return the next state.
    async fn step(&self, state: State) -> Result<State> {
        match state {
            State::Prompting => self.step_prompting().await,
            State::AwaitingRetryChoice => self.step_retry_choice(),
            State::AwaitingTranslateChoice { answer } => self.step_translate_choice(answer),
            State::AwaitingLanguageChoice { answer } => self.step_language_choice(&answer).await,
            State::AwaitingContinueChoice => self.step_continue_choice(),
            State::Terminated => Ok(State::Terminated),
        }
    }

    async fn step_prompting(&self) -> Result<State> {
        let Some(line) = self.prompt("Your question:", "type 'quit' to end the program")? else {
            return Ok(State::Terminated);
        };

        match classify_main_input(&line) {
            MainInput::Quit => Ok(State::Terminated),
            MainInput::Question(question) => self.fetch_answer(&question).await,
        }
    }

    async fn fetch_answer(&self, question: &str) -> Result<State> {
        let spinner = Spinner::new("Fetching an answer...");
        let outcome = self.qna.ask(question).await;
        spinner.stop();

        let answer = match outcome {
            Ok(answer) => answer,
            Err(e) => {
                ui::print_error(&format!("{e:#}"));
                return Ok(State::Prompting);
            }
        };

        let next = after_answer(answer);
        match &next {
            State::AwaitingRetryChoice => ui::print_no_answer(),
            State::AwaitingTranslateChoice { answer } => ui::print_answer(answer),
            _ => {}
        }

        Ok(next)
    }

    fn step_retry_choice(&self) -> Result<State> {
        let Some(line) = self.prompt(
            "Would you like to ask another question?",
            "type 'yes' to ask again, 'quit' to end",
        )?
        else {
            return Ok(State::Terminated);
        };

        Ok(after_retry_choice(&line))
    }

    fn step_translate_choice(&self, answer: String) -> Result<State> {
        let Some(line) = self.prompt(
            "Do you want to translate this answer?",
            "type 'translate' to translate, or 'quit' to end",
        )?
        else {
            return Ok(State::Terminated);
        };

        Ok(after_translate_choice(answer, &line))
    }

    async fn step_language_choice(&self, answer: &str) -> Result<State> {
        let Some(line) = self.prompt(
            "Which language do you want to translate to?",
            "fr = French, es = Spanish, it = Italian",
        )?
        else {
            return Ok(State::Terminated);
        };

        match classify_language_choice(&line) {
            LanguageChoice::Invalid => {
                // No network call for an unrecognized code
                ui::print_translated(INVALID_LANGUAGE_CHOICE);
            }
            LanguageChoice::Target(language) => {
                let spinner = Spinner::new("Translating...");
                let outcome = self.translator.translate(answer, &language).await;
                spinner.stop();

                match outcome {
                    Ok(translated) => ui::print_translated(&translated),
                    Err(e) => ui::print_error(&format!("{e:#}")),
                }
            }
        }

        Ok(State::AwaitingContinueChoice)
    }

    fn step_continue_choice(&self) -> Result<State> {
        let Some(line) = self.prompt(
            "Would you like to ask another question?",
            "type 'yes' to ask again, 'quit' to end",
        )?
        else {
            return Ok(State::Terminated);
        };

        Ok(after_continue_choice(&line))
    }

    /// Shows one line prompt. `Ok(None)` means the user backed out with
    /// Ctrl+C or Escape, which the session treats as quitting.
    fn prompt(&self, message: &str, help: &str) -> Result<Option<String>> {
        match Text::new(message)
            .with_render_config(self.render_config)
            .with_help_message(help)
            .prompt()
        {
            Ok(line) => Ok(Some(line)),
            Err(e) if prompt_cancelled(&e) => {
                println!(); // Clear line before goodbye message
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_new_from_resolved_config() {
        let config = ResolvedConfig {
            qna_endpoint: "https://qna.example.com/query".to_string(),
            qna_key: "qna-key".to_string(),
            translator_endpoint: "https://translate.example.com/translate?api-version=3.0"
                .to_string(),
            translator_key: "translator-key".to_string(),
            translator_region: "westeurope".to_string(),
        };

        // Construction wires both clients without touching the network.
        let _session = Session::new(&config);
    }
}
