//! Session states and pure input classification.
//!
//! Every prompt reply is classified here, without I/O. The reply-only
//! transitions are encoded as pure functions so the control flow is a
//! table the runner walks one step at a time; only the two network calls
//! live outside this module.

use crate::translation::is_supported_language;

/// The sentinel that ends the program at any prompt that accepts it.
pub const QUIT: &str = "quit";

/// Phrase the backend puts in an answer when the knowledge base has no match.
const NO_ANSWER_PHRASE: &str = "no answer was found";

/// Result string for a language choice outside [`crate::translation::TARGET_LANGUAGES`].
pub const INVALID_LANGUAGE_CHOICE: &str = "Invalid language choice.";

/// Where the session currently is.
///
/// `answer`-carrying states own the text so nothing outlives its turn:
/// once the session is back at [`State::Prompting`], the previous answer
/// is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Waiting for a question at the main prompt.
    Prompting,
    /// No answer was found; waiting for the retry choice.
    AwaitingRetryChoice,
    /// An answer was printed; waiting for "translate" or "quit".
    AwaitingTranslateChoice {
        /// The answer that may get translated.
        answer: String,
    },
    /// Waiting for the target language code.
    AwaitingLanguageChoice {
        /// The answer to translate.
        answer: String,
    },
    /// A translation round finished; waiting for "yes" or "quit".
    AwaitingContinueChoice,
    /// The session is over.
    Terminated,
}

/// Reply at the main prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum MainInput {
    Quit,
    Question(String),
}

/// Reply at the language prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum LanguageChoice {
    /// A supported target language code, lowercased.
    Target(String),
    /// Anything else; no network call is made for it.
    Invalid,
}

fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

/// Classifies the main prompt reply. Only "quit" (any case) ends the
/// session; everything else is a question, kept in its original casing.
pub fn classify_main_input(line: &str) -> MainInput {
    if normalize(line) == QUIT {
        MainInput::Quit
    } else {
        MainInput::Question(line.trim().to_string())
    }
}

/// Classifies the language prompt reply against the supported targets.
pub fn classify_language_choice(line: &str) -> LanguageChoice {
    let code = normalize(line);
    if is_supported_language(&code) {
        LanguageChoice::Target(code)
    } else {
        LanguageChoice::Invalid
    }
}

/// Transition out of [`State::AwaitingRetryChoice`]. Anything that is not
/// "quit" goes back to the main prompt, whether or not it spelled out "yes".
pub fn after_retry_choice(line: &str) -> State {
    if normalize(line) == QUIT {
        State::Terminated
    } else {
        State::Prompting
    }
}

/// Transition out of [`State::AwaitingTranslateChoice`]. Unrecognized input
/// redisplays the same prompt.
pub fn after_translate_choice(answer: String, line: &str) -> State {
    match normalize(line).as_str() {
        "translate" => State::AwaitingLanguageChoice { answer },
        QUIT => State::Terminated,
        _ => State::AwaitingTranslateChoice { answer },
    }
}

/// Transition out of [`State::AwaitingContinueChoice`]. Unrecognized input
/// redisplays the same prompt, indefinitely.
pub fn after_continue_choice(line: &str) -> State {
    match normalize(line).as_str() {
        "yes" => State::Prompting,
        QUIT => State::Terminated,
        _ => State::AwaitingContinueChoice,
    }
}

/// Routing for a freshly fetched answer: the no-match phrase goes to the
/// retry prompt, everything else is shown and offered for translation.
pub fn after_answer(answer: String) -> State {
    if is_no_answer(&answer) {
        State::AwaitingRetryChoice
    } else {
        State::AwaitingTranslateChoice { answer }
    }
}

/// Whether the answer text is the backend's no-match phrase.
pub fn is_no_answer(answer: &str) -> bool {
    answer.to_lowercase().contains(NO_ANSWER_PHRASE)
}
