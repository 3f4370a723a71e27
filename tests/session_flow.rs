//! Session flow contract tests.
//!
//! These tests walk the session state machine through complete user
//! scenarios using the pure transition functions, with no terminal or
//! network I/O involved.

use qna_cli::session::state::{
    INVALID_LANGUAGE_CHOICE, LanguageChoice, MainInput, State, after_answer,
    after_continue_choice, after_retry_choice, after_translate_choice, classify_language_choice,
    classify_main_input,
};

#[test]
fn test_quit_at_main_prompt_terminates() {
    for line in ["quit", "Quit", "QUIT", "  quit  "] {
        assert_eq!(classify_main_input(line), MainInput::Quit);
    }
}

#[test]
fn test_happy_path_question_to_translation_and_back() {
    // A question comes in at the main prompt
    let MainInput::Question(question) = classify_main_input("What is AI?") else {
        panic!("expected a question");
    };
    assert_eq!(question, "What is AI?");

    // The backend answers; the session offers translation
    let state = after_answer("The answer text".to_string());
    assert_eq!(
        state,
        State::AwaitingTranslateChoice {
            answer: "The answer text".to_string()
        }
    );

    // The user picks translate, then a supported language
    let State::AwaitingTranslateChoice { answer } = state else {
        panic!("expected the translate prompt");
    };
    let state = after_translate_choice(answer, "translate");
    assert!(matches!(state, State::AwaitingLanguageChoice { .. }));

    assert_eq!(
        classify_language_choice("fr"),
        LanguageChoice::Target("fr".to_string())
    );

    // After the translation round, "yes" loops back to the main prompt
    assert_eq!(after_continue_choice("yes"), State::Prompting);
}

#[test]
fn test_no_answer_routes_to_retry_not_translate() {
    let state = after_answer("No answer was found for this query.".to_string());
    assert_eq!(state, State::AwaitingRetryChoice);

    // Any non-quit reply returns to the main prompt
    assert_eq!(after_retry_choice("yes"), State::Prompting);
    assert_eq!(after_retry_choice("sure"), State::Prompting);
    // quit ends the session from the retry prompt too
    assert_eq!(after_retry_choice("quit"), State::Terminated);
}

#[test]
fn test_http_error_sentinel_is_shown_as_a_regular_answer() {
    // A failed QA request yields a displayable sentinel, which does not
    // contain the no-match phrase and therefore flows to the translate
    // prompt like any other answer.
    let state = after_answer("Error: Unauthorized".to_string());
    assert_eq!(
        state,
        State::AwaitingTranslateChoice {
            answer: "Error: Unauthorized".to_string()
        }
    );
}

#[test]
fn test_translate_prompt_redisplays_until_recognized() {
    let answer = "The answer text".to_string();

    let mut state = State::AwaitingTranslateChoice {
        answer: answer.clone(),
    };
    for garbage in ["", "y", "translate it", "si"] {
        let State::AwaitingTranslateChoice { answer } = state else {
            panic!("expected the translate prompt to redisplay");
        };
        state = after_translate_choice(answer, garbage);
    }
    assert_eq!(state, State::AwaitingTranslateChoice { answer });
}

#[test]
fn test_quit_at_translate_prompt_ends_the_whole_session() {
    let state = after_translate_choice("The answer text".to_string(), "quit");
    assert_eq!(state, State::Terminated);
}

#[test]
fn test_invalid_language_choice_makes_no_network_call() {
    for line in ["de", "ja", "french", ""] {
        assert_eq!(classify_language_choice(line), LanguageChoice::Invalid);
    }
    assert_eq!(INVALID_LANGUAGE_CHOICE, "Invalid language choice.");
}

#[test]
fn test_continue_prompt_redisplays_indefinitely() {
    for garbage in ["", "no", "y", "ok then"] {
        assert_eq!(after_continue_choice(garbage), State::AwaitingContinueChoice);
    }
    assert_eq!(after_continue_choice("quit"), State::Terminated);
    assert_eq!(after_continue_choice("yes"), State::Prompting);
}
