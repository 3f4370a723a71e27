//! Session UI components.

use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Interactive Q&A Mode",
        Style::header("qna"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
    println!("Ask a question about AI (type 'quit' to end the program).");
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Program ended. Goodbye!"));
}

pub fn print_answer(answer: &str) {
    println!("{} {answer}", Style::header("Answer:"));
    println!();
}

pub fn print_translated(text: &str) {
    println!("{} {text}", Style::header("Translated Answer:"));
    println!();
}

pub fn print_no_answer() {
    println!("{}", Style::warning("Sorry, no answer was found."));
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
