mod client;
mod language;

pub use client::{TRANSLATION_ERROR, TranslatorClient};
pub use language::{TARGET_LANGUAGES, is_supported_language, print_languages};
