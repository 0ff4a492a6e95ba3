mod console_prompter;

pub use console_prompter::{ConsolePrompter, parse_selection};
