// src/ports/mod.rs

pub use prompter::Prompter;

pub mod prompter;
