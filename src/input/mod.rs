pub mod parse;
pub mod prompter;

pub use parse::parse_length;
pub use prompter::{collect_request, Prompter, StdioPrompter};

#[cfg(test)]
pub use prompter::MockPrompter;
