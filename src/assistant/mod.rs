mod invoker;
pub mod prompt;

pub use invoker::{CompletionInvoker, CompletionOptions};
