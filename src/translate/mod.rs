pub mod chat_completion;
pub mod classifier;
pub mod extraction;
pub mod google_web;
pub mod interface;
pub mod resolver;

pub use chat_completion::ChatCompletionTranslator;
pub use classifier::contains_target_script;
pub use extraction::{extract_fragment, MarkerExtractor};
pub use google_web::GoogleWebTranslator;
pub use interface::*;
pub use resolver::TranslationResolver;
