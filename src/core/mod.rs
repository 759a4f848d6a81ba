pub mod client;
pub mod cursor;
pub mod dispatch;
pub mod help;
pub mod markup;
pub mod query;
pub mod render;
pub mod search;
pub mod tokenizer;

pub use crate::domain::model::{CatalogItem, CatalogPage, InlineAnswer, InlineQuery};
pub use crate::domain::ports::{AnswerSink, CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
