//! wd - look a word up against the Caiyun dict API and the Baidu
//! translation API and print pronunciation, explanations and example
//! sentences.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
