// src/generators/mod.rs
pub mod password;
pub mod wordlist;

pub use password::PasswordGenerator;
pub use wordlist::{expand, WordlistResult};
