//! Text folding shared by the scraper and the matcher.
//!
//! Everything that compares names goes through [`normalize`] first, so a club
//! called "Brighton & Hove Albion F.C." and a file called
//! `brighton_hove_albion.png` end up in the same key space.

pub mod alias;
pub mod normalize;

pub use alias::aliases;
pub use normalize::{SEPARATOR, StopWords, base_tokens, normalize, slugify, tokenize};
