// Graphite: personality trait estimation from writing style.
//
// This is the library root. `analysis` extracts surface signals from raw
// text, `scoring` combines them into bounded trait scores, descriptions,
// and comparisons; `output` and `web` are the terminal and HTTP surfaces.

pub mod analysis;
pub mod config;
pub mod output;
pub mod scoring;

#[cfg(feature = "web")]
pub mod web;
