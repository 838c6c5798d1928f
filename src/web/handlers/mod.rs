// Request handlers for the JSON API.

pub mod analyze;
pub mod compare;
