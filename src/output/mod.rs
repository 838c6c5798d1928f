// Output formatting for the terminal surface.

pub mod terminal;
