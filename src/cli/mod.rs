// Command-line interface definition and argument resolution.

pub mod args;
