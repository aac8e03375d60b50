// Register application commands.

// Orchestrates the linear installation sequence.
pub mod install;
