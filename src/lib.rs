// The generator core is a pure library; config and output are the
// collaborators the command-line front end wires around it.

pub mod config;
pub mod generator;
pub mod output;
