// Front-end glue: turns parsed CLI commands into calculator calls.

pub mod commands;
