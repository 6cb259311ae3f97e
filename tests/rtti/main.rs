mod common;
mod registry;
mod scenarios;
