//! Analyzer scenario tests.

mod actions;
mod custom_rules;
mod project;
