//! Command-line interface for the `langpick` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! scoring to `langpick-intelligence` and model persistence to
//! `langpick-state`.

mod app;
mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    app::run()
}
