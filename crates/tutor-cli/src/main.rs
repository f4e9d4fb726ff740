//! Tutor CLI Application
//!
//! Command-line interface for the AI-assisted study management tool.

mod args;
mod commands;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use commands::Cli;
use log::info;
use renderer::TerminalRenderer;
use tutor_core::TutorBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let tutor = TutorBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tutor")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(tutor, renderer);

    info!("Tutor started");

    match command {
        Some(Assignment { command }) => cli.handle_assignment_command(command).await,
        Some(Question { command }) => cli.handle_question_command(command).await,
        Some(Solve { command }) => cli.handle_solve_command(command).await,
        Some(Subject { command }) => cli.handle_subject_command(command).await,
        Some(Lecture { command }) => cli.handle_lecture_command(command).await,
        Some(Study { command }) => cli.handle_study_command(command).await,
        Some(Config { command }) => cli.handle_config_command(command).await,
        None => {
            cli.handle_assignment_command(args::AssignmentCommands::List(
                args::ListAssignmentsArgs {
                    all: false,
                    subject: None,
                    priority: None,
                    json: false,
                },
            ))
            .await
        }
    }
}
