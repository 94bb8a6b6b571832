use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::indexer::write_search_index;
use crate::parsers::parse_dump;
use crate::site::generate_site;
use crate::site::pages::format_dateline;

#[derive(Parser)]
#[command(name = "forum-archiver")]
#[command(version = "0.1.0")]
#[command(about = "Convert a forum SQL dump into a static, searchable website", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a SQL dump into a static website
    Build {
        /// Path to the SQL dump file
        sql_file: PathBuf,
        /// Output directory for the generated site
        #[arg(long, default_value = "website")]
        output: PathBuf,
        /// Directory holding the attachment files referenced by posts
        #[arg(long, default_value = "attachments")]
        attachments: PathBuf,
    },
    /// Build the client-side search index from a generated site
    Index {
        /// Directory of a previously generated site
        #[arg(long, default_value = "website")]
        site: PathBuf,
    },
    /// Show statistics about a SQL dump
    Stats {
        /// Path to the SQL dump file
        sql_file: PathBuf,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Build { sql_file, output, attachments }) => {
            build(sql_file, output, attachments)?;
        }
        Some(Commands::Index { site }) => {
            write_search_index(site)?;
        }
        Some(Commands::Stats { sql_file }) => {
            show_stats(sql_file)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn read_dump(sql_file: &Path) -> Result<String> {
    fs::read_to_string(sql_file)
        .with_context(|| format!("Failed to read dump file {}", sql_file.display()))
}

fn build(sql_file: &Path, output: &Path, attachments: &Path) -> Result<()> {
    let content = read_dump(sql_file)?;
    let catalog = parse_dump(&content);
    generate_site(&catalog, output, attachments)?;

    println!("Site generated in {}", output.display());
    println!("Run `forum-archiver index --site {}` to build the search index", output.display());
    Ok(())
}

fn show_stats(sql_file: &Path) -> Result<()> {
    let content = read_dump(sql_file)?;
    let catalog = parse_dump(&content);

    println!("Forum Dump Statistics");
    println!("================================");
    println!("Forums: {}", catalog.forums.len());
    println!("Posts: {}", catalog.posts.len());
    println!("Threads: {}", catalog.thread_count());
    println!("Attachments: {}", catalog.attachments.len());

    if let Some(oldest) = catalog.posts.iter().map(|p| p.timestamp).min() {
        println!("Oldest post: {}", format_dateline(oldest, "%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = catalog.posts.iter().map(|p| p.timestamp).max() {
        println!("Newest post: {}", format_dateline(newest, "%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
