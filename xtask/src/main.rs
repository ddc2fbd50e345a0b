use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(author, version, about = "Project automation commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run cargo nextest with default configuration
    Nextest {
        #[arg(long)]
        profile: Option<String>,
        #[arg(long)]
        release: bool,
    },
    /// Check that every bundled TOML asset parses
    CheckAssets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Nextest { profile, release } => run_nextest(profile, release)?,
        Commands::CheckAssets => check_assets(&workspace_root())?,
    }
    Ok(())
}

fn run_nextest(profile: Option<String>, release: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("nextest").arg("run").arg("--workspace");
    if let Some(profile) = profile {
        cmd.arg("--profile").arg(profile);
    }
    if release {
        cmd.arg("--release");
    }
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("cargo nextest run failed");
    }
    Ok(())
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn check_assets(root: &Path) -> Result<()> {
    let mut checked = 0;
    for entry in WalkDir::new(root.join("crates")) {
        let entry = entry?;
        let path = entry.path();
        let in_assets = path
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|name| name == "assets");
        if !in_assets || path.extension().is_none_or(|ext| ext != "toml") {
            continue;
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str::<toml::Table>(&contents)
            .with_context(|| format!("invalid TOML in {}", path.display()))?;
        println!("ok {}", path.display());
        checked += 1;
    }
    if checked == 0 {
        anyhow::bail!("no TOML assets found under {}", root.display());
    }
    Ok(())
}
