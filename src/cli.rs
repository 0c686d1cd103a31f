use crate::catalog::offline_cosmics;
use crate::config::constants;
use crate::error::{ConfigError, Result};
use crate::params;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Subcommand)]
#[command(version, about, long_about = None)]
pub enum Commands {
    /// Print the catalog as JSON
    Dump {
        /// Output path, stdout when omitted
        #[clap(short = 'o', long)]
        output_path: Option<PathBuf>,
    },

    /// List registered templates, modules and pipelines
    List,

    /// Show a pipeline's ordered stages and input wiring
    Describe {
        /// Pipeline name
        pipeline: String,
    },

    /// Validate input wiring across all pipelines
    Check,
}

/// dtcalib command
#[derive(Parser)]
#[command(about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

pub async fn dump_command(output_path: Option<PathBuf>) -> Result<()> {
    let registry = offline_cosmics()?;
    let json = serde_json::to_string_pretty(&registry.dump())?;

    match output_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, json).await?;
            info!("Catalog written to: {:?}", path);
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub async fn list_command() -> Result<()> {
    let registry = offline_cosmics()?;

    let mut template_names: Vec<&str> = registry.templates().map(|t| t.name()).collect();
    template_names.sort_by(|a, b| natord::compare(a, b));
    println!("templates:");
    for name in template_names {
        println!("  {name}");
    }

    let mut module_lines: Vec<String> = registry
        .modules()
        .map(|m| format!("{} ({})", m.label(), m.plugin()))
        .collect();
    module_lines.sort_by(|a, b| natord::compare(a, b));
    println!("modules:");
    for line in module_lines {
        println!("  {line}");
    }

    println!("pipelines:");
    for pipeline in registry.pipelines() {
        println!("  {} = {}", pipeline.name(), pipeline.labels().join(" + "));
    }
    Ok(())
}

pub async fn describe_command(name: String) -> Result<()> {
    let registry = offline_cosmics()?;
    let pipeline = registry
        .pipeline(&name)
        .ok_or_else(|| ConfigError::UnknownPipeline { name: name.clone() })?;

    println!("pipeline {} ({} stages)", pipeline.name(), pipeline.len());
    for (index, module) in pipeline.iter().enumerate() {
        println!("  {}. {} [{}]", index + 1, module.label(), module.plugin());
        for (field, target) in module.params().input_tags() {
            println!("       {field} <- {target}");
        }
    }
    Ok(())
}

pub async fn check_command() -> Result<()> {
    let registry = offline_cosmics()?;
    registry.check(constants::EXTERNAL_SOURCES)?;

    // The tag is campaign-specific and left empty in the catalog defaults
    if let Some(global_tag) = registry.module(constants::GLOBAL_TAG_LABEL) {
        match global_tag.params().get_typed(params::GLOBAL_TAG) {
            Some(tag) if !tag.is_empty() => {}
            _ => warn!(
                "Conditions module '{}' has no global tag set",
                constants::GLOBAL_TAG_LABEL
            ),
        }
    }

    let pipelines = registry.pipelines().count();
    info!("Input wiring resolved for {} pipelines", pipelines);
    Ok(())
}
