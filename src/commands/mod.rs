pub mod provision;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    catalog::{builtin, load_catalog_file, schema::catalog_schema},
    core::{config::ProvisionerConfig, errors::AppResult, types::CatalogEntry},
};

#[derive(Parser, Debug)]
#[command(name = "lessonart", version, about = "Lesson card thumbnail provisioner")]
pub struct Cli {
    #[arg(long, global = true, help = "Output directory for images and sources.json")]
    pub out_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "TrueType font used for placeholder text")]
    pub font: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Draw the built-in placeholder subject cards.
    Placeholders,
    /// Download the built-in Wikimedia images verbatim.
    Downloads,
    /// Fetch the built-in Commons pages and shrink them to card size.
    Commons,
    /// Provision a catalog read from a JSON file.
    Run {
        #[arg(long)]
        catalog: PathBuf,
    },
    /// Print the JSON Schema of the catalog file format.
    Schema,
}

impl Cli {
    /// Environment config with command-line overrides applied.
    pub fn config(&self) -> ProvisionerConfig {
        let mut config = ProvisionerConfig::from_env();
        if let Some(dir) = &self.out_dir {
            config.output_dir = dir.clone();
        }
        if let Some(font) = &self.font {
            config.font_path = Some(font.clone());
        }
        config
    }
}

fn catalog_for(command: &Commands) -> AppResult<Vec<CatalogEntry>> {
    Ok(match command {
        Commands::Placeholders => builtin::placeholders(),
        Commands::Downloads => builtin::downloads(),
        Commands::Commons => builtin::commons(),
        Commands::Run { catalog } => load_catalog_file(catalog)?,
        Commands::Schema => Vec::new(),
    })
}

pub async fn dispatch(cli: Cli) -> AppResult<()> {
    if cli.command == Commands::Schema {
        println!("{}", serde_json::to_string_pretty(&catalog_schema()?)?);
        return Ok(());
    }

    let config = cli.config();
    let catalog = catalog_for(&cli.command)?;
    let summary = provision::provision(&config, &catalog).await?;

    println!();
    println!(
        "Produced {} of {} images in {}",
        summary.produced,
        summary.attempted,
        config.output_dir.display()
    );
    if !summary.failed.is_empty() {
        println!("Skipped: {}", summary.failed.join(", "));
    }
    println!("Sources saved to {}", summary.provenance_path.display());
    Ok(())
}
