//! armcad - builds the robotic arm parts from the command line

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arm_cad::{Aabb, Document};
use arm_parts::{DesignParams, RecipeError, all_recipes, find_recipe, run_recipe};
use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "armcad")]
#[command(about = "Parametric part builder for a 3D printed robotic arm", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available part recipes
    List,
    /// Build a part and optionally save its document
    Build {
        /// Recipe name, see `armcad list`
        recipe: String,
        /// RON file with design parameters (defaults when omitted)
        #[arg(short, long)]
        params: Option<PathBuf>,
        /// Output file (.json for JSON, anything else for RON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Display the objects of a saved document
    Info {
        /// Path to the saved document
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "armcad=info,arm_cad=info,arm_parts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List => list_recipes(),
        Commands::Build {
            recipe,
            params,
            output,
        } => {
            build_part(&recipe, params.as_deref(), output.as_deref())?;
        }
        Commands::Info { file } => show_info(&file)?,
    }

    Ok(())
}

fn list_recipes() {
    for recipe in all_recipes() {
        println!("{:<30} {}", recipe.name(), recipe.description());
    }
}

fn load_params(path: Option<&Path>) -> Result<DesignParams> {
    match path {
        Some(path) => DesignParams::load(path)
            .with_context(|| format!("Failed to load parameters from {}", path.display())),
        None => Ok(DesignParams::default()),
    }
}

/// Run a recipe in a fresh document, returning the document and its parts
fn build_part(
    name: &str,
    params: Option<&Path>,
    output: Option<&Path>,
) -> Result<(Document, Vec<Uuid>)> {
    let recipe = find_recipe(name).ok_or_else(|| RecipeError::UnknownRecipe(name.to_string()))?;
    let params = load_params(params)?;

    let mut doc = Document::new(recipe.name());
    let parts = run_recipe(recipe.as_ref(), &mut doc, &params)
        .with_context(|| format!("Failed to build '{}'", recipe.name()))?;

    for &part in &parts {
        let object = doc.object(part)?;
        let bounds = doc.bounds(part)?;
        tracing::info!("{} ({}): {}", object.label, object.name, format_bounds(&bounds));
    }

    if let Some(output) = output {
        write_document(&doc, output)?;
        println!("Saved {} object(s) to {}", doc.len(), output.display());
    }

    Ok((doc, parts))
}

fn write_document(doc: &Document, path: &Path) -> Result<()> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        std::fs::write(path, doc.to_json()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    } else {
        doc.save(path)?;
    }
    Ok(())
}

fn show_info(file: &Path) -> Result<()> {
    let mut doc = Document::load(file)
        .with_context(|| format!("Failed to load document {}", file.display()))?;
    doc.recompute()?;

    println!("Document: {}", doc.name());
    println!("Objects: {}", doc.len());
    for object in doc.objects() {
        let bounds = doc
            .bounds(object.id)
            .map(|b| format_bounds(&b))
            .unwrap_or_else(|e| format!("<{e}>"));
        println!(
            "  {:<24} {:<10} {:<32} {}",
            object.name,
            object.kind.type_name(),
            object.label,
            bounds
        );
    }
    Ok(())
}

fn format_bounds(bounds: &Aabb) -> String {
    if bounds.is_empty() {
        return "empty".to_string();
    }
    let (min, max) = (bounds.min, bounds.max);
    format!(
        "[{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
        min.x, min.y, min.z, max.x, max.y, max.z
    )
}
