//! drape - style recommendations from the command line
//!
//! Photos are JSON files holding what the vision capability would return:
//! observation arrays for onboarding, a breakdown object for outfits.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use drape_common::config::{
    config_file_path, prepare_root_folder, resolve_root_folder_from, ROOT_ENV_VAR,
};
use drape_engine::config::DrapeConfig;
use drape_engine::extractors::FileExtractor;
use drape_engine::models::{Occasion, Profile, RecommendationBundle, RemarkGroup};
use drape_engine::store::{SqliteHistoryStore, SqliteProfileStore};
use drape_engine::{OnboardOptions, PhotoInput, Pipeline, Synthesizer};

#[derive(Parser, Debug)]
#[command(name = "drape", version, about = "Personal style recommendations")]
struct Cli {
    /// Root folder holding the database (overrides DRAPE_ROOT and the config file)
    #[arg(long, global = true)]
    root_folder: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "DRAPE_CONFIG")]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the profile from onboarding photos
    Onboard {
        /// Photo as <kind>=<observations.json>; repeat for each photo
        #[arg(long = "photo", required = true)]
        photos: Vec<PhotoInput>,

        /// Build a new version over the stored profile
        #[arg(long)]
        refresh: bool,

        /// Fill unresolved required attributes with neutral defaults
        #[arg(long)]
        allow_incomplete: bool,
    },

    /// Analyze an outfit photo
    Analyze {
        /// Outfit breakdown JSON
        #[arg(long)]
        outfit: PathBuf,

        /// Occasion to dress for (defaults to the detected one)
        #[arg(long)]
        occasion: Option<Occasion>,
    },

    /// Show recent analyses
    History {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Show the stored profile
    Profile,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DrapeConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting drape v{}", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.clone().or_else(|| config_file_path().ok());
    let root = resolve_root_folder_from(cli.root_folder.as_deref(), ROOT_ENV_VAR, config_path.as_deref());
    let db_path = prepare_root_folder(&root)?;
    info!("Database path: {}", db_path.display());
    let pool = drape_common::db::init_database(&db_path).await?;

    let pipeline = Pipeline::new(
        Arc::new(FileExtractor::new()),
        Arc::new(SqliteProfileStore::new(pool.clone())),
        Arc::new(SqliteHistoryStore::new(pool)),
    )
    .with_synthesizer(Synthesizer::new(config.scoring));

    match cli.command {
        Command::Onboard {
            photos,
            refresh,
            allow_incomplete,
        } => {
            let options = OnboardOptions {
                refresh,
                allow_incomplete,
            };
            let profile = pipeline.onboard(&photos, options).await?;
            print_profile(&profile, cli.json)?;
        }
        Command::Analyze { outfit, occasion } => {
            let bundle = pipeline.analyze(&outfit, occasion).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&bundle)?);
            } else {
                print_bundle(&bundle);
            }
        }
        Command::History { limit } => {
            let bundles = pipeline.history(limit).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&bundles)?);
            } else if bundles.is_empty() {
                println!("No analyses yet.");
            } else {
                for b in &bundles {
                    println!(
                        "{}  {}  {:<24} overall {:>4.1}  {} remark(s), {} critical",
                        b.created_at.format("%Y-%m-%d %H:%M"),
                        b.id,
                        b.occasion.as_str(),
                        b.scores.overall,
                        b.remarks.len(),
                        b.critical_count()
                    );
                }
            }
        }
        Command::Profile => match pipeline.profile().await? {
            Some(profile) => print_profile(&profile, cli.json)?,
            None => println!("No profile stored for '{}'. Run `drape onboard` first.", pipeline.profile_id()),
        },
    }

    Ok(())
}

fn print_profile(profile: &Profile, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }
    println!(
        "Profile '{}' v{} ({} photos, {} season)",
        profile.profile_id, profile.version, profile.photos_used, profile.seasonal_type
    );
    for (attribute, value) in &profile.attributes {
        let confidence = profile.confidence(*attribute).unwrap_or_default();
        println!("  {:<16} {:<20} {:.2}", attribute.as_str(), value, confidence);
    }
    Ok(())
}

fn print_bundle(bundle: &RecommendationBundle) {
    println!("Occasion: {}", bundle.occasion.label());
    println!(
        "Scores: overall {:.1} | outfit {} | grooming {} | accessory {} | footwear {}",
        bundle.scores.overall,
        bundle.scores.outfit,
        bundle.scores.grooming,
        bundle.scores.accessory,
        bundle.scores.footwear
    );
    for group in RemarkGroup::ALL {
        let remarks: Vec<_> = bundle.remarks_in(group).collect();
        if remarks.is_empty() {
            continue;
        }
        println!("\n{:?}", group);
        for r in remarks {
            println!("  {}. [{:?}] {}: {}", r.priority_order, r.severity, r.element, r.issue);
            println!("     fix: {}", r.fix);
        }
    }
    println!("\nWear: {}", bundle.palette.do_colors.join(", "));
    println!("Avoid: {}", bundle.palette.avoid_colors.join(", "));
    if !bundle.palette.occasion_colors.is_empty() {
        println!("For this occasion: {}", bundle.palette.occasion_colors.join(", "));
    }
    if !bundle.wardrobe_gaps.is_empty() {
        println!("\nWorth owning:");
        for gap in &bundle.wardrobe_gaps {
            let occasions: Vec<_> = gap.occasions.iter().map(|o| o.label()).collect();
            println!("  - {} ({})", gap.item, occasions.join(", "));
        }
    }
    let grooming = &bundle.grooming;
    println!("\nGrooming ({} face):", grooming.face_shape);
    println!("  haircut: {}", grooming.recommended_haircut);
    if !grooming.haircuts_to_avoid.is_empty() {
        println!("  avoid: {}", grooming.haircuts_to_avoid.join(", "));
    }
    println!("  beard: {}", grooming.recommended_beard);
    println!("  brows: {}", grooming.eyebrow_recommendation);
    println!("  products: {}", grooming.styling_products.join(", "));
    println!("  skincare: {}", grooming.skincare_categories.join(", "));
    println!("Print scale: {}", bundle.pattern_scale.as_str().replace('_', " "));
    if let Some(path) = &bundle.artifact_path {
        println!("\nPreview: {}", path.display());
    }
}
