use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use creaturemon::config::Config;
use creaturemon::logging::init_tracing;
use creaturemon::model::{AttributeKind, AttributeStore, Creature};
use creaturemon::screens::add_creature::AddCreatureIntent;
use creaturemon::screens::all_creatures::AllCreaturesIntent;
use creaturemon::session::Session;

/// Creature roster driven through the MVI screen pipelines
#[derive(Parser, Debug)]
#[command(name = "creaturemon")]
#[command(version)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and print every stored creature
    List,
    /// Delete every stored creature
    Clear,
    /// Create and save a new creature
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        avatar: u32,
        /// Index into the intelligence levels (see `attributes`)
        #[arg(long, default_value_t = 0)]
        intelligence: usize,
        /// Index into the strength levels
        #[arg(long, default_value_t = 0)]
        strength: usize,
        /// Index into the endurance levels
        #[arg(long, default_value_t = 0)]
        endurance: usize,
    },
    /// Print the selectable attribute levels
    Attributes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    init_tracing(&config.logging);

    match cli.command {
        Command::List => list(&config).await,
        Command::Clear => clear(&config).await,
        Command::Add {
            name,
            avatar,
            intelligence,
            strength,
            endurance,
        } => add(&config, name, avatar, [intelligence, strength, endurance]).await,
        Command::Attributes => {
            print_attributes();
            Ok(())
        }
    }
}

async fn list(config: &Config) -> Result<()> {
    let session = Session::from_config(config)?;
    let store = session.all_creatures().pipeline().store().clone();
    session
        .all_creatures()
        .process_intent(AllCreaturesIntent::LoadAll)?;
    session.finish().await;

    let state = store.current();
    if let Some(error) = state.error {
        bail!("Failed to load creatures: {}", error);
    }
    if state.creatures.is_empty() {
        println!("No creatures yet.");
    }
    for creature in &state.creatures {
        println!("{}", describe(creature));
    }
    Ok(())
}

async fn clear(config: &Config) -> Result<()> {
    let session = Session::from_config(config)?;
    let store = session.all_creatures().pipeline().store().clone();
    session
        .all_creatures()
        .process_intent(AllCreaturesIntent::ClearAll)?;
    session.finish().await;

    if let Some(error) = store.current().error {
        bail!("Failed to clear creatures: {}", error);
    }
    println!("All creatures cleared.");
    Ok(())
}

/// Replays the form edits a user would make, then saves.
async fn add(config: &Config, name: String, avatar: u32, levels: [usize; 3]) -> Result<()> {
    let [intelligence, strength, endurance] = levels;
    let session = Session::from_config(config)?;
    let view_model = session.add_creature();
    let store = view_model.pipeline().store().clone();
    for intent in [
        AddCreatureIntent::Avatar { avatar },
        AddCreatureIntent::Name { name: name.clone() },
        AddCreatureIntent::Intelligence {
            index: intelligence,
        },
        AddCreatureIntent::Strength { index: strength },
        AddCreatureIntent::Endurance { index: endurance },
        AddCreatureIntent::Save {
            avatar,
            name,
            intelligence,
            strength,
            endurance,
        },
    ] {
        view_model.process_intent(intent)?;
    }
    session.finish().await;

    let state = store.current();
    if let Some(error) = state.error {
        bail!("Failed to save creature: {}", error);
    }
    if !state.is_save_complete {
        bail!("Save did not complete");
    }
    println!("Saved {}", describe(&state.creature));
    Ok(())
}

fn print_attributes() {
    let store = AttributeStore;
    for kind in AttributeKind::ALL {
        println!("{}:", kind);
        for (index, level) in store.levels(kind).iter().enumerate() {
            println!("  {}  {:<8} {}", index, level.name, level.value);
        }
    }
}

fn describe(creature: &Creature) -> String {
    format!(
        "{} (avatar {}) hp={} int={} str={} end={}",
        creature.name,
        creature.avatar,
        creature.hit_points,
        creature.attributes.intelligence,
        creature.attributes.strength,
        creature.attributes.endurance
    )
}
