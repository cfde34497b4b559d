use anyhow::Context;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use clap::Parser;
use morelli::core::{load_settings, save_settings, settings_path};
use morelli::game::board::snapshot::serialize;
use morelli::game::board::BoardModel;
use morelli::game::events::NewGame;
use morelli::networking::{EngineLink, HttpEngineTransport};
use morelli::{BoardRenderPlugin, BoardSyncPlugin};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const WINDOW_WIDTH: u32 = 1366;
const WINDOW_HEIGHT: u32 = 768;

#[derive(Parser, Debug)]
#[command(
    name = "morelli",
    about = "Morelli board client: mirrors the logic engine's board and animates every change"
)]
struct Args {
    /// Engine base URL (overrides the settings file)
    #[arg(long)]
    engine_url: Option<String>,

    /// Settings file (defaults to settings.json in the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting board snapshot file; defaults to black pieces on the border
    #[arg(long)]
    board: Option<PathBuf>,

    /// Run without a window, logging to stdout
    #[arg(long)]
    headless: bool,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    write_config: bool,
}

/// Snapshot the game starts from; replayed on every new game
#[derive(Resource, Clone)]
struct StartingBoard(String);

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(settings_path);
    let mut settings = load_settings(&config_path);
    if let Some(url) = args.engine_url {
        settings.engine.base_url = url;
    }
    settings.validate()?;
    if args.write_config {
        save_settings(&settings, &config_path)?;
    }

    let starting = match &args.board {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading starting board {}", path.display()))?,
        None => serialize(BoardModel::morelli_default(settings.rows, settings.cols).codes()),
    };
    let transport = HttpEngineTransport::from_settings(&settings.engine)?;

    let mut app = App::new();
    if args.headless {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
        app.add_plugins(MinimalPlugins);
    } else {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Morelli".to_string(),
                resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(MeshPickingPlugin);
    }

    app.insert_resource(settings)
        .insert_resource(EngineLink::new(transport))
        .insert_resource(StartingBoard(starting))
        .add_plugins(BoardSyncPlugin)
        .add_systems(Startup, start_game)
        .add_systems(
            Update,
            restart_on_key.run_if(resource_exists::<ButtonInput<KeyCode>>),
        );

    if !args.headless {
        app.add_plugins(BoardRenderPlugin);
    }

    app.run();
    Ok(())
}

fn start_game(starting: Res<StartingBoard>, mut new_game: MessageWriter<NewGame>) {
    new_game.write(NewGame {
        starting: Some(starting.0.clone()),
    });
}

/// N starts a new game from the same starting board
fn restart_on_key(
    keys: Res<ButtonInput<KeyCode>>,
    starting: Res<StartingBoard>,
    mut new_game: MessageWriter<NewGame>,
) {
    if keys.just_pressed(KeyCode::KeyN) {
        new_game.write(NewGame {
            starting: Some(starting.0.clone()),
        });
    }
}
