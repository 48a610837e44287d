mod error;
mod font;
mod food;
mod game;
mod input;
mod rendering;
mod snake;
mod ui;

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_vector_shapes::prelude::*;

use game::{Cli, GameOptions, GamePlugin, GameSet, WINDOW_MARGIN};
use input::InputPlugin;
use rendering::RenderingPlugin;
use ui::UiPlugin;

fn main() {
    let options = GameOptions::from_cli(&Cli::from_env());
    let level = if options.verbose { Level::DEBUG } else { Level::INFO };

    App::new()
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        resolution: WindowResolution::new(
                            (options.width as f32 + WINDOW_MARGIN) as u32,
                            (options.height as f32 + WINDOW_MARGIN) as u32,
                        ),
                        title: "Wrap Snake".to_string(),
                        ..Default::default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level,
                    ..default()
                }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(options)
        .configure_sets(
            Update,
            (GameSet::Input, GameSet::Simulate, GameSet::Present).chain(),
        )
        .add_plugins((InputPlugin, GamePlugin, RenderingPlugin, UiPlugin))
        .run();
}
