use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use std::{
    env,
    io::{self, BufRead},
    path::PathBuf,
    thread,
    time::Duration,
};

use dronecam::{
    resources::{CommandSender, SimConfig},
    Command, FlightPlugin,
};

/// Runs the simulation without a window, reading one command per line from stdin.
///
/// Usage: `dronecam_headless [config.yaml]`. Without an argument the per-user config is
/// used when present, otherwise the defaults.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(env::args().nth(1).map(PathBuf::from))?;

    let mut app = App::new();
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / 60.0,
        ))),
    )
    .add_plugins(LogPlugin::default())
    .add_plugins(FlightPlugin::new(config));

    let sender = app.world().resource::<CommandSender>().clone();
    thread::spawn(move || read_commands(sender));

    app.run();
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<SimConfig, Box<dyn std::error::Error>> {
    let path = path.or_else(|| SimConfig::default_path().filter(|p| p.exists()));
    match path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            Ok(SimConfig::load(&path)?)
        }
        None => Ok(SimConfig::default()),
    }
}

fn read_commands(sender: CommandSender) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if sender.send(command).is_err() {
                    // The app has exited.
                    return;
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }
    // An error means the app has already exited.
    sender.send(Command::Shutdown).ok();
}
