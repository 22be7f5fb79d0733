use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Arg, Command};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use borderland_inventory::config::SessionConfig;
use borderland_inventory::console::{self, ConsoleCommand};
use borderland_inventory::inventory::InventoryEvent;
use borderland_inventory::item::ItemRegistry;
use borderland_inventory::prefs::JsonPreferences;
use borderland_inventory::session::Session;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("borderland-inventory")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hotbar inventory debug console")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .help("Session config JSON file"),
        )
        .arg(
            Arg::new("prefs")
                .long("prefs")
                .takes_value(true)
                .help("Preferences file (defaults to the platform config directory)"),
        )
        .arg(
            Arg::new("capacity")
                .long("capacity")
                .takes_value(true)
                .help("Number of hotbar slots"),
        )
        .get_matches();

    let mut config = match matches.value_of("config") {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    if let Some(capacity) = matches.value_of("capacity") {
        config.capacity = capacity.parse()?;
    }
    if let Some(path) = matches.value_of("prefs") {
        config.preferences_path = Some(PathBuf::from(path));
    }

    TermLogger::init(
        config.level_filter()?,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let prefs_path = match &config.preferences_path {
        Some(path) => path.clone(),
        None => JsonPreferences::default_path()?,
    };
    let prefs = JsonPreferences::open(&prefs_path)?;

    let registry = match &config.items_path {
        Some(path) => ItemRegistry::load(path)?,
        None => ItemRegistry::create_default(),
    };

    let mut session = Session::new(&config, registry, prefs)?;

    // Stand-in for the hotbar UI and held-item renderer
    session.inventory_mut().subscribe(|event, contents| match event {
        InventoryEvent::InventoryChanged => log::debug!("Hotbar contents changed"),
        InventoryEvent::EquippedChanged => log::info!(
            "Holding: {}",
            if contents.equipped_item().is_empty() {
                "nothing"
            } else {
                contents.equipped_item().name.as_str()
            }
        ),
    });

    println!("Type 'help' for commands.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match ConsoleCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        if command == ConsoleCommand::Quit {
            break;
        }

        match console::execute(&mut session, command) {
            Ok(output) => println!("{}", output.trim_end()),
            Err(err) => println!("{}", err),
        }
        stdout.flush()?;
    }

    if let Err(err) = session.save_preferences() {
        log::error!("Failed to save preferences: {}", err);
    }
    println!("Bye~");
    Ok(())
}
