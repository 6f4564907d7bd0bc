//! Command-line front end for the inventory core.
//!
//! # Responsibility
//! - Stand in for the presentation layer: parse input, call the core, print.
//! - Keep all validation and persistence inside `hotelinv_core`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hotelinv_core::{
    init_logging, HotelDraft, HotelFilter, InventoryConfig, InventoryService, RoomDraft,
    RoomFilter,
};
use log::info;

mod output;

#[derive(Parser)]
#[command(name = "hotelinv")]
#[command(about = "Manage hotel and room inventory stored as JSON files", long_about = None)]
struct Cli {
    /// Directory holding hotels.json and rooms.json (overrides HOTELINV_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error (overrides HOTELINV_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage hotels
    Hotel {
        #[command(subcommand)]
        action: HotelAction,
    },
    /// Manage rooms
    Room {
        #[command(subcommand)]
        action: RoomAction,
    },
    /// Print the core version
    Version,
}

#[derive(Subcommand)]
enum HotelAction {
    List,
    Add(HotelFields),
    Update {
        id: u64,
        #[command(flatten)]
        fields: HotelFields,
    },
    Delete {
        id: u64,
    },
    Search {
        /// Matched against name, city and address
        text: Option<String>,
        #[arg(long)]
        stars: Option<u8>,
        #[arg(long)]
        pool: Option<bool>,
    },
}

#[derive(Args)]
struct HotelFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    city: String,
    #[arg(long)]
    address: String,
    #[arg(long)]
    stars: u8,
    #[arg(long)]
    pool: bool,
}

impl HotelFields {
    fn draft(&self) -> HotelDraft {
        HotelDraft::new(
            self.name.as_str(),
            self.city.as_str(),
            self.address.as_str(),
            self.stars,
            self.pool,
        )
    }
}

#[derive(Subcommand)]
enum RoomAction {
    List,
    Add(RoomFields),
    Update {
        id: u64,
        #[command(flatten)]
        fields: RoomFields,
    },
    Delete {
        id: u64,
    },
    Search {
        /// Matched against room number, room type and hotel label
        text: Option<String>,
        #[arg(long)]
        hotel: Option<u64>,
        #[arg(long)]
        available: Option<bool>,
        #[arg(long = "type")]
        room_type: Option<String>,
    },
    /// Show availability and room type counts
    Stats,
}

#[derive(Args)]
struct RoomFields {
    #[arg(long)]
    hotel: u64,
    #[arg(long)]
    number: String,
    #[arg(long = "type")]
    room_type: String,
    #[arg(long, allow_negative_numbers = true)]
    price: f64,
    /// Mark the room as occupied
    #[arg(long)]
    occupied: bool,
}

impl RoomFields {
    fn draft(&self) -> RoomDraft {
        RoomDraft::new(
            self.hotel,
            self.number.as_str(),
            self.room_type.as_str(),
            self.price,
        )
        .available(!self.occupied)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).context("failed to initialize logging")?;
    }

    let mut service = InventoryService::open(&config).with_context(|| {
        format!("failed to load inventory from `{}`", config.data_dir.display())
    })?;
    info!(
        "event=cli_start module=cli status=ok hotels={} rooms={}",
        service.hotels().len(),
        service.rooms().len()
    );
    service.on_hotels_changed(|| println!("hotels changed"));
    service.on_rooms_changed(|| println!("rooms changed"));

    match cli.command {
        Commands::Hotel { action } => run_hotel(&mut service, action)?,
        Commands::Room { action } => run_room(&mut service, action)?,
        Commands::Version => println!("hotelinv_core {}", hotelinv_core::core_version()),
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<InventoryConfig> {
    let mut config = InventoryConfig::from_env();
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    if let Some(level) = &cli.log_level {
        config = config.with_log_level(level.as_str());
    }
    config.validate()?;
    Ok(config)
}

fn run_hotel(service: &mut InventoryService, action: HotelAction) -> Result<()> {
    match action {
        HotelAction::List => output::print_hotels(service.hotels().iter()),
        HotelAction::Add(fields) => {
            let id = service.add_hotel(&fields.draft())?;
            println!("added hotel {id}");
        }
        HotelAction::Update { id, fields } => {
            service.update_hotel(id, &fields.draft())?;
            println!("updated hotel {id}");
        }
        HotelAction::Delete { id } => {
            service.delete_hotel(id)?;
            println!("deleted hotel {id}");
        }
        HotelAction::Search { text, stars, pool } => {
            let filter = HotelFilter {
                text,
                stars,
                has_pool: pool,
            };
            output::print_hotels(service.search_hotels(&filter).into_iter());
        }
    }
    Ok(())
}

fn run_room(service: &mut InventoryService, action: RoomAction) -> Result<()> {
    match action {
        RoomAction::List => output::print_rooms(&*service, service.rooms().iter()),
        RoomAction::Add(fields) => {
            let id = service.add_room(&fields.draft())?;
            println!("added room {id}");
        }
        RoomAction::Update { id, fields } => {
            service.update_room(id, &fields.draft())?;
            println!("updated room {id}");
        }
        RoomAction::Delete { id } => {
            service.delete_room(id)?;
            println!("deleted room {id}");
        }
        RoomAction::Search {
            text,
            hotel,
            available,
            room_type,
        } => {
            let filter = RoomFilter {
                text,
                hotel_id: hotel,
                is_available: available,
                room_type,
            };
            output::print_rooms(&*service, service.search_rooms(&filter).into_iter());
        }
        RoomAction::Stats => output::print_stats(&service.room_stats()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, RoomAction};
    use clap::Parser;

    #[test]
    fn negative_price_reaches_the_core() {
        let cli = Cli::try_parse_from([
            "hotelinv", "room", "add", "--hotel", "1", "--number", "101", "--type", "Suite",
            "--price", "-5",
        ])
        .expect("negative price should parse");

        let Commands::Room {
            action: RoomAction::Add(fields),
        } = cli.command
        else {
            panic!("expected room add");
        };
        assert_eq!(fields.draft().price_per_night, -5.0);
        assert!(fields.draft().normalize().is_err());
    }
}
