use clap::{Parser, Subcommand};
use eframe::egui;
use show_shelf::{rename_images, HttpCatalog, ImageStore, RenameEvent, ShowShelfApp};
use std::path::{Path, PathBuf};
use std::process;

/// Browse and manage a local catalog of shows.
#[derive(Parser)]
#[command(name = "show-shelf", version, about)]
struct Cli {
    /// Base URL of the companion show server
    #[arg(long, default_value = HttpCatalog::DEFAULT_BASE_URL)]
    server_url: String,

    /// Directory served statically by the companion server; show images are
    /// stored in its images/ subdirectory
    #[arg(long, default_value = "public")]
    public_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Back up and sequentially rename the image files in a directory
    Rename {
        /// Directory containing the image files
        #[arg(default_value = "images")]
        directory: PathBuf,
    },
}

/// Handles progress events and prints formatted output to stdout
fn handle_rename_event(event: RenameEvent) {
    match event {
        RenameEvent::Renamed { from, to } => {
            println!("Renamed: {from} -> {to}");
        }
    }
}

fn run_rename(directory: &Path) {
    if let Err(e) = rename_images(directory, handle_rename_event) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_gui(server_url: String, public_dir: PathBuf) {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Show List",
        native_options,
        Box::new(move |_cc| {
            let catalog = HttpCatalog::new(server_url);
            let images = ImageStore::new(public_dir);
            Ok(Box::new(ShowShelfApp::new(catalog, images)))
        }),
    );

    if let Err(e) = result {
        eprintln!("Error: failed to start the interface: {e}");
        process::exit(1);
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Rename { directory }) => run_rename(&directory),
        None => run_gui(cli.server_url, cli.public_dir),
    }
}
