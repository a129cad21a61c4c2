//! Generate `manifest.json` for client folders under `<PUBLIC_DIR>/clients/`.
//!
//! Scans each client directory for image files and writes a manifest the
//! gallery page uses to load images and the preview injector reads for
//! social metadata.
//!
//! Usage:
//!     generate-manifests                  # Process all clients
//!     generate-manifests lushcamp acme    # Process specific clients

use std::path::Path;
use std::process::ExitCode;

use gallery_server::config::Config;
use gallery_server::scan;

fn main() -> ExitCode {
    let config = Config::from_env();
    let base_dir = config.public_dir.join("clients");

    if !base_dir.is_dir() {
        eprintln!("Error: client directory not found: {}", base_dir.display());
        eprintln!("Make sure you have a '{}/clients/' directory.", config.public_dir.display());
        return ExitCode::FAILURE;
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let client_dirs = if args.is_empty() {
        match list_client_dirs(&base_dir) {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("Error: could not list {}: {e}", base_dir.display());
                return ExitCode::FAILURE;
            }
        }
    } else {
        args
    };

    if client_dirs.is_empty() {
        println!("No client directories found in: {}", base_dir.display());
        return ExitCode::SUCCESS;
    }

    println!("Generating manifests for {} client(s)...\n", client_dirs.len());

    let mut success = 0;
    for client in &client_dirs {
        let client_path = base_dir.join(client);
        if !client_path.is_dir() {
            println!("  ✗ '{client}' is not a directory, skipping");
            continue;
        }

        match scan::scan_client(&client_path, client) {
            Ok(Some(manifest)) => {
                if let Err(e) = scan::write_manifest(&client_path, &manifest) {
                    println!("  ✗ {client}: failed to write manifest: {e}");
                    continue;
                }
                println!("  ✓ {client}: {} image(s) -> manifest.json", manifest.images.len());
                success += 1;
            }
            Ok(None) => println!("  ⚠ No images found in '{client}', skipping"),
            Err(e) => println!("  ✗ {client}: scan failed: {e}"),
        }
    }

    println!("\nDone! Generated {success}/{} manifest(s).", client_dirs.len());
    ExitCode::SUCCESS
}

fn list_client_dirs(base_dir: &Path) -> std::io::Result<Vec<String>> {
    let mut dirs: Vec<String> = std::fs::read_dir(base_dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    dirs.sort();
    Ok(dirs)
}
