mod cli;
mod manifest;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use manifest::ManifestError;
use output::{print_one, print_out, JsonOut};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        report_failure(cli.json, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate { sort } => {
            let manifest = manifest::build_manifest(&cli.root, *sort)?;
            manifest::write_manifest(&cli.root, &manifest)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: &manifest
                    })?
                );
            } else {
                println!("manifest.json generated with the following pairs:");
                for name in &manifest.file_pairs {
                    println!("  - {}", name);
                }
            }
        }
        Commands::List { sort } => {
            let manifest = manifest::build_manifest(&cli.root, *sort)?;
            print_out(cli.json, &manifest.file_pairs, |name| name.clone())?;
        }
        Commands::Check => {
            manifest::check_manifest(&cli.root)?;
            print_one(cli.json, "current", |_| "manifest up to date".to_string())?;
        }
    }
    Ok(())
}

fn error_code(e: &anyhow::Error) -> &'static str {
    match e.downcast_ref::<ManifestError>() {
        Some(ManifestError::FolderNotFound(_)) => "FOLDER_NOT_FOUND",
        Some(ManifestError::ManifestNotFound(_)) => "MANIFEST_NOT_FOUND",
        Some(ManifestError::StaleManifest { .. }) => "STALE_MANIFEST",
        None => "IO",
    }
}

fn report_failure(json: bool, e: &anyhow::Error) {
    if json {
        let out = serde_json::json!({
            "ok": false,
            "error": { "code": error_code(e), "message": e.to_string() }
        });
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("error: {}", e),
        }
    } else {
        eprintln!("error: {}", e);
    }
}
