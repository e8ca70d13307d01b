use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mailpair",
    version,
    about = "Email template pair manifest generator"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Root directory containing the real/ and fake/ template folders"
    )]
    pub root: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Generate {
        #[arg(
            long,
            default_value_t = false,
            help = "Sort pairs lexicographically instead of directory-listing order"
        )]
        sort: bool,
    },
    List {
        #[arg(long, default_value_t = false)]
        sort: bool,
    },
    Check,
}
