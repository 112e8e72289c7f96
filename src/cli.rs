use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sshw::ColorMode;

/// sshw - pick an SSH host from a searchable list and log in
#[derive(Parser, Debug)]
#[command(name = "sshw")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Hosts are read from ~/.sshw.yml unless --config or -s is given.")]
pub struct Cli {
    /// Log in to the host with this alias without opening the picker
    pub alias: Option<String>,

    /// Use hosts from ~/.ssh/config instead of the host file
    #[arg(short = 's', long = "ssh-config")]
    pub ssh_config: bool,

    /// Copy your SSH public key to the selected host instead of logging in
    #[arg(long)]
    pub copy_id: bool,

    /// Host file to read
    #[arg(short, long, value_name = "PATH", conflicts_with = "ssh_config")]
    pub config: Option<PathBuf>,

    /// Number of hosts shown per page
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: Option<u16>,

    /// When to use colors
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}
