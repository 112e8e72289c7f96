//! sshw CLI
//!
//! Usage: sshw [ALIAS] [OPTIONS]
//!
//! Without an alias (or with one that matches no host) the interactive
//! picker opens; the picked host is handed to `ssh`.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use sshw::config::{self, ColorMode, Settings};
use sshw::fs::sshw_home_dir;
use sshw::ui::output::Reporter;
use sshw::ui::picker::{self, FrameStyle};
use sshw::ui::terminal::{detect_capabilities, TerminalCapabilities};
use sshw::{find_alias, ssh, Node, SshwError};

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let caps = detect_capabilities();

    let code = match run(&cli, caps) {
        Ok(code) => code,
        Err(err) => {
            let color = cli
                .color
                .map_or(ColorMode::Auto, ColorMode::from)
                .enabled(caps.supports_color);
            Reporter::new(cli.verbose, color, caps.supports_unicode).print_error(&err);
            1
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli, caps: TerminalCapabilities) -> Result<i32> {
    let (mut settings, warnings) = Settings::load_or_default().context("loading settings")?;
    if let Some(page_size) = cli.page_size {
        settings.picker.page_size = usize::from(page_size);
    }
    if let Some(color) = cli.color {
        settings.output.color = color.into();
    }

    let style = FrameStyle {
        color: settings.output.color.enabled(caps.supports_color),
        unicode: settings.output.unicode && caps.supports_unicode,
        width: Some(usize::from(caps.width)),
    };
    let reporter = Reporter::new(cli.verbose, style.color, style.unicode);
    reporter.print_config_warnings(&warnings);

    let nodes = load_nodes(cli, &reporter)?;

    let alias_match = cli.alias.as_deref().and_then(|alias| {
        let found = find_alias(&nodes, alias);
        if found.is_none() {
            reporter.print_verbose(1, format!("no host with alias '{}', opening picker", alias));
        }
        found
    });

    let picked = match alias_match {
        Some(node) => Some(node),
        None => {
            if !caps.is_tty {
                return Err(SshwError::NotInteractive.into());
            }
            picker::choose(
                &nodes,
                &settings.picker.label,
                settings.picker.page_size,
                style,
            )?
        }
    };

    let Some(node) = picked else {
        return Ok(0);
    };

    if cli.copy_id {
        copy_id(node, &reporter)?;
        return Ok(0);
    }

    reporter.print_verbose(1, format!("ssh {}", ssh::login_args(node).join(" ")));
    let code = ssh::login(node).context("running ssh")?;
    Ok(code)
}

fn load_nodes(cli: &Cli, reporter: &Reporter) -> Result<Vec<Node>> {
    if cli.ssh_config {
        let path = config::default_ssh_config_path()?;
        reporter.print_verbose(1, format!("reading hosts from {}", path.display()));
        return Ok(config::load_ssh_config(&path)?);
    }

    let file = config::load_hosts(cli.config.as_deref())?;
    reporter.print_verbose(
        1,
        format!("loaded {} hosts from {}", file.nodes.len(), file.path.display()),
    );
    reporter.print_config_warnings(&file.warnings);
    Ok(file.nodes)
}

fn copy_id(node: &Node, reporter: &Reporter) -> Result<()> {
    let home = sshw_home_dir().ok_or(SshwError::HomeNotFound)?;
    let (path, key) = ssh::find_public_key(&home)?;
    reporter.print_verbose(1, format!("copying {}", path.display()));

    ssh::copy_id(node, &key)?;
    println!("public key copied to {}", ssh::display_target(node));
    Ok(())
}
