//! ipx-ifcache: Virtual IPX Interface Cache
//!
//! Entry point for the ipx-ifcache diagnostic tool.

use std::process::ExitCode;

use ipx_ifcache::config::{FileStore, write_default_config};

mod app;

use app::{Cli, Command, exit_code, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    setup_tracing(cli.verbose);

    let store = match load_store(&cli) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            eprintln!("\nRun 'ipx-ifcache init' to generate a configuration template.");
            return exit_code::CONFIG_ERROR;
        }
    };

    list_interfaces(store)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Loads the configuration store.
///
/// An explicitly passed `--config` must exist; the default location is
/// optional and falls back to default settings for every adapter.
fn load_store(cli: &Cli) -> Result<FileStore, ipx_ifcache::config::FileStoreError> {
    if let Some(path) = &cli.config {
        return FileStore::load(path);
    }

    match app::default_config_path() {
        Some(path) if path.exists() => FileStore::load(&path),
        _ => {
            tracing::debug!("No configuration file found, using default settings");
            FileStore::parse("")
        }
    }
}

/// Builds the interface cache and prints the current interface list.
#[cfg(windows)]
fn list_interfaces(store: FileStore) -> ExitCode {
    use ipx_ifcache::iface::InterfaceCache;
    use ipx_ifcache::net::platform::PlatformSource;

    let cache = InterfaceCache::new(PlatformSource::new(), store);
    let interfaces = cache.list();

    for (index, iface) in interfaces.iter().enumerate() {
        println!(
            "{index}: {} (network {}, node {})",
            iface.hwaddr, iface.network, iface.node
        );
        for addr in &iface.addresses {
            println!(
                "    {} / {} (broadcast {})",
                addr.address, addr.netmask, addr.broadcast
            );
        }
    }
    println!("{} interface(s)", interfaces.len());

    cache.shutdown();
    exit_code::SUCCESS
}

/// Adapter enumeration is Windows-only for now.
#[cfg(not(windows))]
fn list_interfaces(_store: FileStore) -> ExitCode {
    eprintln!("Error: adapter enumeration is only supported on Windows");
    exit_code::runtime_error()
}
