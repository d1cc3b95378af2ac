use clap::{Parser, Subcommand};

/// Command-line interface definition for invscan
/// Barcode scanning client for a remote inventory backend
#[derive(Parser)]
#[command(
    name = "invscan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scan product barcodes and send inventory quantity changes to a remote backend",
    long_about = None
)]
pub struct Cli {
    /// Override the backend base URL for this invocation
    #[arg(global = true, long = "server", value_name = "URL")]
    pub server: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init,

    /// Manage the configuration file (view, edit, change server)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        #[arg(
            long = "set-server",
            value_name = "URL",
            help = "Save a new backend URL and check that it is reachable"
        )]
        set_server: Option<String>,
    },

    /// Check whether the backend is reachable
    Health,

    /// Look up a product by barcode
    Lookup {
        /// Barcode to look up (exact match)
        barcode: String,
    },

    /// Add stock for a barcode
    Add {
        /// Product barcode
        barcode: String,

        #[arg(long, short = 'n', value_name = "N", help = "Amount to add (default from config)")]
        amount: Option<String>,

        #[arg(long, help = "Free-text note sent with the change")]
        note: Option<String>,
    },

    /// Remove stock for a barcode
    Remove {
        /// Product barcode
        barcode: String,

        #[arg(long, short = 'n', value_name = "N", help = "Amount to remove (default from config)")]
        amount: Option<String>,

        #[arg(long, help = "Free-text note sent with the change")]
        note: Option<String>,
    },

    /// Interactive scan session reading codes from stdin
    Scan {
        #[arg(long, short = 'n', value_name = "N", help = "Initial amount (default from config)")]
        amount: Option<String>,

        #[arg(long = "no-bell", help = "Do not ring the terminal bell on accepted scans")]
        no_bell: bool,
    },
}
