use clap::Parser;
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(author, version, about = "Synchronize a DigitalOcean firewall with AWS service IP ranges.", long_about = None)]
pub struct Args {
    /// AWS service whose published IP prefixes become the allow-list
    #[arg(short = 's', long, default_value = "CLOUDFRONT")]
    pub service: String,

    /// Inbound port to synchronize (may be repeated)
    #[arg(short = 'p', long = "port", default_values_t = vec!["443".to_string(), "80".to_string()])]
    pub ports: Vec<String>,

    /// Apply only IPv4 prefixes
    #[arg(short = '4', long)]
    pub ipv4: bool,

    /// Apply only IPv6 prefixes
    #[arg(short = '6', long)]
    pub ipv6: bool,

    /// Firewall id (defaults to the DIGITALOCEAN_FIREWALL_ID environment variable)
    #[arg(short = 'f', long)]
    pub firewall: Option<String>,

    /// Merge and display the updated rules without pushing them
    #[arg(long)]
    pub dry_run: bool,

    /// Save the applied prefixes to a CSV file
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,

    /// HTTP request timeout in seconds for both providers
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}
