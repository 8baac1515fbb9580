use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "mws-describe")]
#[command(about = "List supported MWS operations and their parameter schemas")]
pub struct CliConfig {
    /// Restrict output to one API section: inbound, inventory, outbound,
    /// finances
    #[arg(long)]
    pub section: Option<String>,

    #[arg(long, help = "Emit machine-readable JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
