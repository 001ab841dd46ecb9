use clap::{Parser, Subcommand};

/// `nexus-exec` - Plan/execute/verify executive AI terminal.
#[derive(Parser, Debug)]
#[command(name = "nexus-exec")]
#[command(version = "0.1.0")]
#[command(about = "An executive AI terminal built on the Plan-Execute-Verify framework.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a chat session
    Chat {
        /// Single message mode (don't enter interactive mode)
        #[arg(short, long)]
        message: Option<String>,

        /// Model to use
        #[arg(long)]
        model: Option<String>,

        /// Temperature (0.0 - 2.0)
        #[arg(short, long)]
        temperature: Option<f64>,
    },

    /// Show configuration and credential diagnostics
    Status,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_has_no_flag_conflicts() {
        Cli::command().debug_assert();
    }
}
