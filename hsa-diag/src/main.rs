mod report;

use anyhow::Context;
use clap::Parser;
use hsa::system::Runtime;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "hsa-diag",
    about = "One-shot HSA agent topology, memory and cache diagnostics",
    version
)]
struct Cli {
    /// Verbose runtime tracing on stderr
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    report::print_banner();

    println!("[+] Initializing HSA Runtime...");
    let runtime = Runtime::new().context("HSA runtime failed to initialize")?;

    let info = runtime.system_info()?;
    report::print_system_info(&info);

    println!();
    println!("[+] Scanning System Agents...");

    let agents = runtime.agents()?;

    for agent in agents.iter() {
        report::print_agent(agent, &agents)?;
    }

    println!();
    println!("[+] Diagnostics Complete.");

    Ok(())
}
