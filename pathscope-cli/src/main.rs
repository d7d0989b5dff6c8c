mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // pathscope info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("pathscope", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::BellmanFord {
            graph,
            source,
            trace,
        } => commands::bellman_ford::run(graph.as_deref(), source.as_deref(), *trace, &cli.global),
        Command::Dag { graph, source } => {
            commands::dag::run(graph.as_deref(), source.as_deref(), &cli.global)
        }
        Command::Dfs { graph } => commands::dfs::run(graph.as_deref(), &cli.global),
    }
}
