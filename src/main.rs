use clap::Parser;

mod cli;

fn main() {
    let cli = cli::Cli::parse();
    cli::init_tracing(cli.verbose);
    cli::run(cli);
}
