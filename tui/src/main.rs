use clap::Parser;
use nav_tui::Cli;
use nav_tui::run_main;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    if let Err(err) = run_main(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
    Ok(())
}
