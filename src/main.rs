use clap::Parser;
use statedesc::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = cli.run(&mut std::io::stdout().lock());
    if let Err(err) = result {
        eprintln!("ERROR: {err:#}");
        std::process::exit(1);
    }
}
