use clap::Parser;
use venue::cli::Cli;

fn main() {
    venue::install_hooks();
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("could not start async runtime: {error}");
            std::process::exit(1);
        }
    };

    if let Err(error) = runtime.block_on(venue::commands::run(cli)) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
