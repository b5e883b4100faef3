use aotyfm::Args;
use aotyfm::app;
use clap::Parser;

fn main() {
    let args = Args::parse();

    if let Err(error) = app::run(args) {
        eprintln!("❌ Error: {:#}", error);
        std::process::exit(1);
    }
}
