use clap::Parser;
use urlcounter::{Args, DEFAULT_HOST};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    println!("Download content from \"{}\"...", args.host());
    if args.host.is_none() {
        println!("Usage: urlcounter [HOST] to download from \"HOST\" instead of \"{DEFAULT_HOST}\".");
    }

    urlcounter::run(&args)?;
    println!("Complete.");
    Ok(())
}
