use std::io;

use captures::{Config, Session};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    if config.verbose {
        captures::print_version_info();
        captures::print_binary_info();
    }
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    Session::new(config, &mut input, &mut output).run()
}
