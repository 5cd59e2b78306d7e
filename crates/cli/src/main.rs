use gildedrose_cli::{CommandLine, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::from(CommandLine::parse_args());

    gildedrose_observability::init(config.log_format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    gildedrose_cli::run(&config, &mut out)
}
