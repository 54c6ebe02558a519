fn main() -> anyhow::Result<()> {
    env_logger::init();
    tally_cli::cli(None)
}
