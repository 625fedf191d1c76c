use eyre::Result;

fn main() -> Result<()> {
    solpack_cli::args::run()
}
