fn main() -> anyhow::Result<()> {
    temp_converter::cli::run()
}
