use miette::Result;

/// Main entry point for the tfc-spec CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    tfc_spec::run()
}
