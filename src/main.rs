// Draw rectangles and ovals into a UFO glyph.

use anyhow::Result;
use clap::Parser;
use shape_tool::core::{create_app, CliArgs};
use shape_tool::utils::logger::init_custom_logger;

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    init_custom_logger(cli_args.debug);

    let mut app = create_app(cli_args)?;
    app.run();
    Ok(())
}
