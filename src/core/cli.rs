//! Command line arguments for the application

use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use crate::core::errors::{validate_ufo_path, ShapeResult};

/// command line arguments for font loading and tool settings
#[derive(Parser, Debug, Clone, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// path to a ufo font to draw into; an untitled font is used when omitted
    #[arg(long = "load-ufo")]
    pub ufo_path: Option<PathBuf>,

    /// name of the glyph to draw shapes into
    #[arg(long, default_value = "a")]
    pub glyph: String,

    /// json file overriding the shape tool settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// display debug information
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl CliArgs {
    /// Check the arguments before the app starts
    pub fn validate(&self) -> ShapeResult<()> {
        if let Some(path) = &self.ufo_path {
            validate_ufo_path(path)?;
        }
        if let Some(config) = &self.config {
            anyhow::ensure!(
                config.is_file(),
                "Config file does not exist: {}",
                config.display()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_glyph_a_without_font() {
        let args = CliArgs::parse_from(["shape-tool"]);
        assert_eq!(args.glyph, "a");
        assert!(args.ufo_path.is_none());
        assert!(!args.debug);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn parses_all_flags() {
        let args = CliArgs::parse_from([
            "shape-tool",
            "--load-ufo",
            "Font.ufo",
            "--glyph",
            "O",
            "--config",
            "shapes.json",
            "--debug",
        ]);
        assert_eq!(args.ufo_path, Some(PathBuf::from("Font.ufo")));
        assert_eq!(args.glyph, "O");
        assert_eq!(args.config, Some(PathBuf::from("shapes.json")));
        assert!(args.debug);
    }

    #[test]
    fn missing_font_fails_validation() {
        let args = CliArgs::parse_from(["shape-tool", "--load-ufo", "/nonexistent/Font.ufo"]);
        assert!(args.validate().is_err());
    }
}
