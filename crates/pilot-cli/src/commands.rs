//! Command-line surface.
//!
//! One subcommand per library or engine operation. Numeric deltas accept
//! negative values directly (`--hue -30`).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pilot_core::{ExportFormat, PaletteAdjustment};

#[derive(Debug, Parser)]
#[command(name = "palette-pilot", version, about = "Generate, adjust, and export color palettes")]
pub struct Cli {
    /// Directory for saved palettes, history, and colors.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shift a single color in HSL space, then by temperature.
    Adjust {
        hex: String,
        #[command(flatten)]
        adjustment: AdjustmentArgs,
    },

    /// Warm (positive) or cool (negative) a single color.
    Temperature {
        hex: String,
        #[arg(allow_negative_numbers = true)]
        delta: f64,
    },

    /// Report whether a color is light or dark (HSP brightness).
    IsLight { hex: String },

    /// Print a lightness ramp around a color.
    Shades {
        hex: String,
        /// Base name for the generated shades.
        #[arg(long, default_value = "Color")]
        name: String,
        /// Number of shades; even counts are bumped to the next odd number.
        #[arg(long)]
        count: Option<usize>,
        /// Print JSON instead of one line per shade.
        #[arg(long)]
        json: bool,
    },

    /// Create a palette from a prompt using a recorded service response.
    Generate {
        prompt: String,
        /// JSON file with the service's `{"colors": [...]}` answer.
        #[arg(long)]
        response: PathBuf,
    },

    /// Apply adjustments to a palette from history or the saved list.
    AdjustPalette {
        id: String,
        #[command(flatten)]
        adjustment: AdjustmentArgs,
    },

    /// Save (or update) a palette from history.
    Save { id: String },

    /// Rename a saved palette.
    Rename { id: String, name: String },

    /// Delete a saved palette.
    Delete { id: String },

    /// List the generation history.
    History {
        /// Remove every history entry instead of listing.
        #[arg(long)]
        clear: bool,
    },

    /// List saved palettes.
    Saved,

    /// Export a palette as CSS custom properties or JSON.
    Export {
        id: String,
        #[arg(long, default_value = "css")]
        format: ExportFormat,
        /// Write to this file (or directory, using the suggested file name)
        /// instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Manage individually saved colors.
    #[command(subcommand)]
    Color(ColorCommand),
}

#[derive(Debug, Subcommand)]
pub enum ColorCommand {
    /// Save a color, or unsave it if the same hex is already saved.
    Toggle {
        hex: String,
        #[arg(long, default_value = "Color")]
        name: String,
    },
    /// List saved colors.
    List,
    /// Remove a saved color by its id.
    Delete { id: String },
}

#[derive(Debug, Clone, Copy, Args)]
pub struct AdjustmentArgs {
    /// Hue rotation in degrees (UI range -180..180).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub hue: f64,
    /// Saturation shift in percentage points (UI range -50..50).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub saturation: f64,
    /// Lightness shift in percentage points (UI range -50..50).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub brightness: f64,
    /// Temperature shift (UI range -50..50).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub temperature: f64,
}

impl From<AdjustmentArgs> for PaletteAdjustment {
    fn from(args: AdjustmentArgs) -> Self {
        Self {
            hue: args.hue,
            saturation: args.saturation,
            brightness: args.brightness,
            temperature: args.temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_deltas_parse() {
        let cli = Cli::parse_from(["palette-pilot", "adjust", "#336699", "--hue", "-30", "--temperature", "-10"]);
        match cli.command {
            Command::Adjust { hex, adjustment } => {
                assert_eq!(hex, "#336699");
                assert_eq!(adjustment.hue, -30.0);
                assert_eq!(adjustment.temperature, -10.0);
                assert_eq!(adjustment.saturation, 0.0);
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::parse_from(["palette-pilot", "temperature", "#808080", "-50"]);
        assert!(matches!(cli.command, Command::Temperature { delta, .. } if delta == -50.0));
    }

    #[test]
    fn test_export_format_parses() {
        let cli = Cli::parse_from(["palette-pilot", "export", "17", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Command::Export { format: ExportFormat::Json, .. }
        ));
    }
}
