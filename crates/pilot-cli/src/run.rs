//! Command dispatch.
//!
//! Output goes to the supplied writer so commands can be exercised in tests
//! without a terminal.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};

use pilot_core::{
    Color, Palette, PaletteAdjustment, adjust_temperature, export_file_name, export_palette,
    generate_palette, generate_shades, is_light,
};
use pilot_store::library::now_ms;
use pilot_store::{ColorToggle, KeyValueStore, PaletteLibrary, SaveOutcome};

use crate::commands::{ColorCommand, Command};
use crate::config::CliConfig;
use crate::response_source::JsonFileSource;

pub fn execute<S: KeyValueStore>(
    command: Command,
    config: &CliConfig,
    library: &mut PaletteLibrary<S>,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Adjust { hex, adjustment } => {
            let color = PaletteAdjustment::from(adjustment).apply_color(&Color::new(hex, ""));
            writeln!(out, "{}", color.hex)?;
        }

        Command::Temperature { hex, delta } => {
            writeln!(out, "{}", adjust_temperature(&hex, delta))?;
        }

        Command::IsLight { hex } => {
            let verdict = if is_light(&hex) { "light" } else { "dark" };
            writeln!(out, "{verdict}")?;
        }

        Command::Shades {
            hex,
            name,
            count,
            json,
        } => {
            let shades = generate_shades(&Color::new(hex, name), count.unwrap_or(config.shade_count));
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&shades)?)?;
            } else {
                write_colors(out, &shades)?;
            }
        }

        Command::Generate { prompt, response } => {
            let source = JsonFileSource::new(response);
            let palette = generate_palette(&source, now_ms().to_string(), &prompt)?;
            library.record_generated(palette.clone())?;
            write_palette(out, &palette)?;
        }

        Command::AdjustPalette { id, adjustment } => {
            let palette = find(library, &id)?;
            let preview = PaletteAdjustment::from(adjustment).apply(&palette);
            let adjusted = library.apply_adjustment(preview)?;
            write_palette(out, &adjusted)?;
        }

        Command::Save { id } => {
            let palette = find(library, &id)?;
            let (saved, outcome) = library.save_palette(&palette)?;
            let verb = match outcome {
                SaveOutcome::Saved => "Saved",
                SaveOutcome::Updated => "Updated",
            };
            writeln!(out, "{verb} \"{}\" ({})", saved.display_name(), saved.id)?;
        }

        Command::Rename { id, name } => {
            library.rename_palette(&id, &name)?;
            writeln!(out, "Renamed {id} to \"{name}\"")?;
        }

        Command::Delete { id } => match library.delete_palette(&id)? {
            Some(p) => writeln!(out, "Deleted \"{}\"", p.display_name())?,
            None => bail!("no saved palette with id {id:?}"),
        },

        Command::History { clear } => {
            if clear {
                library.clear_history()?;
                writeln!(out, "History cleared")?;
            } else if library.history().is_empty() {
                writeln!(out, "No history yet.")?;
            } else {
                for palette in library.history() {
                    write_summary(out, palette)?;
                }
            }
        }

        Command::Saved => {
            if library.saved_palettes().is_empty() {
                writeln!(out, "No saved palettes.")?;
            }
            for palette in library.saved_palettes() {
                write_summary(out, palette)?;
            }
        }

        Command::Export { id, format, out: target } => {
            let palette = find(library, &id)?;
            let content = export_palette(&palette, format)?;
            match target {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(export_file_name(&palette, format))
                    } else {
                        path
                    };
                    write_file(&path, &content)?;
                    writeln!(out, "Wrote {}", path.display())?;
                }
                None => writeln!(out, "{content}")?,
            }
        }

        Command::Color(ColorCommand::Toggle { hex, name }) => {
            let color = Color::new(hex, name);
            let verb = match library.toggle_saved_color(&color)? {
                ColorToggle::Saved => "Saved",
                ColorToggle::Removed => "Unsaved",
            };
            writeln!(out, "{verb} {} ({})", color.name, color.hex)?;
        }

        Command::Color(ColorCommand::List) => {
            for saved in library.saved_colors() {
                writeln!(out, "{}  {}  [{}]", saved.color.hex, saved.color.name, saved.id)?;
            }
        }

        Command::Color(ColorCommand::Delete { id }) => match library.delete_saved_color(&id)? {
            Some(c) => writeln!(out, "Removed {} ({})", c.color.name, c.color.hex)?,
            None => bail!("no saved color with id {id:?}"),
        },
    }
    Ok(())
}

fn find<S: KeyValueStore>(library: &PaletteLibrary<S>, id: &str) -> Result<Palette> {
    library
        .find_palette(id)
        .cloned()
        .with_context(|| format!("no palette with id {id:?} in history or saved palettes"))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

fn write_palette(out: &mut dyn Write, palette: &Palette) -> Result<()> {
    writeln!(out, "{} ({})", palette.display_name(), palette.id)?;
    write_colors(out, &palette.colors)
}

fn write_summary(out: &mut dyn Write, palette: &Palette) -> Result<()> {
    let hexes: Vec<&str> = palette.colors.iter().take(5).map(|c| c.hex.as_str()).collect();
    writeln!(out, "{}  {}  {}", palette.id, palette.display_name(), hexes.join(" "))?;
    Ok(())
}

fn write_colors(out: &mut dyn Write, colors: &[Color]) -> Result<()> {
    for color in colors {
        let tone = if is_light(&color.hex) { "light" } else { "dark" };
        writeln!(out, "  {}  {:<5}  {}", color.hex, tone, color.name)?;
    }
    Ok(())
}
