//! Command line front end for the configurator's color engine.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use moire_configurator::{
    Brightness, Configurator, ConfiguratorConfig, EXPORT_FILE_NAME, Error, Point,
    adjust_brightness, color_name, contrast_decision, parse_hex, render_wheel,
};

#[derive(Debug, Parser)]
#[command(name = "moire", version, about = "Hue wheel color picking and selection export")]
struct Cli {
    /// JSON config file (wheelSize, brightness, footerColor).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the hue wheel to a PNG file.
    Wheel {
        #[arg(long)]
        size: Option<u32>,
        #[arg(long, short, default_value = "wheel.png")]
        output: PathBuf,
    },
    /// Sample the wheel at a point and show the resulting footer styling.
    Sample {
        x: f32,
        y: f32,
        #[arg(long)]
        size: Option<u32>,
        /// Slider value, 0-100 (50 is neutral).
        #[arg(long)]
        brightness: Option<f64>,
    },
    /// Scale a hex color by a slider brightness value.
    Brightness { hex: String, value: f64 },
    /// Show the text color and border chosen for a background.
    Contrast { hex: String },
    /// Look up the display name of a hex color.
    Name { hex: String },
    /// Write the selections export document.
    Export {
        /// Icon selection as `category=Name`, repeatable.
        #[arg(long = "icon", value_parser = parse_icon)]
        icons: Vec<(String, String)>,
        #[arg(long)]
        heading_font: Option<String>,
        #[arg(long)]
        body_font: Option<String>,
        /// Footer color as `#rrggbb`.
        #[arg(long)]
        color: Option<String>,
        /// Output path; `-` writes to stdout.
        #[arg(long, short, default_value = EXPORT_FILE_NAME)]
        output: PathBuf,
    },
}

fn parse_icon(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .filter(|(category, name)| !category.is_empty() && !name.is_empty())
        .map(|(category, name)| (category.to_string(), name.to_string()))
        .ok_or_else(|| format!("expected `category=Name`, got {arg:?}"))
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConfiguratorConfig::from_file(path)?,
        None => ConfiguratorConfig::default(),
    };

    match cli.command {
        Command::Wheel { size, output } => {
            let wheel = render_wheel(size.unwrap_or(config.wheel_size))?;
            wheel.into_image().save(&output)?;
            info!("wrote wheel to {}", output.display());
        }
        Command::Sample {
            x,
            y,
            size,
            brightness,
        } => {
            if let Some(size) = size {
                config.wheel_size = size;
            }
            if let Some(brightness) = brightness {
                config.brightness = brightness;
            }
            let mut session = Configurator::new(config)?;
            let color = session.wheel_click(Point::new(x, y));
            let footer = session.footer();

            if let Some(marker) = session.pointer() {
                println!("sampled:    {}", marker.color);
            }
            println!("color:      {color} ({})", color_name(&color.to_hex()));
            println!("text:       {}", footer.text_color);
            println!("border:     {}", footer.border_css());
        }
        Command::Brightness { hex, value } => {
            let color = parse_hex(&hex)?;
            info!("factor {}", Brightness::new(value).factor());
            println!("{}", adjust_brightness(&color.to_hex(), value));
        }
        Command::Contrast { hex } => {
            let color = parse_hex(&hex)?;
            let decision = contrast_decision(color);
            println!("luma:   {:.3}", color.luma());
            println!("text:   {}", decision.text_color);
            println!("border: {}", decision.border_css());
        }
        Command::Name { hex } => {
            println!("{}", color_name(&hex));
        }
        Command::Export {
            icons,
            heading_font,
            body_font,
            color,
            output,
        } => {
            let mut session = Configurator::new(config)?;
            for (category, name) in icons {
                session.select_icon(category, name, String::new());
            }
            if let Some(font) = heading_font {
                session.select_heading_font(font);
            }
            if let Some(font) = body_font {
                session.select_body_font(font);
            }
            if let Some(hex) = color {
                session.select_preset(&hex)?;
            }

            let export = session.export();
            if output.as_os_str() == "-" {
                println!("{}", export.to_json_pretty()?);
            } else {
                export.write_to(&output)?;
            }
            eprintln!("{}", session.summary());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn icon_argument() {
        assert_eq!(
            parse_icon("social-media=Globe"),
            Ok(("social-media".to_string(), "Globe".to_string()))
        );
        assert!(parse_icon("social-media").is_err());
        assert!(parse_icon("=Globe").is_err());
    }

    #[test]
    fn export_arguments_parse() {
        let cli = Cli::try_parse_from([
            "moire",
            "export",
            "--icon",
            "phone=Handset",
            "--icon",
            "email=Envelope",
            "--color",
            "#faf8f5",
            "-o",
            "-",
        ])
        .unwrap();
        match cli.command {
            Command::Export { icons, color, output, .. } => {
                assert_eq!(icons.len(), 2);
                assert_eq!(color.as_deref(), Some("#faf8f5"));
                assert_eq!(output, PathBuf::from("-"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
