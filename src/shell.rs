//! Interactive line-oriented shell.
//!
//! The shell owns the session's one [`DesignerState`] and threads it through
//! every command. Strip numbers are 1-based at this boundary and converted to
//! zero-based indices before they reach the designer. Lengths are typed in the
//! session's display unit.

use anyhow::{anyhow, bail, Context, Result};
use boardkit_core::data::materials::standard_library;
use boardkit_core::{format_dimension, parse_length, BoardPreset, LengthUnit};
use boardkit_designer::export::write_scene;
use boardkit_designer::views::cut_list;
use boardkit_designer::{CameraAngle, DesignerState, ViewKind};
use boardkit_settings::Config;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const HELP: &str = "\
Commands (strip numbers start at 1, lengths use the current unit):
  show                      Strips and fit summary
  unit <in|cm|mm>           Display unit
  preset <name>             Board preset (small, medium, standard, large, xl)
  board <width> <length>    Custom board size
  thickness <value>         Board thickness for the 3D view
  count <n>                 Number of strips
  add                       Append a strip
  wood <n> <wood>           Set the wood of strip n
  width <n> <value>         Set the width of strip n
  dup <n>                   Duplicate strip n
  up <n> / down <n>         Move strip n
  rm <n>                    Remove strip n
  all-width <value>         Same width for every strip
  all-wood <wood>           Same wood for every strip
  name <text>               Design name
  grain <on|off>            Grain texture
  radius <value>            Edge grain corner radius
  camera <preset>           3D camera (default, top, side, angled)
  view <kind>               Active view (edge, end, 3d, schematic)
  render <file> [view]      Render a view to .svg or .png
  save [file]               Save the design as JSON
  load <file>               Load a design
  export [dir]              Write every artifact
  woods / presets           List woods or board presets
  quit                      Leave the shell";

/// One parsed shell command. Strip indices are zero-based.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Help,
    Show,
    Unit(LengthUnit),
    Preset(BoardPreset),
    Board { width: f64, length: f64 },
    Thickness(f64),
    Count(usize),
    Add,
    Wood { index: usize, wood: String },
    Width { index: usize, width: f64 },
    Duplicate(usize),
    Up(usize),
    Down(usize),
    Remove(usize),
    AllWidth(f64),
    AllWood(String),
    Name(String),
    Grain(bool),
    Radius(f64),
    Camera(CameraAngle),
    View(ViewKind),
    Render { path: PathBuf, view: Option<ViewKind> },
    Save(Option<PathBuf>),
    Load(PathBuf),
    Export(Option<PathBuf>),
    Woods,
    Presets,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Lengths are read in `unit` and returned in inches.
    ///
    /// Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str, unit: LengthUnit) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();
        let rest = args.join(" ");
        let length = |text: &str| parse_length(text, unit).map_err(|e| anyhow!(e));

        let command = match verb.to_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "show" | "ls" => Self::Show,
            "unit" => Self::Unit(rest.parse().map_err(|e: String| anyhow!(e))?),
            "preset" => Self::Preset(rest.parse()?),
            "board" => match args.as_slice() {
                [width, length_text] => Self::Board {
                    width: length(width)?,
                    length: length(length_text)?,
                },
                _ => bail!("usage: board <width> <length>"),
            },
            "thickness" => Self::Thickness(length(&rest)?),
            "count" => Self::Count(
                rest.parse()
                    .with_context(|| format!("'{}' is not a strip count", rest))?,
            ),
            "add" => Self::Add,
            "wood" => {
                let (index, wood) = strip_and_rest(&args, "wood <n> <wood>")?;
                Self::Wood { index, wood }
            }
            "width" => {
                let (index, value) = strip_and_rest(&args, "width <n> <value>")?;
                Self::Width {
                    index,
                    width: length(&value)?,
                }
            }
            "dup" | "duplicate" => Self::Duplicate(single_strip(&args)?),
            "up" => Self::Up(single_strip(&args)?),
            "down" => Self::Down(single_strip(&args)?),
            "rm" | "remove" => Self::Remove(single_strip(&args)?),
            "all-width" => Self::AllWidth(length(&rest)?),
            "all-wood" => Self::AllWood(non_empty(rest, "all-wood <wood>")?),
            "name" => Self::Name(rest),
            "grain" => Self::Grain(parse_switch(&rest)?),
            "radius" => Self::Radius(length(&rest)?),
            "camera" => Self::Camera(rest.parse().map_err(|e: String| anyhow!(e))?),
            "view" => Self::View(rest.parse().map_err(|e: String| anyhow!(e))?),
            "render" => match args.as_slice() {
                [path] => Self::Render {
                    path: PathBuf::from(path),
                    view: None,
                },
                [path, view] => Self::Render {
                    path: PathBuf::from(path),
                    view: Some(view.parse().map_err(|e: String| anyhow!(e))?),
                },
                _ => bail!("usage: render <file> [view]"),
            },
            "save" => Self::Save(optional_path(&rest)),
            "load" | "open" => Self::Load(PathBuf::from(non_empty(rest, "load <file>")?)),
            "export" => Self::Export(optional_path(&rest)),
            "woods" => Self::Woods,
            "presets" => Self::Presets,
            "quit" | "exit" | "q" => Self::Quit,
            other => bail!("Unknown command '{}' (try 'help')", other),
        };
        Ok(Some(command))
    }

    /// The strip this command addresses, if any.
    fn strip(&self) -> Option<usize> {
        match self {
            Self::Wood { index, .. } | Self::Width { index, .. } => Some(*index),
            Self::Duplicate(index) | Self::Up(index) | Self::Down(index) | Self::Remove(index) => {
                Some(*index)
            }
            _ => None,
        }
    }
}

/// Convert a 1-based strip number to an index.
fn strip_index(text: &str) -> Result<usize> {
    let number: usize = text
        .parse()
        .with_context(|| format!("'{}' is not a strip number", text))?;
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow!("Strip numbers start at 1"))
}

fn single_strip(args: &[&str]) -> Result<usize> {
    match args {
        [n] => strip_index(n),
        _ => bail!("expected one strip number"),
    }
}

fn strip_and_rest(args: &[&str], usage: &str) -> Result<(usize, String)> {
    match args {
        [n, rest @ ..] if !rest.is_empty() => Ok((strip_index(n)?, rest.join(" "))),
        _ => bail!("usage: {}", usage),
    }
}

fn non_empty(text: String, usage: &str) -> Result<String> {
    if text.is_empty() {
        bail!("usage: {}", usage);
    }
    Ok(text)
}

fn optional_path(text: &str) -> Option<PathBuf> {
    (!text.is_empty()).then(|| PathBuf::from(text))
}

fn parse_switch(text: &str) -> Result<bool> {
    match text.to_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Ok(true),
        "off" | "no" | "false" | "0" => Ok(false),
        _ => bail!("expected on or off"),
    }
}

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A shell session.
pub struct Shell {
    pub state: DesignerState,
    pub config: Config,
    config_path: Option<PathBuf>,
}

impl Shell {
    pub fn new(state: DesignerState, config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            state,
            config,
            config_path,
        }
    }

    /// Read commands from `input` until it ends or the user quits.
    ///
    /// A failing command is reported on `out` and the session carries on.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        writeln!(out, "BoardKit {} - type 'help' for commands", crate::VERSION)?;
        self.print_state(&mut out)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let flow = match ShellCommand::parse(&line, self.state.unit) {
                Ok(Some(command)) => match self.execute(command, &mut out) {
                    Ok(flow) => flow,
                    Err(e) => {
                        writeln!(out, "Error: {:#}", e)?;
                        Flow::Continue
                    }
                },
                Ok(None) => Flow::Continue,
                Err(e) => {
                    writeln!(out, "Error: {:#}", e)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
            write!(out, "> ")?;
            out.flush()?;
        }

        if self.state.is_modified {
            writeln!(out, "Note: unsaved changes to '{}' were discarded", self.state.design_name)?;
        }
        Ok(())
    }

    /// Apply one command to the session.
    pub fn execute(&mut self, command: ShellCommand, out: &mut impl Write) -> Result<Flow> {
        if let Some(index) = command.strip() {
            let len = self.state.design().len();
            if index >= len {
                bail!("Strip {} does not exist (design has {} strips)", index + 1, len);
            }
        }

        let state = &mut self.state;
        match command {
            ShellCommand::Help => writeln!(out, "{}", HELP)?,
            ShellCommand::Show => self.print_state(out)?,
            ShellCommand::Unit(unit) => {
                state.set_unit(unit);
                writeln!(out, "Unit: {}", unit)?;
            }
            ShellCommand::Preset(preset) => {
                if preset == BoardPreset::Custom {
                    bail!("use 'board <width> <length>' for a custom board");
                }
                state.set_board_preset(preset);
                self.print_summary(out)?;
            }
            ShellCommand::Board { width, length } => {
                state.set_board_size(width, length)?;
                self.print_summary(out)?;
            }
            ShellCommand::Thickness(thickness) => state.set_thickness(thickness)?,
            ShellCommand::Count(count) => {
                state.set_strip_count(count)?;
                self.print_state(out)?;
            }
            ShellCommand::Add => {
                state.add_strip()?;
                self.print_state(out)?;
            }
            ShellCommand::Wood { index, wood } => {
                state.set_strip_wood(index, &wood)?;
                self.print_state(out)?;
            }
            ShellCommand::Width { index, width } => {
                state.set_strip_width(index, width)?;
                self.print_state(out)?;
            }
            ShellCommand::Duplicate(index) => {
                state.duplicate_strip(index)?;
                self.print_state(out)?;
            }
            ShellCommand::Up(index) => {
                if state.move_strip_up(index)? {
                    self.print_state(out)?;
                } else {
                    writeln!(out, "Strip {} is already first", index + 1)?;
                }
            }
            ShellCommand::Down(index) => {
                if state.move_strip_down(index)? {
                    self.print_state(out)?;
                } else {
                    writeln!(out, "Strip {} is already last", index + 1)?;
                }
            }
            ShellCommand::Remove(index) => {
                state.remove_strip(index)?;
                self.print_state(out)?;
            }
            ShellCommand::AllWidth(width) => {
                state.apply_width_to_all(width)?;
                self.print_state(out)?;
            }
            ShellCommand::AllWood(wood) => {
                state.apply_wood_to_all(&wood)?;
                self.print_state(out)?;
            }
            ShellCommand::Name(name) => {
                state.set_design_name(&name);
                writeln!(out, "Design name: {}", state.design_name)?;
            }
            ShellCommand::Grain(show) => state.set_show_grain(show),
            ShellCommand::Radius(radius) => {
                state.set_corner_radius(radius);
                writeln!(
                    out,
                    "Corner radius: {}",
                    format_dimension(state.view_options.corner_radius, state.unit)
                )?;
            }
            ShellCommand::Camera(camera) => state.set_camera(camera),
            ShellCommand::View(view) => {
                state.set_active_view(view);
                self.print_view(out)?;
            }
            ShellCommand::Render { path, view } => {
                let view = view.unwrap_or(state.active_view);
                let scene = state.render_scene(view)?;
                write_scene(&scene, &path, self.config.export.preview_dpi)?;
                writeln!(out, "Rendered {} view to {}", view, path.display())?;
            }
            ShellCommand::Save(path) => {
                let path = path
                    .or_else(|| state.current_file_path.clone())
                    .unwrap_or_else(|| PathBuf::from(state.design_file_name()));
                state.save_to_file(&path)?;
                writeln!(out, "Saved {}", path.display())?;
                self.remember(path);
            }
            ShellCommand::Load(path) => {
                state.load_from_file(&path)?;
                writeln!(out, "Loaded '{}'", state.design_name)?;
                self.remember(path);
                self.print_state(out)?;
            }
            ShellCommand::Export(dir) => {
                let dir = dir.unwrap_or_else(|| self.config.export.output_dir.clone());
                let written = state.export_all(&dir, self.config.export.dpi)?;
                for path in written {
                    writeln!(out, "Wrote {}", path.display())?;
                }
            }
            ShellCommand::Woods => print_woods(out)?,
            ShellCommand::Presets => print_presets(out, state.unit)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn print_state(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.state.display_name())?;
        let unit = self.state.unit;
        for (i, strip) in self.state.design().strips().iter().enumerate() {
            writeln!(
                out,
                "  {:>2}. {:<12} {}",
                i + 1,
                strip.wood,
                format_dimension(strip.width, unit)
            )?;
        }
        self.print_summary(out)
    }

    fn print_summary(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.state.summary())?;
        Ok(())
    }

    fn print_view(&self, out: &mut impl Write) -> Result<()> {
        let scene = match self.state.render_active() {
            Ok(scene) => scene,
            Err(e) => {
                writeln!(out, "{} (adjust strip widths or the board size)", e)?;
                return Ok(());
            }
        };
        writeln!(out, "{}", scene.title)?;
        if self.state.active_view == ViewKind::Schematic {
            let placements = self.state.design().placements();
            writeln!(out, "CUT LIST:")?;
            for entry in cut_list(&placements) {
                writeln!(out, "  {}", entry)?;
            }
        }
        Ok(())
    }

    /// Record a design file in the recent list and persist the config.
    fn remember(&mut self, path: PathBuf) {
        self.config.add_recent_file(path);
        if let Some(config_path) = &self.config_path {
            if let Err(e) = self.config.save_to_file(config_path) {
                tracing::warn!("Could not update {}: {}", config_path.display(), e);
            }
        }
    }
}

pub fn print_woods(out: &mut impl Write) -> Result<()> {
    for wood in standard_library().woods() {
        writeln!(out, "{:<12} {}", wood.name, wood.color)?;
    }
    Ok(())
}

pub fn print_presets(out: &mut impl Write, unit: LengthUnit) -> Result<()> {
    for preset in BoardPreset::FIXED {
        let (width, length) = preset.dimensions();
        writeln!(
            out,
            "{:<12} {} × {}",
            preset.to_string(),
            format_dimension(width, unit),
            format_dimension(length, unit)
        )?;
    }
    Ok(())
}

/// Open `path` in a shell session if given.
pub fn load_initial(state: &mut DesignerState, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        state
            .load_from_file(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
    }
    Ok(())
}
