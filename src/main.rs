//! Braille SVG CLI
//!
//! Usage:
//!   braille-svg [OPTIONS] [FILE]
//!
//! Reads Braille text from FILE (or stdin) and writes an SVG document.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use braille_svg::{
    decode, encode, is_braille_string, render_with_config, Diagnostic, RenderConfig,
};

#[derive(Parser)]
#[command(name = "braille-svg")]
#[command(about = "Render Unicode Braille text as SVG dot cells")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Write SVG here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dot radius
    #[arg(long)]
    dot_radius: Option<f64>,

    /// Column width of a cell
    #[arg(long)]
    cell_width: Option<f64>,

    /// Row height of a cell
    #[arg(long)]
    cell_height: Option<f64>,

    /// Gap between cells
    #[arg(long)]
    char_spacing: Option<f64>,

    /// Dot fill color
    #[arg(long)]
    dot_color: Option<String>,

    /// Fixed canvas width (computed from the text by default)
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height
    #[arg(long)]
    height: Option<f64>,

    /// Background color ("transparent" for none)
    #[arg(long)]
    background: Option<String>,

    /// Prepend an XML declaration
    #[arg(long)]
    standalone: bool,

    /// Write the SVG on a single line
    #[arg(long)]
    compact: bool,

    /// Only check whether the input is Braille text (exit status 0 or 1)
    #[arg(long)]
    check: bool,

    /// List the raised dots of each character instead of rendering
    #[arg(long)]
    dots: bool,

    /// Fail if the input contains non-Braille characters
    #[arg(long)]
    strict: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Config file (or defaults) with command-line overrides applied
    fn render_config(&self) -> Result<RenderConfig, String> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_file(path)
                .map_err(|e| format!("Error loading config '{}': {}", path.display(), e))?,
            None => RenderConfig::default(),
        };

        let layout = &mut config.layout;
        if let Some(v) = self.dot_radius {
            layout.dot_radius = v;
        }
        if let Some(v) = self.cell_width {
            layout.cell_width = v;
        }
        if let Some(v) = self.cell_height {
            layout.cell_height = v;
        }
        if let Some(v) = self.char_spacing {
            layout.char_spacing = v;
        }
        if let Some(v) = &self.dot_color {
            layout.dot_color = v.clone();
        }
        if self.width.is_some() {
            layout.canvas_width = self.width;
        }
        if let Some(v) = self.height {
            layout.canvas_height = v;
        }
        if let Some(v) = &self.background {
            layout.background_color = v.clone();
        }
        layout.validate().map_err(|e| format!("Error: {}", e))?;

        if self.standalone {
            config.svg.standalone = true;
        }
        if self.compact {
            config.svg.pretty_print = false;
        }
        Ok(config)
    }

    fn source_name(&self) -> String {
        self.input
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<stdin>".to_string())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, String> {
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return Ok(ExitCode::SUCCESS);
    }

    let raw = read_input(cli)?;

    if cli.check {
        let ok = is_braille_string(&raw);
        log::info!("{}: {}", cli.source_name(), if ok { "Braille" } else { "not Braille" });
        return Ok(if ok {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let source = trim_line_break(&raw);

    if cli.dots {
        for line in dot_listing(source) {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = cli.render_config()?;
    let rendered = render_with_config(source, &config);

    report_diagnostics(&rendered.diagnostics, source, &cli.source_name());
    if cli.strict && !rendered.diagnostics.is_empty() {
        return Err(format!(
            "Error: {} non-Braille character(s) in input",
            rendered.diagnostics.len()
        ));
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{}\n", rendered.svg))
                .map_err(|e| format!("Error writing '{}': {}", path.display(), e))?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{}", rendered.svg),
    }

    Ok(ExitCode::SUCCESS)
}

fn read_input(cli: &Cli) -> Result<String, String> {
    let source = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Error reading file '{}': {}", path.display(), e))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Error reading from stdin: {}", e))?;
            buffer
        }
    };

    Ok(source)
}

/// Drop the trailing line break an editor or `echo` adds, so it does not
/// become a blank cell
fn trim_line_break(source: &str) -> &str {
    source.trim_end_matches(['\n', '\r'])
}

fn report_diagnostics(diagnostics: &[Diagnostic], source: &str, filename: &str) {
    for diagnostic in diagnostics {
        eprint!("{}", diagnostic.format(source, filename));
    }
}

/// One line per character: position, character, six-dot equivalent and
/// raised dots
fn dot_listing(source: &str) -> Vec<String> {
    source
        .chars()
        .enumerate()
        .map(|(index, ch)| match decode(ch) {
            Ok(dots) => format!("{:>4}  {}  {}  {}", index, ch, encode(dots), dots),
            Err(e) => format!("{:>4}  {:?}  ({})", index, ch, e),
        })
        .collect()
}

fn print_intro() {
    println!(
        r#"Braille SVG - render Unicode Braille text as SVG dot cells

USAGE:
    braille-svg [OPTIONS] [FILE]
    echo '<braille>' | braille-svg

OPTIONS:
    -o, --output       Write SVG to a file
    -c, --config       Layout and SVG options (TOML file)
    --background       Background color (default: transparent)
    --check            Only check whether the input is Braille
    --dots             List the raised dots of each character
    --strict           Fail on non-Braille characters
    -h, --help         Print all options

QUICK START:
    echo '⠙⠪⠆⠵' | braille-svg > output.svg"#
    );
}
