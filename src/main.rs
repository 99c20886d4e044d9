//! KiCad Autogen CLI
//!
//! Usage:
//!   kicad-autogen [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <BASE>   Base path for the generated .lib and .dcm files
//!   -s, --style <FILE>    Style file for text sizes (TOML format)
//!   -v, --verbose         Log layout decisions (repeat for more detail)
//!   --schema              Show descriptor format reference
//!   --examples            Show annotated descriptor examples
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::LevelFilter;

use kicad_autogen::{render_with_config, BuildConfig, BuildError, SymbolStyle};

/// Base name used when reading from stdin
const STDIN_BASE: &str = "./built_lib";

#[derive(Parser)]
#[command(name = "kicad-autogen")]
#[command(about = "Generate KiCad symbols for black-box ICs from YAML descriptions")]
struct Cli {
    /// Input file (reads from stdin if not provided or `-`)
    input: Option<PathBuf>,

    /// Base path for the outputs; `.lib` and `.dcm` are appended
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Style file for text sizes and pin visibility (TOML format)
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Log layout decisions to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Show descriptor format reference
    #[arg(long)]
    schema: bool,

    /// Show annotated descriptor examples
    #[arg(long)]
    examples: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle documentation flags first
    if cli.schema {
        print_schema();
        return;
    }

    if cli.examples {
        print_examples();
        return;
    }

    let input = cli.input.filter(|p| p.as_os_str() != "-");

    // If no input file and stdin is a terminal (interactive), show intro help
    if input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load style
    let config = match &cli.style {
        Some(path) => match SymbolStyle::from_file(path) {
            Ok(style) => BuildConfig::new().with_style(&style),
            Err(e) => {
                eprintln!("Error loading style '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => BuildConfig::default(),
    };

    // Read input
    let (source, filename) = match &input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    // Build both outputs before writing either
    let output = match render_with_config(&source, &config) {
        Ok(output) => output,
        Err(BuildError::Load(e)) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let base = cli
        .output
        .or(input)
        .unwrap_or_else(|| PathBuf::from(STDIN_BASE));
    for (extension, text) in [("lib", &output.library), ("dcm", &output.documentation)] {
        let path = base.with_extension(extension);
        if let Err(e) = write_output(&path, text) {
            eprintln!("Error writing '{}': {}", path.display(), e);
            std::process::exit(1);
        }
        log::info!("wrote {}", path.display());
    }
}

fn write_output(path: &Path, text: &str) -> io::Result<()> {
    fs::write(path, text)
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn print_intro() {
    println!(
        r#"KiCad Autogen - KiCad symbols for black-box ICs

USAGE:
    kicad-autogen [OPTIONS] [FILE]
    cat part.yaml | kicad-autogen -o part

OPTIONS:
    -o, --output     Base path for the .lib and .dcm outputs
    -s, --style      Text sizes and pin visibility (TOML file)
    -v, --verbose    Log layout decisions
    --schema         Show descriptor format reference
    --examples       Show annotated examples
    -h, --help       Print help

QUICK START:
    kicad-autogen ne555.yaml

This writes ne555.lib and ne555.dcm next to the input.
Run --schema for the descriptor format or --examples for more patterns."#
    );
}

fn print_schema() {
    println!(
        r#"DESCRIPTOR FORMAT
=================

A file holds one component mapping, or a list of them.

FIELDS
------
name: <text>              Part name (required)
description: <text>       Written to the .dcm file (required)
designator: <text>        Reference prefix, default IC
footprint: <text>         Default footprint
datasheet: <text>         URL or path
ordercodes:               Supplier order codes, in order
  - [<supplier>, <code>]

PINS
----
A pin is [name, number, type]; name and number may be text or integers.
Pins are listed in groups; each group is drawn as a block with a one-row
gap before the next group.

pins: [left-groups]                   one unit, pins on the left
pins: [left-groups, right-groups]     one unit, pins on both sides
pins: [~, right-groups]               one unit, pins on the right
pins:                                 several units
  - [left-groups, right-groups]
  - [left-groups, right-groups]

The same thing without nesting rules:

units:
  - left: [group, group]
    right: [group]

TYPES
-----
in      input               out     output
bidi    bidirectional       tri     tristate
passive passive             unspec  unspecified
pwrin   power input         pwrout  power output
oc      open collector      od      open drain
oe      open emitter        os      open source
nc      not connected"#
    );
}

fn print_examples() {
    println!(
        r#"KICAD AUTOGEN EXAMPLES
======================

EXAMPLE 1: Single unit, both sides
----------------------------------
name: NE555
description: Precision timer
footprint: Package_SO:SOIC-8_3.9x4.9mm_P1.27mm
datasheet: http://www.ti.com/lit/ds/symlink/ne555.pdf
pins:
  - [[[TRIG, 2, in], [THR, 6, in], [DIS, 7, oc]],
     [[VCC, 8, pwrin], [GND, 1, pwrin]]]
  - [[[OUT, 3, out]], [[RESET, 4, in], [CONT, 5, in]]]

Inputs on the left in two groups, outputs on the right.

EXAMPLE 2: Multi-unit part
--------------------------
name: 74HC00
designator: U
description: Quad NAND gate
ordercodes:
  - [Farnell, 1201263]
units:
  - left: [[[A, 1, in], [B, 2, in]]]
    right: [[[Y, 3, out]]]
  - left: [[[A, 4, in], [B, 5, in]]]
    right: [[[Y, 6, out]]]

Each gate is its own unit; the part is locked.

EXAMPLE 3: Several parts in one library
---------------------------------------
- name: LDO_3V3
  description: 3.3V regulator
  pins: [[[[VIN, 1, pwrin]], [[GND, 2, pwrin]]], [[[VOUT, 3, pwrout]]]]
- name: TVS
  designator: D
  description: ESD protection
  pins: [~, [[[IO, 1, passive], [GND, 2, passive]]]]"#
    );
}
