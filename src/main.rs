//! glabels-xml CLI
//!
//! Usage:
//!   glabels-xml [OPTIONS] [FILE]
//!
//! Options:
//!   --objects              Input is a Glabels-objects fragment
//!   -s, --summary          List the template and objects instead of printing markup
//!   -o, --output <FILE>    Write the normalized document to FILE
//!   -c, --config <FILE>    Writer configuration (TOML format)
//!   -v, --verbose          Log debug messages to stderr
//!   -h, --help             Print help

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};

use glabels_xml::model::{ColorOrField, LabelObject, ObjectKind};
use glabels_xml::{reader, LabelDocument, LabelError, LabelWriter, Units, WriterConfig};

#[derive(Parser)]
#[command(name = "glabels-xml")]
#[command(about = "Read, check and normalize gLabels label documents")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Input is an object fragment rather than a whole document
    #[arg(long)]
    objects: bool,

    /// List the template and objects instead of printing markup
    #[arg(short, long)]
    summary: bool,

    /// Write the normalized output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Writer configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug messages to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Parsed input: a whole document or a bare object list
enum Input {
    Document(LabelDocument),
    Objects(Vec<LabelObject>),
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    let cli = Cli::parse();

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });
    }

    // Load writer configuration
    let config = match &cli.config {
        Some(path) => match WriterConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => WriterConfig::default(),
    };

    // Read input
    let (buffer, filename) = match &cli.input {
        Some(path) => match fs::read(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = Vec::new();
            match io::stdin().read_to_end(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let parsed = if cli.objects {
        reader::deserialize_objects(&buffer).map(Input::Objects)
    } else {
        reader::read_buffer(&buffer).map(Input::Document)
    };
    let input = match parsed {
        Ok(input) => input,
        Err(e) => {
            report(&e, &buffer, &filename);
            std::process::exit(1);
        }
    };

    if cli.summary {
        print_summary(&input, config.units);
        if cli.output.is_none() {
            return;
        }
    }

    let writer = LabelWriter::new(config);
    if let Err(e) = emit(&writer, &input, cli.output.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn report(error: &LabelError, buffer: &[u8], filename: &str) {
    match error.as_format() {
        Some(e) => eprint!("{}", e.format(&String::from_utf8_lossy(buffer), filename)),
        None => eprintln!("Error: {}", error),
    }
}

fn emit(writer: &LabelWriter, input: &Input, output: Option<&Path>) -> Result<(), LabelError> {
    match (input, output) {
        (Input::Document(document), Some(path)) => writer.write_file(document, path),
        (Input::Objects(objects), Some(path)) => {
            let bytes = writer.serialize_objects(objects)?;
            fs::write(path, bytes).map_err(|e| LabelError::io(path, e))
        }
        (input, None) => {
            let bytes = match input {
                Input::Document(document) => writer.write_buffer(document)?,
                Input::Objects(objects) => writer.serialize_objects(objects)?,
            };
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&bytes)
                .and_then(|()| writeln!(stdout))
                .map_err(|e| LabelError::io("<stdout>", e))
        }
    }
}

fn print_summary(input: &Input, units: Units) {
    let objects = match input {
        Input::Document(document) => {
            let template = &document.template;
            let (w, h) = template.frame.size();
            println!(
                "Template: {} ({}), {} labels per sheet",
                template.name(),
                template.description,
                template.labels_per_sheet()
            );
            println!(
                "Label size: {} x {}",
                w.to_attr(units),
                h.to_attr(units)
            );
            println!("Rotate: {}", document.rotate);
            if !document.merge.is_none() {
                println!(
                    "Merge: {} from '{}'",
                    document.merge.id(),
                    document.merge.source()
                );
            }
            let keys = document.field_keys();
            if !keys.is_empty() {
                println!("Fields: {}", keys.join(", "));
            }
            &document.objects
        }
        Input::Objects(objects) => objects,
    };

    println!("Objects: {}", objects.len());
    for (i, object) in objects.iter().enumerate() {
        let detail = match &object.kind {
            ObjectKind::Box(style) | ObjectKind::Ellipse(style) => {
                format!(" fill={}", describe_color(&style.fill_color))
            }
            ObjectKind::Line(style) => format!(" line={}", describe_color(&style.line_color)),
            ObjectKind::Text(text) => format!(" {:?}", text.text),
            ObjectKind::Image(image) => match image.filename.key() {
                Some(key) => format!(" src=${{{}}}", key),
                None => format!(" src={}", image.filename.literal().map_or("", |s| s.as_str())),
            },
            ObjectKind::Barcode(barcode) => format!(
                " {} {:?}{}{} (not serializable)",
                barcode.style,
                barcode.data,
                if barcode.show_text { " +text" } else { "" },
                if barcode.checksum { " +checksum" } else { "" }
            ),
        };
        println!(
            "  {:>3}. {:<8} at ({}, {}) size {} x {}{}",
            i,
            object.kind.name(),
            object.x0.to_attr(units),
            object.y0.to_attr(units),
            object.w.to_attr(units),
            object.h.to_attr(units),
            detail
        );
    }
}

fn describe_color(color: &ColorOrField) -> String {
    match color {
        ColorOrField::Literal(color) => color.to_string(),
        ColorOrField::Field(key) => format!("${{{}}}", key),
    }
}
