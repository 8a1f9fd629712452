// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::debug;

use crate::{
    config::consts::DATE_PARAM_FMT,
    config::options::AppOptions,
    core::net::HttpSource,
    data::{Route, Station},
    error::{Result, TrainError},
    file,
    progress::Progress,
    report,
    scrape::{self, Selection},
};

#[derive(Parser, Debug, Default)]
#[command(
    name = "train_scrape",
    version,
    about = "Next train departures between two stations, saved as JSON",
    after_help = "Run without station flags to be prompted for them."
)]
pub struct Args {
    /// Source station name, e.g. "Howrah Jn"
    #[arg(long)]
    pub from_name: Option<String>,
    /// Source station code, e.g. HWH
    #[arg(long)]
    pub from_code: Option<String>,
    /// Destination station name, e.g. "Chittaranjan"
    #[arg(long)]
    pub to_name: Option<String>,
    /// Destination station code, e.g. CRJ
    #[arg(long)]
    pub to_code: Option<String>,

    /// Output file, or a directory to put next_3_trains.json in
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// TOML file overriding the built-in defaults
    #[arg(long, env = "TRAIN_SCRAPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Append log lines to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// -v info, -vv debug (RUST_LOG overrides)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub enum Mode {
    Cli(Route),
    Interactive,
}

// Flags vs prompt
pub fn detect_mode(args: &Args) -> Result<Mode> {
    match (&args.from_name, &args.from_code, &args.to_name, &args.to_code) {
        (None, None, None, None) => Ok(Mode::Interactive),
        (Some(fname), Some(fcode), Some(tname), Some(tcode)) => Ok(Mode::Cli(Route::new(
            Station::new(fname.trim(), fcode.trim().to_uppercase()),
            Station::new(tname.trim(), tcode.trim().to_uppercase()),
        ))),
        _ => Err(TrainError::InvalidInput(s!(
            "Specify all of --from-name, --from-code, --to-name, --to-code (or none to be prompted)"
        ))),
    }
}

/// Ask for both stations on `input`, echoing prompts to `output`.
pub fn prompt_route<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Route> {
    writeln!(output, "Indian Railways Train Search Tool")?;
    writeln!(output, "{}", "=".repeat(50))?;

    let src_name = ask(input, output, "Enter source station name (e.g., Howrah Jn): ")?;
    let src_code = ask(input, output, "Enter source station code (e.g., HWH): ")?.to_uppercase();
    let dst_name = ask(input, output, "Enter destination station name (e.g., Chittaranjan): ")?;
    let dst_code = ask(input, output, "Enter destination station code (e.g., CRJ): ")?.to_uppercase();

    let route = Route::new(Station::new(src_name, src_code), Station::new(dst_name, dst_code));
    route.validate()?;
    Ok(route)
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(TrainError::InvalidInput(s!("Input ended before all stations were given")));
    }
    Ok(line.trim().to_string())
}

/// Prints the pipeline's status lines and the final listing.
pub struct ConsoleProgress<W: Write> {
    out: W,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn begin(&mut self, route: &Route, url: &str, date: NaiveDate) {
        let date = date.format(DATE_PARAM_FMT);
        let _ = writeln!(
            self.out,
            "Fetching trains from {} to {}",
            route.origin.label(),
            route.destination.label()
        );
        let _ = writeln!(self.out, "Date: {date}");
        let _ = writeln!(self.out, "URL: {url}");
    }

    fn log(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{msg}");
    }

    fn parsed(&mut self, count: usize) {
        let _ = writeln!(self.out, "\nTotal trains found: {count}");
    }

    fn finish(&mut self, selection: Option<&Selection>) {
        let Some(sel) = selection else { return };
        let _ = writeln!(self.out, "Current time: {}", sel.now.format("%Y-%m-%d %H:%M:%S"));
        let _ = writeln!(self.out, "{}", report::mode_note(sel));
        let _ = writeln!(self.out, "Selected trains: {}", sel.trains.len());
        let _ = write!(self.out, "{}", report::render_selection(sel));
        let _ = self.out.flush();
    }
}

pub fn run(args: Args) -> Result<()> {
    let opts = AppOptions::load_or_default(args.config.as_deref())?;
    debug!(?opts, "options loaded");

    let route = match detect_mode(&args)? {
        Mode::Cli(route) => route,
        Mode::Interactive => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            prompt_route(&mut input, &mut io::stdout())?
        }
    };

    let source = HttpSource::new(&opts.net)?;
    let now = Local::now().naive_local();
    let mut console = ConsoleProgress::new(io::stdout());

    let outcome = scrape::collect_trains(&source, &opts, &route, now, Some(&mut console))?;

    match outcome {
        Some(o) if !o.selection.is_empty() => {
            let path = file::resolve_out_path(args.out.as_deref(), &opts.export.out_path)?;
            let written = file::write_json(&path, &o.selection.trains)?;
            println!("\nSaved train data to {}", written.display());
            println!("\nSuccessfully found {} next trains.", o.selection.trains.len());
        }
        _ => println!("\nNo trains found between the specified stations."),
    }
    Ok(())
}
