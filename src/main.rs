use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use proptable::ParsedFormula;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "FORMULA")]
    /// The formula, e.g. "A ∧ B v ~C" (read from stdin if neither this nor --input is given)
    formula: Option<String>,

    #[clap(short, long, value_parser, value_name = "FILE")]
    /// Read the formula from a file
    input: Option<PathBuf>,

    #[clap(long)]
    /// Output the table as csv
    csv: bool,

    #[clap(long)]
    /// Print the postfix order of the formula before the table
    postfix: bool,

    #[clap(long, value_parser, value_name = "N", default_value_t = 16)]
    /// Refuse formulas with more than N variables
    max_variables: usize,

    #[clap(short, long, action = ArgAction::Count)]
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    verbose: u8,
}

const fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse_from(argfile::expand_args_from(
        wild::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?);

    simplelog::TermLogger::init(
        level_filter(args.verbose),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let parsed = if let Some(formula) = &args.formula {
        ParsedFormula::parse(formula)?
    } else if let Some(path) = &args.input {
        ParsedFormula::new(&mut BufReader::new(File::open(path)?))?
    } else {
        ParsedFormula::new(&mut io::stdin().lock())?
    };

    let label = parsed.source.trim().to_string();

    info!("formula {label:?} has variables [{}]", parsed.vars.join(", "));

    if args.postfix {
        let postfix: Vec<String> = parsed.postfix.iter().map(ToString::to_string).collect();
        println!("{}", postfix.join(" "));
    }

    let table = parsed.truth_table_bounded(args.max_variables)?;

    info!(
        "{} of {} assignments satisfy the formula",
        table.models().count(),
        table.rows().len()
    );

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    if args.csv {
        table.write_csv(&mut writer, &label)?;
    } else {
        table.write_text(&mut writer, &label)?;
    }

    Ok(())
}
