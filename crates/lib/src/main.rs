use std::{
    fs::OpenOptions,
    io::{stdout, Write},
};

use clap::{builder::PossibleValue, value_parser, Arg, ArgAction, Command, ValueEnum};

use cssprune::{
    optimize_path, Logger, Options, OutputStyle, ReductionMode, StdFs, StdLogger, UsageIndex,
};

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Style {
    Expanded,
    Compressed,
}

impl ValueEnum for Style {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Expanded, Self::Compressed]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Expanded => PossibleValue::new("expanded"),
            Self::Compressed => PossibleValue::new("compressed"),
        })
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Reduction {
    Strict,
    Safe,
    Conservative,
}

impl ValueEnum for Reduction {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Strict, Self::Safe, Self::Conservative]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Strict => PossibleValue::new("strict")
                .help("Check the universal selector against the known tags"),
            Self::Safe => PossibleValue::new("safe"),
            Self::Conservative => PossibleValue::new("conservative")
                .help("Keep vendor-prefixed pseudo-elements"),
        })
    }
}

fn cli() -> Command {
    Command::new("cssprune")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Removes the CSS rules a site's markup and scripts can never match")
        .arg(
            Arg::new("CSS")
                .long("css")
                .help("Stylesheets to prune. May be passed multiple times.")
                .required(true)
                .action(ArgAction::Append)
                .value_parser(value_parser!(String))
                .num_args(1..),
        )
        .arg(
            Arg::new("HTML")
                .long("html")
                .help("Markup and script files whose classes, tags and attributes are in use")
                .action(ArgAction::Append)
                .value_parser(value_parser!(String))
                .num_args(1..),
        )
        .arg(
            Arg::new("OUTPUT")
                .short('o')
                .long("output")
                .help("Output CSS file")
                .value_parser(value_parser!(String))
                .num_args(1),
        )
        .arg(
            Arg::new("REDUCTION")
                .short('r')
                .long("reduction")
                .help("How eagerly selectors are removed")
                .default_value("safe")
                .ignore_case(true)
                .num_args(1)
                .value_parser(value_parser!(Reduction)),
        )
        .arg(
            Arg::new("STYLE")
                .short('s')
                .long("style")
                .help("Minified or expanded output")
                .default_value("expanded")
                .ignore_case(true)
                .num_args(1)
                .value_parser(value_parser!(Style)),
        )
        .arg(
            Arg::new("KEEP_KEYFRAMES")
                .action(ArgAction::SetTrue)
                .long("keep-keyframes")
                .help("Don't remove @keyframes that no animation refers to."),
        )
        .arg(
            Arg::new("KEEP_FORM_PSEUDOS")
                .action(ArgAction::SetTrue)
                .long("keep-form-pseudos")
                .help("Don't remove pseudo-elements of form controls the markup never uses."),
        )
        .arg(
            Arg::new("VERBOSE")
                .action(ArgAction::SetTrue)
                .short('v')
                .long("verbose")
                .help("Print the scanned files, the harvested usage and what was removed."),
        )
        .arg(
            Arg::new("NO_UNICODE")
                .action(ArgAction::SetTrue)
                .long("no-unicode")
                .help("Whether to use Unicode characters for messages."),
        )
        .arg(
            Arg::new("QUIET")
                .action(ArgAction::SetTrue)
                .short('q')
                .long("quiet")
                .help("Don't print warnings."),
        )
}

fn join<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(" ")
}

fn main() -> std::io::Result<()> {
    let matches = cli().get_matches();

    let verbose = matches.get_flag("VERBOSE");
    let quiet = matches.get_flag("QUIET");
    let logger = &StdLogger;
    let log = |message: String| {
        if verbose && !quiet {
            logger.debug(&message);
        }
    };

    let mut has_failed = false;

    let mut usage = UsageIndex::new();
    for path in matches.get_many::<String>("HTML").into_iter().flatten() {
        let mut found = UsageIndex::new();
        match found.scan_path(path, &StdFs) {
            Ok(kind) => {
                log(format!(
                    "scanned {} as {}: {} classes, {} tags, {} attributes",
                    path,
                    kind,
                    found.used_classes().count(),
                    found.used_tags().count(),
                    found.used_attributes().count()
                ));
                usage.extend(found);
            }
            Err(e) => {
                eprintln!("cssprune: unable to scan {}", path);
                eprint!("{}", e);
                has_failed = true;
            }
        }
    }

    log(format!("classes: {}", join(usage.used_classes())));
    log(format!("tags: {}", join(usage.used_tags())));
    log(format!("attributes: {}", join(usage.used_attributes())));

    let mode = match matches.get_one::<Reduction>("REDUCTION") {
        Some(Reduction::Strict) => ReductionMode::Strict,
        Some(Reduction::Conservative) => ReductionMode::Conservative,
        Some(Reduction::Safe) | None => ReductionMode::Safe,
    };

    let style = match matches.get_one::<Style>("STYLE") {
        Some(Style::Compressed) => OutputStyle::Compressed,
        Some(Style::Expanded) | None => OutputStyle::Expanded,
    };

    let options = &Options::default()
        .logger(logger)
        .mode(mode)
        .style(style)
        .remove_unused_keyframes(!matches.get_flag("KEEP_KEYFRAMES"))
        .remove_form_pseudoelements(!matches.get_flag("KEEP_FORM_PSEUDOS"))
        .verbose(verbose)
        .quiet(quiet)
        .unicode_error_messages(!matches.get_flag("NO_UNICODE"));

    let mut output = String::new();
    for path in matches.get_many::<String>("CSS").into_iter().flatten() {
        log(format!("processing {}", path));

        match optimize_path(path, &usage, options) {
            Ok(css) => {
                output.push_str(&css);
                output.push('\n');
            }
            Err(e) => {
                eprintln!("cssprune: unable to process {}", path);
                eprint!("{}", e);
                has_failed = true;
            }
        }
    }

    let (mut stdout_write, mut file_write);
    let buf_out: &mut dyn Write = if let Some(path) = matches.get_one::<String>("OUTPUT") {
        file_write = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        &mut file_write
    } else {
        stdout_write = stdout();
        &mut stdout_write
    };

    buf_out.write_all(output.as_bytes())?;
    buf_out.flush()?;

    if has_failed {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use crate::cli;

    #[test]
    fn verify() {
        cli().debug_assert();
    }
}
