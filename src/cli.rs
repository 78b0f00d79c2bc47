// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

use std::{path::PathBuf, rc::Rc, sync::LazyLock};

use clap::{command, crate_name, value_parser, Arg, ArgAction, Command, ValueHint};
use cli_utils::logging;
use const_format::formatcp;
use prjava::constants::{DEFAULT_INDENTATION, DEFAULT_LINE_WIDTH, INPUT_SUFFIX, OUTPUT_SUFFIX};
use prjava::options::{ArrayInitializerStyle, FormatOptions};
use prjava::Output;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

pub const A_L_BREAK_ARRAY_INITIALIZERS: &str = "break-array-initializers";
pub const A_L_CHECK: &str = "check";
pub const A_S_CHECK: char = 'c';
pub const A_L_FORCE: &str = "force";
pub const A_S_FORCE: char = 'f';
pub const A_L_INDENTATION: &str = "indentation";
pub const A_S_INDENTATION: char = 'i';
pub const A_L_LINE_WIDTH: &str = "line-width";
pub const A_S_LINE_WIDTH: char = 'w';
pub const A_L_OUTPUT: &str = "output";
pub const A_S_OUTPUT: char = 'O';
pub const A_L_QUIET: &str = "quiet";
pub const A_S_QUIET: char = 'q';
pub const A_L_VERBOSE: &str = "verbose";
pub const A_S_VERBOSE: char = 'v';
pub const A_L_VERSION: &str = "version";
pub const A_S_VERSION: char = 'V';
pub const A_L_SRC: &str = "src";

static DEFAULT_INDENTATION_STR: LazyLock<String> =
    LazyLock::new(|| DEFAULT_INDENTATION.to_string());
static DEFAULT_LINE_WIDTH_STR: LazyLock<String> =
    LazyLock::new(|| DEFAULT_LINE_WIDTH.to_string());

fn arg_break_array_initializers() -> Arg {
    Arg::new(A_L_BREAK_ARRAY_INITIALIZERS)
        .help("Always break non-empty array initializers over multiple lines")
        .long_help(
            "Always break non-empty array initializers over multiple lines. \
By default, an array initializer stays on a single line \
if it fits the line width.",
        )
        .action(ArgAction::SetTrue)
        .long(A_L_BREAK_ARRAY_INITIALIZERS)
}

fn arg_check() -> Arg {
    Arg::new(A_L_CHECK)
        .help(formatcp!(
            "Do not write the .{OUTPUT_SUFFIX} files but only check \
if they already match the printed output"
        ))
        .action(ArgAction::SetTrue)
        .short(A_S_CHECK)
        .long(A_L_CHECK)
        .conflicts_with(A_L_OUTPUT)
}

fn arg_force() -> Arg {
    Arg::new(A_L_FORCE)
        .help("Forces overwriting of the output file, if it already exists")
        .action(ArgAction::SetTrue)
        .short(A_S_FORCE)
        .long(A_L_FORCE)
}

fn arg_indentation() -> Arg {
    Arg::new(A_L_INDENTATION)
        .help("Number of spaces per level of indentation")
        .num_args(1)
        .short(A_S_INDENTATION)
        .long(A_L_INDENTATION)
        .action(ArgAction::Set)
        .value_name("NUM")
        .value_parser(value_parser!(u8).range(1..))
        .default_value(DEFAULT_INDENTATION_STR.as_str())
}

fn arg_line_width() -> Arg {
    Arg::new(A_L_LINE_WIDTH)
        .help("Number of columns after which array initializers get broken")
        .num_args(1)
        .short(A_S_LINE_WIDTH)
        .long(A_L_LINE_WIDTH)
        .action(ArgAction::Set)
        .value_name("NUM")
        .value_parser(value_parser!(u16).range(1..))
        .default_value(DEFAULT_LINE_WIDTH_STR.as_str())
}

fn arg_output() -> Arg {
    Arg::new(A_L_OUTPUT)
        .help(formatcp!(
            "'-' to print to stdout instead of writing .{OUTPUT_SUFFIX} files \
next to the inputs"
        ))
        .num_args(1)
        .short(A_S_OUTPUT)
        .long(A_L_OUTPUT)
        .action(ArgAction::Set)
        .value_hint(ValueHint::FilePath)
        .value_name("FILE")
        .value_parser(["-"])
}

fn arg_quiet() -> Arg {
    Arg::new(A_L_QUIET)
        .help("Minimize or suppress output to stdout")
        .long_help("Minimize or suppress output to stdout, and only shows log output on stderr.")
        .action(ArgAction::SetTrue)
        .short(A_S_QUIET)
        .long(A_L_QUIET)
        .conflicts_with(A_L_VERBOSE)
}

fn arg_verbose() -> Arg {
    Arg::new(A_L_VERBOSE)
        .help("more verbose output (useful for debugging)")
        .short(A_S_VERBOSE)
        .long(A_L_VERBOSE)
        .action(ArgAction::SetTrue)
}

fn arg_version() -> Arg {
    Arg::new(A_L_VERSION)
        .help(formatcp!(
            "Print version information and exit. \
May be combined with -{A_S_QUIET},--{A_L_QUIET}, \
to really only output the version string."
        ))
        .short(A_S_VERSION)
        .long(A_L_VERSION)
        .action(ArgAction::SetTrue)
}

fn arg_src() -> Arg {
    Arg::new(A_L_SRC)
        .help(formatcp!(
            "Syntax tree file(s) or director(y|ies) containing *.{INPUT_SUFFIX} files to print"
        ))
        .num_args(1..)
        .required(true)
        .value_name("FILE_OR_DIR")
        .value_hint(ValueHint::AnyPath)
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Set)
}

fn args_matcher() -> Command {
    command!()
        .about("Pretty prints Java syntax trees as Java source")
        .long_about(formatcp!(
            "Takes Java syntax trees as input \
(as produced by a Java parser, written in a bracketed tree notation \
into *.{INPUT_SUFFIX} files), \
and generates Java source code from them, \
with only the parentheses required by operator precedence, \
and a fixed layout of braces, indentation and blank lines."
        ))
        .bin_name(clap::crate_name!())
        .help_expected(true)
        .disable_version_flag(true)
        .arg(arg_break_array_initializers())
        .arg(arg_check())
        .arg(arg_force())
        .arg(arg_indentation())
        .arg(arg_line_width())
        .arg(arg_output())
        .arg(arg_quiet())
        .arg(arg_verbose())
        .arg(arg_version())
        .arg(arg_src())
}

#[allow(clippy::print_stdout)]
fn print_version_and_exit(quiet: bool) {
    if !quiet {
        print!("{} ", clap::crate_name!());
    }
    println!("{}", prjava::VERSION);
    std::process::exit(0);
}

#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to init logging system: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),

    #[error("Failed to change the logging level: {0}")]
    LogChangeLevel(#[from] tracing_subscriber::reload::Error),
}

/// What the command line asks us to do.
pub struct Invocation {
    pub options: Rc<FormatOptions>,
    pub output: Output,
    pub src: Vec<PathBuf>,
}

pub fn init() -> Result<Invocation, InitError> {
    let log_reload_handle = logging::setup(crate_name!())?;
    let args = args_matcher().get_matches();

    let quiet = args.get_flag(A_L_QUIET);
    let version = args.get_flag(A_L_VERSION);
    if version {
        print_version_and_exit(quiet);
    }

    let verbose = args.get_flag(A_L_VERBOSE);
    let log_level = if verbose {
        LevelFilter::TRACE
    } else if quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    logging::set_log_level_tracing(&log_reload_handle, log_level)?;

    let check = args.get_flag(A_L_CHECK);
    let force = args.get_flag(A_L_FORCE);
    let indentation_spaces = args
        .get_one::<u8>(A_L_INDENTATION)
        .map_or(DEFAULT_INDENTATION, |spaces| usize::from(*spaces));
    let line_width = args
        .get_one::<u16>(A_L_LINE_WIDTH)
        .map_or(DEFAULT_LINE_WIDTH, |width| usize::from(*width));
    let array_initializers = if args.get_flag(A_L_BREAK_ARRAY_INITIALIZERS) {
        ArrayInitializerStyle::AlwaysBreak
    } else {
        ArrayInitializerStyle::FitOnLine
    };
    let output = if args.get_one::<String>(A_L_OUTPUT).is_some() {
        Output::Stdout
    } else {
        Output::Sibling
    };

    let src: Vec<PathBuf> = args
        .get_many::<PathBuf>(A_L_SRC)
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default();
    Ok(Invocation {
        options: Rc::new(FormatOptions {
            check,
            force,
            indentation: " ".repeat(indentation_spaces),
            line_width,
            array_initializers,
            ..FormatOptions::default()
        }),
        output,
        src,
    })
}
