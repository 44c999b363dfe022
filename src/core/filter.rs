//! # Command-Line Filter Module / 命令行过滤模块
//!
//! Turns the process arguments into the set of test-set names to run. Every
//! argument after the program name is a name; names are compared
//! case-insensitively. No arguments means "run everything".
//!
//! 将进程参数转换为要运行的测试集名称集合。程序名之后的每个参数都是一个名称，
//! 名称比较不区分大小写。没有参数表示运行所有测试集。

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fmt;

use clap::{Arg, ArgAction, Command};

use crate::core::registry::Registry;

/// Normalizes a test-set name for case-insensitive matching.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
}

/// The normalized names requested on the command line. Empty means no filter.
/// 命令行中请求的规范化名称。为空表示不过滤。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestedCases {
    names: BTreeSet<String>,
}

impl RequestedCases {
    /// A filter that selects every set.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|name| normalize(name.as_ref())).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set called `set_name` should run.
    pub fn selects(&self, set_name: &str) -> bool {
        self.names.is_empty() || self.names.contains(&normalize(set_name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The requested names that match no registered set.
    pub fn unmatched(&self, registry: &Registry) -> Vec<&str> {
        let registered: BTreeSet<String> = registry.names().map(normalize).collect();
        self.iter()
            .filter(|name| !registered.contains(*name))
            .collect()
    }
}

/// Why the command line could not be turned into [`RequestedCases`].
/// 命令行无法解析的原因。
#[derive(Debug)]
pub enum ParseFailure {
    /// The argument list itself was rejected.
    Arguments(clap::Error),
    /// An argument is not valid Unicode.
    InvalidEncoding(OsString),
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFailure::Arguments(err) => write!(f, "{}", err.to_string().trim_end()),
            ParseFailure::InvalidEncoding(arg) => {
                write!(f, "argument is not valid Unicode: {}", arg.to_string_lossy())
            }
        }
    }
}

impl std::error::Error for ParseFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseFailure::Arguments(err) => Some(err),
            ParseFailure::InvalidEncoding(_) => None,
        }
    }
}

/// The harness defines no flags: every token is a set name, including ones
/// that start with a hyphen. [`parse_cmd_line`] puts an end-of-options `--`
/// in front of the arguments, so a literal `--` is a name as well.
fn build_cli() -> Command {
    Command::new("testset")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("sets")
                .value_name("TEST_SET")
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true)
                .value_parser(clap::value_parser!(OsString))
                .action(ArgAction::Append),
        )
}

/// Parses the process arguments, program name first.
///
/// 解析进程参数（第一个为程序名）。
pub fn parse_cmd_line<I, T>(args: I) -> Result<RequestedCases, ParseFailure>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let argv: Vec<OsString> = args
        .next()
        .into_iter()
        .chain(std::iter::once(OsString::from("--")))
        .chain(args)
        .collect();

    let matches = build_cli()
        .try_get_matches_from(argv)
        .map_err(ParseFailure::Arguments)?;

    let mut names = Vec::new();
    if let Some(values) = matches.get_many::<OsString>("sets") {
        for value in values {
            let name = value
                .to_str()
                .ok_or_else(|| ParseFailure::InvalidEncoding(value.clone()))?;
            names.push(name.to_string());
        }
    }
    Ok(RequestedCases::from_names(names))
}
