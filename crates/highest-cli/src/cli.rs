//! Command-line argument definitions.

use std::ffi::{OsStr, OsString};

use clap::Parser;
use highest_core::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "highest")]
#[command(about = "Print the highest-scoring records of a score file as JSON")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Input file with one `<score>:<json>` record per line
    #[arg(allow_hyphen_values = true)]
    pub path: OsString,

    /// Maximum number of records to print (integer >= 1)
    #[arg(allow_hyphen_values = true)]
    pub display_length: String,
}

impl Args {
    /// Parse arguments (including the program name), turning clap usage
    /// errors into [`Error::Usage`].
    ///
    /// Every argument after the program name counts, `--` included, so the
    /// count is checked on the raw list and clap only sees values past its
    /// own separator.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let program = args.next().unwrap_or_else(|| OsString::from("highest"));
        let values: Vec<OsString> = args.collect();

        if values.len() != 2 {
            return Err(Error::Usage(format!(
                "expected 2 arguments, got {}",
                values.len()
            )));
        }

        let argv = [program, OsString::from("--")].into_iter().chain(values);
        Self::try_parse_from(argv).map_err(|e| Error::Usage(usage_detail(&e)))
    }

    pub fn path(&self) -> &OsStr {
        &self.path
    }
}

/// First line of clap's rendered message, without its `error: ` prefix.
fn usage_detail(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim().to_string()
}
