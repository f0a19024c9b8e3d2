use std::ffi::OsString;

pub use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Profile section of the profile file to read `api_base` from.
    /// If the profile is not configured, the built-in default is used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// API base URL
    /// Optional. Takes precedence over API_BASE and the profile file.
    #[clap(long, help = "Base URL of the Bible API")]
    api_base: Option<String>,

    /// Verbose mode
    /// Optional. Print debug logs to stderr.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// One subcommand per API operation
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all books
    Books,
    /// List the chapters of a book
    Chapters { book: String },
    /// List the verses of a chapter
    Verses { book: String, chapter: u32 },
    /// Print the text of one verse
    Verse {
        book: String,
        chapter: u32,
        verse: u32,
    },
    /// Search verse text for a keyword
    Search { keyword: String },
    /// Print a whole book
    Read { book: String },
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    api_base: Option<String>,
    verbose: bool,
    command: Command,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            api_base: args.api_base,
            verbose: args.verbose,
            command: args.command,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(Into::into)
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn api_base(&self) -> Option<&str> {
        self.api_base.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}
