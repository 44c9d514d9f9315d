use clap::{Parser, Subcommand, ValueEnum};
use users_client::PhoneRule;
use users_client::config::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "users")]
#[command(author, version, about = "Browse and register users of the users directory API")]
pub struct Cli {
    /// Configuration file path (defaults to users-client.toml)
    #[clap(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Enable verbose output with request logging
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List users, one page at a time
    List {
        /// Number of pages to load
        #[clap(short, long, default_value_t = 1, conflicts_with = "all")]
        pages: u32,

        /// Keep loading until the last page
        #[clap(short, long, default_value_t = false)]
        all: bool,

        /// Print users as JSON instead of a table
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// List the positions a new user can pick from
    Positions,

    /// Register a new user
    Register {
        /// Full name
        #[clap(long)]
        name: String,

        /// Email address
        #[clap(long)]
        email: String,

        /// Phone number; decoration such as "+38 (050) 123-45-67" is stripped
        #[clap(long)]
        phone: String,

        /// Id of the position, see `users positions`
        #[clap(long)]
        position_id: i64,

        /// Path to the photo to upload
        #[clap(long)]
        photo: String,

        /// Phone rule to enforce (defaults to the configured one)
        #[clap(long, value_enum)]
        phone_rule: Option<PhoneRuleArg>,
    },

    /// Generate the default configuration file
    Init {
        /// Overwrite an existing file
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PhoneRuleArg {
    /// Ten digits starting with 0
    LeadingZero,

    /// Any ten digits
    TenDigits,
}

impl From<PhoneRuleArg> for PhoneRule {
    fn from(arg: PhoneRuleArg) -> Self {
        match arg {
            PhoneRuleArg::LeadingZero => PhoneRule::LeadingZero,
            PhoneRuleArg::TenDigits => PhoneRule::TenDigits,
        }
    }
}
