//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : rpawogen contributors
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// A secure random password generator written in Rust.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use rpawogen::configtool;
use rpawogen::passgen::{GenerationConfig, MAX_LENGTH, MIN_LENGTH};

mod commands;

use commands::password_gen::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "rpawogen", version)]
#[command(about = "A secure random password generator written in Rust", long_about = None)]
struct Cli {
    /// Path to the generator defaults file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print debug logs
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate new random passwords
    Gen(GenArgs),

    /// Test password strength
    Testpass(TestpassArgs),

    /// Manage generator defaults
    #[command(subcommand)]
    Config(ConfigAction),
}

#[derive(Debug, Args)]
struct CharsetArgs {
    /// Length of the password
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(MIN_LENGTH as i64..=MAX_LENGTH as i64))]
    length: Option<u8>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude symbols
    #[arg(long, default_value_t = false)]
    no_symbols: bool,
}

impl CharsetArgs {
    // 命令行参数只能在基础配置上关闭类别
    fn apply(&self, base: GenerationConfig) -> GenerationConfig {
        GenerationConfig {
            length: self.length.map_or(base.length, usize::from),
            use_uppercase: base.use_uppercase && !self.no_uppercase,
            use_lowercase: base.use_lowercase && !self.no_lowercase,
            use_numbers: base.use_numbers && !self.no_numbers,
            use_symbols: base.use_symbols && !self.no_symbols,
        }
    }
}

#[derive(Debug, Args)]
struct GenArgs {
    #[command(flatten)]
    charset: CharsetArgs,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=100))]
    count: u32,

    /// Print only the passwords
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Print results as JSON
    #[arg(long, default_value_t = false, conflicts_with = "quiet")]
    json: bool,
}

impl GenArgs {
    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.quiet {
            OutputFormat::Quiet
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Debug, Args)]
struct TestpassArgs {
    /// Password to test
    password: String,
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Show the effective defaults
    Show,

    /// Save the given options as defaults
    Save(CharsetArgs),

    /// Remove the defaults file
    Reset,
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

// 仅在需要读写配置文件的命令中解析路径
fn resolve_config_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => Ok(configtool::default_config_path()?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Gen(args) => {
            let config_path = resolve_config_path(cli.config)?;
            let defaults = configtool::load_config(&config_path)?.defaults;
            let config = args.charset.apply(defaults);
            commands::password_gen::generate_passwords(&mut stdout, &config, args.count as usize, args.format())
        },
        Commands::Testpass(args) => {
            commands::testpass::test_password(&mut stdout, &args.password)
        },
        Commands::Config(ConfigAction::Show) => {
            commands::config::show_config(&resolve_config_path(cli.config)?)
        },
        Commands::Config(ConfigAction::Save(args)) => {
            let config = args.apply(GenerationConfig::default());
            commands::config::save_config(&resolve_config_path(cli.config)?, config)
        },
        Commands::Config(ConfigAction::Reset) => {
            commands::config::reset_config(&resolve_config_path(cli.config)?)
        },
    }
}
