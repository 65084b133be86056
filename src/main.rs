use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use fvm::commands::{Action, Config, Manager, Preset};
use fvm::runtime::RealRuntime;
use std::path::PathBuf;

const VERSION: &str = env!("FVM_VERSION");

/// fvm - Frida Version Manager
///
/// Pin a Frida version with pip and download the matching frida-server
/// from the GitHub release feed into the current directory.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for
/// authentication against the release feed.
///
/// Examples:
///   fvm --install 16.1.4   # pin frida 16.1.4, save fridaserver-16.1.4.xz
///   fvm --install          # list versions available on the package index
///   fvm --use 16.0.0       # re-pin the package only
#[derive(Parser, Debug)]
#[command(name = "fvm", disable_version_flag = true)]
#[command(group(ArgGroup::new("action").required(true)))]
struct Cli {
    /// Check whether frida is installed and show its version
    #[arg(short = 'c', long = "check", group = "action")]
    check: bool,

    /// Install VERSION and download its frida-server (lists available versions without VERSION)
    #[arg(
        short = 'i',
        long = "install",
        value_name = "VERSION",
        num_args = 0..=1,
        group = "action"
    )]
    install: Option<Option<String>>,

    /// Switch the installed package to VERSION
    #[arg(short = 'u', long = "use", value_name = "VERSION", group = "action")]
    use_version: Option<String>,

    /// List installed versions
    #[arg(short = 'l', long = "list", group = "action")]
    list: bool,

    /// Print version
    #[arg(short = 'v', long = "version", group = "action")]
    show_version: bool,

    /// Python interpreter used to run pip
    #[arg(long = "python", env = "FVM_PYTHON", value_name = "PATH")]
    python: Option<PathBuf>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", env = "FVM_API_URL", value_name = "URL")]
    api_url: Option<String>,

    /// Package and asset selection preset
    #[arg(long = "preset", env = "FVM_PRESET", value_enum, default_value_t = Preset::Frida)]
    preset: Preset,
}

impl Cli {
    /// The requested operation; `None` for `--version`.
    fn action(&self) -> Option<Action> {
        if self.check {
            Some(Action::Check)
        } else if let Some(version) = &self.install {
            Some(Action::Install(version.clone()))
        } else if let Some(version) = &self.use_version {
            Some(Action::Use(version.clone()))
        } else if self.list {
            Some(Action::List)
        } else {
            None
        }
    }
}

/// Parse arguments; usage errors print the help text and exit with status 1.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            if std::env::args_os().len() > 1 {
                let _ = err.print();
            }
            let _ = Cli::command().print_help();
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = parse_args();

    let Some(action) = cli.action() else {
        println!("fvm {}", VERSION);
        return Ok(());
    };

    let config = Config::new(RealRuntime, cli.python, cli.api_url, cli.preset)?;
    Manager::new(config).run(&action).await
}
