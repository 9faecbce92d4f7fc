use std::io::{self, Read as _, Write as _};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, bail};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use starhunter_action::{ExecutionContext, FixedClock, UnknownActionPolicy};
use starhunter_node::{NodeProfile, StarhunterNode};
use starhunter_parameter::values::ParameterValues;
use starhunter_request::{ClientConfig, ReqwestClient};

use crate::config::{Overrides, Settings};

#[derive(Debug, Parser)]
#[command(name = "starhunter", version, about = "Run Starhunter CRM actions from the command line")]
pub struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// Config file merged over the user and working-directory files
    #[arg(long, global = true, env = "STARHUNTER_CONFIG")]
    config: Option<PathBuf>,

    /// Node flavor: standard, extended, lite or birthdays
    #[arg(long, global = true)]
    profile: Option<NodeProfile>,

    /// Starhunter base URL (full GraphQL URL for the birthdays profile)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log filter directive, e.g. `debug` or `starhunter_node=trace`
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the node description as JSON
    Describe {
        /// Print the credential form instead
        #[arg(long)]
        credential: bool,
    },
    /// Execute items read from a JSON file (or stdin)
    Run(RunArgs),
    /// Check the configured credential against the API
    TestCredential,
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Items as JSON; `-` reads stdin
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    input: PathBuf,

    /// Record failed items as `{ "error": ... }` and keep going
    #[arg(long)]
    continue_on_fail: bool,

    /// Fail items whose resource/operation pair is not supported
    #[arg(long)]
    fail_unknown: bool,

    /// Pin "now" for date-deriving actions (RFC 3339)
    #[arg(long, value_name = "TIMESTAMP")]
    now: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let overrides = self.overrides();
        let settings = Settings::load(self.global.config.as_deref(), &overrides)?;
        let _guard = starhunter_log::init_with(settings.log_config())?;
        tracing::debug!(?settings, "settings loaded");

        let node = StarhunterNode::new(settings.profile);
        match self.command {
            Command::Describe { credential } => {
                if credential {
                    print_json(&node.credential_description())
                } else {
                    print_json(node.description())
                }
            }
            Command::Run(args) => {
                let items = read_items(&args.input)?;
                let mut ctx = context(&settings)?;
                if let Some(now) = &args.now {
                    let clock = FixedClock::parse(now)
                        .with_context(|| format!("invalid --now timestamp `{now}`"))?;
                    ctx = ctx.with_clock(Arc::new(clock));
                }
                tracing::info!(profile = node.profile().as_str(), items = items.len(), "running items");
                let output = node.execute(&ctx, &items).await?;
                print_json(&output)
            }
            Command::TestCredential => {
                node.test_credential(&context(&settings)?).await?;
                println!("Connection successful");
                Ok(())
            }
        }
    }

    fn overrides(&self) -> Overrides {
        let (continue_on_fail, unknown_action) = match &self.command {
            Command::Run(args) => (
                args.continue_on_fail.then_some(true),
                args.fail_unknown.then_some(UnknownActionPolicy::Fail),
            ),
            _ => (None, None),
        };
        Overrides {
            profile: self.global.profile,
            base_url: self.global.base_url.clone(),
            timeout_secs: self.global.timeout,
            continue_on_fail,
            unknown_action,
            log_level: self.global.log_level.clone(),
        }
    }
}

fn context(settings: &Settings) -> anyhow::Result<ExecutionContext> {
    let http = ReqwestClient::new(
        ClientConfig::default().with_timeout(Duration::from_secs(settings.timeout_secs)),
    )?;
    Ok(ExecutionContext::new(Arc::new(settings.credentials()), Arc::new(http))
        .with_continue_on_fail(settings.continue_on_fail)
        .with_unknown_action(settings.unknown_action))
}

/// Reads one of three shapes:
///
/// - `[{...}, ...]`: one parameter object per item
/// - `{"parameters": {...}, "items": [{...}, ...]}`: node parameters applied
///   under every item, item values winning
/// - `{...}`: a single item
fn read_items(input: &Path) -> anyhow::Result<Vec<ParameterValues>> {
    let raw = if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?
    };

    let value: Value = serde_json::from_str(&raw).context("invalid input: not JSON")?;
    let (shared, items) = match value {
        Value::Array(items) => (ParameterValues::new(), items),
        Value::Object(mut object) if object.contains_key("items") => {
            let shared = match object.remove("parameters") {
                Some(parameters) => serde_json::from_value(parameters)
                    .context("invalid input: `parameters` must be an object")?,
                None => ParameterValues::new(),
            };
            match object.remove("items") {
                Some(Value::Array(items)) => (shared, items),
                _ => bail!("invalid input: `items` must be an array"),
            }
        }
        object @ Value::Object(_) => (ParameterValues::new(), vec![object]),
        _ => bail!("invalid input: expected an object or an array of objects"),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                bail!("invalid input: item {index} is not an object");
            }
            let item: ParameterValues = serde_json::from_value(item)
                .with_context(|| format!("invalid input: item {index}"))?;
            Ok(shared.merged(&item))
        })
        .collect()
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
