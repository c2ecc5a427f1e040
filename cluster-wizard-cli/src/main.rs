#![doc = include_str!("../../docs/en/cli_usage.md")]

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::{ArgGroup, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use cluster_wizard::{
    Cluster, ClientConfig, ClusterApi, ClusterWizard, HttpClusterApi, UiOptions,
    config::{API_TOKEN_ENV, API_URL_ENV, load_env_file},
    io::{DocumentFormat, load_cluster_file},
};

#[derive(Debug, Parser)]
#[command(
    name = "cluster-wizard",
    version,
    about = "Edit the configuration of a bare metal OpenShift cluster in the terminal"
)]
#[command(group(ArgGroup::new("source").required(true).args(["cluster_id", "cluster_file"])))]
struct Cli {
    /// Fetch the cluster with this id from the inventory before editing
    #[arg(long = "cluster-id", value_name = "ID")]
    cluster_id: Option<String>,

    /// Edit a cluster snapshot stored in a JSON (or YAML) file
    #[arg(long = "cluster-file", value_name = "PATH")]
    cluster_file: Option<PathBuf>,

    /// Inventory API base URL
    #[arg(long = "api-url", env = API_URL_ENV, value_name = "URL")]
    api_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(long = "token", env = API_TOKEN_ENV, value_name = "TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Load environment variables from this file instead of ./.env
    #[arg(long = "env-file", value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Write logs here instead of ./cluster-wizard.log; the terminal belongs to the UI
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Give up on an inventory request after this many seconds
    #[arg(long = "timeout", value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Hide the key hints under the toolbar
    #[arg(long = "no-help")]
    no_help: bool,
}

const DEFAULT_LOG_FILE: &str = "cluster-wizard.log";

impl Cli {
    fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }

    fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::resolve(self.api_url.as_deref(), self.token.as_deref());
        match self.timeout {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }

    fn ui_options(&self) -> UiOptions {
        UiOptions::default().with_help(!self.no_help)
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut diagnostics = DiagnosticCollector::default();
    if let Err(err) = load_env_file(cli.env_file.as_deref()) {
        diagnostics.push("env", format!("{err:#}"));
    }
    if let Some(path) = cli.cluster_file.as_deref() {
        check_cluster_file(path, &mut diagnostics);
    }
    diagnostics.into_result()?;

    init_logging(&cli.log_path())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .wrap_err("failed to start the async runtime")?;

    let config = cli.client_config();
    tracing::info!(base_url = %config.base_url, timeout = ?config.timeout, "using inventory API");
    let api: Arc<dyn ClusterApi> =
        Arc::new(HttpClusterApi::new(&config).map_err(|err| eyre!("{err:#}"))?);

    let cluster = load_cluster(&cli, &runtime, api.as_ref())?;
    tracing::info!(cluster_id = %cluster.id, "editing cluster");

    let events = ClusterWizard::new(cluster, api)
        .with_options(cli.ui_options())
        .run(runtime.handle().clone())
        .map_err(|err| eyre!("{err:#}"))?;

    for event in events {
        println!("{}", serde_json::to_string(&event)?);
    }
    Ok(())
}

fn load_cluster(
    cli: &Cli,
    runtime: &tokio::runtime::Runtime,
    api: &dyn ClusterApi,
) -> Result<Cluster> {
    if let Some(path) = cli.cluster_file.as_deref() {
        return load_cluster_file(path).map_err(|err| eyre!("{err:#}"));
    }
    let id = cli
        .cluster_id
        .as_deref()
        .ok_or_else(|| eyre!("provide --cluster-id or --cluster-file"))?;
    runtime
        .block_on(api.get_cluster(id))
        .wrap_err_with(|| format!("failed to fetch cluster {id}"))
}

fn check_cluster_file(path: &Path, diagnostics: &mut DiagnosticCollector) {
    if !path.is_file() {
        diagnostics.push("cluster", format!("{} does not exist", path.display()));
        return;
    }
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return;
    };
    if DocumentFormat::from_extension(ext).is_none() {
        let hint = if matches!(ext, "yaml" | "yml") {
            " (rebuild with the `yaml` feature)"
        } else {
            ""
        };
        diagnostics.push("cluster", format!("unsupported file extension .{ext}{hint}"));
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install logger: {err}"))
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push(&mut self, label: &str, message: impl Into<String>) {
        self.messages.push(format!("{label}: {}", message.into()));
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered input issues:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_source_is_required_and_exclusive() {
        assert!(Cli::try_parse_from(["cluster-wizard"]).is_err());
        assert!(
            Cli::try_parse_from([
                "cluster-wizard",
                "--cluster-id",
                "c1",
                "--cluster-file",
                "c1.json",
            ])
            .is_err()
        );
        let cli = Cli::try_parse_from(["cluster-wizard", "--cluster-id", "c1"]).expect("cli");
        assert_eq!(cli.cluster_id.as_deref(), Some("c1"));
    }

    #[test]
    fn logs_go_to_the_working_directory_by_default() {
        let cli = Cli::try_parse_from(["cluster-wizard", "--cluster-id", "c1"]).expect("cli");
        assert_eq!(cli.log_path(), PathBuf::from("cluster-wizard.log"));

        let cli = Cli::try_parse_from([
            "cluster-wizard",
            "--cluster-id",
            "c1",
            "--log-file",
            "/tmp/wizard.log",
        ])
        .expect("cli");
        assert_eq!(cli.log_path(), PathBuf::from("/tmp/wizard.log"));
    }

    #[test]
    fn timeout_flag_reaches_the_client_config() {
        let cli = Cli::try_parse_from(["cluster-wizard", "--cluster-id", "c1"]).expect("cli");
        assert_eq!(
            cli.client_config().timeout,
            cluster_wizard::config::DEFAULT_REQUEST_TIMEOUT
        );

        let cli = Cli::try_parse_from(["cluster-wizard", "--cluster-id", "c1", "--timeout", "5"])
            .expect("cli");
        assert_eq!(cli.client_config().timeout, Duration::from_secs(5));

        assert!(
            Cli::try_parse_from(["cluster-wizard", "--cluster-id", "c1", "--timeout", "0"]).is_err()
        );
    }

    #[test]
    fn no_help_hides_key_hints() {
        let cli = Cli::try_parse_from(["cluster-wizard", "--cluster-id", "c1"]).expect("cli");
        assert!(cli.ui_options().show_help);

        let cli = Cli::try_parse_from(["cluster-wizard", "--cluster-id", "c1", "--no-help"])
            .expect("cli");
        assert!(!cli.ui_options().show_help);
    }

    #[test]
    fn missing_cluster_file_is_reported() {
        let mut diagnostics = DiagnosticCollector::default();
        check_cluster_file(Path::new("/definitely/not/here.json"), &mut diagnostics);
        let err = diagnostics.into_result().expect_err("should fail");
        assert!(err.to_string().contains("does not exist"));
    }
}
