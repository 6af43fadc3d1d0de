mod commands;

use clap::{Parser, Subcommand, ValueEnum};

use benchdash_client::{ApiClient, ClientConfig, RunStatus};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Run status filter accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StatusArg {
    Pending,
    Running,
    Completed,
    Failed,
}

impl From<StatusArg> for RunStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => RunStatus::Pending,
            StatusArg::Running => RunStatus::Running,
            StatusArg::Completed => RunStatus::Completed,
            StatusArg::Failed => RunStatus::Failed,
        }
    }
}

/// benchdash benchmarking dashboard CLI.
#[derive(Parser)]
#[command(name = "benchdash", version, about = "CLI for the benchdash benchmarking API")]
struct Cli {
    /// Backend base URL (overrides BENCHDASH_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage registered automations
    Automations {
        #[command(subcommand)]
        command: AutomationsCmd,
    },

    /// Manage benchmark scenarios
    Scenarios {
        #[command(subcommand)]
        command: ScenariosCmd,
    },

    /// Inspect and trigger benchmark runs
    Runs {
        #[command(subcommand)]
        command: RunsCmd,
    },

    /// Show the aggregated dashboard KPI snapshot
    Kpis,
}

#[derive(Subcommand)]
enum AutomationsCmd {
    /// List all registered automations
    List,

    /// Show one automation
    Show {
        /// Automation ID
        id: i64,
    },

    /// Register a new automation
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// ID of the automation on the external service
        #[arg(long = "automation-id")]
        external_automation_id: String,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
        /// Default inputs as a JSON object
        #[arg(long)]
        default_inputs: Option<String>,
    },

    /// Delete an automation
    Delete {
        /// Automation ID
        id: i64,
    },
}

#[derive(Subcommand)]
enum ScenariosCmd {
    /// List scenarios, optionally for one automation
    List {
        /// Only scenarios belonging to this automation
        #[arg(long)]
        automation_id: Option<i64>,
    },

    /// Show one scenario
    Show {
        /// Scenario ID
        id: i64,
    },

    /// Create a new scenario
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Automation the scenario runs against
        #[arg(long)]
        automation_id: i64,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
        /// Inputs template as a JSON object
        #[arg(long)]
        inputs_template: Option<String>,
        /// Run settings as a JSON object
        #[arg(long)]
        run_settings: Option<String>,
    },

    /// Delete a scenario
    Delete {
        /// Scenario ID
        id: i64,
    },
}

#[derive(Subcommand)]
enum RunsCmd {
    /// List runs with optional filters
    List {
        /// Only runs of this scenario
        #[arg(long)]
        scenario_id: Option<i64>,
        /// Only runs in this status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },

    /// Show one run
    Show {
        /// Run ID
        id: i64,
    },

    /// Trigger a new run of a scenario
    Trigger {
        /// Scenario ID
        scenario_id: i64,
        /// Inputs override as a JSON object
        #[arg(long)]
        inputs: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.api_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    let client = ApiClient::new(config);
    let output = cli.output;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Automations { command } => match command {
            AutomationsCmd::List => commands::automations::cmd_list(&client, output, quiet),
            AutomationsCmd::Show { id } => commands::automations::cmd_show(&client, id, output, quiet),
            AutomationsCmd::Create {
                name,
                external_automation_id,
                description,
                default_inputs,
            } => commands::automations::cmd_create(
                &client,
                name,
                external_automation_id,
                description,
                default_inputs,
                output,
                quiet,
            ),
            AutomationsCmd::Delete { id } => {
                commands::automations::cmd_delete(&client, id, output, quiet)
            }
        },
        Commands::Scenarios { command } => match command {
            ScenariosCmd::List { automation_id } => {
                commands::scenarios::cmd_list(&client, automation_id, output, quiet)
            }
            ScenariosCmd::Show { id } => commands::scenarios::cmd_show(&client, id, output, quiet),
            ScenariosCmd::Create {
                name,
                automation_id,
                description,
                inputs_template,
                run_settings,
            } => commands::scenarios::cmd_create(
                &client,
                name,
                automation_id,
                description,
                inputs_template,
                run_settings,
                output,
                quiet,
            ),
            ScenariosCmd::Delete { id } => {
                commands::scenarios::cmd_delete(&client, id, output, quiet)
            }
        },
        Commands::Runs { command } => match command {
            RunsCmd::List {
                scenario_id,
                status,
            } => commands::runs::cmd_list(
                &client,
                scenario_id,
                status.map(RunStatus::from),
                output,
                quiet,
            ),
            RunsCmd::Show { id } => commands::runs::cmd_show(&client, id, output, quiet),
            RunsCmd::Trigger {
                scenario_id,
                inputs,
            } => commands::runs::cmd_trigger(&client, scenario_id, inputs, output, quiet),
        },
        Commands::Kpis => commands::kpis::cmd_kpis(&client, output, quiet),
    }
}

/// Report an error on stderr in the selected output format.
pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
