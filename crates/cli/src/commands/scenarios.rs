use std::process;

use benchdash_client::{ApiClient, NewScenario, Scenario};

use super::{parse_json_object, print_json};
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_list(
    client: &ApiClient,
    automation_id: Option<i64>,
    output: OutputFormat,
    quiet: bool,
) {
    let scenarios = match client.list_scenarios(automation_id) {
        Ok(list) => list,
        Err(e) => {
            report_error(&format!("error listing scenarios: {}", e), output, quiet);
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => print_json(&scenarios),
        OutputFormat::Text => {
            if scenarios.is_empty() {
                if !quiet {
                    println!("no scenarios found");
                }
                return;
            }
            for scenario in &scenarios {
                print_scenario_line(scenario);
            }
        }
    }
}

pub(crate) fn cmd_show(client: &ApiClient, id: i64, output: OutputFormat, quiet: bool) {
    let scenario = match client.get_scenario(id) {
        Ok(s) => s,
        Err(e) => {
            report_error(
                &format!("error fetching scenario {}: {}", id, e),
                output,
                quiet,
            );
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => print_json(&scenario),
        OutputFormat::Text => {
            print_scenario_line(&scenario);
            println!("  created: {}", scenario.created_at);
            if let Some(template) = &scenario.inputs_template {
                println!(
                    "  inputs template: {}",
                    serde_json::to_string(template).unwrap_or_default()
                );
            }
            if let Some(settings) = &scenario.run_settings {
                println!(
                    "  run settings: {}",
                    serde_json::to_string(settings).unwrap_or_default()
                );
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn cmd_create(
    client: &ApiClient,
    name: String,
    automation_id: i64,
    description: Option<String>,
    inputs_template: Option<String>,
    run_settings: Option<String>,
    output: OutputFormat,
    quiet: bool,
) {
    let inputs_template = parse_json_object(inputs_template, "inputs-template", output, quiet);
    let run_settings = parse_json_object(run_settings, "run-settings", output, quiet);

    let created = match client.create_scenario(&NewScenario {
        name,
        automation_id,
        description,
        inputs_template,
        run_settings,
    }) {
        Ok(s) => s,
        Err(e) => {
            report_error(&format!("error creating scenario: {}", e), output, quiet);
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => print_json(&created),
        OutputFormat::Text => {
            if !quiet {
                println!("created scenario #{} '{}'", created.id, created.name);
            }
        }
    }
}

pub(crate) fn cmd_delete(client: &ApiClient, id: i64, output: OutputFormat, quiet: bool) {
    if let Err(e) = client.delete_scenario(id) {
        report_error(
            &format!("error deleting scenario {}: {}", id, e),
            output,
            quiet,
        );
        process::exit(1);
    }

    match output {
        OutputFormat::Json => println!("{{\"deleted\": {}}}", id),
        OutputFormat::Text => {
            if !quiet {
                println!("deleted scenario #{}", id);
            }
        }
    }
}

fn print_scenario_line(scenario: &Scenario) {
    println!(
        "#{} {} (automation {})",
        scenario.id, scenario.name, scenario.automation_id
    );
    if let Some(description) = &scenario.description {
        println!("  {}", description);
    }
}
