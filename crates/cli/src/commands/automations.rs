use std::process;

use benchdash_client::{ApiClient, Automation, NewAutomation};

use super::{parse_json_object, print_json};
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_list(client: &ApiClient, output: OutputFormat, quiet: bool) {
    let automations = match client.list_automations() {
        Ok(list) => list,
        Err(e) => {
            report_error(&format!("error listing automations: {}", e), output, quiet);
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => print_json(&automations),
        OutputFormat::Text => {
            if automations.is_empty() {
                if !quiet {
                    println!("no automations registered");
                }
                return;
            }
            for automation in &automations {
                print_automation_line(automation);
            }
        }
    }
}

pub(crate) fn cmd_show(client: &ApiClient, id: i64, output: OutputFormat, quiet: bool) {
    let automation = match client.get_automation(id) {
        Ok(a) => a,
        Err(e) => {
            report_error(
                &format!("error fetching automation {}: {}", id, e),
                output,
                quiet,
            );
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => print_json(&automation),
        OutputFormat::Text => {
            print_automation_line(&automation);
            println!("  created: {}", automation.created_at);
            if let Some(updated) = &automation.updated_at {
                println!("  updated: {}", updated);
            }
            if let Some(inputs) = &automation.default_inputs {
                println!(
                    "  default inputs: {}",
                    serde_json::to_string(inputs).unwrap_or_default()
                );
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn cmd_create(
    client: &ApiClient,
    name: String,
    external_automation_id: String,
    description: Option<String>,
    default_inputs: Option<String>,
    output: OutputFormat,
    quiet: bool,
) {
    let default_inputs = parse_json_object(default_inputs, "default-inputs", output, quiet);

    let created = match client.create_automation(&NewAutomation {
        name,
        external_automation_id,
        description,
        default_inputs,
    }) {
        Ok(a) => a,
        Err(e) => {
            report_error(&format!("error creating automation: {}", e), output, quiet);
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => print_json(&created),
        OutputFormat::Text => {
            if !quiet {
                println!("created automation #{} '{}'", created.id, created.name);
            }
        }
    }
}

pub(crate) fn cmd_delete(client: &ApiClient, id: i64, output: OutputFormat, quiet: bool) {
    if let Err(e) = client.delete_automation(id) {
        report_error(
            &format!("error deleting automation {}: {}", id, e),
            output,
            quiet,
        );
        process::exit(1);
    }

    match output {
        OutputFormat::Json => println!("{{\"deleted\": {}}}", id),
        OutputFormat::Text => {
            if !quiet {
                println!("deleted automation #{}", id);
            }
        }
    }
}

fn print_automation_line(automation: &Automation) {
    println!(
        "#{} {} ({})",
        automation.id, automation.name, automation.external_automation_id
    );
    if let Some(description) = &automation.description {
        println!("  {}", description);
    }
}
