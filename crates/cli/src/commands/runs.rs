use std::process;

use benchdash_client::{ApiClient, Run, RunStatus};

use super::{parse_json_object, print_json};
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_list(
    client: &ApiClient,
    scenario_id: Option<i64>,
    status: Option<RunStatus>,
    output: OutputFormat,
    quiet: bool,
) {
    let runs = match client.list_runs(scenario_id, status) {
        Ok(list) => list,
        Err(e) => {
            report_error(&format!("error listing runs: {}", e), output, quiet);
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => print_json(&runs),
        OutputFormat::Text => {
            if runs.is_empty() {
                if !quiet {
                    println!("no runs found");
                }
                return;
            }
            for run in &runs {
                print_run_line(run);
            }
        }
    }
}

pub(crate) fn cmd_show(client: &ApiClient, id: i64, output: OutputFormat, quiet: bool) {
    let run = match client.get_run(id) {
        Ok(r) => r,
        Err(e) => {
            report_error(&format!("error fetching run {}: {}", id, e), output, quiet);
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => print_json(&run),
        OutputFormat::Text => {
            print_run_line(&run);
            if let Some(started) = &run.started_at {
                println!("  started:  {}", started);
            }
            if let Some(finished) = &run.finished_at {
                println!("  finished: {}", finished);
            }
            if let Some(ttft) = run.ttft_ms {
                println!("  ttft: {:.1} ms", ttft);
            }
            if let Some(error) = &run.error {
                println!("  error: {}", error);
            }
            if let Some(external_id) = &run.external_run_id {
                println!("  external run: {}", external_id);
            }
        }
    }
}

pub(crate) fn cmd_trigger(
    client: &ApiClient,
    scenario_id: i64,
    inputs: Option<String>,
    output: OutputFormat,
    quiet: bool,
) {
    let inputs_override = parse_json_object(inputs, "inputs", output, quiet);

    let run = match client.trigger_run(scenario_id, inputs_override) {
        Ok(r) => r,
        Err(e) => {
            report_error(
                &format!("error triggering run for scenario {}: {}", scenario_id, e),
                output,
                quiet,
            );
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => print_json(&run),
        OutputFormat::Text => {
            if !quiet {
                println!(
                    "triggered run #{} for scenario {} ({})",
                    run.id, run.scenario_id, run.status
                );
            }
        }
    }
}

fn print_run_line(run: &Run) {
    let duration = run
        .total_duration_ms
        .map(|ms| format!(" {:.0} ms", ms))
        .unwrap_or_default();
    println!(
        "#{} scenario {} [{}]{} — {}",
        run.id, run.scenario_id, run.status, duration, run.created_at
    );
}
