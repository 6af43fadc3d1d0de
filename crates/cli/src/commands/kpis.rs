use std::process;

use benchdash_client::{ApiClient, PercentileStats};

use super::print_json;
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_kpis(client: &ApiClient, output: OutputFormat, quiet: bool) {
    let kpis = match client.dashboard_kpis() {
        Ok(k) => k,
        Err(e) => {
            report_error(&format!("error fetching KPIs: {}", e), output, quiet);
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => print_json(&kpis),
        OutputFormat::Text => {
            println!("Total runs:   {}", kpis.total_runs);
            println!("Success rate: {:.1}%", kpis.success_rate);
            println!(
                "Total time:   {}",
                format_percentiles(&kpis.total_time_stats)
            );
            match &kpis.ttft_stats {
                Some(stats) => println!("TTFT:         {}", format_percentiles(stats)),
                None => println!("TTFT:         n/a"),
            }
            match kpis.avg_inter_token_latency {
                Some(latency) => println!("Inter-token:  {:.1} ms avg", latency),
                None => println!("Inter-token:  n/a"),
            }
            if !kpis.recent_runs.is_empty() && !quiet {
                println!("Recent runs:");
                for run in &kpis.recent_runs {
                    println!(
                        "  #{} scenario {} [{}] {}",
                        run.id, run.scenario_id, run.status, run.created_at
                    );
                }
            }
        }
    }
}

/// Render p50/p95/p99 in milliseconds, `n/a` when the backend had no samples.
fn format_percentiles(stats: &PercentileStats) -> String {
    match (stats.p50, stats.p95, stats.p99) {
        (Some(p50), Some(p95), Some(p99)) => {
            format!("p50 {:.0} ms / p95 {:.0} ms / p99 {:.0} ms", p50, p95, p99)
        }
        _ => "n/a".to_string(),
    }
}
