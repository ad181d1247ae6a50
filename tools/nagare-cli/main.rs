use clap::Parser;
use nagare::prelude::*;
use std::fs;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// A workflow graph engine CLI: validate, auto-arrange, and simulate
/// running a saved research workflow.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow document JSON file
    document_path: String,

    /// Auto-arrange the graph and print the computed positions
    #[arg(short, long)]
    arrange: bool,

    /// Simulate executing the workflow after validation
    #[arg(short, long)]
    run: bool,

    /// Cap for the simulated per-activity delay, in milliseconds
    #[arg(long, default_value_t = 250)]
    max_delay_ms: u64,

    /// Write the (possibly re-arranged) graph back out as a document
    #[arg(short, long)]
    export: Option<String>,
}

/// Prints engine events as they happen during a run.
struct ConsoleObserver;

impl WorkflowObserver for ConsoleObserver {
    fn execution_status_changed(&self, activity_id: &str, status: ExecutionStatus, progress: f64) {
        println!("  [{:>5.1}%] {} -> {}", progress, activity_id, status);
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Document Loading ---
    let document_json = fs::read_to_string(&cli.document_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read document file '{}': {}",
            &cli.document_path, e
        ))
    });
    let document = GraphDocument::from_json(&document_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse document: {}", e)));

    let name = document.name.clone().unwrap_or_else(|| "untitled".to_string());
    let mut graph = document
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Document is not a valid graph: {}", e)));

    println!(
        "Loaded workflow '{}': {} activities, {} connections",
        name,
        graph.activity_count(),
        graph.connections().len()
    );

    // --- 2. Validation ---
    println!("\nValidating workflow...");
    let issues = validate(&graph);
    for issue in &issues {
        println!("  [{}] {}", issue.severity, issue.message);
    }

    // --- 3. Auto-arrange ---
    if cli.arrange {
        println!("\nArranging workflow...");
        let layering = LayoutEngine::default().arrange(&mut graph);
        for (index, layer) in layering.layers.iter().enumerate() {
            println!("  Layer {}: {}", index, layer.join(", "));
        }
        if !layering.overflow.is_empty() {
            println!("  Overflow: {}", layering.overflow.join(", "));
        }
        for activity in graph.activities() {
            println!(
                "  {} at ({:.0}, {:.0})",
                activity.id, activity.position.x, activity.position.y
            );
        }
    }

    // --- 4. Simulated execution ---
    if cli.run {
        if has_blocking_issues(&issues) {
            exit_with_error("Cannot run: the workflow has blocking validation errors.");
        }

        println!("\nRunning workflow simulation...");
        let scheduler = Scheduler::new(SchedulerConfig {
            max_step_delay: Duration::from_millis(cli.max_delay_ms),
            ..SchedulerConfig::default()
        });
        let run_start = Instant::now();
        let report = scheduler
            .run(&mut graph, &ConsoleObserver, &CancellationToken::new())
            .await;
        let run_duration = run_start.elapsed();

        println!("\nRun finished!");
        match report.outcome {
            RunOutcome::Completed => {
                println!("  -> Completed: {} activities executed", report.executed)
            }
            RunOutcome::Cancelled => {
                println!("  -> Cancelled after {} activities", report.executed)
            }
            RunOutcome::Rejected => {
                println!("  -> Rejected:");
                for issue in &report.blocking_issues {
                    println!("     [{}] {}", issue.severity, issue.message);
                }
            }
        }
        println!("  -> Simulated wall time: {:?}", run_duration);
    }

    // --- 5. Export ---
    if let Some(export_path) = cli.export {
        let exported = GraphDocument::from_graph(&graph, Some(name), None);
        let json = exported
            .to_json()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize document: {}", e)));
        fs::write(&export_path, json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", export_path, e))
        });
        println!("\nExported workflow to '{}'", export_path);
    }

    println!("\nTotal time: {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
