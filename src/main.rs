use clap::Parser;
use wikitrace::{
    MediaWikiClient, PageSource, PageTitle, Trace, TraceBuilder, TraceConfig, TraceError,
};

mod args;
use args::Args;

/// How one traversal run ended.
enum Outcome {
    Done,
    Failed(TraceError),
    Interrupted,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let client = match MediaWikiClient::new(&config.api_endpoint) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let mut exit_code = 0;
    for run in 0..args.times {
        if args.times > 1 {
            println!("=== run {} of {} ===", run + 1, args.times);
        }

        let mut trace = TraceBuilder::new()
            .with_config(config.clone())
            .build(client.clone());
        let outcome = run_trace(&mut trace).await;
        let summary = trace.summary();
        let elapsed = summary.elapsed.as_secs_f64();

        match outcome {
            Outcome::Done => {
                println!("---");
                println!("Took {} link(s) and {:.4} seconds", summary.hops, elapsed);
            }
            Outcome::Interrupted => {
                eprintln!("\n---\nInterrupted");
                eprintln!(
                    "Visited {} link(s) in {:.4} seconds, never reached the end page",
                    summary.hops, elapsed
                );
                std::process::exit(130);
            }
            Outcome::Failed(e) => {
                report_failure(&e, summary.hops, elapsed);
                exit_code = failure_exit_code(&e);
            }
        }
    }

    std::process::exit(exit_code);
}

/// Merge the configuration file (if any) with command-line flags; flags
/// win over file values.
fn build_config(args: &Args) -> Result<TraceConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => TraceConfig::from_file(path)?,
        None => TraceConfig::default(),
    };

    if let Some(page) = &args.page {
        config.start = Some(PageTitle::new(page));
    }
    if let Some(end) = &args.end {
        config.end = PageTitle::new(end);
    }
    if args.infinite {
        config.infinite = true;
    }
    if let Some(endpoint) = &args.api_endpoint {
        config.api_endpoint = endpoint.clone();
    }

    Ok(config)
}

/// Drive one session to completion, printing pages as they arrive.
/// Ctrl-C abandons the in-flight resolution step.
async fn run_trace<S: PageSource>(trace: &mut Trace<S>) -> Outcome {
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => return Outcome::Interrupted,
            step = trace.next_page() => match step {
                Some(Ok(page)) => println!("{}", page),
                Some(Err(e)) => return Outcome::Failed(e),
                None => return Outcome::Done,
            },
        }
    }
}

fn report_failure(error: &TraceError, hops: usize, elapsed: f64) {
    match error {
        TraceError::Network(_) => {
            eprintln!("Network error, please check your connection");
        }
        TraceError::Remote { code, info } => {
            eprintln!("MediaWiki API error {}: {}", code, info);
        }
        TraceError::LoopDetected => {
            println!("---");
            println!("Loop detected, quitting...");
            println!("Visited {} link(s) in {:.4} seconds, got a loop", hops, elapsed);
        }
        TraceError::LinkNotFound(page) => {
            println!("---");
            println!("No valid link found in page '{}'", page);
            println!(
                "Visited {} link(s) in {:.4} seconds, hit a dead end",
                hops, elapsed
            );
        }
        TraceError::InvalidPageName(page) => {
            eprintln!("Invalid page name '{}'", page);
        }
        TraceError::Malformed(info) => {
            eprintln!("Unexpected MediaWiki response: {}", info);
        }
    }
}

fn failure_exit_code(error: &TraceError) -> i32 {
    match error {
        TraceError::InvalidPageName(_) => 2,
        TraceError::Remote { .. } => 3,
        TraceError::Network(_) => 4,
        TraceError::LoopDetected => 5,
        TraceError::LinkNotFound(_) => 6,
        TraceError::Malformed(_) => 7,
    }
}
