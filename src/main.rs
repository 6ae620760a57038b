// main.rs - CLI entry point

use std::path::Path;
use std::time::Instant;

use armdist::cli::Config;
use armdist::core::{classify_arms, normalize_features, run_pipeline, PipelineOptions};
use armdist::output::write_skip_report;
use armdist::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    // Validate required parameters
    let features_path = args.features.as_ref().ok_or("--features is required")?;

    let output_dir = if args.stats_only || args.dry_run {
        None
    } else {
        Some(args.output_dir.as_ref().ok_or("--output-dir is required")?)
    };

    println!("🧬 armdist v{}", env!("CARGO_PKG_VERSION"));

    // Validate all arguments
    let validation_result = validate_args(&args)?;
    println!(
        "⚙️  Centromere policy: {}",
        validation_result.centromere_policy.description()
    );
    if args.drop_self_pairs {
        println!("🎯 Self-pairs: dropped");
    } else {
        println!("🎯 Self-pairs: kept (distance 0 on the diagonal)");
    }

    let total_start = Instant::now();

    // Fetch the feature table
    let mut table = FileSource.fetch(features_path)?;

    // Apply chromosome filtering
    table.apply_chromosome_filters(
        validation_result.include_regex.as_ref(),
        validation_result.exclude_regex.as_ref(),
    );
    table.print_table_statistics("INPUT");

    // Handle stats-only mode
    if args.stats_only {
        println!("\n✅ Statistics analysis completed");
        return Ok(());
    }

    // Handle dry-run mode: full validation, no output
    if args.dry_run {
        let features = normalize_features(&table)?;
        let classification = classify_arms(&features, validation_result.centromere_policy)?;
        println!("\n✅ Dry run completed successfully");
        println!(
            "📊 {} features normalized, {} ORFs classified, {} chromosomes skipped",
            features.len(),
            classification.assignments.len(),
            classification.skipped.len()
        );
        return Ok(());
    }

    // Run the pipeline against the directory sink
    let output_dir = Path::new(output_dir.unwrap()); // Safe: dry_run/stats_only return early
    let sink = DirectorySink::new(output_dir, validation_result.format, &command_line);
    let options = PipelineOptions {
        centromere_policy: validation_result.centromere_policy,
        keep_self_pairs: !args.drop_self_pairs,
        show_progress: true,
    };

    println!("\n🔄 Computing arm-partitioned pairwise distances...");
    let summary = run_pipeline(&table, &sink, &options)?;

    // Save skip report if requested
    if let Some(report_path) = &args.report_log {
        write_skip_report(Path::new(report_path), &summary.skipped_chromosomes)?;
    }

    let total_elapsed = total_start.elapsed();

    // Save machine-readable summary if requested
    if let Some(json_path) = &args.summary_json {
        let report = serde_json::json!({
            "command_line": command_line,
            "generated": chrono::Utc::now().to_rfc3339(),
            "elapsed_seconds": total_elapsed.as_secs_f64(),
            "summary": summary,
        });
        let content = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize run summary: {}", e))?;
        std::fs::write(json_path, content)
            .map_err(|e| format!("Failed to write summary JSON '{}': {}", json_path, e))?;
        println!("💾 Run summary saved to: {}", json_path);
    }

    // Print summary
    println!("\n🎉 === ARMDIST COMPLETED SUCCESSFULLY ===");
    println!(
        "⏱️  Total execution time: {:.2}s",
        total_elapsed.as_secs_f64()
    );
    println!(
        "📊 {} pairs across {} partitions written to: {}",
        summary.total_pairs,
        summary.partitions.len(),
        output_dir.display()
    );
    if !summary.skipped_chromosomes.is_empty() {
        println!(
            "⚠️  Skipped chromosomes: {}",
            summary
                .skipped_chromosomes
                .iter()
                .map(|s| s.chromosome.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    println!("🔧 Command: {}", command_line);

    Ok(())
}
