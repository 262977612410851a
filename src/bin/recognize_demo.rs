use digit_grid::config::load_config;
use digit_grid::io::write_json_file;
use digit_grid::{DigitRecognizer, RecognitionReport};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let recognizer = DigitRecognizer::new(config.recognizer);
    let report = recognizer.recognize_with_diagnostics(&config.dots, &config.selection);

    print_text_summary(&report);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: recognize_demo <scene.json>".to_string()
}

fn print_text_summary(report: &RecognitionReport) {
    let rec = &report.recognition;
    println!("Recognition summary");
    println!("  digit: {}", rec.digit);
    println!("  volume: {}%", rec.volume_percent);
    println!("  selected dots: {}", rec.selected_dots);
    println!("  latency_ms: {:.3}", rec.latency_ms);

    let diag = &report.diagnostics;
    if let Some(bounds) = &diag.bounds {
        println!(
            "  bounds: left={:.1} top={:.1} w={:.1} h={:.1}",
            bounds.left, bounds.top, bounds.width, bounds.height
        );
    }

    if let Some(grid) = &diag.grid {
        println!("\nOccupancy grid ({}x{})", grid.rows, grid.cols);
        for row in grid.to_rows() {
            let line: String = row.iter().map(|&c| if c != 0 { '#' } else { '.' }).collect();
            println!("  {line}");
        }
    }

    if !diag.scores.is_empty() {
        println!("\nTemplate distances");
        for s in &diag.scores {
            let marker = if s.digit == rec.digit { "  <- best" } else { "" };
            println!("  {}: {}{}", s.digit, s.distance, marker);
        }
    }

    println!(
        "\nTimings (ms): select={:.3} rasterize={:.3} match={:.3} total={:.3}",
        diag.timings.select_ms,
        diag.timings.rasterize_ms,
        diag.timings.match_ms,
        diag.timings.total_ms
    );
}
