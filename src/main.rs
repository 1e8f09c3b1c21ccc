use clap::Parser;
use limbic::{Detector, Emotion};
use log::info;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Texts to classify; a built-in demo set is used when none are given
    text: Vec<String>,

    /// Skip the batch statistics summary
    #[arg(long)]
    no_stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    info!("=== Starting Emotion Detector Demo ===");

    let start_time = Instant::now();
    let detector = Detector::new();
    let build_time = start_time.elapsed();
    info!("=== Detector Built Successfully (took {:.2?}) ===\n", build_time);

    let inputs: Vec<String> = if args.text.is_empty() {
        demo_inputs()
    } else {
        args.text
    };

    info!("=== Running Classifications ({} inputs) ===\n", inputs.len());
    let classify_start = Instant::now();

    for (i, text) in inputs.iter().enumerate() {
        info!(
            "\nTest {}/{} (elapsed: {:.2?}):",
            i + 1,
            inputs.len(),
            classify_start.elapsed()
        );
        info!("Input: {}", text);
        process_input(&detector, text);
    }

    let classify_time = classify_start.elapsed();

    if !args.no_stats {
        print_statistics(&detector, &inputs);
    }

    info!("\n=== Demo Complete ===");
    info!("Total time: {:.2?}", start_time.elapsed());
    info!("Classification time: {:.2?}", classify_time);
    info!(
        "Average time per classification: {:.2?}",
        classify_time / inputs.len() as u32
    );

    Ok(())
}

fn demo_inputs() -> Vec<String> {
    [
        // Clear single-emotion cases
        "I'm so happy today! Everything is wonderful 😊",
        "This is terrible news, I feel heartbroken 😢",
        "I'm really angry about this unacceptable service!",
        "Wow, I did not see that coming. Unbelievable!",
        "I'm worried and anxious about the results",
        // Context cases
        "not happy about the delay",
        "really really excited for the launch 🎉🎉",
        // Edge cases
        "Meeting at three tomorrow",
        "Check the docs at https://docs.rs/limbic for details",
        "",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn process_input(detector: &Detector, text: &str) {
    let result = detector.classify(text);

    let mut scores: Vec<_> = result.scores.iter().collect();
    scores.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));

    println!("\nResults:");
    println!("  Predicted emotion: {}", result.emotion);
    if scores.is_empty() {
        println!("  Scores: (none — empty input)");
    } else {
        println!("  Scores (sorted):");
        for (emotion, score) in scores {
            println!("    {}: {:.2}", emotion, score);
        }
    }
}

fn print_statistics(detector: &Detector, inputs: &[String]) {
    let stats = detector.aggregate(inputs);

    println!("\nBatch statistics ({} texts):", stats.total);
    for emotion in Emotion::ALL {
        if let Some(label_stats) = stats.emotions.get(&emotion) {
            println!(
                "  {}: {} ({:.2}%)",
                emotion, label_stats.count, label_stats.percentage
            );
        }
    }
    println!("  Dominant emotion: {}", stats.dominant);
}
