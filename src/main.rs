use car_ai_rust::{cli, client, config, encoder, error, scanner};
use clap::Parser;
use cli::{Cli, Commands};
use client::ApiClient;
use config::Config;
use error::Result;
use indicatif::ProgressBar;
use serde::Serialize;

use car_ai_common::types::VehicleClassification;

/// One row of the batch report
#[derive(Serialize)]
struct BatchRecord {
    file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    classification: Option<VehicleClassification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Classify { image, output } => {
            println!("🚗 car-ai - vehicle classification\n");

            println!("[1/2] Encoding photo...");
            let payload = encoder::encode_image(&image)?;
            println!("✔ {} encoded\n", image.display());

            println!("[2/2] Classifying...");
            let api = ApiClient::new(&config.api_url(), config.timeout_seconds)?;
            let result = api.classify(&payload).await?;
            println!("✔ Classification complete\n");

            print_classification(&result, cli.verbose);

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&result)?;
                std::fs::write(&path, json)?;
                println!("\n✔ Result saved: {}", path.display());
            }
        }

        Commands::Batch { folder, output, recursive } => {
            println!("🚗 car-ai - batch classification\n");

            println!("[1/3] Scanning photos...");
            let images = scanner::scan_folder(&folder, recursive)?;
            println!("✔ {} photos found\n", images.len());

            if images.is_empty() {
                return Err(error::CarAiError::NoImagesFound(
                    folder.display().to_string(),
                ));
            }

            println!("[2/3] Classifying...");
            let api = ApiClient::new(&config.api_url(), config.timeout_seconds)?;
            let progress = ProgressBar::new(images.len() as u64);
            let mut records = Vec::new();
            let mut failures = 0usize;

            for info in &images {
                progress.set_message(info.file_name.clone());

                let outcome = match encoder::encode_image(&info.path) {
                    Ok(payload) => api.classify(&payload).await,
                    Err(err) => Err(err),
                };

                // A single bad photo must not abort the run
                let record = match outcome {
                    Ok(classification) => BatchRecord {
                        file_name: info.file_name.clone(),
                        classification: Some(classification),
                        error: None,
                    },
                    Err(err) => {
                        failures += 1;
                        if cli.verbose {
                            progress.println(format!("✖ {}: {}", info.file_name, err));
                        }
                        BatchRecord {
                            file_name: info.file_name.clone(),
                            classification: None,
                            error: Some(err.to_string()),
                        }
                    }
                };
                records.push(record);
                progress.inc(1);
            }
            progress.finish_and_clear();
            println!("✔ {} classified, {} failed\n", records.len() - failures, failures);

            println!("[3/3] Saving report...");
            let output = output.unwrap_or_else(|| folder.join("classification.json"));
            let json = serde_json::to_string_pretty(&records)?;
            std::fs::write(&output, json)?;
            println!("✔ Report saved: {}", output.display());

            println!("\n✅ Done");
        }

        Commands::Health => {
            let api = ApiClient::new(&config.api_url(), config.timeout_seconds)?;
            let health = api.health().await?;
            println!("✔ {} is {}", config.api_url(), health.status);
        }

        Commands::Config { set_api_url, show } => {
            let mut config = config;

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ API URL saved");
            }

            if show {
                println!("Settings:");
                println!("  API URL: {}", config.api_url());
                println!("  Timeout: {}s", config.timeout_seconds);
            }
        }
    }

    Ok(())
}

fn print_classification(result: &VehicleClassification, verbose: bool) {
    println!(
        "  Body type: {} ({:.1}% confident)",
        result.body_type.predicted_class,
        result.body_type.confidence * 100.0
    );
    if verbose {
        for prediction in &result.body_type.top_3_predictions {
            println!("    - {} {:.2}%", prediction.label, prediction.confidence * 100.0);
        }
    }

    println!(
        "  Brand:     {} ({:.1}% confident)",
        result.brand.predicted_class,
        result.brand.confidence * 100.0
    );
    if verbose {
        for prediction in &result.brand.top_5_predictions {
            println!("    - {} {:.2}%", prediction.label, prediction.confidence * 100.0);
        }
    }
}
