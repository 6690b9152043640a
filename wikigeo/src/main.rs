use clap::ArgMatches;
use commands::command_argument_builder;
use std::path::PathBuf;
use tracing::warn;
use url::Url;
use wikigeo::handlers::{parse_format, sanitize_seed_title};
use wikigeo_core::export::{render_heatmap_dataset, render_link_dataset, write_dataset};
use wikigeo_core::geocode::{GeocodeOptions, execute_geocode, generate_geocode_report};
use wikigeo_core::heatmap::{fetch_bike_racks, load_heatmap_scene};
use wikigeo_core::print_banner;
use wikigeo_fetcher::CancelFlag;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    match chosen_command.subcommand() {
        Some(("globe", primary_command)) => handle_globe(primary_command, quiet).await,
        Some(("heatmap", primary_command)) => handle_heatmap(primary_command).await,
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

async fn handle_globe(sub_matches: &ArgMatches, quiet: bool) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let raw_title = sub_matches.get_one::<String>("title").unwrap();
    let endpoint = sub_matches.get_one::<Url>("endpoint").unwrap();
    let output = sub_matches.get_one::<PathBuf>("output");
    let format_name = sub_matches.get_one::<String>("format").unwrap();
    let timeout_secs = sub_matches.get_one::<u64>("timeout").unwrap_or(&10);
    let show_report = sub_matches.get_flag("report");

    let title = match sanitize_seed_title(raw_title) {
        Ok(title) => title,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(2);
        }
    };
    let format = match parse_format(format_name) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(2);
        }
    };

    // Ctrl-C flips the cancel flag; the pipeline aborts at the next batch
    // boundary instead of running to completion unobserved.
    let cancel = CancelFlag::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_clone.cancel();
        }
    });

    let options = GeocodeOptions {
        title: title.clone(),
        endpoint: endpoint.as_str().to_string(),
        timeout_secs: *timeout_secs,
        show_progress_bar: !quiet,
    };

    // Sole catch point for pipeline faults: log, leave the dataset unwritten,
    // and let the renderer show its empty background layers.
    match execute_geocode(options, cancel, None).await {
        Ok(graph) => {
            if show_report {
                eprint!("{}", generate_geocode_report(&graph));
            }

            let rendered = match render_link_dataset(&graph, &format) {
                Ok(rendered) => rendered,
                Err(e) => {
                    eprintln!("✗ {}", e);
                    std::process::exit(1);
                }
            };

            if let Err(e) = write_dataset(&rendered, output.map(|p| p.as_path())) {
                eprintln!("✗ {}", e);
                std::process::exit(1);
            }

            if let Some(path) = output
                && !quiet
            {
                println!("✓ Dataset for '{}' written to {}", title, path.display());
            }
        }
        Err(e) => {
            warn!("{}", e);
            eprintln!("✗ {} — dataset not written", e);
        }
    }
}

async fn handle_heatmap(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let output = sub_matches.get_one::<PathBuf>("output");
    let embed_racks = sub_matches.get_flag("fetch-racks");

    let mut scene = match load_heatmap_scene() {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    if embed_racks {
        match fetch_bike_racks(&scene.rack_data_url).await {
            Ok(points) => scene.racks = Some(points),
            Err(e) => {
                // The edit layer still stands on its own; note the gap and go on.
                warn!("{}", e);
                eprintln!("✗ {} — rack layer left as a URL reference", e);
            }
        }
    }

    let rendered = match render_heatmap_dataset(&scene) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = write_dataset(&rendered, output.map(|p| p.as_path())) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
