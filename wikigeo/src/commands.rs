use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("wikigeo")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("wikigeo")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("globe")
                .about(
                    "Geocode a seed article's outbound links and emit the page/link dataset the \
                globe view renders.",
                )
                .arg(
                    arg!(-T --"title" <TITLE>)
                        .required(false)
                        .help("Seed article title")
                        .default_value("Tehran"),
                )
                .arg(
                    arg!(-e --"endpoint" <URL>)
                        .required(false)
                        .help("MediaWiki query API endpoint")
                        .value_parser(clap::value_parser!(Url))
                        .default_value("https://en.wikipedia.org/w/api.php"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Write the dataset to a file (default: stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Dataset format: json, geojson")
                        .value_parser(["json", "geojson"])
                        .default_value("json"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10"),
                )
                .arg(
                    arg!(--"report" "Print a run summary to stderr")
                        .required(false)
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("heatmap")
                .about(
                    "Emit the edit-density heatmap dataset from the bundled geotagged edit \
                records.",
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Write the dataset to a file (default: stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(--"fetch-racks")
                        .required(false)
                        .help(
                            "Fetch and embed the bike-parking layer instead of referencing its \
                        URL (for renderers that cannot fetch it themselves)",
                        )
                        .action(clap::ArgAction::SetTrue),
                ),
        )
}
