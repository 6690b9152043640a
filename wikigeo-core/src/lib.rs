pub mod export;
pub mod geocode;
pub mod heatmap;

use colored::Colorize;

pub fn print_banner() {
    let banner = r#"
           _ _    _
 __      _(_) | _(_) __ _  ___  ___
 \ \ /\ / / | |/ / |/ _` |/ _ \/ _ \
  \ V  V /| |   <| | (_| |  __/ (_) |
   \_/\_/ |_|_|\_\_|\__, |\___|\___/
                    |___/
"#;
    println!("{}", banner.cyan());
    println!(
        "  {} v{}\n",
        "link geography for the whole globe".dimmed(),
        env!("CARGO_PKG_VERSION")
    );
}
