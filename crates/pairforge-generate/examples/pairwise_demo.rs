use indexmap::IndexMap;
use pairforge_generate::PairwiseGenerator;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut domains: IndexMap<&str, Vec<&str>> = IndexMap::new();
    domains.insert("browser", vec!["firefox", "chrome", "safari", "edge"]);
    domains.insert("os", vec!["linux", "macos", "windows"]);
    domains.insert("locale", vec!["en", "de", "pt"]);
    domains.insert("network", vec!["wifi", "offline"]);

    let generator = PairwiseGenerator::new(domains)?;

    for (number, row) in generator.rows().enumerate() {
        println!("case {number:>2}: {}", row.join(" / "));
    }
    println!("{}", serde_json::to_string_pretty(generator.report())?);

    Ok(())
}
