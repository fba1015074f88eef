// demos/precipitation_window.rs
use jma_rainfall::{JmaRainfall, PrecipitationError};

#[tokio::main]
async fn main() -> Result<(), PrecipitationError> {
    // Set RUST_LOG=debug to see each report request and cache hit
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let date = args.next();
    let station = args.next();

    let client = JmaRainfall::builder().build()?;
    println!(
        "{} known stations (default {}):",
        client.stations().len(),
        client.default_station()
    );
    for known in client.stations().iter() {
        println!("  {:>6}  {} [{}]", known.id, known.name, known.layout);
    }
    let report = client
        .precipitation()
        .maybe_date(date.as_deref())
        .maybe_station(station.as_deref())
        .call()
        .await?;

    println!("{} (base date {})", report.location, report.base_date);
    for (label, amount) in report.labels.iter().zip(&report.data) {
        println!("  {}  {:>6.1} mm", label, amount);
    }
    println!("3-day total:  {:.1} mm", report.total_3_days);
    println!("30-day total: {:.1} mm", report.total_30_days);
    println!("highlight:    {}", report.highlight());

    Ok(())
}
