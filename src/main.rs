use color_eyre::eyre::{eyre, Result, WrapErr};
use nominatim_reverse::ReverseGeocodeClient;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // initialize tracing
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let lat = parse_coordinate(args.next(), "lat")?;
    let lon = parse_coordinate(args.next(), "lon")?;

    let client = match std::env::var("NOMINATIM_REVERSE_URL") {
        Ok(url) => {
            info!("Using nominatim at {url}");
            ReverseGeocodeClient::with_base_url(url)?
        }
        Err(_) => ReverseGeocodeClient::new()?,
    };

    let place = client.reverse_geocode(lat, lon).await?;
    println!("{}", serde_json::to_string_pretty(&place)?);
    Ok(())
}

fn parse_coordinate(arg: Option<String>, name: &str) -> Result<f64> {
    let arg = arg.ok_or(eyre!("usage: nominatim-reverse <lat> <lon>"))?;
    arg.parse()
        .wrap_err_with(|| format!("{name} is not a number: {arg}"))
}
