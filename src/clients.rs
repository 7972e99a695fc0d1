use std::sync::OnceLock;

use color_eyre::eyre::Result;

use crate::geocode::ReverseGeocodeClient;

pub static DEFAULT_CLIENT: OnceLock<ReverseGeocodeClient> = OnceLock::new();

pub fn get_default_client() -> Result<&'static ReverseGeocodeClient> {
    if let Some(client) = DEFAULT_CLIENT.get() {
        return Ok(client);
    }
    // Losing a race here just drops the second client
    let client = ReverseGeocodeClient::new()?;
    Ok(DEFAULT_CLIENT.get_or_init(|| client))
}

pub fn build_reqwest_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?)
}
