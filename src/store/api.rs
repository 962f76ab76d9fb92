use reqwest::Client;

use crate::core::{
    models::Thumbnail,
    ThumblabError,
};

/// Join the configured base address with the record endpoint for `index`.
/// The base may or may not carry a trailing slash.
pub fn item_endpoint(base_url: &str, index: usize) -> String {
    format!("{}/items/{}", base_url.trim_end_matches('/'), index)
}

/// GET one record. Distinguishes an unreachable store, a rejected index
/// and a payload that does not parse as a record.
pub async fn fetch_item(base_url: &str, index: usize) -> Result<Thumbnail, ThumblabError> {
    let endpoint = item_endpoint(base_url, index);
    println!("[Store] Calling endpoint {}", endpoint);

    let response = Client::new().get(&endpoint).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ThumblabError::Status { status: status.as_u16(), endpoint });
    }

    let record: Thumbnail = response.json().await?;
    println!("[Store] Received record {}: {:?}", index, record.title);

    Ok(record)
}

/// POST one record back to its slot. The store answers with an empty
/// body, so only the status code matters.
pub async fn write_item(
    base_url: &str,
    index: usize,
    record: &Thumbnail,
) -> Result<(), ThumblabError> {
    let endpoint = item_endpoint(base_url, index);
    println!("[Store] Writing record to {}", endpoint);

    let response = Client::new().post(&endpoint).json(record).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ThumblabError::Status { status: status.as_u16(), endpoint });
    }

    println!("[Store] Record {} written.", index);

    Ok(())
}

/// Any HTTP response at all means the store process is up; only transport
/// failures count as offline.
pub async fn probe(base_url: &str) -> bool {
    Client::new().get(base_url).send().await.is_ok()
}
