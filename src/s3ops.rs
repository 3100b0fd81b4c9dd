//! S3 maintenance commands: object listing and delete-marker cleanup.
//!
//! Both commands page through the full listing with the SDK paginators and
//! print one line per entry in listing order. Cleanup is dry-run by
//! default; only an explicit `--delete` issues version-pinned DeleteObject
//! calls, and only ever for markers that are the latest version of their
//! key.

use anyhow::Result;
use aws_sdk_s3::types::DeleteMarkerEntry;
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};

/// S3 client from the default credential/region provider chain.
pub async fn client() -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    Client::new(&config)
}

/// Print key, size and last-modified for every object under the prefix.
pub async fn list_objects(client: &Client, bucket: &str, prefix: &str) -> Result<()> {
    let mut pages = client
        .list_objects_v2()
        .bucket(bucket)
        .prefix(prefix)
        .into_paginator()
        .send();

    while let Some(page) = pages.next().await {
        let page = page?;
        for object in page.contents() {
            println!(
                "{}",
                format_object(
                    object.key().unwrap_or_default(),
                    object.size().unwrap_or(0),
                    object.last_modified().map(format_timestamp),
                )
            );
        }
    }
    Ok(())
}

/// Remove (or, by default, only report) latest-version delete markers.
///
/// Returns the number of markers acted on.
pub async fn undelete_objects(
    client: &Client,
    bucket: &str,
    prefix: &str,
    delete: bool,
) -> Result<u64> {
    let mut acted: u64 = 0;
    let mut key_marker: Option<String> = None;
    let mut version_id_marker: Option<String> = None;

    loop {
        let page = client
            .list_object_versions()
            .bucket(bucket)
            .prefix(prefix)
            .set_key_marker(key_marker.take())
            .set_version_id_marker(version_id_marker.take())
            .send()
            .await?;

        for (key, version_id) in latest_markers(page.delete_markers()) {
            if delete {
                client
                    .delete_object()
                    .bucket(bucket)
                    .key(key)
                    .version_id(version_id)
                    .send()
                    .await?;
                println!("Removed delete marker: {key} (version {version_id})");
            } else {
                println!("[DRY RUN] would remove delete marker: {key} (version {version_id})");
            }
            acted += 1;
        }

        if !page.is_truncated().unwrap_or(false) {
            break;
        }
        key_marker = page.next_key_marker().map(str::to_string);
        version_id_marker = page.next_version_id_marker().map(str::to_string);
    }
    Ok(acted)
}

/// The `(key, version_id)` pairs of markers that are the latest version of
/// their key. Non-latest markers are never candidates for removal.
fn latest_markers(markers: &[DeleteMarkerEntry]) -> Vec<(&str, &str)> {
    markers
        .iter()
        .filter(|marker| marker.is_latest().unwrap_or(false))
        .filter_map(|marker| Some((marker.key()?, marker.version_id()?)))
        .collect()
}

fn format_object(key: &str, size: i64, last_modified: Option<String>) -> String {
    format!(
        "{key} {size} {}",
        last_modified.unwrap_or_else(|| "-".to_string())
    )
}

fn format_timestamp(timestamp: &aws_sdk_s3::primitives::DateTime) -> String {
    DateTime::<Utc>::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| timestamp.to_string())
}
