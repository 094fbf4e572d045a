use failure::Error;
use log::info;
use std::env;
use std::fs;
use std::path::Path;
use url::Url;

/// Uploads the file at `path` to the object store at `OBJECT_STORE_URL`,
/// into `bucket` under the file's base name as the object key. A single
/// PUT with no retries; multipart is the store's problem, not ours.
pub async fn put_object<P: AsRef<Path>>(path: P, bucket: &str) -> Result<(), Error> {
    let path = path.as_ref();
    let endpoint = env::var("OBJECT_STORE_URL")
        .map_err(|_| format_err!("OBJECT_STORE_URL environment variable unset"))?;
    let token = env::var("OBJECT_STORE_TOKEN")
        .map_err(|_| format_err!("OBJECT_STORE_TOKEN environment variable unset"))?;

    let key = object_key(path)?;
    let url = object_url(&endpoint, bucket, key)?;
    let data =
        fs::read(path).map_err(|e| format_err!("Unable to read {}: {}", path.display(), e))?;
    info!("Uploading {} ({} bytes) to {}", key, data.len(), url);

    let client = reqwest::Client::new();
    let response = client
        .put(&url)
        .header("Authorization", "Bearer ".to_string() + &token)
        .body(data)
        .send()
        .await
        .map_err(|e| format_err!("Error uploading {} to {}: {}", key, url, e))?;
    if !response.status().is_success() {
        return Err(format_err!(
            "Object store rejected {}: HTTP {}",
            key,
            response.status()
        ));
    }
    Ok(())
}

/// The object key is the file's base name.
fn object_key(path: &Path) -> Result<&str, Error> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format_err!("No usable file name in path {}", path.display()))
}

fn object_url(endpoint: &str, bucket: &str, key: &str) -> Result<String, Error> {
    let endpoint = Url::parse(endpoint)
        .map_err(|e| format_err!("Invalid OBJECT_STORE_URL {:?}: {}", endpoint, e))?;
    Ok(format!(
        "{}/{}/{}",
        endpoint.as_str().trim_end_matches('/'),
        bucket,
        key
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_key_is_the_base_name() {
        let key = object_key(Path::new("output/default.json")).expect("valid path");
        assert_eq!(key, "default.json");
    }

    #[test]
    fn object_url_joins_endpoint_bucket_and_key() {
        let url =
            object_url("https://store.example.com/", "default_bucket", "default.json")
                .expect("valid endpoint");
        assert_eq!(url, "https://store.example.com/default_bucket/default.json");
    }

    #[test]
    fn object_url_rejects_a_malformed_endpoint() {
        assert!(object_url("not a url", "default_bucket", "default.json").is_err());
    }
}
