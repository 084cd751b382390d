use std::time::Duration;

/// Source of remote image bytes.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>>;
}

/// Blocking HTTP fetcher. One request at a time, no retries.
pub struct HttpFetcher {
    client: reqwest::blocking::Client
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let client = reqwest::blocking::ClientBuilder::new()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let response = self.client.get(url)
            .send()?
            .error_for_status()?;
        let data = response.bytes()?;
        Ok(data.to_vec())
    }
}
