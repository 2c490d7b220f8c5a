use sales_core::{SalesRecord, SalesTable};
use thiserror::Error;

/// Dataset location used when no override is configured.
pub const DEFAULT_DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBMDeveloperSkillsNetwork-DV0101EN-SkillsNetwork/Data%20Files/historical_automobile_sales.csv";

/// Environment variable that overrides the dataset location.
pub const DATASET_URL_ENV: &str = "AUTO_SALES_DATA_URL";

const USER_AGENT: &str = "autostats-dataset-client/0.1";

#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub url: String,
    pub user_agent: String,
}

impl DatasetConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user_agent: USER_AGENT.to_string(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        let url =
            std::env::var(DATASET_URL_ENV).unwrap_or_else(|_| DEFAULT_DATASET_URL.to_string());
        Self::new(url)
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),
}

/// Fetch the remote CSV once and parse it into an immutable table.
///
/// There is no retry here: a transport or parse failure means the process
/// has nothing to serve.
pub async fn fetch_sales_table(config: &DatasetConfig) -> Result<SalesTable, DatasetError> {
    let http = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()?;
    let body = http
        .get(&config.url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(SalesTable::new(parse_csv(&body)?))
}

/// Decode CSV text with a header row into sales records.
///
/// Columns beyond the seven the dashboard reads are ignored. A header row
/// with no data rows is a valid empty table, not an error.
pub fn parse_csv(text: &str) -> Result<Vec<SalesRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for record in reader.deserialize::<SalesRecord>() {
        rows.push(record?);
    }
    Ok(rows)
}
