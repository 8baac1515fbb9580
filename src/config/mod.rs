#[cfg(feature = "cli")]
pub mod cli;

use crate::core::Request;
use crate::utils::error::{MwsError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use url::Url;

/// Seller and marketplace settings the invocation client needs alongside a
/// constructed request. Holds no signing material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MwsConfig {
    pub seller: SellerConfig,
    pub marketplace: MarketplaceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerConfig {
    pub merchant_id: String,
    pub mws_auth_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    pub region: Region,
    pub endpoint_override: Option<String>,
}

/// Public MWS endpoint regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "CA")]
    Ca,
    #[serde(rename = "MX")]
    Mx,
    #[serde(rename = "EU")]
    Eu,
    #[serde(rename = "JP")]
    Jp,
    #[serde(rename = "AU")]
    Au,
}

impl Region {
    pub fn host(&self) -> &'static str {
        match self {
            Region::Us => "https://mws.amazonservices.com",
            Region::Ca => "https://mws.amazonservices.ca",
            Region::Mx => "https://mws.amazonservices.com.mx",
            Region::Eu => "https://mws-eu.amazonservices.com",
            Region::Jp => "https://mws.amazonservices.jp",
            Region::Au => "https://mws.amazonservices.com.au",
        }
    }
}

impl MwsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MwsError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MwsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// Base endpoint: the regional MWS host, unless overridden (e.g. to point
    /// tests at a local server).
    pub fn endpoint(&self) -> &str {
        self.marketplace
            .endpoint_override
            .as_deref()
            .unwrap_or_else(|| self.marketplace.region.host())
    }

    /// Full URL for one operation: base endpoint joined with the operation's
    /// versioned path.
    pub fn endpoint_for(&self, request: &Request) -> Result<Url> {
        let base = Url::parse(self.endpoint()).map_err(|e| MwsError::ConfigError {
            message: format!("Invalid endpoint '{}': {}", self.endpoint(), e),
        })?;
        base.join(request.path()).map_err(|e| MwsError::ConfigError {
            message: format!("Cannot join path '{}': {}", request.path(), e),
        })
    }

    /// Identity query parameters that accompany every call.
    pub fn seller_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("SellerId".to_string(), self.seller.merchant_id.clone());
        if let Some(token) = &self.seller.mws_auth_token {
            params.insert("MWSAuthToken".to_string(), token.clone());
        }
        params
    }
}

impl Validate for MwsConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("seller.merchant_id", &self.seller.merchant_id)?;

        if let Some(endpoint) = &self.marketplace.endpoint_override {
            validation::validate_url("marketplace.endpoint_override", endpoint)?;
        }

        Ok(())
    }
}
