use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION},
    Client, Method, RequestBuilder, Response, StatusCode,
};
use serde_json::Value;
use url::Url;
use zeroize::Zeroizing;

use crate::{
    errors::{RemoteErrorBody, StoreError},
    repositories::data_store::{DataStore, OrderBy},
};

/// PostgREST reports "zero rows for a single-object request" with this code.
pub const NO_ROWS_CODE: &str = "PGRST116";

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const RETURN_REPRESENTATION: &str = "return=representation";
const MERGE_DUPLICATES: &str = "resolution=merge-duplicates,return=minimal";

/// [`DataStore`] over a PostgREST endpoint, as exposed by Supabase under
/// `/rest/v1/`.
pub struct RestStore {
    client: Client,
    rest_url: Url,
    api_key: Zeroizing<String>,
    access_token: Option<Zeroizing<String>>,
}

impl RestStore {
    pub fn new(
        client: Client,
        baas_url: &Url,
        api_key: &str,
        access_token: Option<&str>,
    ) -> Result<Self, url::ParseError> {
        let mut base = baas_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(RestStore {
            client,
            rest_url: base.join("rest/v1/")?,
            api_key: Zeroizing::new(api_key.to_string()),
            access_token: access_token.map(|t| Zeroizing::new(t.to_string())),
        })
    }

    pub fn rest_url(&self) -> &Url {
        &self.rest_url
    }

    /// Checks that the endpoint answers at all. Any HTTP status counts as
    /// reachable; only transport failures are errors.
    pub async fn ping(&self) -> Result<StatusCode, StoreError> {
        let response = self
            .client
            .get(self.rest_url.clone())
            .header("apikey", self.api_key.as_str())
            .send()
            .await?;
        Ok(response.status())
    }

    fn request(&self, method: Method, collection: &str) -> Result<RequestBuilder, StoreError> {
        let url = self
            .rest_url
            .join(collection)
            .map_err(|e| StoreError::transport("invalid_collection", e.to_string()))?;

        let bearer = self
            .access_token
            .as_ref()
            .unwrap_or(&self.api_key)
            .as_str();

        Ok(self
            .client
            .request(method, url)
            .header("apikey", self.api_key.as_str())
            .header(AUTHORIZATION, format!("Bearer {}", bearer)))
    }
}

fn id_filter(id: &str) -> String {
    format!("eq.{}", id)
}

/// Turns a non-2xx response into a typed [`StoreError`].
async fn check(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body: Option<RemoteErrorBody> = serde_json::from_str(&text).ok();

    let (code, message) = match body {
        Some(body) => (
            body.code.unwrap_or_else(|| status.as_u16().to_string()),
            body.message
                .or(body.details)
                .or(body.hint)
                .unwrap_or_else(|| status.to_string()),
        ),
        None if text.trim().is_empty() => (status.as_u16().to_string(), status.to_string()),
        None => (status.as_u16().to_string(), text),
    };

    if code == NO_ROWS_CODE {
        Err(StoreError::not_found(code, message))
    } else {
        Err(StoreError::transport(code, message))
    }
}

#[async_trait]
impl DataStore for RestStore {
    async fn list(&self, collection: &str, order: OrderBy) -> Result<Vec<Value>, StoreError> {
        let order = format!("{}.{}", order.column, order.direction.as_postgrest());
        let response = self
            .request(Method::GET, collection)?
            .query(&[("select", "*"), ("order", order.as_str())])
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Value, StoreError> {
        let response = self
            .request(Method::GET, collection)?
            .query(&[("select", "*".to_string()), ("id", id_filter(id))])
            .header(ACCEPT, SINGLE_OBJECT)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    async fn insert(&self, collection: &str, record: Value) -> Result<Value, StoreError> {
        let response = self
            .request(Method::POST, collection)?
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&Value::Array(vec![record]))
            .send()
            .await?;

        let rows: Vec<Value> = check(response).await?.json().await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::transport("empty_response", "Insert returned no row"))
    }

    async fn update_by_id(&self, collection: &str, id: &str, patch: Value) -> Result<Value, StoreError> {
        let response = self
            .request(Method::PATCH, collection)?
            .query(&[("id", id_filter(id))])
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&patch)
            .send()
            .await?;

        let rows: Vec<Value> = check(response).await?.json().await?;
        rows.into_iter().next().ok_or_else(|| {
            StoreError::not_found(NO_ROWS_CODE, format!("No {} row with id {}", collection, id))
        })
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let response = self
            .request(Method::DELETE, collection)?
            .query(&[("id", id_filter(id))])
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }

    async fn upsert(&self, collection: &str, record: Value) -> Result<(), StoreError> {
        let response = self
            .request(Method::POST, collection)?
            .header("Prefer", MERGE_DUPLICATES)
            .json(&record)
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }
}
