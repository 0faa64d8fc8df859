//! Generic HTTP repository over a single API resource.

use std::marker::PhantomData;

use reqwest::{RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::web::error::WebError;

/// An API resource with a numeric identity.
///
/// An `id` of zero means the record has not been persisted yet; `update`
/// uses the id to build the resource URL.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync {
    fn id(&self) -> i32;
}

/// Generic repository speaking the API's CRUD conventions for one resource.
///
/// One instance is bound to one collection URL (for example
/// `http://api.example/api/v1/nationalparks`). Write operations report
/// success as a boolean, mirroring the status-code contract of the API:
/// create succeeds with 201, update and delete with 204. Transport failures
/// and unexpected statuses surface as `WebError`.
pub struct HttpRepository<T> {
    client: reqwest::Client,
    base_url: String,
    _marker: PhantomData<T>,
}

impl<T: Resource> HttpRepository<T> {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url,
            _marker: PhantomData,
        }
    }

    /// Fetches a single record by ID.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - The record exists
    /// - `Ok(None)` - The API answered 404
    /// - `Err(WebError::NotSignedIn)` - The API rejected the token
    /// - `Err(WebError)` - Transport failure or unexpected status
    pub async fn get(&self, id: i32, token: Option<&str>) -> Result<Option<T>, WebError> {
        let request = self.client.get(format!("{}/{}", self.base_url, id));
        let response = with_token(request, token).send().await?;

        match response.status() {
            status if status.is_success() => Ok(Some(response.json::<T>().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(WebError::NotSignedIn),
            status => Err(WebError::UnexpectedStatus(status)),
        }
    }

    /// Fetches every record in the collection.
    pub async fn get_all(&self, token: Option<&str>) -> Result<Vec<T>, WebError> {
        let request = self.client.get(&self.base_url);
        let response = with_token(request, token).send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.json::<Vec<T>>().await?),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(WebError::NotSignedIn),
            status => Err(WebError::UnexpectedStatus(status)),
        }
    }

    /// Creates a record.
    ///
    /// # Returns
    /// - `Ok(true)` - The API answered 201 Created
    /// - `Ok(false)` - Any other status, including duplicate-name rejections
    /// - `Err(WebError)` - Transport failure
    pub async fn create(&self, record: &T, token: Option<&str>) -> Result<bool, WebError> {
        let request = self.client.post(&self.base_url).json(record);
        let response = with_token(request, token).send().await?;

        Ok(response.status() == StatusCode::CREATED)
    }

    /// Updates a record in place, addressed by its own ID.
    ///
    /// # Returns
    /// - `Ok(true)` - The API answered 204 No Content
    /// - `Ok(false)` - Any other status
    /// - `Err(WebError)` - Transport failure
    pub async fn update(&self, record: &T, token: Option<&str>) -> Result<bool, WebError> {
        let request = self
            .client
            .patch(format!("{}/{}", self.base_url, record.id()))
            .json(record);
        let response = with_token(request, token).send().await?;

        Ok(response.status() == StatusCode::NO_CONTENT)
    }

    /// Deletes a record by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - The API answered 204 No Content
    /// - `Ok(false)` - Any other status
    /// - `Err(WebError)` - Transport failure
    pub async fn delete(&self, id: i32, token: Option<&str>) -> Result<bool, WebError> {
        let request = self.client.delete(format!("{}/{}", self.base_url, id));
        let response = with_token(request, token).send().await?;

        Ok(response.status() == StatusCode::NO_CONTENT)
    }

    /// Fetches the trails-in-park listing under this repository's base URL.
    ///
    /// Only meaningful for the trails resource; the path segment is part of
    /// the API's published route table.
    pub async fn get_all_in_national_park(
        &self,
        national_park_id: i32,
        token: Option<&str>,
    ) -> Result<Option<Vec<T>>, WebError> {
        let request = self.client.get(format!(
            "{}/GetTrailInNationalPark/{}",
            self.base_url, national_park_id
        ));
        let response = with_token(request, token).send().await?;

        match response.status() {
            status if status.is_success() => Ok(Some(response.json::<Vec<T>>().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(WebError::UnexpectedStatus(status)),
        }
    }
}

/// Attaches the bearer token when the caller has one.
fn with_token(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}
