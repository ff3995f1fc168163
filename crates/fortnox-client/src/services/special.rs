//! Operations that do not fit the generic CRUD shape.

use fortnox_core::{
    Attributes, NaiveDate, QueryParams, Record, ResourceKey, ACCESS_TOKEN_SERVICE, SERVICE_PARAM,
};
use reqwest::Method;
use tracing::instrument;

use super::{
    into_record, ArchiveFolder, Asset, InboxFolder, Price, Resource, ScheduleTime, Service, Voucher,
};
use crate::error::ClientError;
use crate::http::{FileUpload, HttpClient, RequestBody, RequestOptions};

/// Query parameter naming the target folder of an upload.
const FOLDER_PARAM: &str = "folderid";

/// Exchanges an authorization code for an access token.
#[derive(Debug, Clone)]
pub struct AccessTokenService {
    http: HttpClient,
}

impl AccessTokenService {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Request an access token.
    ///
    /// Sent with the `Authorization-Code` and `Client-Secret` headers; the
    /// configured access token is not used.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if no authorization code is
    /// configured, otherwise the transport errors of [`HttpClient::request`].
    #[instrument(skip(self, params))]
    pub async fn access_token(&self, params: Option<QueryParams>) -> Result<Record, ClientError> {
        let params = params
            .unwrap_or_default()
            .with(SERVICE_PARAM, ACCESS_TOKEN_SERVICE);
        let response = self.http.get("/", Some(params)).await?;
        Ok(into_record(response.body))
    }
}

impl Service<Voucher> {
    /// Vouchers of one series.
    ///
    /// # Errors
    ///
    /// Returns a classified error for non-2xx responses, or a transport error.
    pub async fn sublist(&self, series: &str) -> Result<Vec<Record>, ClientError> {
        let path = format!("{}/sublist/{series}", Voucher::PATH);
        let response = self.http.get(&path, None).await?;
        Ok(response.body.into_records())
    }

    /// A single voucher within a series.
    ///
    /// # Errors
    ///
    /// Returns a classified error for non-2xx responses, or a transport error.
    pub async fn retrieve_in_series(
        &self,
        series: &str,
        number: impl Into<ResourceKey>,
    ) -> Result<Record, ClientError> {
        let path = format!("{}/sublist/{series}/{}", Voucher::PATH, number.into());
        let response = self.http.get(&path, None).await?;
        Ok(into_record(response.body))
    }
}

impl Service<Asset> {
    /// Assets with depreciations due up to and including `to_date`.
    ///
    /// # Errors
    ///
    /// Returns a classified error for non-2xx responses, or a transport error.
    pub async fn depreciations(
        &self,
        to_date: NaiveDate,
        params: Option<QueryParams>,
    ) -> Result<Vec<Record>, ClientError> {
        let path = format!("{}/depreciations/{}", Asset::PATH, ResourceKey::from(to_date));
        let response = self.http.get(&path, params).await?;
        Ok(response.body.into_records())
    }

    /// Book depreciations.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingAttributes`] if `attributes` is empty.
    pub async fn depreciate(&self, attributes: Attributes) -> Result<Record, ClientError> {
        let path = format!("{}/depreciate", Asset::PATH);
        self.send(Method::POST, &path, attributes).await
    }

    /// Write up the value of an asset.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingAttributes`] if `attributes` is empty.
    pub async fn write_up(
        &self,
        id: impl Into<ResourceKey>,
        attributes: Attributes,
    ) -> Result<Record, ClientError> {
        self.asset_action("writeup", id.into(), attributes).await
    }

    /// Write down the value of an asset.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingAttributes`] if `attributes` is empty.
    pub async fn write_down(
        &self,
        id: impl Into<ResourceKey>,
        attributes: Attributes,
    ) -> Result<Record, ClientError> {
        self.asset_action("writedown", id.into(), attributes).await
    }

    /// Scrap an asset.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingAttributes`] if `attributes` is empty.
    pub async fn scrap(
        &self,
        id: impl Into<ResourceKey>,
        attributes: Attributes,
    ) -> Result<Record, ClientError> {
        self.asset_action("scrap", id.into(), attributes).await
    }

    /// Sell an asset.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingAttributes`] if `attributes` is empty.
    pub async fn sell(
        &self,
        id: impl Into<ResourceKey>,
        attributes: Attributes,
    ) -> Result<Record, ClientError> {
        self.asset_action("sell", id.into(), attributes).await
    }

    async fn asset_action(
        &self,
        action: &str,
        id: ResourceKey,
        attributes: Attributes,
    ) -> Result<Record, ClientError> {
        let path = format!("{}/{action}/{id}", Asset::PATH);
        self.send(Method::PUT, &path, attributes).await
    }
}

impl Service<Price> {
    /// Prices of one article within a price list.
    ///
    /// # Errors
    ///
    /// Returns a classified error for non-2xx responses, or a transport error.
    pub async fn sublist(
        &self,
        price_list: &str,
        article_number: &str,
    ) -> Result<Vec<Record>, ClientError> {
        let path = format!("{}/{price_list}/{article_number}", Price::PATH);
        let response = self.http.get(&path, None).await?;
        Ok(response.body.into_records())
    }
}

impl Service<ScheduleTime> {
    /// Reset an employee's schedule for one day to the default.
    ///
    /// # Errors
    ///
    /// Returns a classified error for non-2xx responses, or a transport error.
    pub async fn reset_day(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<Record, ClientError> {
        let path = format!(
            "{}/{}/resetday",
            ScheduleTime::PATH,
            ResourceKey::from((employee_id, date.format("%Y-%m-%d")))
        );
        let response = self.http.put(&path, None).await?;
        Ok(into_record(response.body))
    }
}

impl Service<ArchiveFolder> {
    /// Upload a file to the archive, into `folder_id` or the root folder.
    ///
    /// # Errors
    ///
    /// Returns a classified error for non-2xx responses, or a transport error.
    pub async fn upload(
        &self,
        file: FileUpload,
        folder_id: Option<&str>,
    ) -> Result<Record, ClientError> {
        upload(&self.http, ArchiveFolder::PATH, file, folder_id).await
    }
}

impl Service<InboxFolder> {
    /// Upload a file to the inbox, into `folder_id` or the root folder.
    ///
    /// # Errors
    ///
    /// Returns a classified error for non-2xx responses, or a transport error.
    pub async fn upload(
        &self,
        file: FileUpload,
        folder_id: Option<&str>,
    ) -> Result<Record, ClientError> {
        upload(&self.http, InboxFolder::PATH, file, folder_id).await
    }
}

async fn upload(
    http: &HttpClient,
    path: &str,
    file: FileUpload,
    folder_id: Option<&str>,
) -> Result<Record, ClientError> {
    let params = folder_id.map(|id| QueryParams::new().with(FOLDER_PARAM, id));
    let response = http
        .request(
            Method::POST,
            path,
            params,
            Some(RequestBody::File(file)),
            RequestOptions::default(),
        )
        .await?;
    Ok(into_record(response.body))
}
