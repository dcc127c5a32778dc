//! Generic resource operations.
//!
//! Every operation issues exactly one HTTP request. Validation failures
//! (HTTP 422) come in two flavours: the plain variants ([`ApiClient::create`],
//! [`ApiClient::save`]) store the field errors on the record and report
//! failure through the record or a `false` return, while the `_strict`
//! variants return [`ApiError::Invalid`].

use super::{ApiClient, Response};
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::resource::{
    HasMany, HasOne, ListParams, Page, Record, Resource, ResourcePath, next_link,
};

const RECORDS_HEADER: &str = "x-records";
const LINK_HEADER: &str = "link";

/// Path of a listed item: its canonical path, or `<collection path>/<id>`.
fn member_of<R: Resource>(collection: &ResourcePath, item: &R) -> Option<ResourcePath> {
    item.identifier()
        .filter(|id| !id.is_empty())
        .map(|id| collection.clone().join(id))
}

impl ApiClient {
    /// Fetches the resource identified by `id`.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::NotFound`] on a 404 or when `id` is empty (no
    /// request is sent in that case).
    pub async fn find<R: Resource>(&self, id: &str) -> Result<Record<R>, ApiError> {
        if id.trim().is_empty() {
            return Err(ApiError::NotFound {
                message: format!("{} identifier is empty", R::NAME),
            });
        }
        self.fetch(R::member_path(id)).await
    }

    /// Fetches a single resource from an explicit path.
    pub async fn fetch<R: Resource>(&self, path: ResourcePath) -> Result<Record<R>, ApiError> {
        let response = self.request(RestMethod::Get, &path, R::NAME, None).await?;
        let attributes: R = self.format().decode(response.body())?;
        Ok(Record::loaded(attributes, Some(path)))
    }

    /// Creates a resource.
    ///
    /// A rejected payload yields an unpersisted record carrying the field
    /// errors; check [`Record::is_valid`].
    ///
    /// ## Errors
    ///
    /// Returns every failure except validation.
    pub async fn create<R: Resource>(&self, attributes: R) -> Result<Record<R>, ApiError> {
        let mut record = Record::new(attributes);
        self.save(&mut record).await?;
        Ok(record)
    }

    /// Creates a resource, failing with [`ApiError::Invalid`] on a rejected payload.
    pub async fn create_strict<R: Resource>(&self, attributes: R) -> Result<Record<R>, ApiError> {
        let mut record = Record::new(attributes);
        self.save_strict(&mut record).await?;
        Ok(record)
    }

    /// Saves a record, returning `false` if the server rejected it.
    ///
    /// New records are posted to their collection (or put to their preset
    /// path); persisted records send their changed, writable attributes.
    /// The rejection's field errors are available from [`Record::errors`].
    pub async fn save<R: Resource>(&self, record: &mut Record<R>) -> Result<bool, ApiError> {
        match self.save_strict(record).await {
            Ok(()) => Ok(true),
            Err(ApiError::Invalid(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Saves a record, failing with [`ApiError::Invalid`] on a rejected payload.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::ImmutableAttribute`] without sending anything if
    /// the identifier of a persisted record was changed. A persisted record
    /// without changes is not sent either.
    pub async fn save_strict<R: Resource>(&self, record: &mut Record<R>) -> Result<(), ApiError> {
        if record.is_persisted() {
            let changes = record.changes()?;
            if changes.is_empty() {
                return Ok(());
            }
            let path = record.location()?;
            let body = self.format().encode(R::NAME, &changes)?;
            return self.write(record, RestMethod::Put, path, body).await;
        }

        let body = self.format().encode(R::NAME, record.attributes())?;
        match record.uri().cloned() {
            Some(path) => self.write(record, RestMethod::Put, path, body).await,
            None => {
                let path = record.collection_path();
                self.write(record, RestMethod::Post, path, body).await
            }
        }
    }

    /// Re-fetches a record, discarding local changes.
    pub async fn reload<R: Resource>(&self, record: &mut Record<R>) -> Result<(), ApiError> {
        let path = record.location()?;
        let response = self.request(RestMethod::Get, &path, R::NAME, None).await?;
        let attributes: R = self.format().decode(response.body())?;
        record.replace(attributes, Some(path));
        Ok(())
    }

    /// Deletes a record remotely.
    pub async fn destroy<R: Resource>(&self, record: &mut Record<R>) -> Result<(), ApiError> {
        let path = record.location()?;
        self.request(RestMethod::Delete, &path, R::NAME, None).await?;
        record.mark_destroyed();
        Ok(())
    }

    /// Lists the first page of a collection.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let mut page = client
    ///     .list::<Account>(&ListParams::default().state("active").per_page(50))
    ///     .await?;
    /// loop {
    ///     for account in &page.items {
    ///         println!("{:?}", account.account_code);
    ///     }
    ///     match client.next_page(&page).await? {
    ///         Some(next) => page = next,
    ///         None => break,
    ///     }
    /// }
    /// ```
    pub async fn list<R: Resource>(&self, params: &ListParams) -> Result<Page<R>, ApiError> {
        let mut url = self.url_for(&ResourcePath::new(R::COLLECTION))?;
        let pairs = params.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        let response = self.send(RestMethod::Get, url, R::NAME, None).await?;
        self.page_from(&response)
    }

    /// Fetches the page after `page`, or `None` on the last page.
    pub async fn next_page<R: Resource>(&self, page: &Page<R>) -> Result<Option<Page<R>>, ApiError> {
        let Some(next) = page.next.clone() else {
            return Ok(None);
        };
        let response = self.send(RestMethod::Get, next, R::NAME, None).await?;
        self.page_from(&response).map(Some)
    }

    /// Fetches the `C` children listed under `parent`.
    pub async fn has_many<P, C>(&self, parent: &Record<P>) -> Result<Vec<Record<C>>, ApiError>
    where
        P: HasMany<C>,
        C: Resource,
    {
        let path = parent.location()?.join(C::COLLECTION);
        let response = self.request(RestMethod::Get, &path, C::NAME, None).await?;
        let items: Vec<C> = self.format().decode_list(response.body())?;
        Ok(items
            .into_iter()
            .map(|item| {
                let uri = member_of(&path, &item);
                Record::loaded(item, uri)
            })
            .collect())
    }

    /// Fetches the single `C` child of `parent`.
    pub async fn has_one<P, C>(&self, parent: &Record<P>) -> Result<Record<C>, ApiError>
    where
        P: HasOne<C>,
        C: Resource,
    {
        let path = parent.location()?.join(C::COLLECTION);
        self.fetch(path).await
    }

    /// Creates a `C` under `parent` (`accounts/<code>/adjustments`).
    ///
    /// Like [`ApiClient::create`], a rejected payload yields an unpersisted
    /// record carrying the field errors.
    pub async fn create_child<P, C>(&self, parent: &Record<P>, attributes: C) -> Result<Record<C>, ApiError>
    where
        P: HasMany<C>,
        C: Resource,
    {
        let path = parent.location()?.join(C::COLLECTION);
        let body = self.format().encode(C::NAME, &attributes)?;
        let mut record = Record::new(attributes);
        match self.write(&mut record, RestMethod::Post, path, body).await {
            Ok(()) | Err(ApiError::Invalid(_)) => Ok(record),
            Err(e) => Err(e),
        }
    }

    /// Sends a resource action such as `PUT accounts/<code>/reopen` and
    /// loads the response into `record`. An empty response leaves the
    /// attributes untouched.
    pub(crate) async fn act<R: Resource>(
        &self,
        record: &mut Record<R>,
        method: RestMethod,
        path: ResourcePath,
        query: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<(), ApiError> {
        let mut url = self.url_for(&path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        let response = self.send(method, url, R::NAME, body).await?;
        if !response.is_empty() {
            let attributes: R = self.format().decode(response.body())?;
            record.replace(attributes, None);
        }
        Ok(())
    }

    async fn request(
        &self,
        method: RestMethod,
        path: &ResourcePath,
        root: &str,
        body: Option<String>,
    ) -> Result<Response, ApiError> {
        let url = self.url_for(path)?;
        self.send(method, url, root, body).await
    }

    async fn write<R: Resource>(
        &self,
        record: &mut Record<R>,
        method: RestMethod,
        path: ResourcePath,
        body: String,
    ) -> Result<(), ApiError> {
        match self.request(method, &path, R::NAME, Some(body)).await {
            Ok(response) => {
                let attributes = if response.is_empty() {
                    record.attributes().clone()
                } else {
                    self.format().decode(response.body())?
                };
                let uri = match method {
                    RestMethod::Post => member_of(&path, &attributes),
                    _ => Some(path),
                };
                record.replace(attributes, uri);
                Ok(())
            }
            Err(ApiError::Invalid(errors)) => {
                record.set_errors(errors.clone());
                Err(ApiError::Invalid(errors))
            }
            Err(e) => Err(e),
        }
    }

    fn page_from<R: Resource>(&self, response: &Response) -> Result<Page<R>, ApiError> {
        let items: Vec<R> = self.format().decode_list(response.body())?;
        Ok(Page {
            items: items
                .into_iter()
                .map(|item| Record::loaded(item, None))
                .collect(),
            total: response
                .header(RECORDS_HEADER)
                .and_then(|v| v.trim().parse().ok()),
            next: response.header(LINK_HEADER).and_then(next_link),
        })
    }
}
