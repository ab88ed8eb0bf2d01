//! Handlers shared by every CRUD resource.
//!
//! Handlers are generic over the [`Resource`] they serve and, for the keyed
//! routes, over a [`LookupKey`] naming the column in the path. A resource's
//! router is assembled with [`ResourceRouter`]. Reads by id, by key and by
//! list query embed related rows; writes answer with the bare row.

use std::{fmt::Display, marker::PhantomData};

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, MethodRouter},
    Extension, Router,
};
use serde::de::DeserializeOwned;

use crate::{
    model::{api, query::FindRequest},
    server::{
        controller::{reply, reply_empty, reply_list, reply_page},
        error::AppError,
        middleware::{
            auth::{AuthGuard, AuthUser},
            extract::{ValidJson, ValidPath},
        },
        model::resource::Resource,
        service::resource::{ResourceService, Upserted},
        state::AppState,
    },
};

/// A column that keyed routes can look rows up by.
///
/// `FIELD` is both the JSON member name and the path segment, e.g.
/// `/api/importations/productID/{value}`.
pub trait LookupKey: Send + Sync + 'static {
    const FIELD: &'static str;
    type Value: DeserializeOwned + Into<sea_orm::Value> + Display + Clone + Send + Sync + 'static;
}

macro_rules! lookup_keys {
    ($($name:ident => $field:literal : $value:ty),* $(,)?) => {
        $(
            pub struct $name;

            impl LookupKey for $name {
                const FIELD: &'static str = $field;
                type Value = $value;
            }
        )*
    };
}

lookup_keys! {
    ProductId => "productID": i32,
    ColorId => "colorID": i32,
    GroupId => "groupID": i32,
    PrintId => "printID": i32,
    SewingLineId => "sewingLineID": i32,
    AccessoryNoteId => "accessoryNoteID": i32,
    GarmentAccessoryId => "garmentAccessoryID": i32,
    UserId => "userID": i32,
    RoleId => "roleID": i32,
    ProductCode => "productCode": String,
    Name => "name": String,
    RoleKey => "role": String,
}

/// Builds the router of one resource, to be nested under its mount path.
pub struct ResourceRouter<R: Resource> {
    router: Router<AppState>,
    resource: PhantomData<R>,
}

impl<R: Resource> ResourceRouter<R> {
    /// Creates the router with the routes every resource has.
    pub fn new() -> Self {
        let router = Router::new()
            .route("/", post(create::<R>))
            .route("/items", post(create_many::<R>))
            .route("/find", post(find::<R>))
            .route(
                "/{id}",
                get(get_one::<R>).put(update::<R>).delete(delete::<R>),
            )
            .route("/createOrUpdate/{id}", post(upsert::<R>));

        Self {
            router,
            resource: PhantomData,
        }
    }

    /// Adds get, update, delete and upsert routes keyed by `K`.
    pub fn key<K: LookupKey>(mut self) -> Self {
        self.router = self
            .router
            .route(
                &format!("/{}/{{value}}", K::FIELD),
                get(get_by::<R, K>)
                    .put(update_by::<R, K>)
                    .delete(delete_by::<R, K>),
            )
            .route(
                &format!("/createOrUpdate/{}/{{value}}", K::FIELD),
                post(upsert_by::<R, K>),
            );
        self
    }

    /// Adds the list sync route for rows under parent `P`, matched on `M`.
    pub fn sync<P: LookupKey, M: LookupKey>(mut self) -> Self {
        self.router = self.router.route(
            &format!("/updateItems/{}/{{value}}", P::FIELD),
            post(sync::<R, P, M>),
        );
        self
    }

    /// Adds a resource specific route.
    pub fn route(mut self, path: &str, method_router: MethodRouter<AppState>) -> Self {
        self.router = self.router.route(path, method_router);
        self
    }

    pub fn into_router(self) -> Router<AppState> {
        self.router
    }
}

impl<R: Resource> Default for ResourceRouter<R> {
    fn default() -> Self {
        Self::new()
    }
}

async fn guard<R: Resource>(state: &AppState, user: &AuthUser) -> Result<(), AppError> {
    AuthGuard::new(&state.db, user).require(R::WRITE_ROLES).await
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidJson(payload): ValidJson<R::Payload>,
) -> Result<impl IntoResponse, AppError> {
    guard::<R>(&state, &user).await?;

    let row = ResourceService::<R>::new(&state.db).create(payload).await?;

    Ok(reply(StatusCode::CREATED, api::CREATED, row))
}

pub async fn create_many<R: Resource>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidJson(payloads): ValidJson<Vec<R::Payload>>,
) -> Result<impl IntoResponse, AppError> {
    guard::<R>(&state, &user).await?;

    let rows = ResourceService::<R>::new(&state.db)
        .create_many(payloads)
        .await?;

    Ok(reply_list(StatusCode::CREATED, api::CREATED, rows))
}

pub async fn find<R: Resource>(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<FindRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<R>::new(&state.db);
    let page = service.find(&request).await?;

    Ok(reply_page(api::SUCCESS, service.embed_page(page).await?))
}

pub async fn get_one<R: Resource>(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<R>::new(&state.db);
    let row = service.get(id).await?;

    Ok(reply(StatusCode::OK, api::SUCCESS, service.embed_one(row).await?))
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<R::Payload>,
) -> Result<impl IntoResponse, AppError> {
    guard::<R>(&state, &user).await?;

    let row = ResourceService::<R>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok(reply(StatusCode::OK, api::UPDATED, row))
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    guard::<R>(&state, &user).await?;

    ResourceService::<R>::new(&state.db).delete(id).await?;

    Ok(reply_empty(StatusCode::OK, api::DELETED))
}

pub async fn upsert<R: Resource>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<R::Payload>,
) -> Result<impl IntoResponse, AppError> {
    guard::<R>(&state, &user).await?;

    let result = ResourceService::<R>::new(&state.db)
        .upsert(id, payload)
        .await?;

    Ok(upserted(result))
}

pub async fn get_by<R: Resource, K: LookupKey>(
    State(state): State<AppState>,
    ValidPath(value): ValidPath<K::Value>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<R>::new(&state.db);
    let row = service.get_by(K::FIELD, value).await?;

    Ok(reply(StatusCode::OK, api::SUCCESS, service.embed_one(row).await?))
}

pub async fn update_by<R: Resource, K: LookupKey>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidPath(value): ValidPath<K::Value>,
    ValidJson(payload): ValidJson<R::Payload>,
) -> Result<impl IntoResponse, AppError> {
    guard::<R>(&state, &user).await?;

    let rows = ResourceService::<R>::new(&state.db)
        .update_by(K::FIELD, value, payload)
        .await?;

    Ok(reply_list(StatusCode::OK, api::UPDATED, rows))
}

pub async fn delete_by<R: Resource, K: LookupKey>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidPath(value): ValidPath<K::Value>,
) -> Result<impl IntoResponse, AppError> {
    guard::<R>(&state, &user).await?;

    let deleted = ResourceService::<R>::new(&state.db)
        .delete_by(K::FIELD, value)
        .await?;

    let (status, mut body) = reply_empty(StatusCode::OK, api::DELETED);
    body.length = Some(deleted);

    Ok((status, body))
}

pub async fn upsert_by<R: Resource, K: LookupKey>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidPath(value): ValidPath<K::Value>,
    ValidJson(payload): ValidJson<R::Payload>,
) -> Result<impl IntoResponse, AppError> {
    guard::<R>(&state, &user).await?;

    let result = ResourceService::<R>::new(&state.db)
        .upsert_by(K::FIELD, value, payload)
        .await?;

    Ok(upserted(result))
}

pub async fn sync<R: Resource, P: LookupKey, M: LookupKey>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidPath(value): ValidPath<P::Value>,
    ValidJson(payloads): ValidJson<Vec<R::Payload>>,
) -> Result<impl IntoResponse, AppError> {
    guard::<R>(&state, &user).await?;

    let rows = ResourceService::<R>::new(&state.db)
        .sync(P::FIELD, value, M::FIELD, payloads)
        .await?;

    Ok(reply_list(StatusCode::OK, api::UPDATED, rows))
}

fn upserted<T: serde::Serialize>(result: Upserted<T>) -> impl IntoResponse {
    match result {
        Upserted::Created(row) => reply(StatusCode::CREATED, api::CREATED, row),
        Upserted::Updated(row) => reply(StatusCode::OK, api::UPDATED, row),
    }
}
