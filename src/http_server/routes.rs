//! # Resource Routes
//!
//! Generic axum wiring for one entity type. Every resource gets the same
//! six routes, built from its descriptor:
//!
//! - `GET    /{collection}`: list
//! - `POST   /{collection}`: create (201 + Location)
//! - `GET    /{collection}/{filter-route}?{param}=`: substring filter
//! - `GET    /{collection}/{id}`: get by id
//! - `PUT    /{collection}/{id}`: full-record replace (204)
//! - `DELETE /{collection}/{id}`: delete (204)

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::model::Entity;
use crate::resource::{Created, ResourceError, ResourceHandler};
use crate::store::Store;

/// Build the routes for one entity type.
pub fn resource_routes<E, S>(handler: ResourceHandler<E, S>) -> Router
where
    E: Entity,
    S: Store<E> + 'static,
{
    Router::new()
        .route(
            &format!("/{}", E::COLLECTION),
            get(list_records::<E, S>).post(create_record::<E, S>),
        )
        .route(
            &format!("/{}/{}", E::COLLECTION, E::FILTER_ROUTE),
            get(filter_records::<E, S>),
        )
        .route(
            &format!("/{}/{{id}}", E::COLLECTION),
            get(get_record::<E, S>)
                .put(replace_record::<E, S>)
                .delete(delete_record::<E, S>),
        )
        .with_state(handler)
}

async fn list_records<E, S>(
    State(handler): State<ResourceHandler<E, S>>,
) -> Result<Json<Vec<E>>, ResourceError>
where
    E: Entity,
    S: Store<E> + 'static,
{
    Ok(Json(handler.list().await?))
}

async fn filter_records<E, S>(
    State(handler): State<ResourceHandler<E, S>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<E>>, ResourceError>
where
    E: Entity,
    S: Store<E> + 'static,
{
    let needle = params.get(E::FILTER_PARAM).map(String::as_str).unwrap_or("");
    Ok(Json(handler.filter(needle).await?))
}

async fn get_record<E, S>(
    State(handler): State<ResourceHandler<E, S>>,
    Path(id): Path<String>,
) -> Result<Json<E>, ResourceError>
where
    E: Entity,
    S: Store<E> + 'static,
{
    Ok(Json(handler.get(&id).await?))
}

async fn create_record<E, S>(
    State(handler): State<ResourceHandler<E, S>>,
    Json(record): Json<E>,
) -> Result<Created<E>, ResourceError>
where
    E: Entity,
    S: Store<E> + 'static,
{
    handler.create(record).await
}

async fn replace_record<E, S>(
    State(handler): State<ResourceHandler<E, S>>,
    Path(id): Path<String>,
    Json(record): Json<E>,
) -> Result<StatusCode, ResourceError>
where
    E: Entity,
    S: Store<E> + 'static,
{
    handler.replace(&id, record).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_record<E, S>(
    State(handler): State<ResourceHandler<E, S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ResourceError>
where
    E: Entity,
    S: Store<E> + 'static,
{
    handler.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
