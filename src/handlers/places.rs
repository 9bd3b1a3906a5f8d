// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for the relayed places routes
// PURPOSE: Parse query strings, forward upstream, return the body or an envelope

use crate::errors::RelayError;
use crate::models::{NearbySearchQuery, PlaceDetailsQuery};
use crate::services::GooglePlacesClient;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// GET /api/places/nearby
/// Forward a nearby search; only `location` is required
pub async fn nearby_search(
    client: web::Data<GooglePlacesClient>,
    query: web::Query<NearbySearchQuery>,
) -> Result<impl Responder, RelayError> {
    let query = query.into_inner();
    if let Err(e) = query.validate() {
        return Err(RelayError::ValidationError(e.to_string()));
    }

    let body = client.nearby_search(&query).await?;
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/places/details
/// Forward a place-details lookup
pub async fn place_details(
    client: web::Data<GooglePlacesClient>,
    query: web::Query<PlaceDetailsQuery>,
) -> Result<impl Responder, RelayError> {
    let body = client.place_details(&query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(body))
}

/// Configuration for relayed place routes
/// DOCUMENTATION: Unparseable query strings get the same `{error, details}` envelope
pub fn config(cfg: &mut web::ServiceConfig) {
    let query_config = web::QueryConfig::default()
        .error_handler(|e, _req| RelayError::ValidationError(e.to_string()).into());

    cfg.service(
        web::scope("/api/places")
            .app_data(query_config)
            .route("/nearby", web::get().to(nearby_search))
            .route("/details", web::get().to(place_details)),
    );
}
