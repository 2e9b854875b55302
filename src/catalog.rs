use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::{record_id, Service, ServiceRecord};
use crate::submission::FieldMap;

/// Where the services listing comes from.
#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<Service>, AppError>;
}

/// The built-in listing.
pub struct StaticCatalog;

#[async_trait]
impl ServiceCatalog for StaticCatalog {
    async fn list(&self) -> Result<Vec<Service>, AppError> {
        Ok(fallback_services())
    }
}

/// The fixed services offered, ids 1 to 5.
pub fn fallback_services() -> Vec<Service> {
    [
        (
            "Standard Cleaning",
            "Regular cleaning of kitchens, bathrooms, bedrooms and living areas.",
            "$120",
            "2-3 hours",
        ),
        (
            "Deep Cleaning",
            "Top-to-bottom clean including baseboards, inside appliances and hard-to-reach spots.",
            "$250",
            "4-6 hours",
        ),
        (
            "Move In/Out Cleaning",
            "Complete clean of an empty home before moving in or after moving out.",
            "$300",
            "5-7 hours",
        ),
        (
            "Office Cleaning",
            "Workspace, break room and restroom cleaning for small offices.",
            "$180",
            "3-4 hours",
        ),
        (
            "Carpet Cleaning",
            "Hot water extraction for carpets and rugs, with stain treatment.",
            "$150",
            "2-3 hours",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, description, price, duration), id)| Service {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        duration: duration.to_string(),
    })
    .collect()
}

/// List services, serving the fixed listing when the source fails.
pub async fn list_or_fallback(catalog: &dyn ServiceCatalog) -> Vec<Service> {
    match catalog.list().await {
        Ok(services) => services,
        Err(e) => {
            tracing::warn!("Service catalog unavailable, serving fallback: {e}");
            fallback_services()
        }
    }
}

/// Presence check for a "create service" request. The catalog is not touched.
pub fn validate_service(fields: &FieldMap, now: DateTime<Utc>) -> Result<ServiceRecord, AppError> {
    let (Some(name), Some(description), Some(price), Some(duration)) = (
        fields.text("name"),
        fields.text("description"),
        fields.text("price"),
        fields.text("duration"),
    ) else {
        return Err(AppError::MissingFields);
    };

    Ok(ServiceRecord {
        id: record_id(now),
        name,
        description,
        price,
        duration,
        created_at: now,
    })
}
