//! Service layer

mod zone_type_service;

pub use zone_type_service::ZoneTypeService;
