//! In-memory container model.
//!
//! One container per BEGIN/END block, holding decoded values in three
//! role-keyed slot maps plus nested components. Cardinality is enforced
//! when a value is inserted, not when the container is serialized.

mod compare;
mod container;
mod part;
mod structured;
mod value_info;

pub use container::{ComponentKind, Container};
pub use part::Part;
pub use structured::{Gender, GeoPosition, Media, Organization, StructuredAddress, StructuredName};
pub use value_info::ValueInfo;
