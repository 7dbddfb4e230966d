//! In-memory design document model.
//!
//! ```text
//! Design
//! ├── ComponentInstance*      (ConfigurableVlnvReference, kactus2 layout data)
//! ├── Interconnection*        (start ActiveInterface, ActiveInterface*, HierInterface*)
//! ├── MonitorInterconnection* (MonitorInterface, MonitorInterface*)
//! ├── AdHocConnection*        (internal/external PortReference*)
//! ├── Parameter*, Assertion*
//! └── VendorExtensions        (columns, routes, SW instances, ...)
//! ```
//!
//! Every collection is owned by value, so cloning a [`Design`] yields a fully
//! independent copy. References between elements are plain names resolved on
//! use; nothing here checks that they resolve.

mod ad_hoc;
mod component_instance;
mod design;
mod interconnection;
mod interface;
mod name_group;
mod parameter;
mod point;

pub use ad_hoc::{AdHocConnection, PartSelect, PortReference};
pub use component_instance::{ComponentInstance, PowerDomainLink, generate_uuid};
pub use design::Design;
pub use interconnection::{Interconnection, MonitorInterconnection};
pub use interface::{ActiveInterface, HierInterface, InterfaceRef, MonitorInterface};
pub use name_group::NameGroup;
pub use parameter::{Assertion, Parameter};
pub use point::Point;
