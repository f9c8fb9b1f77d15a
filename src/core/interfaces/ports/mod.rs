mod camera_facility;
mod media_storage;
mod permission_gate;

pub use camera_facility::{CameraFacility, CameraOutcome};
pub use media_storage::MediaStorage;
pub use permission_gate::{Capability, PermissionGate};
