mod command_camera;
mod console_input;
mod console_permission_gate;
mod directory_media_storage;

pub use command_camera::CommandCamera;
pub use console_input::ConsoleInput;
pub use console_permission_gate::ConsolePermissionGate;
pub use directory_media_storage::DirectoryMediaStorage;
