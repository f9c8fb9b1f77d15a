use async_trait::async_trait;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Camera,
}

#[async_trait]
pub trait PermissionGate: Send + Sync {
    fn check_granted(&self, capability: Capability) -> bool;

    /// Suspends until the user has answered the prompt.
    async fn request_grant(&self, capability: Capability) -> bool;
}
