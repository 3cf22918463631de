//! Lifecycle configuration.

/// How a confirmed password breach is handled during encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreachPolicy {
    /// Warn the operator and let them override (fail-open).
    #[default]
    WarnOnly,
    /// Reject breached passwords outright; the operator must pick another.
    BlockOnBreach,
}

/// Configuration for the file lifecycle workflows.
///
/// An *inconclusive* breach check (service unreachable) only ever warns,
/// under either policy: the toggle governs confirmed breaches, not the
/// availability of the remote service.
#[derive(Debug, Clone, Default)]
pub struct LifecycleConfig {
    /// Breach handling policy for newly chosen passwords.
    pub breach_policy: BreachPolicy,
}
