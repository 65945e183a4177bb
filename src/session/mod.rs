//! Card session: the orchestrator plus its display seam and liveness watchdog.

/// Orchestrator wiring motion samples to presented frames.
pub mod card;
/// Display surface contract and a recording implementation.
pub mod display;
/// One-shot liveness watchdog.
pub mod watchdog;
