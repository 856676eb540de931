// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notification**: Auto-clear delay for the status banner
//! - **Pulse**: Duration of the readout emphasis after a change

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay before an unanswered notification clears itself (in milliseconds).
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 2000;

/// Minimum notification timeout (in milliseconds).
pub const MIN_NOTIFICATION_TIMEOUT_MS: u64 = 500;

/// Maximum notification timeout (in milliseconds).
pub const MAX_NOTIFICATION_TIMEOUT_MS: u64 = 30_000;

// ==========================================================================
// Pulse Defaults
// ==========================================================================

/// How long the readout stays emphasized after a change (in milliseconds).
pub const DEFAULT_PULSE_DURATION_MS: u64 = 250;

/// Minimum pulse duration (in milliseconds).
pub const MIN_PULSE_DURATION_MS: u64 = 50;

/// Maximum pulse duration (in milliseconds).
pub const MAX_PULSE_DURATION_MS: u64 = 2000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_NOTIFICATION_TIMEOUT_MS > 0);
    assert!(MAX_NOTIFICATION_TIMEOUT_MS >= MIN_NOTIFICATION_TIMEOUT_MS);
    assert!(DEFAULT_NOTIFICATION_TIMEOUT_MS >= MIN_NOTIFICATION_TIMEOUT_MS);
    assert!(DEFAULT_NOTIFICATION_TIMEOUT_MS <= MAX_NOTIFICATION_TIMEOUT_MS);

    assert!(MIN_PULSE_DURATION_MS > 0);
    assert!(MAX_PULSE_DURATION_MS >= MIN_PULSE_DURATION_MS);
    assert!(DEFAULT_PULSE_DURATION_MS >= MIN_PULSE_DURATION_MS);
    assert!(DEFAULT_PULSE_DURATION_MS <= MAX_PULSE_DURATION_MS);

    // The pulse must settle well before the banner disappears
    assert!(DEFAULT_PULSE_DURATION_MS < DEFAULT_NOTIFICATION_TIMEOUT_MS);
};
