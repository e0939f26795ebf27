/// Number of OTP input cells on the verify page.
pub const OTP_LENGTH: usize = 6;

/// Seconds the user has to wait before the resend action appears.
pub const RESEND_WINDOW_SECS: u32 = 120;

/// Fixed latency of the simulated backend round-trip, in milliseconds.
pub const SIMULATED_LATENCY_MS: u32 = 1_500;

/// Total number of questions in the personality test.
pub const TOTAL_QUESTIONS: u32 = 100;

/// Question the test page opens on, per the page design.
pub const STARTING_QUESTION: u32 = 3;

/// Phone shown on the verify page when none was stored by the login step.
pub const FALLBACK_PHONE: &str = "09123456789";
