//! Simulated authentication flows and Kyrgyz phone-number formatting.
//!
//! There is no real SMS gateway or OAuth provider behind any of this.
//! Sending and verifying a code are fixed-duration waits that always
//! complete; any six-digit code verifies successfully.

use crate::errors::{Error, Result};
use std::time::Duration;
use tracing::{debug, info};

/// Kyrgyz country prefix every number must start with.
pub const COUNTRY_PREFIX: &str = "+996";

/// The reset value the phone field falls back to on bad input.
pub const EMPTY_PHONE: &str = "+996 ";

/// Length of a complete number with spacing stripped: `+996XXXXXXXXX`.
const COMPLETE_PHONE_LEN: usize = 13;

/// Simulated round-trip of the SMS gateway.
const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

/// Normalizes raw phone input to the fixed `+996 XXX XXX XXX` grouping.
///
/// Keeps only digits and `+`. Input that does not start with the country
/// prefix is reset to the bare [`EMPTY_PHONE`] prefix; anything past nine
/// subscriber digits is dropped.
#[must_use]
pub fn format_phone(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if !cleaned.starts_with(COUNTRY_PREFIX) {
        return EMPTY_PHONE.to_string();
    }

    let mut formatted = EMPTY_PHONE.to_string();
    for (i, digit) in cleaned[COUNTRY_PREFIX.len()..]
        .chars()
        .filter(char::is_ascii_digit)
        .take(9)
        .enumerate()
    {
        if i == 3 || i == 6 {
            formatted.push(' ');
        }
        formatted.push(digit);
    }
    formatted
}

/// Strips the display spacing, yielding `+996XXXXXXXXX`.
#[must_use]
pub fn clean_phone(formatted: &str) -> String {
    formatted.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether the input holds all nine subscriber digits.
#[must_use]
pub fn is_complete_phone(formatted: &str) -> bool {
    clean_phone(formatted).len() >= COMPLETE_PHONE_LEN
}

/// Requests a verification code for the given formatted number.
///
/// Validates completeness, then waits out the simulated gateway latency.
/// The wait always completes; there is no cancellation path.
pub async fn send_code(phone: &str) -> Result<()> {
    if !is_complete_phone(phone) {
        return Err(Error::InvalidPhone {
            input: phone.to_string(),
        });
    }

    debug!(phone = %clean_phone(phone), "sending verification code");
    tokio::time::sleep(SIMULATED_LATENCY).await;
    info!(phone = %clean_phone(phone), "verification code sent");
    Ok(())
}

/// Verifies a code entered on the code screen.
///
/// Any six-digit code is accepted after the simulated check; shorter,
/// longer, or non-numeric input fails immediately.
pub async fn verify_code(code: &str) -> Result<()> {
    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidCode {
            reason: "Код должен содержать 6 цифр".to_string(),
        });
    }

    tokio::time::sleep(SIMULATED_LATENCY).await;
    info!("verification code accepted");
    Ok(())
}

/// Profile fields collected on the registration screens.
#[derive(Clone, Debug, Default)]
pub struct Registration {
    /// Given name (required by the forms)
    pub name: String,
    /// Family name
    pub surname: Option<String>,
    /// Verified phone, for organizers
    pub phone: Option<String>,
    /// E-mail from the Google-style flow, for owners
    pub email: Option<String>,
    /// Avatar URL
    pub photo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn format_phone_groups_into_triplets() {
        assert_eq!(format_phone("+996555123456"), "+996 555 123 456");
        assert_eq!(format_phone("+996 555 123 456"), "+996 555 123 456");
        assert_eq!(format_phone("+99655512"), "+996 555 12");
        assert_eq!(format_phone("+996"), "+996 ");
    }

    #[test]
    fn format_phone_resets_input_without_country_prefix() {
        // Local-format numbers are reset, not rewritten.
        assert_eq!(format_phone("0555123456"), "+996 ");
        assert_eq!(format_phone("555123456"), "+996 ");
        assert_eq!(format_phone("+7 900 000 00 00"), "+996 ");
        assert_eq!(format_phone(""), "+996 ");
    }

    #[test]
    fn format_phone_drops_excess_digits() {
        assert_eq!(format_phone("+9965551234567890"), "+996 555 123 456");
    }

    #[test]
    fn complete_phone_needs_nine_subscriber_digits() {
        assert!(is_complete_phone("+996 555 123 456"));
        assert!(!is_complete_phone("+996 555 123 45"));
        assert!(!is_complete_phone("+996 "));
    }

    #[tokio::test(start_paused = true)]
    async fn send_code_validates_then_waits() {
        let err = send_code("+996 555").await.unwrap_err();
        assert!(matches!(err, crate::errors::Error::InvalidPhone { .. }));

        // Paused clock: the simulated latency elapses instantly.
        send_code("+996 555 123 456").await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn verify_code_accepts_any_six_digits() {
        verify_code("123456").await.unwrap();
        verify_code("000000").await.unwrap();

        assert!(verify_code("12345").await.is_err());
        assert!(verify_code("1234567").await.is_err());
        assert!(verify_code("12a456").await.is_err());
    }
}
