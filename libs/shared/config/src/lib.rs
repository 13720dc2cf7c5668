use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use tracing::warn;

pub const DEFAULT_DOCTOR_SLUG: &str = "dra-rosana-arteaga";
pub const DEFAULT_DOCTOR_DISPLAY_NAME: &str = "Dra. García";
/// Caracas, UTC-4.
pub const DEFAULT_CLINIC_UTC_OFFSET_MINUTES: i32 = -240;
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub default_doctor_slug: String,
    pub doctor_display_name: String,
    pub clinic_utc_offset_minutes: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            default_doctor_slug: DEFAULT_DOCTOR_SLUG.to_string(),
            doctor_display_name: DEFAULT_DOCTOR_DISPLAY_NAME.to_string(),
            clinic_utc_offset_minutes: DEFAULT_CLINIC_UTC_OFFSET_MINUTES,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            host: parse_var("HOST", defaults.host),
            port: parse_var("PORT", defaults.port),
            default_doctor_slug: env::var("DEFAULT_DOCTOR_SLUG")
                .unwrap_or_else(|_| {
                    warn!("DEFAULT_DOCTOR_SLUG not set, using default");
                    defaults.default_doctor_slug
                }),
            doctor_display_name: env::var("DOCTOR_DISPLAY_NAME")
                .unwrap_or_else(|_| {
                    warn!("DOCTOR_DISPLAY_NAME not set, using default");
                    defaults.doctor_display_name
                }),
            clinic_utc_offset_minutes: parse_var(
                "CLINIC_UTC_OFFSET_MINUTES",
                defaults.clinic_utc_offset_minutes,
            ),
        };

        if config.clinic_offset().is_none() {
            warn!(
                "CLINIC_UTC_OFFSET_MINUTES={} is out of range, clinic clock falls back to UTC",
                config.clinic_utc_offset_minutes
            );
        }

        config
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn clinic_offset(&self) -> Option<FixedOffset> {
        self.clinic_utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
    }

    /// Current wall-clock time at the clinic.
    pub fn clinic_now(&self) -> DateTime<FixedOffset> {
        let offset = self.clinic_offset().unwrap_or_else(|| Utc.fix());
        Utc::now().with_timezone(&offset)
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {}", name, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", name, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.port, 3000);
        assert_eq!(config.default_doctor_slug, "dra-rosana-arteaga");
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_clinic_offset() {
        let config = AppConfig::default();
        assert_eq!(config.clinic_offset().map(|o| o.local_minus_utc()), Some(-4 * 3600));

        let broken = AppConfig {
            clinic_utc_offset_minutes: 60 * 30,
            ..AppConfig::default()
        };
        assert!(broken.clinic_offset().is_none());
        // Falls back to UTC rather than panicking.
        let _ = broken.clinic_now();
    }
}
