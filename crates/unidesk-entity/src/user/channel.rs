//! Access channel enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use unidesk_core::AppError;

/// Which client surfaces an account may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "access_channel", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessChannel {
    /// Web portal only.
    Web,
    /// Mobile app only.
    App,
    /// Both surfaces.
    Both,
}

impl AccessChannel {
    /// Whether the account may sign in to the web portal.
    pub fn allows_web(&self) -> bool {
        !matches!(self, Self::App)
    }

    /// Return the channel as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "WEB",
            Self::App => "APP",
            Self::Both => "BOTH",
        }
    }
}

impl fmt::Display for AccessChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessChannel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "WEB" => Ok(Self::Web),
            "APP" => Ok(Self::App),
            "BOTH" => Ok(Self::Both),
            _ => Err(AppError::validation(format!(
                "Invalid access channel: '{s}'. Expected one of: WEB, APP, BOTH"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_access() {
        assert!(AccessChannel::Web.allows_web());
        assert!(AccessChannel::Both.allows_web());
        assert!(!AccessChannel::App.allows_web());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("both".parse::<AccessChannel>().unwrap(), AccessChannel::Both);
        assert!("desktop".parse::<AccessChannel>().is_err());
    }

    #[test]
    fn test_serializes_uppercase() {
        let json = serde_json::to_string(&AccessChannel::App).unwrap();
        assert_eq!(json, "\"APP\"");
    }
}
