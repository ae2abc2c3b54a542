use std::fmt;
use std::str::FromStr;

use lightningcss::targets::{Browsers, Targets};
use serde::Deserialize;

/// Behaviour when a source change arrives while a build is already running.
///
/// - `Queue`: remember the trigger and run one more build when the current one
///   finishes (default behaviour). Bursts are coalesced into at most
///   `queue_length` follow-up builds.
/// - `Drop`: ignore triggers that arrive while a build is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerWhileRunningBehaviour {
    Queue,
    Drop,
}

impl Default for TriggerWhileRunningBehaviour {
    fn default() -> Self {
        TriggerWhileRunningBehaviour::Queue
    }
}

/// Browser compatibility profile the minifier must respect.
///
/// Names follow the classic minifier compatibility modes: `*` means
/// "IE10 and newer", the `ieN` variants pin the oldest Internet Explorer the
/// output must still parse in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Compatibility {
    Modern,
    Ie11,
    Ie10,
    Ie9,
    Ie8,
    Ie7,
}

impl Default for Compatibility {
    fn default() -> Self {
        Compatibility::Ie8
    }
}

impl Compatibility {
    /// Oldest Internet Explorer major version this profile supports.
    pub fn ie_version(self) -> u32 {
        match self {
            Compatibility::Modern | Compatibility::Ie10 => 10,
            Compatibility::Ie11 => 11,
            Compatibility::Ie9 => 9,
            Compatibility::Ie8 => 8,
            Compatibility::Ie7 => 7,
        }
    }

    /// Whether output must keep old-IE hacks (`*prop`, `_prop`) intact.
    pub fn keeps_legacy_hacks(self) -> bool {
        matches!(self, Compatibility::Ie8 | Compatibility::Ie7)
    }

    /// Minifier targets for this profile.
    pub fn targets(self) -> Targets {
        // lightningcss encodes versions as `major << 16 | minor << 8 | patch`.
        let browsers = Browsers {
            ie: Some(self.ie_version() << 16),
            ..Browsers::default()
        };
        Targets::from(browsers)
    }
}

impl FromStr for Compatibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "*" => Ok(Compatibility::Modern),
            "ie11" => Ok(Compatibility::Ie11),
            "ie10" => Ok(Compatibility::Ie10),
            "ie9" => Ok(Compatibility::Ie9),
            "ie8" => Ok(Compatibility::Ie8),
            "ie7" => Ok(Compatibility::Ie7),
            other => Err(format!(
                "invalid compatibility: {other} (expected one of \"*\", \"ie11\", \"ie10\", \"ie9\", \"ie8\", \"ie7\")"
            )),
        }
    }
}

impl TryFrom<String> for Compatibility {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compatibility::Modern => "*",
            Compatibility::Ie11 => "ie11",
            Compatibility::Ie10 => "ie10",
            Compatibility::Ie9 => "ie9",
            Compatibility::Ie8 => "ie8",
            Compatibility::Ie7 => "ie7",
        };
        f.write_str(name)
    }
}
