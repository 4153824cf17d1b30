//! Static reference catalog.
//!
//! Definitions of every business, estate and city event the game knows
//! about, plus the two collection cooldowns. The catalog is loaded once at
//! startup from `catalog.yaml` and shared read-only for the lifetime of
//! the process.
//!
//! Lookups never fail: state written by the bot can reference ids the
//! catalog has since dropped, and callers fall back to defaults instead.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use transcity_types::{BusinessId, CityEventId, EstateId};

/// Default business collection cooldown in seconds.
pub const DEFAULT_BUSINESS_COOLDOWN_SECS: u64 = 1800;

/// Default estate rent cooldown in seconds.
pub const DEFAULT_ESTATE_RENT_COOLDOWN_SECS: u64 = 3600;

/// Errors that can occur when loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file from disk.
    #[error("failed to read catalog file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse catalog YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A cooldown of zero seconds was configured.
    #[error("invalid cooldown: {name} must be greater than zero")]
    ZeroCooldown {
        /// Which cooldown was zero.
        name: &'static str,
    },
}

impl From<serde_yml::Error> for CatalogError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Definition of a business type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BusinessDef {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Dashboard category (`starter`, `city`, `hi_tech`, ...).
    #[serde(default)]
    pub category: Option<String>,
    /// Income per collection at level 1.
    #[serde(default)]
    pub base_income: i64,
    /// Additional income per level above 1.
    #[serde(default)]
    pub income_step: i64,
}

impl BusinessDef {
    /// Income per collection at `level`. Level 0 earns nothing.
    pub fn income_at(&self, level: u32) -> i64 {
        if level == 0 {
            return 0;
        }
        let extra_levels = i64::from(level.saturating_sub(1));
        self.base_income
            .saturating_add(self.income_step.saturating_mul(extra_levels))
    }
}

/// Definition of an estate type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EstateDef {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Fixed rent per collection.
    #[serde(default)]
    pub rent_income: i64,
    /// Short description shown next to the estate.
    #[serde(default)]
    pub description: Option<String>,
}

/// Definition of a city-wide event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventDef {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// What the event does to the city.
    #[serde(default)]
    pub description: Option<String>,
}

/// Collection cooldowns, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Cooldowns {
    /// Time between two business income collections.
    #[serde(default = "default_business_secs")]
    pub business_secs: u64,
    /// Time between two estate rent collections.
    #[serde(default = "default_estate_rent_secs")]
    pub estate_rent_secs: u64,
}

const fn default_business_secs() -> u64 {
    DEFAULT_BUSINESS_COOLDOWN_SECS
}

const fn default_estate_rent_secs() -> u64 {
    DEFAULT_ESTATE_RENT_COOLDOWN_SECS
}

impl Default for Cooldowns {
    fn default() -> Self {
        Self {
            business_secs: DEFAULT_BUSINESS_COOLDOWN_SECS,
            estate_rent_secs: DEFAULT_ESTATE_RENT_COOLDOWN_SECS,
        }
    }
}

/// The full reference catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    /// Collection cooldowns.
    #[serde(default)]
    pub cooldowns: Cooldowns,
    /// Business definitions keyed by id.
    #[serde(default)]
    pub businesses: BTreeMap<BusinessId, BusinessDef>,
    /// Estate definitions keyed by id.
    #[serde(default)]
    pub estates: BTreeMap<EstateId, EstateDef>,
    /// Event definitions keyed by id.
    #[serde(default)]
    pub events: BTreeMap<CityEventId, EventDef>,
}

impl Catalog {
    /// Load the catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read,
    /// [`CatalogError::Yaml`] if it is not valid YAML, or
    /// [`CatalogError::ZeroCooldown`] if a cooldown is zero.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse the catalog from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Yaml`] if the string is not valid YAML, or
    /// [`CatalogError::ZeroCooldown`] if a cooldown is zero.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_yml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.cooldowns.business_secs == 0 {
            return Err(CatalogError::ZeroCooldown {
                name: "business_secs",
            });
        }
        if self.cooldowns.estate_rent_secs == 0 {
            return Err(CatalogError::ZeroCooldown {
                name: "estate_rent_secs",
            });
        }
        Ok(())
    }

    /// Look up a business definition.
    pub fn business(&self, id: &BusinessId) -> Option<&BusinessDef> {
        self.businesses.get(id)
    }

    /// Look up an estate definition.
    pub fn estate(&self, id: &EstateId) -> Option<&EstateDef> {
        self.estates.get(id)
    }

    /// Look up an event definition.
    pub fn event(&self, id: &CityEventId) -> Option<&EventDef> {
        self.events.get(id)
    }

    /// Collection cooldowns.
    pub const fn cooldowns(&self) -> Cooldowns {
        self.cooldowns
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const YAML: &str = r#"
cooldowns:
  business_secs: 900
businesses:
  neon_reactor:
    name: "Neon Reactor"
    category: hi_tech
    base_income: 820
    income_step: 210
  kiosk:
    base_income: 100
estates:
  cabin:
    name: "Warm Cabin"
    rent_income: 420
    description: "Shielded until dawn"
events:
  winter_fair:
    name: "Frozen Park"
"#;

    #[test]
    fn parses_catalog_yaml() {
        let catalog = Catalog::from_yaml(YAML).unwrap();
        assert_eq!(catalog.cooldowns().business_secs, 900);
        assert_eq!(
            catalog.cooldowns().estate_rent_secs,
            DEFAULT_ESTATE_RENT_COOLDOWN_SECS
        );
        assert_eq!(catalog.businesses.len(), 2);
        let cabin = catalog.estate(&EstateId::from("cabin")).unwrap();
        assert_eq!(cabin.rent_income, 420);
        let fair = catalog.event(&CityEventId::from("winter_fair")).unwrap();
        assert!(fair.description.is_none());
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let catalog = Catalog::from_yaml("{}").unwrap();
        assert_eq!(catalog.cooldowns(), Cooldowns::default());
        assert!(catalog.businesses.is_empty());
    }

    #[test]
    fn zero_cooldown_is_rejected() {
        let result = Catalog::from_yaml("cooldowns:\n  estate_rent_secs: 0\n");
        assert!(matches!(
            result,
            Err(CatalogError::ZeroCooldown {
                name: "estate_rent_secs"
            })
        ));
    }

    #[test]
    fn income_scales_with_level() {
        let def = BusinessDef {
            base_income: 820,
            income_step: 210,
            ..BusinessDef::default()
        };
        assert_eq!(def.income_at(0), 0);
        assert_eq!(def.income_at(1), 820);
        assert_eq!(def.income_at(3), 1240);
    }

    #[test]
    fn income_saturates_instead_of_overflowing() {
        let def = BusinessDef {
            base_income: i64::MAX,
            income_step: i64::MAX,
            ..BusinessDef::default()
        };
        assert_eq!(def.income_at(u32::MAX), i64::MAX);
    }
}
