//! Typed plan and add-on catalog backing the signup wizard.
//!
//! Identifiers and prices are validated once when the catalog is built;
//! wizard operations then work with typed entities instead of re-parsing
//! string attributes at each use site.

use serde::{Deserialize, Serialize};

use crate::errors::SignupError;

/// A subscription tier the user can pick on step 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    /// Monthly base price in whole currency units.
    pub monthly_price: u32,
}

/// An optional supplementary item selectable on step 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub title: String,
    /// Monthly base price in whole currency units.
    pub monthly_price: u32,
}

/// The full set of plans and add-ons offered by the signup form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    plans: Vec<Plan>,
    addons: Vec<AddOn>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty or duplicate identifiers up front.
    pub fn new(plans: Vec<Plan>, addons: Vec<AddOn>) -> Result<Self, SignupError> {
        if plans.is_empty() {
            return Err(SignupError::InvalidCatalog(
                "at least one plan is required".into(),
            ));
        }
        check_ids("plan", plans.iter().map(|plan| plan.id.as_str()))?;
        check_ids("add-on", addons.iter().map(|addon| addon.id.as_str()))?;
        for addon in &addons {
            if addon.title.trim().is_empty() {
                return Err(SignupError::InvalidCatalog(format!(
                    "add-on `{}` has an empty title",
                    addon.id
                )));
            }
        }
        Ok(Self { plans, addons })
    }

    /// Parses a catalog from its JSON representation and validates it.
    pub fn from_json(data: &str) -> Result<Self, SignupError> {
        let raw: Catalog = serde_json::from_str(data)?;
        Self::new(raw.plans, raw.addons)
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn addons(&self) -> &[AddOn] {
        &self.addons
    }

    pub fn plan(&self, id: &str) -> Result<&Plan, SignupError> {
        self.plans
            .iter()
            .find(|plan| plan.id == id)
            .ok_or_else(|| SignupError::UnknownPlan(id.to_string()))
    }

    pub fn addon(&self, id: &str) -> Result<&AddOn, SignupError> {
        self.addons
            .iter()
            .find(|addon| addon.id == id)
            .ok_or_else(|| SignupError::UnknownAddon(id.to_string()))
    }
}

impl Default for Catalog {
    /// The built-in offering used when no catalog file overrides it.
    fn default() -> Self {
        Self {
            plans: vec![
                Plan {
                    id: "basic".into(),
                    monthly_price: 9,
                },
                Plan {
                    id: "standard".into(),
                    monthly_price: 12,
                },
                Plan {
                    id: "premium".into(),
                    monthly_price: 15,
                },
            ],
            addons: vec![
                AddOn {
                    id: "backup".into(),
                    title: "Backup Storage".into(),
                    monthly_price: 2,
                },
                AddOn {
                    id: "priority".into(),
                    title: "Priority Support".into(),
                    monthly_price: 1,
                },
                AddOn {
                    id: "themes".into(),
                    title: "Custom Themes".into(),
                    monthly_price: 2,
                },
            ],
        }
    }
}

fn check_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), SignupError> {
    let mut seen = Vec::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(SignupError::InvalidCatalog(format!(
                "{kind} with an empty identifier"
            )));
        }
        if seen.contains(&id) {
            return Err(SignupError::InvalidCatalog(format!(
                "duplicate {kind} identifier `{id}`"
            )));
        }
        seen.push(id);
    }
    Ok(())
}
