//! Billing cycle and period price arithmetic.
//!
//! Yearly pricing is a flat 10x of the monthly base, which bakes in the
//! advertised two-months-free discount rather than multiplying by 12.

use std::fmt;

const YEARLY_MULTIPLIER: u32 = 10;

/// Monthly or yearly pricing mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn from_yearly(yearly: bool) -> Self {
        if yearly {
            BillingCycle::Yearly
        } else {
            BillingCycle::Monthly
        }
    }

    pub fn is_yearly(self) -> bool {
        matches!(self, BillingCycle::Yearly)
    }

    /// Price of a plan or add-on under this cycle, from its monthly base.
    pub fn period_price(self, monthly_price: u32) -> u32 {
        match self {
            BillingCycle::Monthly => monthly_price,
            BillingCycle::Yearly => monthly_price * YEARLY_MULTIPLIER,
        }
    }

    /// Short unit used in price texts: `mo` / `yr`.
    pub fn suffix(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "mo",
            BillingCycle::Yearly => "yr",
        }
    }

    /// Noun used in the total label: `month` / `year`.
    pub fn period_noun(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "month",
            BillingCycle::Yearly => "year",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingCycle::Monthly => write!(f, "Monthly"),
            BillingCycle::Yearly => write!(f, "Yearly"),
        }
    }
}

/// `$15/mo`, `$150/yr`: plan cards and summary lines.
pub fn format_price(monthly_price: u32, cycle: BillingCycle) -> String {
    format!("${}/{}", cycle.period_price(monthly_price), cycle.suffix())
}

/// `+$2/mo`, `+$20/yr`: add-on rows and summary line items.
pub fn format_addon_price(monthly_price: u32, cycle: BillingCycle) -> String {
    format!("+{}", format_price(monthly_price, cycle))
}
