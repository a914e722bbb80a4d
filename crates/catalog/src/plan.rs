//! Plans and their phases.

use serde::{Deserialize, Serialize};

use planbook_core::{Entity, ValueObject};

use crate::price::InternationalPrice;
use crate::product::Product;
use crate::usage::Usage;

/// Billing cadence of a recurring charge or a usage section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingPeriod {
    Daily,
    Weekly,
    Biweekly,
    ThirtyDays,
    Monthly,
    Quarterly,
    Biannual,
    Annual,
    Biennial,
    NoBillingPeriod,
}

impl BillingPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            BillingPeriod::Daily => "DAILY",
            BillingPeriod::Weekly => "WEEKLY",
            BillingPeriod::Biweekly => "BIWEEKLY",
            BillingPeriod::ThirtyDays => "THIRTY_DAYS",
            BillingPeriod::Monthly => "MONTHLY",
            BillingPeriod::Quarterly => "QUARTERLY",
            BillingPeriod::Biannual => "BIANNUAL",
            BillingPeriod::Annual => "ANNUAL",
            BillingPeriod::Biennial => "BIENNIAL",
            BillingPeriod::NoBillingPeriod => "NO_BILLING_PERIOD",
        }
    }
}

impl core::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseType {
    Trial,
    Discount,
    #[serde(rename = "FIXEDTERM")]
    FixedTerm,
    Evergreen,
}

impl PhaseType {
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseType::Trial => "TRIAL",
            PhaseType::Discount => "DISCOUNT",
            PhaseType::FixedTerm => "FIXEDTERM",
            PhaseType::Evergreen => "EVERGREEN",
        }
    }
}

impl core::fmt::Display for PhaseType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeUnit {
    Days,
    Weeks,
    Months,
    Years,
    Unlimited,
}

/// Length of a phase. `UNLIMITED` phases conventionally carry `number = -1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    pub unit: TimeUnit,
    pub number: i32,
}

impl Duration {
    pub fn new(unit: TimeUnit, number: i32) -> Self {
        Self { unit, number }
    }

    pub fn unlimited() -> Self {
        Self::new(TimeUnit::Unlimited, -1)
    }
}

impl ValueObject for Duration {}

/// One-off charge at the start of a phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixed {
    #[serde(default)]
    pub price: Option<InternationalPrice>,
}

/// Recurring charge billed every `billing_period` while the phase lasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurring {
    pub billing_period: BillingPeriod,
    #[serde(default)]
    pub recurring_price: Option<InternationalPrice>,
}

/// A stage of a plan (trial, discount, evergreen, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPhase {
    pub phase_type: PhaseType,
    pub duration: Duration,
    #[serde(default)]
    pub fixed: Option<Fixed>,
    #[serde(default)]
    pub recurring: Option<Recurring>,
    #[serde(default)]
    pub usages: Vec<Usage>,
}

impl PlanPhase {
    pub fn new(phase_type: PhaseType, duration: Duration) -> Self {
        Self {
            phase_type,
            duration,
            fixed: None,
            recurring: None,
            usages: Vec::new(),
        }
    }

    pub fn with_fixed(mut self, price: InternationalPrice) -> Self {
        self.fixed = Some(Fixed { price: Some(price) });
        self
    }

    pub fn with_recurring(mut self, billing_period: BillingPeriod, price: InternationalPrice) -> Self {
        self.recurring = Some(Recurring {
            billing_period,
            recurring_price: Some(price),
        });
        self
    }

    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usages.push(usage);
        self
    }

    /// Recurring prices of this phase, if it has a priced recurring component.
    pub fn recurring_price(&self) -> Option<&InternationalPrice> {
        self.recurring.as_ref()?.recurring_price.as_ref()
    }

    /// Fixed prices of this phase, if it has a priced fixed component.
    pub fn fixed_price(&self) -> Option<&InternationalPrice> {
        self.fixed.as_ref()?.price.as_ref()
    }
}

/// A named combination of a product and an ordered sequence of phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    name: String,
    product: Product,
    recurring_billing_period: BillingPeriod,
    phases: Vec<PlanPhase>,
}

impl Plan {
    /// Build a plan. The plan's billing period is the one of its final
    /// phase's recurring component, or `NO_BILLING_PERIOD` without one.
    pub fn new(name: impl Into<String>, product: Product, phases: Vec<PlanPhase>) -> Self {
        let recurring_billing_period = phases
            .last()
            .and_then(|p| p.recurring.as_ref())
            .map(|r| r.billing_period)
            .unwrap_or(BillingPeriod::NoBillingPeriod);

        Self {
            name: name.into(),
            product,
            recurring_billing_period,
            phases,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn recurring_billing_period(&self) -> BillingPeriod {
        self.recurring_billing_period
    }

    /// All phases, in declared order.
    pub fn phases(&self) -> &[PlanPhase] {
        &self.phases
    }
}

impl Entity for Plan {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}
