//! Compound growth with periodic contributions.
//!
//! One engine drives both the retirement projection (one contribution per
//! year, indexed by age) and the investment projection (one contribution per
//! month, indexed by year). Each period the balance earns the periodic rate and
//! then receives the contribution:
//!
//! $balance_{i} = balance_{i-1} \cdot (1 + rate) + contribution$
//!
//! Balances accumulate in full precision; only the emitted [`PeriodEntry`]
//! values are rounded to whole units.
use serde::{Deserialize, Serialize};

use crate::{
    EngineError, ResultEngine,
    util::{ensure_finite, ensure_non_negative, whole_units},
};

/// Longest accepted horizon, in periods (150 years of monthly periods).
pub const MAX_PERIODS: u32 = 1_800;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionFrequency {
    Monthly,
    Annual,
}

impl ContributionFrequency {
    #[must_use]
    pub const fn periods_per_year(self) -> u32 {
        match self {
            ContributionFrequency::Monthly => 12,
            ContributionFrequency::Annual => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowthParameters {
    pub initial_balance: f64,
    pub periodic_contribution: f64,
    pub annual_rate_percent: f64,
    pub num_periods: u32,
    pub frequency: ContributionFrequency,
}

impl GrowthParameters {
    #[must_use]
    pub fn periodic_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / f64::from(self.frequency.periods_per_year())
    }

    fn validate(&self) -> ResultEngine<()> {
        ensure_non_negative(self.initial_balance, "initial balance")?;
        ensure_non_negative(self.periodic_contribution, "contribution")?;
        ensure_finite(self.annual_rate_percent, "annual rate")?;
        if self.num_periods == 0 {
            return Err(EngineError::InvalidParameter(
                "number of periods must be greater than 0".to_string(),
            ));
        }
        if self.num_periods > MAX_PERIODS {
            return Err(EngineError::InvalidParameter(format!(
                "number of periods must be at most {MAX_PERIODS}"
            )));
        }
        if self.periodic_rate() <= -1.0 {
            return Err(EngineError::InvalidParameter(format!(
                "annual rate {}% would wipe out the balance",
                self.annual_rate_percent
            )));
        }
        Ok(())
    }

    /// Whether `period` appears in the emitted series.
    fn samples(&self, period: u32) -> bool {
        match self.frequency {
            ContributionFrequency::Annual => true,
            ContributionFrequency::Monthly => period % 12 == 0 || period == self.num_periods,
        }
    }

    /// Period number for annual engines, elapsed years for monthly ones. A
    /// trailing partial year counts as the year it falls in.
    fn default_index(&self, period: u32) -> u32 {
        period.div_ceil(self.frequency.periods_per_year())
    }
}

/// One point of a growth series, rounded to whole units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeriodEntry {
    /// Age or year, depending on the call-site.
    pub index: u32,
    pub balance: f64,
    pub cumulative_contributions: f64,
    pub growth: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowthSchedule {
    pub final_balance: f64,
    pub total_contributions: f64,
    pub total_growth: f64,
    pub entries: Vec<PeriodEntry>,
}

/// Projects compound growth with the default index of the frequency.
pub fn project(params: &GrowthParameters) -> ResultEngine<GrowthSchedule> {
    project_indexed(params, |period| params.default_index(period))
}

/// Projects compound growth, labelling each emitted period with `index_of(period)`.
pub fn project_indexed<F>(params: &GrowthParameters, index_of: F) -> ResultEngine<GrowthSchedule>
where
    F: Fn(u32) -> u32,
{
    params.validate()?;

    let rate = params.periodic_rate();
    let mut balance = params.initial_balance;
    let mut contributions = params.initial_balance;
    let mut entries = Vec::new();

    for period in 0..=params.num_periods {
        if period > 0 {
            balance = balance * (1.0 + rate) + params.periodic_contribution;
            contributions += params.periodic_contribution;
        }
        if params.samples(period) {
            entries.push(PeriodEntry {
                index: index_of(period),
                balance: whole_units(balance),
                cumulative_contributions: whole_units(contributions),
                growth: whole_units(balance - contributions),
            });
        }
    }

    tracing::debug!(
        "projected {} {:?} periods at {rate}: final balance {balance}",
        params.num_periods,
        params.frequency
    );

    Ok(GrowthSchedule {
        final_balance: balance,
        total_contributions: contributions,
        total_growth: balance - contributions,
        entries,
    })
}

/// Future value of `payment` deposited at the start of every month for
/// `years`, compounding monthly.
///
/// Returns `payment * months` when the rate is zero. The growth factor goes
/// through `ln_1p`/`exp_m1`, so rates too small to change `1.0 + r` converge to
/// the same value.
#[must_use]
pub fn future_value_of_annuity_due(payment: f64, annual_rate_percent: f64, years: f64) -> f64 {
    let rate = annual_rate_percent / 100.0 / 12.0;
    let months = years * 12.0;
    if rate == 0.0 {
        return payment * months;
    }
    payment * ((months * rate.ln_1p()).exp_m1() / rate) * (1.0 + rate)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RetirementParameters {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_savings: f64,
    pub annual_contribution: f64,
    pub expected_return_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RetirementProjection {
    pub years: u32,
    #[serde(flatten)]
    pub schedule: GrowthSchedule,
}

/// Yearly contributions until retirement, one entry per age.
pub fn retirement(params: &RetirementParameters) -> ResultEngine<RetirementProjection> {
    if params.retirement_age <= params.current_age {
        return Err(EngineError::InvalidParameter(
            "retirement age must be greater than current age".to_string(),
        ));
    }
    let years = params.retirement_age - params.current_age;
    let growth = GrowthParameters {
        initial_balance: params.current_savings,
        periodic_contribution: params.annual_contribution,
        annual_rate_percent: params.expected_return_percent,
        num_periods: years,
        frequency: ContributionFrequency::Annual,
    };
    let schedule = project_indexed(&growth, |period| params.current_age + period)?;
    Ok(RetirementProjection { years, schedule })
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvestmentParameters {
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub years: u32,
    pub annual_return_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    pub years: u32,
    #[serde(flatten)]
    pub schedule: GrowthSchedule,
}

/// Monthly contributions with monthly compounding, sampled once per year.
pub fn investment(params: &InvestmentParameters) -> ResultEngine<InvestmentProjection> {
    if params.years == 0 {
        return Err(EngineError::InvalidParameter(
            "investment horizon must be at least 1 year".to_string(),
        ));
    }
    let num_periods = params.years.checked_mul(12).ok_or_else(|| {
        EngineError::InvalidParameter("investment horizon is too long".to_string())
    })?;
    let growth = GrowthParameters {
        initial_balance: params.initial_investment,
        periodic_contribution: params.monthly_contribution,
        annual_rate_percent: params.annual_return_percent,
        num_periods,
        frequency: ContributionFrequency::Monthly,
    };
    let schedule = project(&growth)?;
    Ok(InvestmentProjection {
        years: params.years,
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        initial: f64,
        contribution: f64,
        rate: f64,
        periods: u32,
        frequency: ContributionFrequency,
    ) -> GrowthParameters {
        GrowthParameters {
            initial_balance: initial,
            periodic_contribution: contribution,
            annual_rate_percent: rate,
            num_periods: periods,
            frequency,
        }
    }

    #[test]
    fn annual_engine_emits_every_period() {
        let schedule = project(&params(100.0, 10.0, 10.0, 3, ContributionFrequency::Annual)).unwrap();
        let indices: Vec<_> = schedule.entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(schedule.entries[1].balance, 120.0);
        assert_eq!(schedule.entries[1].cumulative_contributions, 110.0);
        assert_eq!(schedule.entries[1].growth, 10.0);
        assert!((schedule.final_balance - 166.2).abs() < 1e-9);
        assert_eq!(schedule.total_contributions, 130.0);
    }

    #[test]
    fn monthly_engine_samples_yearly_plus_final() {
        let schedule = project(&params(0.0, 100.0, 6.0, 30, ContributionFrequency::Monthly)).unwrap();
        let indices: Vec<_> = schedule.entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(schedule.entries[3].cumulative_contributions, 3000.0);
    }

    #[test]
    fn pure_compounding_without_contributions() {
        for (rate, periods, frequency) in [
            (5.0, 10, ContributionFrequency::Annual),
            (7.5, 240, ContributionFrequency::Monthly),
            (-20.0, 5, ContributionFrequency::Annual),
        ] {
            let p = params(2_500.0, 0.0, rate, periods, frequency);
            let schedule = project(&p).unwrap();
            let expected = 2_500.0 * (1.0 + p.periodic_rate()).powi(periods as i32);
            assert!((schedule.final_balance - expected).abs() <= expected * 1e-12);
            assert_eq!(schedule.total_contributions, 2_500.0);
        }
    }

    #[test]
    fn zero_rate_grows_by_contributions_only() {
        let schedule = project(&params(50.0, 25.0, 0.0, 4, ContributionFrequency::Annual)).unwrap();
        assert_eq!(schedule.final_balance, 150.0);
        assert_eq!(schedule.total_growth, 0.0);
    }

    #[test]
    fn rejects_out_of_domain_parameters() {
        use ContributionFrequency::*;
        assert!(project(&params(100.0, 0.0, 5.0, 0, Annual)).is_err());
        assert!(project(&params(-1.0, 0.0, 5.0, 3, Annual)).is_err());
        assert!(project(&params(1.0, -1.0, 5.0, 3, Annual)).is_err());
        assert!(project(&params(1.0, 1.0, -100.0, 3, Annual)).is_err());
        assert!(project(&params(1.0, 1.0, -1200.0, 3, Monthly)).is_err());
        assert!(project(&params(1.0, 1.0, f64::INFINITY, 3, Monthly)).is_err());
        assert!(project(&params(1.0, 1.0, 5.0, MAX_PERIODS + 1, Monthly)).is_err());
        assert!(project(&params(1.0, 1.0, -99.0, 3, Annual)).is_ok());
    }

    #[test]
    fn retirement_is_indexed_by_age() {
        let projection = retirement(&RetirementParameters {
            current_age: 30,
            retirement_age: 65,
            current_savings: 50_000.0,
            annual_contribution: 6_000.0,
            expected_return_percent: 7.0,
        })
        .unwrap();
        assert_eq!(projection.years, 35);
        assert_eq!(projection.schedule.entries.len(), 36);
        assert_eq!(projection.schedule.entries[0].index, 30);
        assert_eq!(projection.schedule.entries[35].index, 65);
        assert_eq!(projection.schedule.total_contributions, 260_000.0);
        assert!((projection.schedule.final_balance - 1_363_250.34).abs() < 0.01);
    }

    #[test]
    fn retirement_requires_future_retirement_age() {
        let mut p = RetirementParameters {
            current_age: 40,
            retirement_age: 40,
            current_savings: 0.0,
            annual_contribution: 0.0,
            expected_return_percent: 5.0,
        };
        assert!(retirement(&p).is_err());
        p.retirement_age = 30;
        assert!(retirement(&p).is_err());
    }

    #[test]
    fn investment_reference_figures() {
        let projection = investment(&InvestmentParameters {
            initial_investment: 10_000.0,
            monthly_contribution: 500.0,
            years: 20,
            annual_return_percent: 8.0,
        })
        .unwrap();
        let schedule = &projection.schedule;
        assert_eq!(schedule.entries.len(), 21);
        assert_eq!(schedule.entries[1].index, 1);
        assert_eq!(schedule.entries[1].balance, 17_055.0);
        assert_eq!(schedule.entries[20].index, 20);
        assert_eq!(schedule.total_contributions, 130_000.0);
        assert!((schedule.final_balance - 343_778.24).abs() < 0.01);
        assert_eq!(schedule.entries[20].balance, 343_778.0);
    }

    #[test]
    fn investment_requires_horizon() {
        assert!(
            investment(&InvestmentParameters {
                initial_investment: 1.0,
                monthly_contribution: 1.0,
                years: 0,
                annual_return_percent: 5.0,
            })
            .is_err()
        );
    }

    #[test]
    fn annuity_due_closed_form() {
        assert_eq!(future_value_of_annuity_due(100.0, 0.0, 2.0), 2_400.0);
        let fv = future_value_of_annuity_due(1_000.0, 5.0, 10.0);
        assert!((fv - 155_929.29).abs() < 0.01);
    }

    #[test]
    fn annuity_due_with_negligible_rate() {
        let fv = future_value_of_annuity_due(1_000.0, 1e-14, 1.0);
        assert!((fv - 12_000.0).abs() < 1e-6);
    }

    #[test]
    fn projection_serializes_flat() {
        let projection = retirement(&RetirementParameters {
            current_age: 64,
            retirement_age: 65,
            current_savings: 100.0,
            annual_contribution: 0.0,
            expected_return_percent: 0.0,
        })
        .unwrap();
        let json = serde_json::to_value(&projection).unwrap();
        assert_eq!(json["years"], 1);
        assert_eq!(json["final_balance"], 100.0);
        assert_eq!(json["entries"][1]["index"], 65);
    }
}
