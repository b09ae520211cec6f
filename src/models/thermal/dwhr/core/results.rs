//! Per-draw and per-series results.

use crate::support::units::BTU_PER_THERM;

use super::{Configuration, FixtureSummary};

/// Derived values for one draw in one configuration.
///
/// Units: flows gal/min, rates Btu/min, heat Btu, temperatures °F.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawResult {
    /// Device effectiveness (rated effectiveness times the map correction).
    ///
    /// May slightly exceed 1 where the correction factor does.
    pub effectiveness: f64,

    /// Flow through the device's cold side.
    pub cold_side_flow: f64,

    /// Heat recovery rate.
    pub heat_recovery_rate: f64,

    /// Heat recovered over the draw.
    pub heat_recovered: f64,

    /// Cold-side outlet temperature, solved only for [`Configuration::UnequalFixture`].
    pub cold_side_outlet_temperature: Option<f64>,
}

/// Heat recovered over a draw series, in therms.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfileSavings {
    /// Savings in the [`Configuration::Equal`] arrangement.
    pub savings_equal: f64,

    /// Savings in the [`Configuration::UnequalWaterHeater`] arrangement.
    pub savings_unequal_water_heater: f64,

    /// Savings in the [`Configuration::UnequalFixture`] arrangement.
    pub savings_unequal_fixture: f64,
}

impl ProfileSavings {
    /// Sums per-draw heat (Btu) into therm totals.
    pub(super) fn from_results(
        equal: &[DrawResult],
        unequal_water_heater: &[DrawResult],
        unequal_fixture: &[DrawResult],
    ) -> Self {
        let therms = |results: &[DrawResult]| {
            results.iter().map(|r| r.heat_recovered).sum::<f64>() / BTU_PER_THERM
        };
        Self {
            savings_equal: therms(equal),
            savings_unequal_water_heater: therms(unequal_water_heater),
            savings_unequal_fixture: therms(unequal_fixture),
        }
    }

    /// Returns the savings for one configuration.
    #[must_use]
    pub fn get(&self, configuration: Configuration) -> f64 {
        match configuration {
            Configuration::Equal => self.savings_equal,
            Configuration::UnequalWaterHeater => self.savings_unequal_water_heater,
            Configuration::UnequalFixture => self.savings_unequal_fixture,
        }
    }
}

/// Everything computed for one draw series.
///
/// Per-draw vectors are indexed like the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesResults {
    /// Per-draw results for [`Configuration::Equal`].
    pub equal: Vec<DrawResult>,

    /// Per-draw results for [`Configuration::UnequalWaterHeater`].
    pub unequal_water_heater: Vec<DrawResult>,

    /// Per-draw results for [`Configuration::UnequalFixture`], the last
    /// fixture solver estimates.
    pub unequal_fixture: Vec<DrawResult>,

    /// How the fixture solver finished.
    pub fixture: FixtureSummary,

    /// Therm totals per configuration.
    pub savings: ProfileSavings,

    /// Heat that a perfect device would recover, Btu.
    ///
    /// `Σ volume · ρ · c_p · (T_drain − T_mains)` over all draws.
    pub available_heat: f64,
}

impl SeriesResults {
    /// Returns the per-draw results for one configuration.
    #[must_use]
    pub fn results(&self, configuration: Configuration) -> &[DrawResult] {
        match configuration {
            Configuration::Equal => &self.equal,
            Configuration::UnequalWaterHeater => &self.unequal_water_heater,
            Configuration::UnequalFixture => &self.unequal_fixture,
        }
    }

    /// Returns the available heat in therms.
    #[must_use]
    pub fn available_therms(&self) -> f64 {
        self.available_heat / BTU_PER_THERM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn result(heat_recovered: f64) -> DrawResult {
        DrawResult {
            effectiveness: 0.4,
            cold_side_flow: 1.0,
            heat_recovery_rate: heat_recovered,
            heat_recovered,
            cold_side_outlet_temperature: None,
        }
    }

    #[test]
    fn sums_btu_into_therms() {
        let equal = [result(60_000.0), result(40_000.0)];
        let heater = [result(25_000.0)];
        let savings = ProfileSavings::from_results(&equal, &heater, &[]);

        assert_relative_eq!(savings.get(Configuration::Equal), 1.0);
        assert_relative_eq!(savings.get(Configuration::UnequalWaterHeater), 0.25);
        assert_eq!(savings.get(Configuration::UnequalFixture), 0.0);
    }
}
