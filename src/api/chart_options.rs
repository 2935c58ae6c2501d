use serde::{Deserialize, Deserializer, Serialize};

use crate::legend::{LegendOptions, LegendOverrides};

/// Chart-level option tree read by the legend controllers.
///
/// `secondary_legend` is a partial record merged onto the library legend
/// defaults (not onto `legend`). `None` disables the secondary legend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    pub legend: LegendOptions,
    #[serde(
        deserialize_with = "deserialize_secondary_legend",
        skip_serializing_if = "Option::is_none"
    )]
    pub secondary_legend: Option<LegendOverrides>,
}

impl ChartOptions {
    #[must_use]
    pub fn with_legend(mut self, legend: LegendOptions) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_secondary_legend(mut self, overrides: LegendOverrides) -> Self {
        self.secondary_legend = Some(overrides);
        self
    }
}

/// Accepts an override object, `true` (defaults only), or `false`/`null`.
fn deserialize_secondary_legend<'de, D>(deserializer: D) -> Result<Option<LegendOverrides>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SecondaryLegendField {
        Toggle(bool),
        Overrides(LegendOverrides),
    }

    Ok(
        match Option::<SecondaryLegendField>::deserialize(deserializer)? {
            None | Some(SecondaryLegendField::Toggle(false)) => None,
            Some(SecondaryLegendField::Toggle(true)) => Some(LegendOverrides::default()),
            Some(SecondaryLegendField::Overrides(overrides)) => Some(overrides),
        },
    )
}
