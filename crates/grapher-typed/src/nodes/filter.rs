//! Two-cutoff filter.

use crate::{plugin_enum, plugin_node};

plugin_enum! {
    /// Filter response.
    pub enum FilterType {
        /// Passes content below `lowCutoff`.
        LowPass => "lowPass",
        /// Passes content above `highCutoff`.
        HighPass => "highPass",
        /// Passes content between the two cutoffs.
        BandPass => "bandPass",
    }
}

plugin_node! {
    /// Filters its input between two automatable cutoff frequencies.
    pub struct FilterNode {
        kind: "com.nativeformat.plugin.eq.filter",
        config: FilterConfig {
            /// Response shape.
            filter_type: FilterType => "filterType" = FilterType::BandPass,
        },
        params {
            /// Lower cutoff in Hz.
            low_cutoff => "lowCutoff" = 0.0,
            /// Upper cutoff in Hz.
            high_cutoff => "highCutoff" = 22050.0,
        },
        inputs: ["audio": Audio],
        outputs: ["audio": Audio],
    }
}
