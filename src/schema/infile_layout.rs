//! Layout of the Fortran infile SOG reads on stdin.
//!
//! SOG's input processor reads parameters positionally, so the infile must
//! list keys in exactly the order below. Some parameters select further
//! keys that are only present in the infile for particular values:
//!
//! - Conditional keys follow their parent immediately, e.g.
//!   `vary%wind%enabled = .true.` brings in `vary%wind%fixed`, which in turn
//!   brings in either `vary%wind%value` or the shift/fraction/addition trio.
//! - Average/historical forcing keys precede the forcing file they go with,
//!   selected by the value of `use average/hist forcing`.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Keys written for every run, in the order SOG reads them.
pub static INFILE_KEY_ORDER: &[&str] = &[
    "latitude", "maxdepth", "gridsize", "lambda", "init datetime", "end datetime", "dt",
    "chem_dt", "max_iter", "vary%wind%enabled", "vary%cf%enabled", "vary%rivers%enabled",
    "vary%temperature%enabled", "N2chl", "pCO2_atm", "ctd_in", "nuts_in", "botl_in",
    "chem_in", "initial chl split", "std_phys_ts_out", "user_phys_ts_out",
    "std_bio_ts_out", "user_bio_ts_out", "std_chem_ts_out", "user_chem_ts_out", "noprof",
    "profday", "proftime", "haloclinefile", "profile_base", "user_profile_base",
    "Hoffmueller file", "user Hoffmueller file", "Hoffmueller start yr",
    "Hoffmueller start day", "Hoffmueller start sec", "Hoffmueller end yr",
    "Hoffmueller end day", "Hoffmueller end sec", "Hoffmueller interval", "temp_constant",
    "salinity", "temperature", "Phytoplankton", "Nitrate", "Silicon", "DIC", "Oxy", "Alk",
    "Ammonium", "Ratio", "Lx", "Ly", "openEnd", "nu_w_m", "nu_w_s", "shear smooth",
    "upwell_const", "d", "Qbar", "F_SOG", "F_RI", "Fw_scale", "Fw_surface", "Fw_depth",
    "use_Fw_nutrients", "northern_return_flow_on", "cbottom", "calpha", "calpha2",
    "cbeta", "cgamma", "river_Alk_0", "river_Alk_decay", "pH_riv", "ialpha", "ibeta",
    "igamma", "isigma", "itheta", "idl", "biology", "flagellates_on", "remineralization",
    "use microzooplankton", "single species light", "Mesozoo, winter conc",
    "Mesozoo, summer conc", "Mesozoo, summer peak mag", "Mesozoo, summer peak pos",
    "Mesozoo, summer peak wid", "Mesozoo, max ingestion", "Mesozoo, assimil. eff",
    "Mesozoo, nat mort", "Mesozoo, excretion", "Mesozoo, pred slope", "Mesozoo, half-sat",
    "Mesozoo, pref for diatoms", "Mesozoo, micro pred slope", "Mesozoo, micro half-sat",
    "Mesozoo, pref for nano", "Mesozoo, nano pred slope", "Mesozoo, nano half-sat",
    "Mesozoo, pref for pico", "Mesozoo, pico pred slope", "Mesozoo, pico half-sat",
    "Mesozoo, pref for PON", "Mesozoo, PON pred slope", "Mesozoo, PON half-sat",
    "Mesozoo, pref for uZoo", "Mesozoo, uZoo pred slope", "Mesozoo, uZoo half-sat",
    "Mesorub, max ingestion", "Mesorub, assimilation eff", "Mesorub, nano predslope",
    "Mesorub, nano half-sat", "Microzoo, max ingestion", "Microzoo, assimil. eff",
    "Microzoo, nat mort", "Microzoo, excretion", "Microzoo, pred slope",
    "Microzoo, half-sat", "Microzoo, pref for Pico", "uzoo, Pico pred slope",
    "uzoo, Pico half-sat", "Microzoo, pref for Micro", "uzoo, Micro pred slope",
    "Microzoo, Micro half-sat", "Microzoo, pref for nano", "Microzoo, nano pred slope",
    "Microzoo, nano half-sat", "Microzoo, pref for PON", "Microzoo, PON pred slope",
    "Microzoo, PON half-sat", "Microzoo, pref for uZoo", "Microzoo, uZoo pred slope",
    "Microzoo, uZoo half-sat", "Micro, max growth", "Nano, max growth",
    "Pico, max growth", "Micro, I_opt", "Nano, I_opt", "Pico, I_opt", "Micro, max temp",
    "Nano, max temp", "Pico, max temp", "Micro, temp range", "Nano, temp range",
    "Pico, temp range", "Micro, Q10 exp", "Nano, Q10 exp", "Pico, Q10 exp",
    "Micro, gamma loss", "Nano, gamma loss", "Pico, gamma loss", "Micro, NO3 k",
    "Nano, NO3 k", "Pico, NO3 k", "Micro, kapa", "Nano, kapa", "Pico, kapa",
    "Micro, NH inhib", "Nano, NH inhib", "Pico, NH inhib", "Micro, N_o", "Nano, N_o",
    "Pico, N_o", "Micro, N_x", "Nano, N_x", "Pico, N_x", "Micro, Si ratio",
    "Nano, Si ratio", "Pico, Si ratio", "Micro, K Si", "Nano, K Si", "Pico, K Si",
    "Micro, nat mort", "Nano, nat mort", "Pico, nat mort", "NH remin rate",
    "DON remin rate", "PON remin rate", "bSi remin rate", "Waste, dnm, NH",
    "Waste, dnm, DON", "Waste, dnm, PON", "Waste, dnm, Ref", "Waste, dnm, Bsi",
    "Waste, nnm, NH", "Waste, nnm, DON", "Waste, nnm, PON", "Waste, nnm, Ref",
    "Waste, nnm, Bsi", "Waste, fnm, NH", "Waste, fnm, DON", "Waste, fnm, PON",
    "Waste, fnm, Ref", "Waste, fnm, Bsi", "Waste, mnm, NH", "Waste, mnm, DON",
    "Waste, mnm, PON", "Waste, mnm, Ref", "Waste, mnm, Bsi", "Waste, mex, NH",
    "Waste, mex, DON", "Waste, mex, PON", "Waste, mex, Ref", "Waste, mex, Bsi",
    "Waste, znm, NH", "Waste, znm, DON", "Waste, znm, PON", "Waste, znm, Ref",
    "Waste, znm, Bsi", "Waste, zex, NH", "Waste, zex, DON", "Waste, zex, PON",
    "Waste, zex, Ref", "Waste, zex, Bsi", "Waste, dem, NH", "Waste, dem, DON",
    "Waste, dem, PON", "Waste, dem, Ref", "Waste, dem, Bsi", "Waste, nem, NH",
    "Waste, nem, DON", "Waste, nem, PON", "Waste, nem, Ref", "Waste, nem, Bsi",
    "Waste, fem, NH", "Waste, fem, DON", "Waste, fem, PON", "Waste, fem, Ref",
    "Waste, fem, Bsi", "Waste, pem, NH", "Waste, pem, DON", "Waste, pem, PON",
    "Waste, pem, Ref", "Waste, pem, Bsi", "Waste, zem, NH", "Waste, zem, DON",
    "Waste, zem, PON", "Waste, zem, Ref", "Waste, zem, Bsi", "Waste, dez, NH",
    "Waste, dez, DON", "Waste, dez, PON", "Waste, dez, Ref", "Waste, dez, Bsi",
    "Waste, nez, NH", "Waste, nez, DON", "Waste, nez, PON", "Waste, nez, Ref",
    "Waste, nez, Bsi", "Waste, fez, NH", "Waste, fez, DON", "Waste, fez, PON",
    "Waste, fez, Ref", "Waste, fez, Bsi", "Waste, pez, NH", "Waste, pez, DON",
    "Waste, pez, PON", "Waste, pez, Ref", "Waste, pez, Bsi", "Waste, zez, NH",
    "Waste, zez, DON", "Waste, zez, PON", "Waste, zez, Ref", "Waste, zez, Bsi",
    "Waste, fen, NH", "Waste, fen, DON", "Waste, fen, PON", "Waste, fen, Ref",
    "Waste, fen, Bsi", "Micro min sink rate", "Micro max sink rate", "PON sink rate",
    "refr sink rate", "bSi sink rate", "years of forcing data",
    "use average/hist forcing", "wind", "air temp", "cloud", "humidity", "major river",
    "use river temp", "river nutrients file", "minor river", "alt minor river",
    "minor river integ days",
];

/// Trigger parameter for the average/historical forcing keys.
pub const AVG_HIST_TRIGGER: &str = "use average/hist forcing";

/// `use average/hist forcing` values that bring in the average/historical file keys.
const AVG_HIST_ENABLING_VALUES: &[&str] = &["yes", "fill", "histfill"];

/// Forcing quantities that have an average/historical data file.
const AVG_HIST_QUANTITIES: &[&str] = &[
    "wind",
    "air temp",
    "cloud",
    "humidity",
    "major river",
    "minor river",
];

/// Quantities that `vary%<name>%enabled` can perturb.
const VARIED_QUANTITIES: &[&str] = &["wind", "cf", "rivers", "temperature"];

const NORTHERN_RETURN_FLOW_KEYS: &[&str] = &[
    "strength_northern",
    "tau_northern",
    "depth_northern",
    "upper_northern",
    "lower_northern",
    "power_northern",
    "normal_northern",
];

/// Keys written ahead of a forcing key, chosen by the trigger's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvgHistForcing {
    pub trigger: String,
    /// Trigger value (quotes stripped) -> keys to write.
    pub keys: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfileLayout {
    pub key_order: Vec<String>,
    /// Parent key -> parent's infile value -> keys written right after it.
    pub extra_keys: HashMap<String, HashMap<String, Vec<String>>>,
    /// Forcing key -> average/historical keys written right before it.
    pub avg_hist_forcing_keys: HashMap<String, AvgHistForcing>,
}

impl InfileLayout {
    /// A layout with no conditional or average/historical keys.
    pub fn ordered<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key_order: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_extra_keys(mut self, parent: &str, value: &str, keys: &[&str]) -> Self {
        self.extra_keys
            .entry(parent.to_string())
            .or_default()
            .insert(value.to_string(), keys.iter().map(ToString::to_string).collect());
        self
    }

    pub fn with_avg_hist_keys(mut self, key: &str, trigger: &str, value: &str, keys: &[&str]) -> Self {
        let entry = self
            .avg_hist_forcing_keys
            .entry(key.to_string())
            .or_insert_with(|| AvgHistForcing {
                trigger: trigger.to_string(),
                keys: HashMap::new(),
            });
        entry
            .keys
            .insert(value.to_string(), keys.iter().map(ToString::to_string).collect());
        self
    }

    /// Children of `key` for the given parent value; empty when none registered.
    pub fn extra_keys_for(&self, key: &str, value: &str) -> &[String] {
        self.extra_keys
            .get(key)
            .and_then(|by_value| by_value.get(value))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every key the layout can ever write.
    pub fn all_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.key_order.iter().map(String::as_str).collect();
        for by_value in self.extra_keys.values() {
            keys.extend(by_value.values().flatten().map(String::as_str));
        }
        for forcing in self.avg_hist_forcing_keys.values() {
            keys.extend(forcing.keys.values().flatten().map(String::as_str));
        }
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

fn build_sog_layout() -> InfileLayout {
    let mut layout = InfileLayout::ordered(INFILE_KEY_ORDER.iter().copied());

    for quantity in VARIED_QUANTITIES {
        let enabled = format!("vary%{quantity}%enabled");
        let fixed = format!("vary%{quantity}%fixed");
        let value = format!("vary%{quantity}%value");
        let shift = format!("vary%{quantity}%shift");
        let fraction = format!("vary%{quantity}%fraction");
        let addition = format!("vary%{quantity}%addition");
        layout = layout
            .with_extra_keys(&enabled, ".true.", &[fixed.as_str()])
            .with_extra_keys(&enabled, ".false.", &[])
            .with_extra_keys(&fixed, ".true.", &[value.as_str()])
            .with_extra_keys(&fixed, ".false.", &[shift.as_str(), fraction.as_str(), addition.as_str()]);
    }

    layout = layout
        .with_extra_keys("northern_return_flow_on", ".true.", NORTHERN_RETURN_FLOW_KEYS)
        .with_extra_keys("northern_return_flow_on", ".false.", &[]);

    for quantity in AVG_HIST_QUANTITIES {
        let avg_hist = format!("average/hist {quantity}");
        for value in AVG_HIST_ENABLING_VALUES {
            layout = layout.with_avg_hist_keys(quantity, AVG_HIST_TRIGGER, value, &[avg_hist.as_str()]);
        }
        layout = layout.with_avg_hist_keys(quantity, AVG_HIST_TRIGGER, "no", &[]);
    }

    layout
}

/// The infile layout of the SOG version this crate targets.
pub fn sog_layout() -> &'static InfileLayout {
    static LAYOUT: OnceLock<InfileLayout> = OnceLock::new();
    LAYOUT.get_or_init(build_sog_layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{infile_keys, yaml_schema};
    use std::collections::HashSet;

    #[test]
    fn test_layout_covers_every_schema_leaf_once() {
        let layout = sog_layout();
        let written: Vec<&str> = layout.all_keys();
        let written_set: HashSet<&str> = written.iter().copied().collect();
        let schema_keys = infile_keys(yaml_schema());
        assert_eq!(written_set, schema_keys);

        let ordered: HashSet<&str> = layout.key_order.iter().map(String::as_str).collect();
        assert_eq!(ordered.len(), layout.key_order.len(), "key order has duplicates");
        for by_value in layout.extra_keys.values() {
            for key in by_value.values().flatten() {
                assert!(!ordered.contains(key.as_str()), "{key} is both ordered and conditional");
            }
        }
    }

    #[test]
    fn test_ordered_keys_are_required_leaves() {
        let schema = yaml_schema();
        for key in &sog_layout().key_order {
            let node = schema.by_infile_key(key).unwrap();
            assert!(node.required, "{key} is ordered but optional");
        }
    }

    #[test]
    fn test_vary_chain() {
        let layout = sog_layout();
        assert_eq!(layout.extra_keys_for("vary%wind%enabled", ".true."), ["vary%wind%fixed"]);
        assert!(layout.extra_keys_for("vary%wind%enabled", ".false.").is_empty());
        assert_eq!(
            layout.extra_keys_for("vary%cf%fixed", ".false."),
            ["vary%cf%shift", "vary%cf%fraction", "vary%cf%addition"]
        );
        assert_eq!(layout.extra_keys_for("vary%rivers%fixed", ".true."), ["vary%rivers%value"]);
    }

    #[test]
    fn test_unregistered_value_selects_nothing() {
        assert!(sog_layout().extra_keys_for("vary%wind%enabled", "maybe").is_empty());
        assert!(sog_layout().extra_keys_for("latitude", ".true.").is_empty());
    }

    #[test]
    fn test_avg_hist_forcing_selection() {
        let forcing = &sog_layout().avg_hist_forcing_keys["minor river"];
        assert_eq!(forcing.trigger, AVG_HIST_TRIGGER);
        assert_eq!(forcing.keys["histfill"], vec!["average/hist minor river".to_string()]);
        assert!(forcing.keys["no"].is_empty());
    }

    #[test]
    fn test_order_starts_like_sog_reads() {
        let order = &sog_layout().key_order;
        assert_eq!(order[0], "latitude");
        assert_eq!(order[1], "maxdepth");
        assert_eq!(order.last().map(String::as_str), Some("minor river integ days"));
    }
}
