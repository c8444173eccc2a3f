//! Every quantity recognized in a SOG YAML infile.
//!
//! One row per leaf: nested path, infile key, Fortran variable name and
//! semantic type. Rows built with `opt` may be absent from a base infile;
//! they are only written to the Fortran infile when a conditional parameter
//! or the average/historical forcing selector asks for them.

use super::SchemaNode;
use super::SemanticType::{self, Boolean, DateTime, Integer, IntegerList, Number, NumberList, String};

const fn req(
    path: &'static str,
    infile_key: &'static str,
    variable_name: &'static str,
    kind: SemanticType,
) -> SchemaNode {
    SchemaNode { path, infile_key, variable_name, kind, required: true }
}

const fn opt(
    path: &'static str,
    infile_key: &'static str,
    variable_name: &'static str,
    kind: SemanticType,
) -> SchemaNode {
    SchemaNode { path, infile_key, variable_name, kind, required: false }
}

pub static YAML_NODES: &[SchemaNode] = &[
    // initial_conditions
    req("initial_conditions.init_datetime", "init datetime", "initDatetime", DateTime),
    req("initial_conditions.CTD_file", "ctd_in", "ctd_in", String),
    req("initial_conditions.nutrients_file", "nuts_in", "nuts_in", String),
    req("initial_conditions.bottle_file", "botl_in", "botl_in", String),
    req("initial_conditions.chemistry_file", "chem_in", "chem_in", String),
    req("initial_conditions.init_chl_ratios", "initial chl split", "Psplit", NumberList),
    req("initial_conditions.nitrate_chl_conversion", "N2chl", "N2chl", Number),
    req("initial_conditions.pCO2_atm", "pCO2_atm", "pCO2_atm", Number),

    // end_datetime
    req("end_datetime", "end datetime", "endDatetime", DateTime),

    // location
    req("location.latitude", "latitude", "latitude", Number),
    req("location.minor_axis", "Lx", "Lx", Number),
    req("location.major_axis", "Ly", "Ly", Number),
    req("location.open_ended_estuary", "openEnd", "openEnd", Boolean),

    // grid
    req("grid.model_depth", "maxdepth", "grid%D", Number),
    req("grid.grid_size", "gridsize", "grid%M", Integer),
    req("grid.lambda_factor", "lambda", "lambda", Number),

    // numerics
    req("numerics.dt", "dt", "dt", Integer),
    req("numerics.chem_dt", "chem_dt", "chem_dt", Integer),
    req("numerics.max_iter", "max_iter", "max_iter", Integer),

    // vary
    req("vary.wind", "vary%wind%enabled", "vary%wind%enabled", Boolean),
    opt("vary.wind_fixed", "vary%wind%fixed", "vary%wind%fixed", Boolean),
    opt("vary.wind_value", "vary%wind%value", "vary%wind%value", Number),
    opt("vary.wind_shift", "vary%wind%shift", "vary%wind%shift", Number),
    opt("vary.wind_fraction", "vary%wind%fraction", "vary%wind%fraction", Number),
    opt("vary.wind_addition", "vary%wind%addition", "vary%wind%addition", Number),
    req("vary.cloud_fraction", "vary%cf%enabled", "vary%cf%enabled", Boolean),
    opt("vary.cloud_fraction_fixed", "vary%cf%fixed", "vary%cf%fixed", Boolean),
    opt("vary.cloud_fraction_value", "vary%cf%value", "vary%cf%value", Number),
    opt("vary.cloud_fraction_shift", "vary%cf%shift", "vary%cf%shift", Number),
    opt("vary.cloud_fraction_fraction", "vary%cf%fraction", "vary%cf%fraction", Number),
    opt("vary.cloud_fraction_addition", "vary%cf%addition", "vary%cf%addition", Number),
    req("vary.river_flows", "vary%rivers%enabled", "vary%rivers%enabled", Boolean),
    opt("vary.river_flows_fixed", "vary%rivers%fixed", "vary%rivers%fixed", Boolean),
    opt("vary.river_flows_value", "vary%rivers%value", "vary%rivers%value", Number),
    opt("vary.river_flows_shift", "vary%rivers%shift", "vary%rivers%shift", Number),
    opt("vary.river_flows_fraction", "vary%rivers%fraction", "vary%rivers%fraction", Number),
    opt("vary.river_flows_addition", "vary%rivers%addition", "vary%rivers%addition", Number),
    req("vary.temperature", "vary%temperature%enabled", "vary%temperature%enabled", Boolean),
    opt("vary.temperature_fixed", "vary%temperature%fixed", "vary%temperature%fixed", Boolean),
    opt("vary.temperature_value", "vary%temperature%value", "vary%temperature%value", Number),
    opt("vary.temperature_shift", "vary%temperature%shift", "vary%temperature%shift", Number),
    opt("vary.temperature_fraction", "vary%temperature%fraction", "vary%temperature%fraction", Number),
    opt("vary.temperature_addition", "vary%temperature%addition", "vary%temperature%addition", Number),

    // timeseries_results
    req("timeseries_results.std_physics", "std_phys_ts_out", "std_phys_ts_out", String),
    req("timeseries_results.user_physics", "user_phys_ts_out", "user_phys_ts_out", String),
    req("timeseries_results.std_biology", "std_bio_ts_out", "std_bio_ts_out", String),
    req("timeseries_results.user_biology", "user_bio_ts_out", "user_bio_ts_out", String),
    req("timeseries_results.std_chemistry", "std_chem_ts_out", "std_chem_ts_out", String),
    req("timeseries_results.user_chemistry", "user_chem_ts_out", "user_chem_ts_out", String),

    // profiles_results
    req("profiles_results.num_profiles", "noprof", "noprof", Integer),
    req("profiles_results.profile_days", "profday", "profileDatetime%yr_day", IntegerList),
    req("profiles_results.profile_times", "proftime", "profileDatetime%day_sec", NumberList),
    req("profiles_results.profile_file_base", "profile_base", "profilesBase_fn", String),
    req("profiles_results.user_profile_file_base", "user_profile_base", "userprofilesBase_fn", String),
    req("profiles_results.halocline_file", "haloclinefile", "haloclines_fn", String),
    req("profiles_results.hoffmueller_file", "Hoffmueller file", "Hoffmueller_fn", String),
    req("profiles_results.user_hoffmueller_file", "user Hoffmueller file", "userHoffmueller_fn", String),
    req("profiles_results.hoffmueller_start_year", "Hoffmueller start yr", "Hoff_startyr", Integer),
    req("profiles_results.hoffmueller_start_day", "Hoffmueller start day", "Hoff_startday", Integer),
    req("profiles_results.hoffmueller_start_sec", "Hoffmueller start sec", "Hoff_startsec", Integer),
    req("profiles_results.hoffmueller_end_year", "Hoffmueller end yr", "Hoff_endyr", Integer),
    req("profiles_results.hoffmueller_end_day", "Hoffmueller end day", "Hoff_endday", Integer),
    req("profiles_results.hoffmueller_end_sec", "Hoffmueller end sec", "Hoff_endsec", Integer),
    req("profiles_results.hoffmueller_interval", "Hoffmueller interval", "Hoff_interval", Number),

    // physics.bottom_boundary_conditions
    req("physics.bottom_boundary_conditions.constant_temperature", "temp_constant", "temp_constant", Boolean),
    req("physics.bottom_boundary_conditions.temperature_fit_coefficients", "temperature", "c(:,2)", NumberList),
    req("physics.bottom_boundary_conditions.salinity_fit_coefficients", "salinity", "c(:,1)", NumberList),
    req("physics.bottom_boundary_conditions.phyto_fluor_fit_coefficients", "Phytoplankton", "c(:,3)", NumberList),
    req("physics.bottom_boundary_conditions.nitrate_fit_coefficients", "Nitrate", "c(:,4)", NumberList),
    req("physics.bottom_boundary_conditions.silicon_fit_coefficients", "Silicon", "c(:,5)", NumberList),
    req("physics.bottom_boundary_conditions.DIC_fit_coefficients", "DIC", "c(:,6)", NumberList),
    req("physics.bottom_boundary_conditions.dissolved_oxygen_fit_coefficients", "Oxy", "c(:,7)", NumberList),
    req("physics.bottom_boundary_conditions.alkalinity_fit_coefficients", "Alk", "c(:,8)", NumberList),
    req("physics.bottom_boundary_conditions.ammonium_fit_coefficients", "Ammonium", "c(:,9)", NumberList),
    req("physics.bottom_boundary_conditions.phyto_ratio_fit_coefficients", "Ratio", "c(:,10)", NumberList),

    // physics.turbulence
    req("physics.turbulence.momentum_wave_break_diffusivity", "nu_w_m", "nu%m%int_wave", Number),
    req("physics.turbulence.scalar_wave_break_diffusivity", "nu_w_s", "nu%T%int_wave, nu%S%int_wave", Number),
    req("physics.turbulence.shear_diffusivity_smoothing", "shear smooth", "shear_diff_smooth", NumberList),

    // physics.fresh_water.upwelling
    req("physics.fresh_water.upwelling.max_upwelling_velocity", "upwell_const", "upwell_const", Number),
    req("physics.fresh_water.upwelling.variation_depth_param", "d", "d", Number),

    // physics.fresh_water.flux
    req("physics.fresh_water.flux.mean_total_flow", "Qbar", "Qbar", Number),
    req("physics.fresh_water.flux.common_exponent", "F_SOG", "F_SOG", Number),
    req("physics.fresh_water.flux.SoG_exponent", "F_RI", "F_RI", Number),
    req("physics.fresh_water.flux.scale_factor", "Fw_scale", "Fw_scale", Number),
    req("physics.fresh_water.flux.add_freshwater_on_surface", "Fw_surface", "Fw_surface", Boolean),
    req("physics.fresh_water.flux.distribution_depth", "Fw_depth", "Fw_depth", Number),
    req("physics.fresh_water.flux.include_fresh_water_nutrients", "use_Fw_nutrients", "use_Fw_nutrients", Boolean),
    req("physics.fresh_water.flux.northern_return_flow", "northern_return_flow_on", "Northern_return", Boolean),
    opt("physics.fresh_water.flux.northern_influence_strength", "strength_northern", "strength", Number),
    opt("physics.fresh_water.flux.northern_influence_integration_time_scale", "tau_northern", "tauN", Number),
    opt("physics.fresh_water.flux.northern_water_depth_peak", "depth_northern", "central_depth", Number),
    opt("physics.fresh_water.flux.northern_water_upper_extension", "upper_northern", "upper_width", Number),
    opt("physics.fresh_water.flux.northern_water_lower_extension", "lower_northern", "lower_width", Number),
    opt("physics.fresh_water.flux.northern_water_power_riverflow_influence", "power_northern", "power", Number),
    opt("physics.fresh_water.flux.northern_water_normalization_riverflow_influence", "normal_northern", "Fo", Number),

    // physics.fresh_water.salinity_fit
    req("physics.fresh_water.salinity_fit.bottom_salinity", "cbottom", "cbottom", Number),
    req("physics.fresh_water.salinity_fit.alpha", "calpha", "calpha", Number),
    req("physics.fresh_water.salinity_fit.alpha2", "calpha2", "calpha2", Number),
    req("physics.fresh_water.salinity_fit.beta", "cbeta", "cbeta", Number),
    req("physics.fresh_water.salinity_fit.gamma", "cgamma", "cgamma", Number),

    // physics.fresh_water.river_alkalinity_fit
    req("physics.fresh_water.river_alkalinity_fit.river_alkalinity_zero", "river_Alk_0", "river_Alk_0", Number),
    req("physics.fresh_water.river_alkalinity_fit.river_alkalinity_decay", "river_Alk_decay", "river_Alk_decay", Number),
    req("physics.fresh_water.river_alkalinity_fit.river_pH", "pH_riv", "pH_riv", Number),

    // physics.K_PAR_fit
    req("physics.K_PAR_fit.ialpha", "ialpha", "ialpha", Number),
    req("physics.K_PAR_fit.ibeta", "ibeta", "ibeta", Number),
    req("physics.K_PAR_fit.igamma", "igamma", "igamma", Number),
    req("physics.K_PAR_fit.isigma", "isigma", "isigma", Number),
    req("physics.K_PAR_fit.itheta", "itheta", "itheta", Number),
    req("physics.K_PAR_fit.idl", "idl", "idl", Number),

    // biology
    req("biology.include_phytoplankton", "biology", "biology", Boolean),
    req("biology.include_flagellates", "flagellates_on", "flagellates", Boolean),
    req("biology.include_remineralization", "remineralization", "remineralization", Boolean),
    req("biology.include_microzooplankton", "use microzooplankton", "microzooplankton", Boolean),
    req("biology.single_species_light", "single species light", "strong_limitation", Boolean),

    // biology.mesozooplankton
    req("biology.mesozooplankton.mesozoo_winter_conc", "Mesozoo, winter conc", "rate_mesozoo%winterconc", Number),
    req("biology.mesozooplankton.mesozoo_summer_conc", "Mesozoo, summer conc", "rate_mesozoo%summerconc", Number),
    req("biology.mesozooplankton.mesozoo_summer_peak_magnitudes", "Mesozoo, summer peak mag", "rate_mesozoo%sumpeakval", NumberList),
    req("biology.mesozooplankton.mesozoo_summer_peak_days", "Mesozoo, summer peak pos", "rate_mesozoo%sumpeakpos", NumberList),
    req("biology.mesozooplankton.mesozoo_summer_peak_widths", "Mesozoo, summer peak wid", "rate_mesozoo%sumpeakwid", NumberList),
    req("biology.mesozooplankton.mesozoo_max_ingestion", "Mesozoo, max ingestion", "rate_mesozoo%R", Number),
    req("biology.mesozooplankton.mesozoo_assimilation_efficiency", "Mesozoo, assimil. eff", "rate_mesozoo%eff", Number),
    req("biology.mesozooplankton.mesozoo_natural_mortality", "Mesozoo, nat mort", "rate_mesozoo%Rm", Number),
    req("biology.mesozooplankton.mesozoo_excretion", "Mesozoo, excretion", "rate_mesozoo%excr", Number),
    req("biology.mesozooplankton.mesozoo_grazing_limit", "Mesozoo, pred slope", "rate_mesozoo%PredSlope", Number),
    req("biology.mesozooplankton.mesozoo_grazing_half_saturation", "Mesozoo, half-sat", "rate_mesozoo%HalfSat", Number),
    req("biology.mesozooplankton.mesozoo_diatom_preference", "Mesozoo, pref for diatoms", "rate_mesozoo%MicroPref", Number),
    req("biology.mesozooplankton.mesozoo_diatom_grazing_limit", "Mesozoo, micro pred slope", "rate_mesozoo%MicroPredSlope", Number),
    req("biology.mesozooplankton.mesozoo_diatom_grazing_half_saturation", "Mesozoo, micro half-sat", "rate_mesozoo%MicroHalfSat", Number),
    req("biology.mesozooplankton.mesozoo_nano_preference", "Mesozoo, pref for nano", "rate_mesozoo%NanoPref", Number),
    req("biology.mesozooplankton.mesozoo_nano_grazing_limit", "Mesozoo, nano pred slope", "rate_mesozoo%NanoPredSlope", Number),
    req("biology.mesozooplankton.mesozoo_nano_grazing_half_saturation", "Mesozoo, nano half-sat", "rate_mesozoo%NanoHalfSat", Number),
    req("biology.mesozooplankton.mesozoo_pico_preference", "Mesozoo, pref for pico", "rate_mesozoo%PicoPref", Number),
    req("biology.mesozooplankton.mesozoo_pico_grazing_limit", "Mesozoo, pico pred slope", "rate_mesozoo%PicoPredSlope", Number),
    req("biology.mesozooplankton.mesozoo_pico_grazing_half_saturation", "Mesozoo, pico half-sat", "rate_mesozoo%PicoHalfSat", Number),
    req("biology.mesozooplankton.mesozoo_PON_preference", "Mesozoo, pref for PON", "rate_mesozoo%PON_Pref", Number),
    req("biology.mesozooplankton.mesozoo_PON_grazing_limit", "Mesozoo, PON pred slope", "rate_mesozoo%PON_PredSlope", Number),
    req("biology.mesozooplankton.mesozoo_PON_grazing_half_saturation", "Mesozoo, PON half-sat", "rate_mesozoo%PON_HalfSat", Number),
    req("biology.mesozooplankton.mesozoo_microzoo_preference", "Mesozoo, pref for uZoo", "rate_mesozoo%Z_Pref", Number),
    req("biology.mesozooplankton.mesozoo_microzoo_grazing_limit", "Mesozoo, uZoo pred slope", "rate_mesozoo%Z_PredSlope", Number),
    req("biology.mesozooplankton.mesozoo_microzoo_grazing_half_saturation", "Mesozoo, uZoo half-sat", "rate_mesozoo%Z_HalfSat", Number),

    // biology.mesodinium_rubrum
    req("biology.mesodinium_rubrum.mesorub_max_ingestion", "Mesorub, max ingestion", "rate_mesorub%R", Number),
    req("biology.mesodinium_rubrum.mesorub_assimilation_efficiency", "Mesorub, assimilation eff", "rate_mesorub%eff", Number),
    req("biology.mesodinium_rubrum.mesorub_grazing_limit", "Mesorub, nano predslope", "rate_mesorub%PicoPredSlope", Number),
    req("biology.mesodinium_rubrum.mesorub_grazing_half_saturation", "Mesorub, nano half-sat", "rate_mesorub%PicoHalfSat", Number),

    // biology.microzooplankton
    req("biology.microzooplankton.microzoo_max_ingestion", "Microzoo, max ingestion", "rate_uzoo%R", Number),
    req("biology.microzooplankton.microzoo_assimilation_efficiency", "Microzoo, assimil. eff", "rate_uzoo%eff", Number),
    req("biology.microzooplankton.microzoo_natural_mortality", "Microzoo, nat mort", "rate_uzoo%Rm", Number),
    req("biology.microzooplankton.microzoo_excretion", "Microzoo, excretion", "rate_uzoo%excr", Number),
    req("biology.microzooplankton.microzoo_grazing_limit", "Microzoo, pred slope", "rate_uzoo%PredSlope", Number),
    req("biology.microzooplankton.microzoo_grazing_half_saturation", "Microzoo, half-sat", "Microzoo, half-sat", Number),
    req("biology.microzooplankton.microzoo_pico_preference", "Microzoo, pref for Pico", "rate_uzoo%PicoPref", Number),
    req("biology.microzooplankton.microzoo_pico_grazing_limit", "uzoo, Pico pred slope", "rate_uzoo%PicoPredSlope", Number),
    req("biology.microzooplankton.microzoo_pico_grazing_half_saturation", "uzoo, Pico half-sat", "rate_uzoo%PicoHalfSat", Number),
    req("biology.microzooplankton.microzoo_micro_preference", "Microzoo, pref for Micro", "rate_uzoo%MicroPref", Number),
    req("biology.microzooplankton.microzoo_micro_grazing_limit", "uzoo, Micro pred slope", "rate_uzoo%MicroPredSlope", Number),
    req("biology.microzooplankton.microzoo_micro_grazing_half_saturation", "Microzoo, Micro half-sat", "rate_uzoo%MicroHalfSat", Number),
    req("biology.microzooplankton.microzoo_nano_preference", "Microzoo, pref for nano", "rate_uzoo%NanoPref", Number),
    req("biology.microzooplankton.microzoo_nano_grazing_limit", "Microzoo, nano pred slope", "rate_uzoo%NanoPredSlope", Number),
    req("biology.microzooplankton.microzoo_nano_grazing_half_saturation", "Microzoo, nano half-sat", "rate_uzoo%NanoHalfSat", Number),
    req("biology.microzooplankton.microzoo_PON_preference", "Microzoo, pref for PON", "rate_uzoo%PON_Pref", Number),
    req("biology.microzooplankton.microzoo_PON_grazing_limit", "Microzoo, PON pred slope", "rate_uzoo%PON_PredSlope", Number),
    req("biology.microzooplankton.microzoo_PON_grazing_half_saturation", "Microzoo, PON half-sat", "rate_uzoo%PON_HalfSat", Number),
    req("biology.microzooplankton.microzoo_microzoo_preference", "Microzoo, pref for uZoo", "rate_uzoo%PON_Pref", Number),
    req("biology.microzooplankton.microzoo_microzoo_grazing_limit", "Microzoo, uZoo pred slope", "rate_uzoo%PON_PredSlope", Number),
    req("biology.microzooplankton.microzoo_microzoo_grazing_half_saturation", "Microzoo, uZoo half-sat", "rate_uzoo%PON_HalfSat", Number),

    // biology.phytoplankton_growth
    req("biology.phytoplankton_growth.micro_max_growth", "Micro, max growth", "rate_micro%R", Number),
    req("biology.phytoplankton_growth.nano_max_growth", "Nano, max growth", "rate_nano%R", Number),
    req("biology.phytoplankton_growth.pico_max_growth", "Pico, max growth", "rate_pico%R", Number),
    req("biology.phytoplankton_growth.micro_optimal_light", "Micro, I_opt", "rate_micro%Iopt", Number),
    req("biology.phytoplankton_growth.nano_optimal_light", "Nano, I_opt", "rate_nano%Iopt", Number),
    req("biology.phytoplankton_growth.pico_optimal_light", "Pico, I_opt", "rate_pico%Iopt", Number),
    req("biology.phytoplankton_growth.micro_max_temperature", "Micro, max temp", "rate_micro%maxtemp", Number),
    req("biology.phytoplankton_growth.nano_max_temperature", "Nano, max temp", "rate_nano%maxtemp", Number),
    req("biology.phytoplankton_growth.pico_max_temperature", "Pico, max temp", "rate_pico%maxtemp", Number),
    req("biology.phytoplankton_growth.micro_temperature_range", "Micro, temp range", "rate_micro%temprange", Number),
    req("biology.phytoplankton_growth.nano_temperature_range", "Nano, temp range", "rate_nano%temprange", Number),
    req("biology.phytoplankton_growth.pico_temperature_range", "Pico, temp range", "rate_pico%temprange", Number),
    req("biology.phytoplankton_growth.micro_Q10_exponent", "Micro, Q10 exp", "rate_micro%Q10exp", Number),
    req("biology.phytoplankton_growth.nano_Q10_exponent", "Nano, Q10 exp", "rate_nano%Q10exp", Number),
    req("biology.phytoplankton_growth.pico_Q10_exponent", "Pico, Q10 exp", "rate_pico%Q10exp", Number),
    req("biology.phytoplankton_growth.micro_gamma_loss", "Micro, gamma loss", "rate_micro%gamma", Number),
    req("biology.phytoplankton_growth.nano_gamma_loss", "Nano, gamma loss", "rate_nano%gamma", Number),
    req("biology.phytoplankton_growth.pico_gamma_loss", "Pico, gamma loss", "rate_pico%gamma", Number),
    req("biology.phytoplankton_growth.micro_NO3_half_saturation", "Micro, NO3 k", "rate_micro%k", Number),
    req("biology.phytoplankton_growth.nano_NO3_half_saturation", "Nano, NO3 k", "rate_nano%k", Number),
    req("biology.phytoplankton_growth.pico_NO3_half_saturation", "Pico, NO3 k", "rate_pico%k", Number),
    req("biology.phytoplankton_growth.micro_NO3_vs_NH_preference", "Micro, kapa", "rate_micro%kapa", Number),
    req("biology.phytoplankton_growth.nano_NO3_vs_NH_preference", "Nano, kapa", "rate_nano%kapa", Number),
    req("biology.phytoplankton_growth.pico_NO3_vs_NH_preference", "Pico, kapa", "rate_pico%kapa", Number),
    req("biology.phytoplankton_growth.micro_NH_inhibition_exponent", "Micro, NH inhib", "Micro, NH inhib", Number),
    req("biology.phytoplankton_growth.nano_NH_inhibition_exponent", "Nano, NH inhib", "Nano, NH inhib", Number),
    req("biology.phytoplankton_growth.pico_NH_inhibition_exponent", "Pico, NH inhib", "Pico, NH inhib", Number),
    req("biology.phytoplankton_growth.micro_half_saturation", "Micro, N_o", "rate_micro%N_o", Number),
    req("biology.phytoplankton_growth.nano_half_saturation", "Nano, N_o", "rate_nano%N_o", Number),
    req("biology.phytoplankton_growth.pico_half_saturation", "Pico, N_o", "rate_pico%N_o", Number),
    req("biology.phytoplankton_growth.micro_N_inhibition_exponent", "Micro, N_x", "rate_micro%N_x", Number),
    req("biology.phytoplankton_growth.nano_N_inhibition_exponent", "Nano, N_x", "rate_nano%N_x", Number),
    req("biology.phytoplankton_growth.pico_N_inhibition_exponent", "Pico, N_x", "rate_pico%N_x", Number),
    req("biology.phytoplankton_growth.micro_Si_N_ratio", "Micro, Si ratio", "rate_micro%Si_ratio", Number),
    req("biology.phytoplankton_growth.nano_Si_N_ratio", "Nano, Si ratio", "rate_nano%Si_ratio", Number),
    req("biology.phytoplankton_growth.pico_Si_N_ratio", "Pico, Si ratio", "rate_pico%Si_ratio", Number),
    req("biology.phytoplankton_growth.micro_Si_half_saturation", "Micro, K Si", "rate_micro%K_Si", Number),
    req("biology.phytoplankton_growth.nano_Si_half_saturation", "Nano, K Si", "rate_nano%K_Si", Number),
    req("biology.phytoplankton_growth.pico_Si_half_saturation", "Pico, K Si", "rate_pico%K_Si", Number),
    req("biology.phytoplankton_growth.micro_natural_mortality", "Micro, nat mort", "rate_micro%Rm", Number),
    req("biology.phytoplankton_growth.nano_natural_mortality", "Nano, nat mort", "rate_nano%Rm", Number),
    req("biology.phytoplankton_growth.pico_natural_mortality", "Pico, nat mort", "rate_pico%Rm", Number),

    // biology.remineralization_rates
    req("biology.remineralization_rates.NH_remin_rate", "NH remin rate", "remin%NH", Number),
    req("biology.remineralization_rates.DON_remin_rate", "DON remin rate", "remin%D_DON", Number),
    req("biology.remineralization_rates.PON_remin_rate", "PON remin rate", "remin%D_PON", Number),
    req("biology.remineralization_rates.bSi_remin_rate", "bSi remin rate", "remin%D_bSi", Number),

    // biology.phytoplankton_mortality_waste
    req("biology.phytoplankton_mortality_waste.micro_mort_NH", "Waste, dnm, NH", "frac_waste_DNM%NH", Number),
    req("biology.phytoplankton_mortality_waste.micro_mort_DON", "Waste, dnm, DON", "frac_waste_DNM%DON", Number),
    req("biology.phytoplankton_mortality_waste.micro_mort_PON", "Waste, dnm, PON", "frac_waste_DNM%PON", Number),
    req("biology.phytoplankton_mortality_waste.micro_mort_refr", "Waste, dnm, Ref", "frac_waste_DNM%Ref", Number),
    req("biology.phytoplankton_mortality_waste.micro_mort_bSi", "Waste, dnm, Bsi", "frac_waste_DNM%Bsi", Number),
    req("biology.phytoplankton_mortality_waste.nano_mort_NH", "Waste, nnm, NH", "frac_waste_NNM%NH", Number),
    req("biology.phytoplankton_mortality_waste.nano_mort_DON", "Waste, nnm, DON", "frac_waste_NNM%DON", Number),
    req("biology.phytoplankton_mortality_waste.nano_mort_PON", "Waste, nnm, PON", "frac_waste_NNM%PON", Number),
    req("biology.phytoplankton_mortality_waste.nano_mort_refr", "Waste, nnm, Ref", "frac_waste_NNM%Ref", Number),
    req("biology.phytoplankton_mortality_waste.nano_mort_bSi", "Waste, nnm, Bsi", "frac_waste_NNM%Bsi", Number),
    req("biology.phytoplankton_mortality_waste.pico_mort_NH", "Waste, fnm, NH", "frac_waste_FNM%NH", Number),
    req("biology.phytoplankton_mortality_waste.pico_mort_DON", "Waste, fnm, DON", "frac_waste_FNM%DON", Number),
    req("biology.phytoplankton_mortality_waste.pico_mort_PON", "Waste, fnm, PON", "frac_waste_FNM%PON", Number),
    req("biology.phytoplankton_mortality_waste.pico_mort_refr", "Waste, fnm, Ref", "frac_waste_FNM%Ref", Number),
    req("biology.phytoplankton_mortality_waste.pico_mort_bSi", "Waste, fnm, Bsi", "frac_waste_FNM%Bsi", Number),

    // biology.mesozooplankton_waste
    req("biology.mesozooplankton_waste.mesozoo_mort_NH", "Waste, mnm, NH", "frac_waste_MNM%NH", Number),
    req("biology.mesozooplankton_waste.mesozoo_mort_DON", "Waste, mnm, DON", "frac_waste_MNM%DON", Number),
    req("biology.mesozooplankton_waste.mesozoo_mort_PON", "Waste, mnm, PON", "frac_waste_MNM%PON", Number),
    req("biology.mesozooplankton_waste.mesozoo_mort_refr", "Waste, mnm, Ref", "frac_waste_MNM%Ref", Number),
    req("biology.mesozooplankton_waste.mesozoo_mort_bSi", "Waste, mnm, Bsi", "frac_waste_MNM%Bsi", Number),
    req("biology.mesozooplankton_waste.mesozoo_excrete_NH", "Waste, mex, NH", "frac_waste_MEX%NH", Number),
    req("biology.mesozooplankton_waste.mesozoo_excrete_DON", "Waste, mex, DON", "frac_waste_MEX%DON", Number),
    req("biology.mesozooplankton_waste.mesozoo_excrete_PON", "Waste, mex, PON", "frac_waste_MEX%PON", Number),
    req("biology.mesozooplankton_waste.mesozoo_excrete_refr", "Waste, mex, Ref", "frac_waste_MEX%Ref", Number),
    req("biology.mesozooplankton_waste.mesozoo_excrete_bSi", "Waste, mex, Bsi", "frac_waste_MEX%Bsi", Number),

    // biology.microzooplankton_waste
    req("biology.microzooplankton_waste.microzoo_mort_NH", "Waste, znm, NH", "frac_waste_ZNM%NH", Number),
    req("biology.microzooplankton_waste.microzoo_mort_DON", "Waste, znm, DON", "frac_waste_ZNM%DON", Number),
    req("biology.microzooplankton_waste.microzoo_mort_PON", "Waste, znm, PON", "frac_waste_ZNM%PON", Number),
    req("biology.microzooplankton_waste.microzoo_mort_refr", "Waste, znm, Ref", "frac_waste_ZNM%Ref", Number),
    req("biology.microzooplankton_waste.microzoo_mort_bSi", "Waste, znm, Bsi", "frac_waste_ZNM%Bsi", Number),
    req("biology.microzooplankton_waste.microzoo_excrete_NH", "Waste, zex, NH", "frac_waste_ZEX%NH", Number),
    req("biology.microzooplankton_waste.microzoo_excrete_DON", "Waste, zex, DON", "frac_waste_ZEX%DON", Number),
    req("biology.microzooplankton_waste.microzoo_excrete_PON", "Waste, zex, PON", "frac_waste_ZEX%PON", Number),
    req("biology.microzooplankton_waste.microzoo_excrete_refr", "Waste, zex, Ref", "frac_waste_ZEX%Ref", Number),
    req("biology.microzooplankton_waste.microzoo_excrete_bSi", "Waste, zex, Bsi", "frac_waste_ZEX%Bsi", Number),

    // biology.sloppy_eating
    req("biology.sloppy_eating.mesozoo_microphyto_grazing_NH", "Waste, dem, NH", "frac_waste_DEM%NH", Number),
    req("biology.sloppy_eating.mesozoo_microphyto_grazing_DON", "Waste, dem, DON", "frac_waste_DEM%DON", Number),
    req("biology.sloppy_eating.mesozoo_microphyto_grazing_PON", "Waste, dem, PON", "frac_waste_DEM%PON", Number),
    req("biology.sloppy_eating.mesozoo_microphyto_grazing_refr", "Waste, dem, Ref", "frac_waste_DEM%Ref", Number),
    req("biology.sloppy_eating.mesozoo_microphyto_grazing_bSi", "Waste, dem, Bsi", "frac_waste_DEM%Bsi", Number),
    req("biology.sloppy_eating.mesozoo_nanophyto_grazing_NH", "Waste, nem, NH", "frac_waste_NEM%NH", Number),
    req("biology.sloppy_eating.mesozoo_nanophyto_grazing_DON", "Waste, nem, DON", "frac_waste_NEM%DON", Number),
    req("biology.sloppy_eating.mesozoo_nanophyto_grazing_PON", "Waste, nem, PON", "frac_waste_NEM%PON", Number),
    req("biology.sloppy_eating.mesozoo_nanophyto_grazing_refr", "Waste, nem, Ref", "frac_waste_NEM%Ref", Number),
    req("biology.sloppy_eating.mesozoo_nanophyto_grazing_bSi", "Waste, nem, Bsi", "frac_waste_NEM%Bsi", Number),
    req("biology.sloppy_eating.mesozoo_picophyto_grazing_NH", "Waste, fem, NH", "frac_waste_FEM%NH", Number),
    req("biology.sloppy_eating.mesozoo_picophyto_grazing_DON", "Waste, fem, DON", "frac_waste_FEM%DON", Number),
    req("biology.sloppy_eating.mesozoo_picophyto_grazing_PON", "Waste, fem, PON", "frac_waste_FEM%PON", Number),
    req("biology.sloppy_eating.mesozoo_picophyto_grazing_refr", "Waste, fem, Ref", "frac_waste_FEM%Ref", Number),
    req("biology.sloppy_eating.mesozoo_picophyto_grazing_bSi", "Waste, fem, Bsi", "frac_waste_FEM%Bsi", Number),
    req("biology.sloppy_eating.mesozoo_PON_grazing_NH", "Waste, pem, NH", "frac_waste_PEM%NH", Number),
    req("biology.sloppy_eating.mesozoo_PON_grazing_DON", "Waste, pem, DON", "frac_waste_PEM%DON", Number),
    req("biology.sloppy_eating.mesozoo_PON_grazing_PON", "Waste, pem, PON", "frac_waste_PEM%PON", Number),
    req("biology.sloppy_eating.mesozoo_PON_grazing_refr", "Waste, pem, Ref", "frac_waste_PEM%Ref", Number),
    req("biology.sloppy_eating.mesozoo_PON_grazing_bSi", "Waste, pem, Bsi", "frac_waste_PEM%Bsi", Number),
    req("biology.sloppy_eating.mesozoo_microzoo_grazing_NH", "Waste, zem, NH", "frac_waste_ZEM%NH", Number),
    req("biology.sloppy_eating.mesozoo_microzoo_grazing_DON", "Waste, zem, DON", "frac_waste_ZEM%DON", Number),
    req("biology.sloppy_eating.mesozoo_microzoo_grazing_PON", "Waste, zem, PON", "frac_waste_ZEM%PON", Number),
    req("biology.sloppy_eating.mesozoo_microzoo_grazing_refr", "Waste, zem, Ref", "frac_waste_ZEM%Ref", Number),
    req("biology.sloppy_eating.mesozoo_microzoo_grazing_bSi", "Waste, zem, Bsi", "frac_waste_ZEM%Bsi", Number),
    req("biology.sloppy_eating.microzoo_microphyto_grazing_NH", "Waste, dez, NH", "frac_waste_DEZ%NH", Number),
    req("biology.sloppy_eating.microzoo_microphyto_grazing_DON", "Waste, dez, DON", "frac_waste_DEZ%DON", Number),
    req("biology.sloppy_eating.microzoo_microphyto_grazing_PON", "Waste, dez, PON", "frac_waste_DEZ%PON", Number),
    req("biology.sloppy_eating.microzoo_microphyto_grazing_refr", "Waste, dez, Ref", "frac_waste_DEZ%Ref", Number),
    req("biology.sloppy_eating.microzoo_microphyto_grazing_bSi", "Waste, dez, Bsi", "frac_waste_DEZ%Bsi", Number),
    req("biology.sloppy_eating.microzoo_nanophyto_grazing_NH", "Waste, nez, NH", "frac_waste_NEZ%NH", Number),
    req("biology.sloppy_eating.microzoo_nanophyto_grazing_DON", "Waste, nez, DON", "frac_waste_NEZ%DON", Number),
    req("biology.sloppy_eating.microzoo_nanophyto_grazing_PON", "Waste, nez, PON", "frac_waste_NEZ%PON", Number),
    req("biology.sloppy_eating.microzoo_nanophyto_grazing_refr", "Waste, nez, Ref", "frac_waste_NEZ%Ref", Number),
    req("biology.sloppy_eating.microzoo_nanophyto_grazing_bSi", "Waste, nez, Bsi", "frac_waste_NEZ%Bsi", Number),
    req("biology.sloppy_eating.microzoo_picophyto_grazing_NH", "Waste, fez, NH", "frac_waste_FEZ%NH", Number),
    req("biology.sloppy_eating.microzoo_picophyto_grazing_DON", "Waste, fez, DON", "frac_waste_FEZ%DON", Number),
    req("biology.sloppy_eating.microzoo_picophyto_grazing_PON", "Waste, fez, PON", "frac_waste_FEZ%PON", Number),
    req("biology.sloppy_eating.microzoo_picophyto_grazing_refr", "Waste, fez, Ref", "frac_waste_FEZ%Ref", Number),
    req("biology.sloppy_eating.microzoo_picophyto_grazing_bSi", "Waste, fez, Bsi", "frac_waste_FEZ%Bsi", Number),
    req("biology.sloppy_eating.microzoo_PON_grazing_NH", "Waste, pez, NH", "frac_waste_PEZ%NH", Number),
    req("biology.sloppy_eating.microzoo_PON_grazing_DON", "Waste, pez, DON", "frac_waste_PEZ%DON", Number),
    req("biology.sloppy_eating.microzoo_PON_grazing_PON", "Waste, pez, PON", "frac_waste_PEZ%PON", Number),
    req("biology.sloppy_eating.microzoo_PON_grazing_refr", "Waste, pez, Ref", "frac_waste_PEZ%Ref", Number),
    req("biology.sloppy_eating.microzoo_PON_grazing_bSi", "Waste, pez, Bsi", "frac_waste_PEZ%Bsi", Number),
    req("biology.sloppy_eating.microzoo_microzoo_grazing_NH", "Waste, zez, NH", "frac_waste_ZEZ%NH", Number),
    req("biology.sloppy_eating.microzoo_microzoo_grazing_DON", "Waste, zez, DON", "frac_waste_ZEZ%DON", Number),
    req("biology.sloppy_eating.microzoo_microzoo_grazing_PON", "Waste, zez, PON", "frac_waste_ZEZ%PON", Number),
    req("biology.sloppy_eating.microzoo_microzoo_grazing_refr", "Waste, zez, Ref", "frac_waste_ZEZ%Ref", Number),
    req("biology.sloppy_eating.microzoo_microzoo_grazing_bSi", "Waste, zez, Bsi", "frac_waste_ZEZ%Bsi", Number),
    req("biology.sloppy_eating.mesorub_picophyto_grazing_NH", "Waste, fen, NH", "frac_waste_FEN%NH", Number),
    req("biology.sloppy_eating.mesorub_picophyto_grazing_DON", "Waste, fen, DON", "frac_waste_FEN%DON", Number),
    req("biology.sloppy_eating.mesorub_picophyto_grazing_PON", "Waste, fen, PON", "frac_waste_FEN%PON", Number),
    req("biology.sloppy_eating.mesorub_picophyto_grazing_refr", "Waste, fen, Ref", "frac_waste_FEN%Ref", Number),
    req("biology.sloppy_eating.mesorub_picophyto_grazing_bSi", "Waste, fen, Bsi", "frac_waste_FEN%Bsi", Number),

    // biology.sinking_rates
    req("biology.sinking_rates.microphyto_min_sink_rate", "Micro min sink rate", "w_sink%Pmicro_min", Number),
    req("biology.sinking_rates.microphyto_max_sink_rate", "Micro max sink rate", "w_sink%Pmicro_max", Number),
    req("biology.sinking_rates.PON_sink_rate", "PON sink rate", "w_sink%D_PON", Number),
    req("biology.sinking_rates.refr_sink_rate", "refr sink rate", "w_sink%D_refr", Number),
    req("biology.sinking_rates.bSi_sink_rate", "bSi sink rate", "w_sink%D_bSi", Number),

    // forcing_data
    req("forcing_data.years_of_forcing_data", "years of forcing data", "NY", Integer),
    req("forcing_data.use_average_forcing_data", "use average/hist forcing", "use_average_forcing_data", String),
    req("forcing_data.wind_forcing_file", "wind", "n/a", String),
    opt("forcing_data.avg_historical_wind_file", "average/hist wind", "n/a", String),
    req("forcing_data.air_temperature_forcing_file", "air temp", "n/a", String),
    opt("forcing_data.avg_historical_air_temperature_file", "average/hist air temp", "n/a", String),
    req("forcing_data.cloud_fraction_forcing_file", "cloud", "n/a", String),
    opt("forcing_data.avg_historical_cloud_file", "average/hist cloud", "n/a", String),
    req("forcing_data.humidity_forcing_file", "humidity", "n/a", String),
    opt("forcing_data.avg_historical_humidity_file", "average/hist humidity", "n/a", String),
    req("forcing_data.major_river_forcing_file", "major river", "n/a", String),
    opt("forcing_data.avg_historical_major_river_file", "average/hist major river", "n/a", String),
    req("forcing_data.use_river_temperature", "use river temp", "UseRiverTemp", Boolean),
    req("forcing_data.river_nutrients_file", "river nutrients file", "n/a", String),
    req("forcing_data.minor_river_forcing_file", "minor river", "n/a", String),
    opt("forcing_data.avg_historical_minor_river_file", "average/hist minor river", "n/a", String),
    req("forcing_data.alt_minor_river_forcing_file", "alt minor river", "n/a", String),
    req("forcing_data.minor_river_integration_days", "minor river integ days", "integ_days", Integer),
];
